use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farmer::Farmer;

/// Actix handler for `GET /api/farmers`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
///
/// # Returns
/// - `200 OK` with every farmer as a JSON array, in id order.
/// - `503 Service Unavailable` if the database cannot be read.
pub async fn process(store: web::Data<SqliteStore>) -> impl Responder {
    match list_farmers(store.get_ref()) {
        Ok(farmers) => HttpResponse::Ok().json(farmers),
        Err(e) => e.error_response(),
    }
}

pub fn list_farmers(repo: &impl Repository<Farmer>) -> Result<Vec<Farmer>, ServiceError> {
    Ok(repo.find_all()?)
}
