use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farmer::Farmer;
use log::debug;

/// Actix handler for `GET /api/farmers/{id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `id` - The farmer id, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with the farmer as JSON.
/// - `404 Not Found` if no farmer has that id.
pub async fn process(store: web::Data<SqliteStore>, id: web::Path<i64>) -> impl Responder {
    match get_farmer(store.get_ref(), id.into_inner()) {
        Ok(farmer) => HttpResponse::Ok().json(farmer),
        Err(e) => e.error_response(),
    }
}

pub fn get_farmer(repo: &impl Repository<Farmer>, id: i64) -> Result<Farmer, ServiceError> {
    repo.find_by_id(id)?.ok_or_else(|| {
        debug!("farmer {} not found", id);
        ServiceError::NotFound {
            entity: "farmer",
            id,
        }
    })
}
