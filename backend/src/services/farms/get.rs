use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farm::Farm;
use log::debug;

/// Actix handler for `GET /api/farms/{id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `id` - The farm id, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with the farm as JSON.
/// - `404 Not Found` if no farm has that id.
pub async fn process(store: web::Data<SqliteStore>, id: web::Path<i64>) -> impl Responder {
    match get_farm(store.get_ref(), id.into_inner()) {
        Ok(farm) => HttpResponse::Ok().json(farm),
        Err(e) => e.error_response(),
    }
}

pub fn get_farm(repo: &impl Repository<Farm>, id: i64) -> Result<Farm, ServiceError> {
    repo.find_by_id(id)?.ok_or_else(|| {
        debug!("farm {} not found", id);
        ServiceError::NotFound { entity: "farm", id }
    })
}
