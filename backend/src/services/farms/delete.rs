use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farm::Farm;
use log::{debug, info};

/// Actix handler for `DELETE /api/farms/{id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `id` - The farm to delete, from the URL path.
///
/// # Returns
/// - `204 No Content` once the farm is gone.
/// - `404 Not Found` if there was no such farm.
pub async fn process(store: web::Data<SqliteStore>, id: web::Path<i64>) -> impl Responder {
    match delete_farm(store.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response(),
    }
}

pub fn delete_farm(repo: &impl Repository<Farm>, id: i64) -> Result<(), ServiceError> {
    if !repo.exists_by_id(id)? {
        debug!("farm {} not found", id);
        return Err(ServiceError::NotFound { entity: "farm", id });
    }

    repo.delete_by_id(id)?;
    info!("deleted farm {}", id);
    Ok(())
}
