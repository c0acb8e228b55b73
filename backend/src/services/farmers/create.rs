use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farmer::Farmer;
use log::info;

/// Actix handler for `POST /api/farmers`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `payload` - The new farmer; its `id` must be absent or `null`.
///
/// # Returns
/// - `200 OK` with the stored farmer, including its new id.
/// - `400 Bad Request` if the payload already has an id.
pub async fn process(
    store: web::Data<SqliteStore>,
    payload: web::Json<Farmer>,
) -> impl Responder {
    match create_farmer(store.get_ref(), payload.into_inner()) {
        Ok(farmer) => HttpResponse::Ok().json(farmer),
        Err(e) => e.error_response(),
    }
}

/// Inserts `payload` as a new farmer.
///
/// A client-supplied id would turn the store's upsert into an overwrite of
/// whatever record has that id, so it is refused instead of cleared.
pub fn create_farmer(
    repo: &impl Repository<Farmer>,
    payload: Farmer,
) -> Result<Farmer, ServiceError> {
    if let Some(id) = payload.id {
        return Err(ServiceError::Validation(format!(
            "farmer id must not be set on create (got {})",
            id
        )));
    }

    let saved = repo.save(payload)?;
    info!("created farmer {:?}", saved.id);
    Ok(saved)
}
