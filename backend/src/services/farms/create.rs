use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farm::Farm;
use log::info;

/// Actix handler for `POST /api/farms`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `payload` - The new farm. Any `id` it carries is discarded.
///
/// # Returns
/// - `200 OK` with the stored farm and its freshly assigned id.
pub async fn process(store: web::Data<SqliteStore>, payload: web::Json<Farm>) -> impl Responder {
    match create_farm(store.get_ref(), payload.into_inner()) {
        Ok(farm) => HttpResponse::Ok().json(farm),
        Err(e) => e.error_response(),
    }
}

/// Inserts `payload` as a new farm under a freshly assigned id.
///
/// Unlike farmers, a payload id is not an error: it is cleared so the store
/// always inserts.
pub fn create_farm(
    repo: &impl Repository<Farm>,
    mut payload: Farm,
) -> Result<Farm, ServiceError> {
    payload.id = None;
    let saved = repo.save(payload)?;
    info!("created farm {:?} for farmer {:?}", saved.id, saved.farmer_id);
    Ok(saved)
}
