use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use crate::services::farmers::get::get_farmer;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farmer::Farmer;
use log::info;

/// Actix handler for `PUT /api/farmers/{id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `id` - The farmer to update, from the URL path.
/// * `payload` - The fields to change; `null` or missing fields are kept.
///
/// # Returns
/// - `200 OK` with the farmer as stored after the merge.
/// - `404 Not Found` if no farmer has that id.
pub async fn process(
    store: web::Data<SqliteStore>,
    id: web::Path<i64>,
    payload: web::Json<Farmer>,
) -> impl Responder {
    match update_farmer(store.get_ref(), id.into_inner(), payload.into_inner()) {
        Ok(farmer) => HttpResponse::Ok().json(farmer),
        Err(e) => e.error_response(),
    }
}

/// Partial update: fields left `null` in `updates` keep their stored value.
///
/// Farms are updated with a full replace instead (see `farms::update`); the two
/// policies differ and both are kept as-is.
pub fn update_farmer(
    repo: &impl Repository<Farmer>,
    id: i64,
    updates: Farmer,
) -> Result<Farmer, ServiceError> {
    let mut existing = get_farmer(repo, id)?;
    existing.merge(updates);

    let saved = repo.save(existing)?;
    info!("updated farmer {}", id);
    Ok(saved)
}
