use crate::persistence::{Repository, SqliteStore};
use crate::services::error::ServiceError;
use crate::services::farms::get::get_farm;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farm::Farm;
use log::info;

/// Actix handler for `PUT /api/farms/{id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `id` - The farm to update, from the URL path.
/// * `payload` - The complete new contents; omitted fields become `null`.
///
/// # Returns
/// - `200 OK` with the farm as stored after the replace.
/// - `404 Not Found` if no farm has that id.
pub async fn process(
    store: web::Data<SqliteStore>,
    id: web::Path<i64>,
    payload: web::Json<Farm>,
) -> impl Responder {
    match update_farm(store.get_ref(), id.into_inner(), payload.into_inner()) {
        Ok(farm) => HttpResponse::Ok().json(farm),
        Err(e) => e.error_response(),
    }
}

/// Full replace: every field of the stored farm takes the payload's value,
/// even when that value is `null`. The stored id is kept.
// TODO: farmers merge on update while farms replace; confirm with the product
// owner which policy both endpoints should share.
pub fn update_farm(
    repo: &impl Repository<Farm>,
    id: i64,
    incoming: Farm,
) -> Result<Farm, ServiceError> {
    let mut existing = get_farm(repo, id)?;
    existing.replace_with(incoming);

    let saved = repo.save(existing)?;
    info!("updated farm {}", id);
    Ok(saved)
}
