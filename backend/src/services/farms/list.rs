use crate::persistence::{FarmRepository, Repository, SqliteStore};
use crate::services::error::ServiceError;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::farm::Farm;

/// Actix handler for `GET /api/farms`.
///
/// # Returns
/// - `200 OK` with every farm as a JSON array, in id order.
pub async fn process(store: web::Data<SqliteStore>) -> impl Responder {
    match list_farms(store.get_ref()) {
        Ok(farms) => HttpResponse::Ok().json(farms),
        Err(e) => e.error_response(),
    }
}

/// Actix handler for `GET /api/farms/by-farmer/{farmer_id}`.
///
/// # Arguments
/// * `store` - The shared store, injected by Actix.
/// * `farmer_id` - The farmer whose farms are listed, from the URL path.
///
/// # Returns
/// - `200 OK` with the matching farms; an empty array when there are none,
///   including when the farmer does not exist.
pub async fn process_by_farmer(
    store: web::Data<SqliteStore>,
    farmer_id: web::Path<i64>,
) -> impl Responder {
    match list_farms_by_farmer(store.get_ref(), farmer_id.into_inner()) {
        Ok(farms) => HttpResponse::Ok().json(farms),
        Err(e) => e.error_response(),
    }
}

pub fn list_farms(repo: &impl Repository<Farm>) -> Result<Vec<Farm>, ServiceError> {
    Ok(repo.find_all()?)
}

pub fn list_farms_by_farmer(
    repo: &impl FarmRepository,
    farmer_id: i64,
) -> Result<Vec<Farm>, ServiceError> {
    Ok(repo.find_by_farmer_id(farmer_id)?)
}
