use crate::persistence::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;

/// Failure of an entity-service operation, mapped onto an HTTP status by
/// `ResponseError`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The client sent something the operation forbids (an id on farmer create).
    #[error("{0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Persistence(e) = self {
            error!("{}", e);
        }
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
