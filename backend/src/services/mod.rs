//! HTTP services, one sub-module per resource.
//!
//! Each endpoint lives in its own file with an Actix `process` handler and a
//! plain function holding the actual rules, so the rules can be exercised
//! against any `Repository` without going through HTTP.

pub mod error;
pub mod farmers;
pub mod farms;

use actix_web::web;

/// Registers every API scope on an `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(farmers::configure_routes())
        .service(farms::configure_routes());
}
