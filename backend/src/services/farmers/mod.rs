//! # Farmer Service Module
//!
//! Endpoints under `/api/farmers`. Farmers can be listed, fetched, created and
//! partially updated; there is no delete.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: each sub-module's `process` handler receives the path id
//!     and/or the JSON body, already deserialized into a `Farmer` in which every
//!     field is optional.
//!
//! 2.  **Rules**: the handler calls the matching plain function (`list_farmers`,
//!     `get_farmer`, `create_farmer`, `update_farmer`). These take any
//!     `Repository<Farmer>` and hold the actual behavior:
//!     - create refuses a payload that carries an `id`;
//!     - update loads the stored farmer, copies only the non-null fields of the
//!       payload onto it and saves it back.
//!
//! 3.  **Storage**: every read and write goes through the `SqliteStore` injected
//!     as `web::Data`, one connection per call.
//!
//! 4.  **HTTP Response**: `200 OK` with the farmer(s) as JSON, or the status of
//!     the `ServiceError` (`400`, `404`, or `503` when the database cannot be
//!     reached).
//!
//! ## Sub-modules:
//! - `list`: every stored farmer.
//! - `get`: one farmer by id.
//! - `create`: inserts a new farmer. A payload that already carries an `id` is
//!   rejected so the create path can never overwrite an existing record.
//! - `update`: merges the non-null fields of the payload into the stored farmer.

mod create;
mod get;
mod list;
mod update;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

/// The base path for all farmer-related API endpoints.
const API_PATH: &str = "/api/farmers";

/// Configures and returns the Actix `Scope` for all farmer routes.
///
/// *   **`GET /`** → `list::process`, 200 with a JSON array.
/// *   **`GET /{id}`** → `get::process`, 200 or 404.
/// *   **`POST /`** → `create::process`, 200 with the stored farmer, 400 if the
///     payload has an id.
/// *   **`PUT /{id}`** → `update::process`, 200 with the merged farmer or 404.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
}
