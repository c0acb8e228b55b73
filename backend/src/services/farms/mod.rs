//! # Farm Service Module
//!
//! Endpoints under `/api/farms`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: the `process` handlers extract the farm id (or the
//!     farmer id for `/by-farmer/{farmer_id}`) and, for writes, the JSON body as
//!     a `Farm`.
//!
//! 2.  **Rules**: the plain functions (`list_farms`, `list_farms_by_farmer`,
//!     `get_farm`, `create_farm`, `update_farm`, `delete_farm`) do the work
//!     against any `Repository<Farm>`:
//!     - create clears the payload `id` so the store always inserts;
//!     - update overwrites all ten mutable fields with the payload values;
//!     - delete checks existence first so a missing farm is a `404`, not a
//!       silent no-op.
//!
//! 3.  **Storage**: the `SqliteStore` from `web::Data`, one connection per call.
//!
//! 4.  **HTTP Response**: `200 OK` with JSON, `204 No Content` for a delete, or
//!     the `ServiceError` status (`404`, `503`).
//!
//! ## Sub-modules:
//! - `list`: every farm, or the farms of one farmer (`/by-farmer/{farmerId}`).
//!   The farmer itself is never looked up, so an unknown farmer id just yields
//!   an empty list.
//! - `get`: one farm by id.
//! - `create`: inserts a new farm. Any id in the payload is discarded.
//! - `update`: replaces every field of the stored farm with the payload,
//!   `null`s included.
//! - `delete`: removes a farm by id.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all farm-related API endpoints.
const API_PATH: &str = "/api/farms";

/// Configures and returns the Actix `Scope` for all farm routes.
///
/// *   **`GET /`** → `list::process`
/// *   **`GET /by-farmer/{farmer_id}`** → `list::process_by_farmer`
/// *   **`GET /{id}`** → `get::process`, 200 or 404
/// *   **`POST /`** → `create::process`, 200 with the stored farm
/// *   **`PUT /{id}`** → `update::process`, 200 or 404
/// *   **`DELETE /{id}`** → `delete::process`, 204 or 404
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/by-farmer/{farmer_id}", get().to(list::process_by_farmer))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
