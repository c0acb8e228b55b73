//! Records exchanged between the backend and its clients.
//!
//! Field names follow the JSON shape the web client expects (camelCase), and
//! every field is optional on the wire: a missing key and an explicit `null`
//! deserialize to the same `None`.

pub mod farm;
pub mod farmer;
