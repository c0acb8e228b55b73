//! Startup seeding of an empty database.
//!
//! `seed_default_farmer` runs once from `main` after the store is opened. It
//! returns its failure instead of panicking; `main` logs it and keeps starting
//! the server, so a database that is briefly unavailable at boot does not take
//! the process down.

use crate::persistence::{Repository, StoreError};
use common::model::farmer::Farmer;

pub const DEFAULT_FARMER_NAME: &str = "Rajesh Kumar";
pub const DEFAULT_FARMER_LOCATION: &str = "Mandya, Karnataka";

#[derive(Debug, PartialEq)]
pub enum SeedOutcome {
    Seeded(Farmer),
    /// The store already held farmers; nothing was written.
    Skipped { existing: u64 },
}

/// Inserts the default farmer if, and only if, no farmer is stored yet.
pub fn seed_default_farmer(repo: &impl Repository<Farmer>) -> Result<SeedOutcome, StoreError> {
    let existing = repo.count()?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    let farmer = repo.save(Farmer::new(DEFAULT_FARMER_NAME, DEFAULT_FARMER_LOCATION))?;
    Ok(SeedOutcome::Seeded(farmer))
}
