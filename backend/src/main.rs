mod config;
mod cors;
mod persistence;
mod seeder;
mod services;

use crate::config::Config;
use crate::persistence::SqliteStore;
use crate::seeder::SeedOutcome;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use std::io;

fn seed(store: &SqliteStore) {
    match seeder::seed_default_farmer(store) {
        Ok(SeedOutcome::Seeded(farmer)) => info!("Seeded default farmer {:?}", farmer.id),
        Ok(SeedOutcome::Skipped { existing }) => {
            debug!("Skipping seed, {} farmer(s) already stored", existing)
        }
        Err(e) => warn!("Could not seed data: {}", e),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let store = SqliteStore::open(&config.database);
    info!("Using database {}", config.database.display());

    if !config.no_seed {
        seed(&store);
    }

    info!("Server running at {}", config.url());

    let origins = config.cors_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors::dev_cors(&origins))
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MiB
            .app_data(web::Data::new(store.clone()))
            .configure(services::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
