use clap::Parser;
use std::path::PathBuf;

/// Origins of the local development front-ends allowed by CORS by default.
pub const DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:5175",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:5174",
    "http://127.0.0.1:5175",
    "http://10.174.13.184:5173",
];

/// Server settings, from command-line flags or `AGRI_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "agriculture-backend", about = "Farmer and farm records over REST")]
pub struct Config {
    #[arg(long, env = "AGRI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "AGRI_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file, created if missing.
    #[arg(long, env = "AGRI_DATABASE", default_value = "agriculture.sqlite")]
    pub database: PathBuf,

    /// Allowed CORS origins, comma separated.
    #[arg(
        long = "cors-origin",
        env = "AGRI_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEV_ORIGINS.iter().map(|o| o.to_string()).collect::<Vec<_>>()
    )]
    pub cors_origins: Vec<String>,

    /// Skip inserting the default farmer into an empty database.
    #[arg(long, env = "AGRI_NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
