// src/config.rs
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://surfactants.db";
pub const DEFAULT_CSV_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/ddewetroos/Surfactant_DB/main/surfactants.csv";
pub const DEFAULT_CSV_LOCAL_PATH: &str = "surfactors.csv";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub csv_remote_url: String,
    pub csv_local_path: PathBuf,
    pub fetch_timeout: Duration,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// `default_port` differs per binary so both apps can run side by side.
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let csv_remote_url = lookup("CSV_REMOTE_URL").unwrap_or_else(|| DEFAULT_CSV_REMOTE_URL.to_string());
        let csv_local_path = lookup("CSV_LOCAL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_LOCAL_PATH));
        let fetch_timeout = lookup("FETCH_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
        let host = lookup("HOST")
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = lookup("PORT").and_then(|p| p.parse::<u16>().ok()).unwrap_or(default_port);

        Self { database_url, csv_remote_url, csv_local_path, fetch_timeout, host, port }
    }
}
