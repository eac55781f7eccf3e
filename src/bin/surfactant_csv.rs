// src/bin/surfactant_csv.rs
use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;
use surfactant_manager::config::Config;
use surfactant_manager::csv_store::CsvStore;
use surfactant_manager::{routes, server, state::CsvState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env(8502);

    let store = CsvStore::new(&config.csv_local_path, &config.csv_remote_url, config.fetch_timeout);

    // Without a local copy there is nothing to manage
    if let Err(e) = store.ensure_local_copy().await {
        tracing::error!(error=%e, "Cannot start without surfactant data");
        std::process::exit(1);
    }

    let app = routes::csv::create_router(CsvState::new(store));
    if let Err(e) = server::serve(app, &config).await {
        tracing::error!(error=%e, "Server error");
        std::process::exit(1);
    }
}
