// src/bin/surfactant_db.rs
use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;
use surfactant_manager::config::Config;
use surfactant_manager::database::SurfactantRepository;
use surfactant_manager::{routes, server, state::DbState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env(8501);

    let repo = match SurfactantRepository::new(&config.database_url) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!(error=%e, url=%config.database_url, "Invalid DATABASE_URL");
            std::process::exit(1);
        }
    };
    if let Err(e) = repo.ensure_schema().await {
        tracing::error!(error=%e, "Failed to initialize database");
        std::process::exit(1);
    }

    let app = routes::surfactants::create_router(DbState::new(repo));
    if let Err(e) = server::serve(app, &config).await {
        tracing::error!(error=%e, "Server error");
        std::process::exit(1);
    }
}
