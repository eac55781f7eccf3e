pub mod csv;
pub mod surfactants;

use axum::{routing::get, Router};

pub(crate) async fn health_check() -> &'static str {
    "OK"
}

pub(crate) fn health() -> Router<()> {
    Router::new().route("/health", get(health_check))
}
