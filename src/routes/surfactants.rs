use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::surfactant::{add_surfactant, delete_surfactant, show_screen};
use crate::state::DbState;

/// Routes of the SQLite-backed app.
pub fn create_router(state: DbState) -> Router {
    Router::new()
        .route("/", get(show_screen))
        .route("/add", post(add_surfactant))
        .route("/delete", post(delete_surfactant))
        .with_state(state)
        .merge(super::health())
}
