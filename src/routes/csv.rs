use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::csv::{add_row, delete_row, save, show_screen};
use crate::state::CsvState;

/// Routes of the CSV-backed app.
pub fn create_router(state: CsvState) -> Router {
    Router::new()
        .route("/", get(show_screen))
        .route("/add", post(add_row))
        .route("/delete", post(delete_row))
        .route("/save", post(save))
        .with_state(state)
        .merge(super::health())
}
