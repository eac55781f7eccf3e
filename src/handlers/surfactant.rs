// src/handlers/surfactant.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Form,
};
use tracing::{info, instrument, warn};
use crate::dtos::surfactant::{DeleteByIdForm, ScreenQuery, SurfactantForm};
use crate::error::AppError;
use crate::models::surfactant::NewSurfactant;
use crate::state::DbState;
use crate::view::{App, Notice, PageData, Screen, ViewState};
use super::{page, Page};

/// Re-reads the table and renders `view`. A failed read is shown as an error
/// notice over an empty listing.
async fn render(state: &DbState, status: StatusCode, view: ViewState) -> Page {
    let needs_rows = matches!(view.screen, Screen::List | Screen::Delete);
    if !needs_rows {
        return page(status, App::Database, &view, &PageData::Records(Vec::new()));
    }
    match state.repo.fetch_all().await {
        Ok(rows) => page(status, App::Database, &view, &PageData::Records(rows)),
        Err(e) => page(
            e.status(),
            App::Database,
            &view.with_notice(Notice::from(&e)),
            &PageData::Records(Vec::new()),
        ),
    }
}

// GET / - Render the selected screen
#[instrument(skip(state))]
pub async fn show_screen(State(state): State<DbState>, Query(query): Query<ScreenQuery>) -> Page {
    let screen = App::Database.screen(query.screen.as_deref());
    render(&state, StatusCode::OK, ViewState::new(screen)).await
}

// POST /add - Coerce the form and insert one record
#[instrument(skip(state, form), fields(product_name = %form.product_name))]
pub async fn add_surfactant(State(state): State<DbState>, Form(form): Form<SurfactantForm>) -> Page {
    let view = ViewState::new(Screen::Add);
    let record = match NewSurfactant::try_from(form.clone()) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "Rejected surfactant form");
            return render(&state, e.status(), view.with_notice(Notice::from(&e)).with_draft(form)).await;
        }
    };

    match state.repo.insert(&record).await {
        Ok(id) => {
            info!(id, "Surfactant added");
            let notice = Notice::Success(format!("Surfactant '{}' added successfully!", record.product_name));
            render(&state, StatusCode::OK, view.with_notice(notice)).await
        }
        Err(e) => render(&state, e.status(), view.with_notice(Notice::from(&e)).with_draft(form)).await,
    }
}

// POST /delete - Delete by id
#[instrument(skip(state))]
pub async fn delete_surfactant(State(state): State<DbState>, Form(form): Form<DeleteByIdForm>) -> Page {
    let view = ViewState::new(Screen::Delete);
    let result: Result<(i64, u64), AppError> = async {
        let id = form.parse_id()?;
        let affected = state.repo.delete(id).await?;
        Ok((id, affected))
    }
    .await;

    let (status, notice) = match result {
        Ok((id, 0)) => (StatusCode::OK, Notice::Info(format!("No surfactant with ID {id} found; nothing deleted."))),
        Ok((id, _)) => (StatusCode::OK, Notice::Success(format!("Surfactant with ID {id} deleted successfully!"))),
        Err(e) => (e.status(), Notice::from(&e)),
    };
    render(&state, status, view.with_notice(notice)).await
}
