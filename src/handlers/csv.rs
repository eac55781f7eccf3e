// src/handlers/csv.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use tracing::{error, info, instrument, warn};
use crate::dtos::surfactant::{DeleteAtForm, ScreenQuery, SurfactantForm};
use crate::error::AppError;
use crate::models::surfactant::NewSurfactant;
use crate::state::CsvState;
use crate::view::{App, Notice, PageData, Screen, ViewState};
use super::{page, Page};

/// Runs `f` on the blocking pool; the csv reader and writer do synchronous file I/O.
async fn blocking<F>(state: CsvState, f: F) -> Page
where
    F: FnOnce(&CsvState) -> Page + Send + 'static,
{
    match tokio::task::spawn_blocking(move || f(&state)).await {
        Ok(page) => page,
        Err(e) => {
            error!(?e, "CSV task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html("Internal error".to_string()))
        }
    }
}

fn render(state: &CsvState, status: StatusCode, view: ViewState) -> Page {
    let table = state.store.load();
    page(status, App::Csv, &view, &PageData::Table(table))
}

fn outcome(state: &CsvState, view: ViewState, result: Result<String, AppError>) -> Page {
    match result {
        Ok(message) => render(state, StatusCode::OK, view.with_notice(Notice::Success(message))),
        Err(e) => {
            warn!(error = %e, "CSV operation failed");
            render(state, e.status(), view.with_notice(Notice::from(&e)))
        }
    }
}

// GET / - Render the selected screen
#[instrument(skip(state))]
pub async fn show_screen(State(state): State<CsvState>, Query(query): Query<ScreenQuery>) -> Page {
    let screen = App::Csv.screen(query.screen.as_deref());
    blocking(state, move |state| render(state, StatusCode::OK, ViewState::new(screen))).await
}

// POST /add - Append a row and write the file
#[instrument(skip(state, form), fields(product_name = %form.product_name))]
pub async fn add_row(State(state): State<CsvState>, Form(form): Form<SurfactantForm>) -> Page {
    blocking(state, move |state| {
        let view = ViewState::new(Screen::Add);
        let record = match NewSurfactant::try_from(form.clone()) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Rejected surfactant form");
                return render(state, e.status(), view.with_notice(Notice::from(&e)).with_draft(form));
            }
        };

        let written = state.store.load_for_update().and_then(|table| {
            let table = table.append(&record.to_cells());
            state.store.persist(&table)?;
            Ok(table.row_count())
        });
        match written {
            Ok(rows) => {
                info!(rows, "Row appended");
                let notice = Notice::Success(format!("Surfactant '{}' added successfully!", record.product_name));
                render(state, StatusCode::OK, view.with_notice(notice))
            }
            Err(e) => render(state, e.status(), view.with_notice(Notice::from(&e)).with_draft(form)),
        }
    })
    .await
}

// POST /delete - Remove the row at a position and write the file
#[instrument(skip(state))]
pub async fn delete_row(State(state): State<CsvState>, Form(form): Form<DeleteAtForm>) -> Page {
    blocking(state, move |state| {
        let result = form.parse_index().and_then(|index| {
            let table = state.store.load_for_update()?.delete_at(index)?;
            state.store.persist(&table)?;
            Ok(format!("Row {index} deleted successfully!"))
        });
        outcome(state, ViewState::new(Screen::Delete), result)
    })
    .await
}

// POST /save - Rewrite the file from its current contents
#[instrument(skip(state))]
pub async fn save(State(state): State<CsvState>) -> Page {
    blocking(state, |state| {
        let result = state
            .store
            .load_for_update()
            .and_then(|table| state.store.persist(&table))
            .map(|()| "Changes saved successfully.".to_string());
        outcome(state, ViewState::new(Screen::Save), result)
    })
    .await
}
