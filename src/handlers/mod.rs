pub mod csv;
pub mod surfactant;

use axum::{http::StatusCode, response::Html};
use crate::view::{render_page, App, PageData, ViewState};

pub type Page = (StatusCode, Html<String>);

fn page(status: StatusCode, app: App, view: &ViewState, data: &PageData) -> Page {
    (status, Html(render_page(app, view, data)))
}
