// src/view.rs
//! Screen selection and HTML rendering.
//!
//! Rendering is a pure function of a [`ViewState`] and the data freshly read
//! from the store; nothing here talks to persistence.
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use crate::dtos::surfactant::SurfactantForm;
use crate::error::AppError;
use crate::models::surfactant::{FieldKind, NewSurfactant, Surfactant, FIELDS};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Add,
    Delete,
    Save,
}

impl Screen {
    pub fn slug(self) -> &'static str {
        match self {
            Screen::List => "list",
            Screen::Add => "add",
            Screen::Delete => "delete",
            Screen::Save => "save",
        }
    }

    fn from_slug(slug: &str) -> Option<Screen> {
        match slug {
            "list" => Some(Screen::List),
            "add" => Some(Screen::Add),
            "delete" => Some(Screen::Delete),
            "save" => Some(Screen::Save),
            _ => None,
        }
    }
}

/// Which of the two applications is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Database,
    Csv,
}

impl App {
    pub fn screens(self) -> &'static [Screen] {
        match self {
            App::Database => &[Screen::List, Screen::Add, Screen::Delete],
            App::Csv => &[Screen::List, Screen::Add, Screen::Delete, Screen::Save],
        }
    }

    /// Resolves a `?screen=` value; unknown or unavailable names fall back to List.
    pub fn screen(self, slug: Option<&str>) -> Screen {
        slug.and_then(Screen::from_slug)
            .filter(|s| self.screens().contains(s))
            .unwrap_or(Screen::List)
    }

    fn title(self) -> &'static str {
        match self {
            App::Database => "Surfactant Database",
            App::Csv => "Surfactant CSV Manager",
        }
    }

    fn intro(self) -> &'static str {
        match self {
            App::Database => {
                "<p>Welcome to the <strong>Surfactant Database</strong> app. This tool allows you to \
                 manage and explore surfactant data. You can:</p>\
                 <ul><li><strong>View existing surfactants</strong> in the database.</li>\
                 <li><strong>Add new surfactants</strong> by providing relevant details.</li>\
                 <li><strong>Delete surfactants</strong> that are no longer needed.</li></ul>\
                 <p>Use the menu on the left to navigate through the app.</p>"
            }
            App::Csv => {
                "<p>This application fetches and manages surfactant data from a CSV file hosted on GitHub.</p>"
            }
        }
    }

    fn menu_label(self, screen: Screen) -> &'static str {
        match (self, screen) {
            (App::Database, Screen::List) => "View Surfactants",
            (App::Database, Screen::Add) => "Add Surfactant",
            (App::Database, Screen::Delete) => "Delete Surfactant",
            (App::Csv, Screen::List) => "View Data",
            (App::Csv, Screen::Add) => "Add Data",
            (App::Csv, Screen::Delete) => "Delete Data",
            (_, Screen::Save) => "Save Changes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Range { .. } => Notice::Error("Invalid row index.".to_string()),
            other => Notice::Error(other.to_string()),
        }
    }
}

/// Everything the renderer needs besides the stored data.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub screen: Screen,
    pub notice: Option<Notice>,
    /// Values to pre-fill the Add form with after a rejected submission.
    pub draft: SurfactantForm,
}

impl ViewState {
    pub fn new(screen: Screen) -> Self {
        Self { screen, notice: None, draft: SurfactantForm::default() }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_draft(mut self, draft: SurfactantForm) -> Self {
        self.draft = draft;
        self
    }
}

/// Current persisted state as read by the screen's adapter.
#[derive(Debug, Clone)]
pub enum PageData {
    Records(Vec<Surfactant>),
    Table(Table),
}

impl PageData {
    fn is_empty(&self) -> bool {
        match self {
            PageData::Records(rows) => rows.is_empty(),
            PageData::Table(table) => table.is_empty(),
        }
    }
}

pub fn render_page(app: App, state: &ViewState, data: &PageData) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>\
         <aside><form method=\"get\" action=\"/\"><label for=\"screen\">Menu</label>\
         <select id=\"screen\" name=\"screen\" onchange=\"this.form.submit()\">",
        title = text(app.title()),
    ));
    for &screen in app.screens() {
        let selected = if screen == state.screen { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            screen.slug(),
            text(app.menu_label(screen))
        ));
    }
    html.push_str("</select><noscript><button type=\"submit\">Go</button></noscript></form></aside><main>");
    html.push_str(&format!("<h1>{}</h1>{}", text(app.title()), app.intro()));

    if let Some(notice) = &state.notice {
        render_notice(&mut html, notice);
    }

    match state.screen {
        Screen::List => render_list(&mut html, app, data),
        Screen::Add => render_add(&mut html, &state.draft),
        Screen::Delete => render_delete(&mut html, app, data),
        Screen::Save => render_save(&mut html),
    }

    html.push_str("</main></body></html>");
    html
}

fn render_notice(html: &mut String, notice: &Notice) {
    let (class, message) = match notice {
        Notice::Success(m) => ("success", m),
        Notice::Info(m) => ("info", m),
        Notice::Error(m) => ("error", m),
    };
    html.push_str(&format!("<p class=\"{class}\">{}</p>", text(message)));
}

fn empty_notice(html: &mut String, app: App) {
    let message = match app {
        App::Database => "No surfactants found in the database.",
        App::Csv => "No data found in the CSV file.",
    };
    render_notice(html, &Notice::Info(message.to_string()));
}

fn render_list(html: &mut String, app: App, data: &PageData) {
    match app {
        App::Database => html.push_str(
            "<h2>View All Surfactants</h2>\
             <p>This section lists all the surfactants currently stored in the database.</p>",
        ),
        App::Csv => html.push_str("<h2>View Surfactants Data</h2>"),
    }
    if data.is_empty() {
        empty_notice(html, app);
        return;
    }

    match data {
        PageData::Records(rows) => {
            for row in rows {
                html.push_str(&format!("<section class=\"record\"><p><strong>ID</strong>: {}</p>", row.id));
                let values = NewSurfactant::from(row.clone()).display_values();
                for (field, value) in FIELDS.iter().zip(values) {
                    html.push_str(&format!(
                        "<p><strong>{}</strong>: {}</p>",
                        text(field.label),
                        text(value.as_deref().unwrap_or("None"))
                    ));
                }
                html.push_str("</section><hr>");
            }
        }
        PageData::Table(table) => {
            html.push_str("<table><thead><tr><th></th>");
            for header in table.headers() {
                html.push_str(&format!("<th>{}</th>", text(header)));
            }
            html.push_str("</tr></thead><tbody>");
            for (index, row) in table.rows().iter().enumerate() {
                html.push_str(&format!("<tr><th>{index}</th>"));
                for cell in row {
                    html.push_str(&format!("<td>{}</td>", text(cell)));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody></table>");
        }
    }
}

fn render_add(html: &mut String, draft: &SurfactantForm) {
    html.push_str(
        "<h2>Add a New Surfactant</h2>\
         <p>Fill in the fields below to add a new surfactant.</p>\
         <form method=\"post\" action=\"/add\">",
    );
    let values = [
        &draft.product_name,
        &draft.cmc,
        &draft.cloud_point,
        &draft.hlb,
        &draft.eo_content,
        &draft.surface_tension,
        &draft.foam_height,
        &draft.pour_point,
        &draft.form,
        &draft.features,
        &draft.applications,
    ];
    for (field, value) in FIELDS.iter().zip(values) {
        let label = match field.kind {
            FieldKind::Required => format!("<strong>{}</strong> (Required)", text(field.label)),
            _ => text(field.label).into_owned(),
        };
        html.push_str(&format!("<p><label for=\"{key}\">{label}</label><br>", key = field.key));
        match field.kind {
            FieldKind::LongText => {
                html.push_str(&format!(
                    "<textarea id=\"{key}\" name=\"{key}\" title=\"{help}\">{value}</textarea>",
                    key = field.key,
                    help = attr(field.help),
                    value = text(value),
                ));
            }
            _ => {
                html.push_str(&format!(
                    "<input type=\"text\" id=\"{key}\" name=\"{key}\" title=\"{help}\" value=\"{value}\">",
                    key = field.key,
                    help = attr(field.help),
                    value = attr(value),
                ));
            }
        }
        html.push_str(&format!("<br><small>{}</small></p>", text(field.help)));
    }
    html.push_str("<button type=\"submit\">Add Surfactant</button></form>");
}

fn render_delete(html: &mut String, app: App, data: &PageData) {
    html.push_str("<h2>Delete a Surfactant</h2>");
    if data.is_empty() {
        empty_notice(html, app);
        return;
    }
    match data {
        PageData::Records(_) => html.push_str(
            "<p>Enter the ID of the surfactant you want to delete.</p>\
             <form method=\"post\" action=\"/delete\">\
             <label for=\"id\">Enter Surfactant ID</label>\
             <input type=\"number\" id=\"id\" name=\"id\" min=\"1\" step=\"1\" value=\"1\" \
             title=\"ID of the surfactant to delete.\">",
        ),
        PageData::Table(table) => {
            html.push_str(&format!(
                "<form method=\"post\" action=\"/delete\">\
                 <label for=\"index\">Enter the row index to delete</label>\
                 <input type=\"number\" id=\"index\" name=\"index\" min=\"0\" max=\"{}\" step=\"1\" value=\"0\">",
                table.row_count() - 1
            ));
        }
    }
    html.push_str("<button type=\"submit\">Delete Surfactant</button></form>");
}

fn render_save(html: &mut String) {
    html.push_str(
        "<h2>Save Changes to CSV</h2>\
         <form method=\"post\" action=\"/save\"><button type=\"submit\">Save Changes</button></form>",
    );
}
