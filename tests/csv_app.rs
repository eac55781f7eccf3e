use std::time::Duration;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use surfactant_manager::csv_store::CsvStore;
use surfactant_manager::error::AppError;
use surfactant_manager::routes::csv::create_router;
use surfactant_manager::state::CsvState;
use tokio::net::TcpListener;
use tower::ServiceExt;

const REMOTE: &str = "Product Name,CMC,Cloud Point,HLB,EO Content,Surface Tension,Foam Height,Pour Point,Form,Features,Applications\n\
                      Alpha,10,,12,,,,,Liquid,,\n\
                      Beta,20,55,,,,,,,,\n\
                      Gamma,30,,,,,,,Solid,,\n";

/// Serves `REMOTE` at `/surfactants.csv` and 404 elsewhere.
async fn spawn_remote() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/surfactants.csv", get(|| async { REMOTE }));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seeded_store(dir: &tempfile::TempDir) -> CsvStore {
    let base = spawn_remote().await;
    let store = CsvStore::new(
        dir.path().join("surfactors.csv"),
        format!("{base}/surfactants.csv"),
        Duration::from_secs(5),
    );
    store.ensure_local_copy().await.unwrap();
    store
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn downloads_missing_local_copy() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;

    assert_eq!(std::fs::read_to_string(store.local_path()).unwrap(), REMOTE);
    assert_eq!(store.load().row_count(), 3);
}

#[tokio::test]
async fn remote_error_status_is_a_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_remote().await;
    let store = CsvStore::new(dir.path().join("s.csv"), format!("{base}/missing.csv"), Duration::from_secs(5));

    let err = store.ensure_local_copy().await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
    assert!(!store.local_path().exists());
}

#[tokio::test]
async fn slow_remote_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route(
        "/slow.csv",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            REMOTE
        }),
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let store = CsvStore::new(dir.path().join("s.csv"), format!("http://{addr}/slow.csv"), Duration::from_millis(200));
    let err = store.ensure_local_copy().await.unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
    assert!(!store.local_path().exists());
}

#[tokio::test]
async fn add_appends_and_persists_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/add", "product_name=Foamex+10&cmc=120&cloud_point=")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("added successfully!"));

    let written = std::fs::read_to_string(store.local_path()).unwrap();
    assert!(written.starts_with(REMOTE));
    assert!(written.ends_with("Foamex 10,120,,,,,,,,,\n"));
}

#[tokio::test]
async fn add_without_name_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/add", "cmc=1")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Product Name is required!"));
    assert_eq!(std::fs::read_to_string(store.local_path()).unwrap(), REMOTE);
}

#[tokio::test]
async fn delete_by_position_shifts_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let app = create_router(CsvState::new(store.clone()));

    let (status, _) = send(&app, post("/delete", "index=1")).await;
    assert_eq!(status, StatusCode::OK);

    let table = store.load();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][0], "Alpha");
    assert_eq!(table.rows()[1][0], "Gamma");
}

#[tokio::test]
async fn delete_past_the_end_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/delete", "index=3")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Invalid row index."));
    assert_eq!(store.load().row_count(), 3);
}

#[tokio::test]
async fn save_and_list_screens() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir).await;
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/save", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Changes saved successfully."));
    assert_eq!(std::fs::read_to_string(store.local_path()).unwrap(), REMOTE);

    let req = Request::builder().uri("/?screen=list").body(Body::empty()).unwrap();
    let (_, body) = send(&app, req).await;
    assert!(body.contains("<th>Cloud Point</th>"));
    assert!(body.contains("<tr><th>2</th><td>Gamma</td>"));
}

const UNREADABLE: &[u8] = b"Product Name,CMC,Cloud Point\nAlpha,10,55\xb0C\nBeta,20,\n";

fn unreadable_store(dir: &tempfile::TempDir) -> CsvStore {
    let path = dir.path().join("surfactors.csv");
    std::fs::write(&path, UNREADABLE).unwrap();
    CsvStore::new(path, "http://127.0.0.1:9/unused.csv", Duration::from_secs(1))
}

#[tokio::test]
async fn unreadable_file_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let store = unreadable_store(&dir);
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/save", "")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("class=\"error\""));
    assert!(!body.contains("Changes saved successfully."));

    let (status, body) = send(&app, post("/add", "product_name=Gamma")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("no changes were written"));

    let (status, _) = send(&app, post("/delete", "index=0")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(std::fs::read(store.local_path()).unwrap(), UNREADABLE);
}

#[tokio::test]
async fn add_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::new(
        dir.path().join("missing/surfactors.csv"),
        "http://127.0.0.1:9/unused.csv",
        Duration::from_secs(1),
    );
    let app = create_router(CsvState::new(store.clone()));

    let (status, body) = send(&app, post("/add", "product_name=Gamma&cmc=1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("class=\"error\">Persistence error"));
    assert!(body.contains("value=\"Gamma\""));
    assert!(!store.local_path().exists());
}
