// src/database.rs
use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::{error, info, instrument};
use crate::error::AppError;
use crate::models::surfactant::{NewSurfactant, Surfactant};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS surfactants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    cmc REAL,
    cloud_point REAL,
    hlb REAL,
    eo_content REAL,
    surface_tension REAL,
    foam_height TEXT,
    pour_point REAL,
    form TEXT,
    features TEXT,
    applications TEXT
)"#;

/// SQLite-backed surfactant table.
///
/// Every operation opens its own connection, runs a single autocommitted
/// statement and closes the connection again.
#[derive(Clone, Debug)]
pub struct SurfactantRepository {
    options: SqliteConnectOptions,
}

impl SurfactantRepository {
    pub fn new(database_url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Ok(Self { options })
    }

    async fn connect(&self) -> Result<SqliteConnection, AppError> {
        SqliteConnection::connect_with(&self.options).await.map_err(|e| {
            error!(?e, "Failed to open database");
            e.into()
        })
    }

    /// Creates the table if it does not exist yet. Safe to call on every start.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let mut conn = self.connect().await?;
        sqlx::query(CREATE_TABLE).execute(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Surfactant>, AppError> {
        let mut conn = self.connect().await?;
        let rows = match sqlx::query_as::<_, Surfactant>(
            "SELECT id, product_name, cmc, cloud_point, hlb, eo_content, surface_tension,
                    foam_height, pour_point, form, features, applications
             FROM surfactants ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await
        {
            Ok(rows) => rows,
            Err(e) => {
                error!(?e, "Failed to fetch surfactants");
                return Err(e.into());
            }
        };
        conn.close().await?;
        Ok(rows)
    }

    /// Appends a record and returns the id the store assigned to it.
    #[instrument(skip(self, record), fields(product_name = %record.product_name))]
    pub async fn insert(&self, record: &NewSurfactant) -> Result<i64, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            "INSERT INTO surfactants (product_name, cmc, cloud_point, hlb, eo_content, surface_tension,
                                      foam_height, pour_point, form, features, applications)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.product_name)
        .bind(record.cmc)
        .bind(record.cloud_point)
        .bind(record.hlb)
        .bind(record.eo_content)
        .bind(record.surface_tension)
        .bind(&record.foam_height)
        .bind(record.pour_point)
        .bind(&record.form)
        .bind(&record.features)
        .bind(&record.applications)
        .execute(&mut conn)
        .await
        .map_err(|e| {
            error!(?e, "Failed to insert surfactant");
            AppError::from(e)
        })?;
        conn.close().await?;

        let id = result.last_insert_rowid();
        info!(id, "Surfactant inserted");
        Ok(id)
    }

    /// Deletes by id. A missing id affects zero rows and is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM surfactants WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        info!(rows_affected = result.rows_affected(), "Surfactant delete executed");
        Ok(result.rows_affected())
    }
}
