// src/csv_store.rs
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use crate::error::AppError;
use crate::table::Table;

/// Local CSV copy of the surfactant table, seeded once from a remote URL.
#[derive(Clone, Debug)]
pub struct CsvStore {
    local_path: PathBuf,
    remote_url: String,
    timeout: Duration,
}

impl CsvStore {
    pub fn new(local_path: impl Into<PathBuf>, remote_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            local_path: local_path.into(),
            remote_url: remote_url.into(),
            timeout,
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Downloads the remote copy unless a local file already exists.
    ///
    /// The file is only written once the whole body has arrived, so a failed
    /// download leaves nothing behind.
    #[instrument(skip(self), fields(path = %self.local_path.display()))]
    pub async fn ensure_local_copy(&self) -> Result<(), AppError> {
        if tokio::fs::try_exists(&self.local_path).await? {
            return Ok(());
        }

        info!(url = %self.remote_url, "Downloading CSV file");
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let body = client
            .get(&self.remote_url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                error!(?e, "Remote CSV unavailable");
                AppError::from(e)
            })?
            .bytes()
            .await?;

        tokio::fs::write(&self.local_path, &body).await?;
        info!(bytes = body.len(), "CSV file downloaded successfully");
        Ok(())
    }

    /// Parses the local copy. Any failure yields an empty table so the UI can
    /// still render its "no data" state.
    #[instrument(skip(self), fields(path = %self.local_path.display()))]
    pub fn load(&self) -> Table {
        match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Failed to load CSV file");
                Table::default()
            }
        }
    }

    /// Loads the table a mutation will be applied to.
    ///
    /// Unlike [`load`](Self::load), a file that exists but cannot be parsed is
    /// an error: persisting the empty fallback would wipe it.
    #[instrument(skip(self), fields(path = %self.local_path.display()))]
    pub fn load_for_update(&self) -> Result<Table, AppError> {
        if !self.local_path.exists() {
            return Ok(Table::default());
        }
        self.read_table().map_err(|e| {
            error!(error = %e, "CSV file is unreadable, refusing to overwrite it");
            AppError::persistence(format!(
                "{} could not be read ({e}); no changes were written",
                self.local_path.display()
            ))
        })
    }

    fn read_table(&self) -> Result<Table, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.local_path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()?;
        Ok(Table::new(headers, rows))
    }

    /// Overwrites the local copy with `table`.
    #[instrument(skip(self, table), fields(rows = table.row_count()))]
    pub fn persist(&self, table: &Table) -> Result<(), AppError> {
        let mut writer = csv::Writer::from_path(&self.local_path).map_err(|e| {
            error!(?e, "Failed to open CSV file for writing");
            AppError::from(e)
        })?;
        if !table.headers().is_empty() {
            writer.write_record(table.headers())?;
        }
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        info!("Changes saved successfully");
        Ok(())
    }
}
