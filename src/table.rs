// src/table.rs
use crate::error::AppError;
use crate::models::surfactant::csv_headers;

/// In-memory copy of the tabular file.
///
/// Cells are kept as the raw strings read from disk. Mutations never touch
/// `self`; they hand back a new table that the caller has to persist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a copy with `row` appended.
    ///
    /// `row` is a list of `(header, value)` pairs. Headers the table lacks are
    /// added as new columns; columns the row doesn't mention get an empty cell.
    pub fn append(&self, row: &[(String, String)]) -> Table {
        let mut headers = if self.headers.is_empty() {
            csv_headers()
        } else {
            self.headers.clone()
        };
        for (header, _) in row {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }

        let width = headers.len();
        let mut rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                let mut r = r.clone();
                if r.len() < width {
                    r.resize(width, String::new());
                }
                r
            })
            .collect();

        let new_row = headers
            .iter()
            .map(|h| {
                row.iter()
                    .find(|(name, _)| name == h)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default()
            })
            .collect();
        rows.push(new_row);

        Table { headers, rows }
    }

    /// Returns a copy without the row at `index`; later rows shift down by one.
    pub fn delete_at(&self, index: usize) -> Result<Table, AppError> {
        if index >= self.rows.len() {
            return Err(AppError::Range { index, len: self.rows.len() });
        }
        let mut rows = self.rows.clone();
        rows.remove(index);
        Ok(Table { headers: self.headers.clone(), rows })
    }
}
