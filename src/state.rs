// src/state.rs
use crate::csv_store::CsvStore;
use crate::database::SurfactantRepository;

#[derive(Clone)]
pub struct DbState {
    pub repo: SurfactantRepository,
}

impl DbState {
    pub fn new(repo: SurfactantRepository) -> Self {
        Self { repo }
    }
}

#[derive(Clone)]
pub struct CsvState {
    pub store: CsvStore,
}

impl CsvState {
    pub fn new(store: CsvStore) -> Self {
        Self { store }
    }
}
