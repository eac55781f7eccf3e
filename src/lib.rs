//! Two form-driven data-entry apps for a table of surfactant products: one
//! over a SQLite table, one over a CSV file seeded from a remote copy.
pub mod config;
pub mod csv_store;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod table;
pub mod view;
