//! Pledgeboard crowdfunding server library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod listing;
pub mod models;
pub mod pledging;
pub mod routes;
pub mod security;

pub use config::Config;
pub use db::{open_store, Db, Store};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store handle and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}
