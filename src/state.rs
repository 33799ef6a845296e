//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply, as
/// `DatabaseConnection` is a pooled handle) for each incoming request via
/// Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Opened once at process start, injected here by the host, and closed
    /// once at shutdown. Accessors receive it by reference at construction
    /// rather than through any ambient global.
    pub db: DatabaseConnection,

    /// Whether the gallery collaborator is configured for this deployment.
    ///
    /// When false, the public gallery listing degrades to a fixed placeholder
    /// record instead of querying the store.
    pub gallery_enabled: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `gallery_enabled` - Gallery collaborator availability flag
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, gallery_enabled: bool) -> Self {
        Self {
            db,
            gallery_enabled,
        }
    }
}
