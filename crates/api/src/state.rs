use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; handlers hold no state between requests, the pool is
/// the only shared resource.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: holocron_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
