//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL settings for the user, book, and reading-list tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Seconds to wait for a free connection before a request fails.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// Seconds an idle connection is kept. Unset keeps idle connections open.
    #[serde(default)]
    pub idle_timeout_seconds: Option<u64>,
    /// Apply pending migrations when the server starts.
    #[serde(default = "default_migrate_on_start")]
    pub migrate_on_start: bool,
}

fn default_pool_size() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_migrate_on_start() -> bool {
    true
}
