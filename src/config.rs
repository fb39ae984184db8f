//! Ambient configuration: connection retry policy and defaults, loaded from
//! the environment via `dotenv`-then-env-vars rather than a project config
//! file, since this crate has a single subcommand and no project directory
//! to keep settings in.

use std::time::Duration;

/// Connection retry policy for a fresh `PgPool::connect`.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            max_retries: 5,
            retry_delay: Duration::from_millis(200),
        }
    }
}
