//! Connection helper: connect with a bounded number of retries, since a
//! freshly started Postgres container may not accept connections yet.
//! Status is logged through `tracing` rather than `println!`.

use anyhow::Result;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::ConnectionConfig;

pub async fn connect_with_retry(url: &str) -> Result<PgPool> {
    connect_with_retry_config(url, &ConnectionConfig::default()).await
}

pub async fn connect_with_retry_config(url: &str, config: &ConnectionConfig) -> Result<PgPool> {
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        match PgPool::connect(url).await {
            Ok(pool) => {
                if attempt > 0 {
                    info!(attempt, "connected to database after retry");
                } else {
                    info!("connected to database");
                }
                return Ok(pool);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < config.max_retries {
                    if attempt == 0 {
                        warn!("database not ready, retrying");
                    }
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }

    Err(anyhow::anyhow!(
        "failed to connect to database after {} attempts: {}",
        config.max_retries + 1,
        last_error.unwrap()
    ))
}
