use crate::error::{DrawtickError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Attempts for an operation that keeps hitting a busy database.
    pub retry_budget: u32,
    /// Backoff unit between attempts, multiplied by the attempt number.
    pub retry_backoff: Duration,
    /// How long SQLite itself waits on a locked database before reporting busy.
    pub busy_timeout: Duration,
    /// Time in-flight commits get to drain after the maintenance flag is raised.
    pub reset_grace_period: Duration,
    /// Rows deleted per statement during a reset.
    pub reset_batch_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            retry_budget: 5,
            retry_backoff: Duration::from_millis(25),
            busy_timeout: Duration::from_secs(5),
            reset_grace_period: Duration::from_secs(1),
            reset_batch_size: 500,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.retry_budget == 0 {
            return Err(DrawtickError::config("Retry budget must be greater than 0"));
        }

        if self.reset_batch_size == 0 {
            return Err(DrawtickError::config(
                "Reset batch size must be greater than 0",
            ));
        }

        Ok(())
    }
}
