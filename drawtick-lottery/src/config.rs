use crate::{LotteryError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Cadence of the tick loop, and the width of one tick unit.
    pub tick_interval: Duration,
    /// How long draws stay suspended after a jackpot.
    pub jackpot_pause: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            jackpot_pause: Duration::from_secs(30),
        }
    }
}

impl CoordinatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.as_millis() == 0 {
            return Err(LotteryError::config(
                "Tick interval must be at least one millisecond",
            ));
        }

        Ok(())
    }
}
