use crate::lottery::DrawRecord;
use crate::{LotteryError, Result};
use async_trait::async_trait;
use tokio::sync::broadcast;

/// Where committed draws go once a tick is done. Called once per tick with
/// every record that tick committed.
#[async_trait]
pub trait DrawPublisher: Send + Sync {
    async fn publish(&self, records: &[DrawRecord]) -> Result<()>;
}

/// Fans records out to however many subscribers are listening right now.
/// Nobody listening is fine; slow subscribers lag and lose the oldest events.
#[derive(Debug, Clone)]
pub struct BroadcastPublisher {
    sender: broadcast::Sender<DrawRecord>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DrawRecord> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl DrawPublisher for BroadcastPublisher {
    async fn publish(&self, records: &[DrawRecord]) -> Result<()> {
        if self.sender.receiver_count() == 0 {
            tracing::debug!("No subscribers for {} draw(s)", records.len());
            return Ok(());
        }

        for record in records {
            self.sender
                .send(record.clone())
                .map_err(|e| LotteryError::Publish(e.to_string()))?;
        }
        Ok(())
    }
}
