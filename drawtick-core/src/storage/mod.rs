pub mod counters;
pub mod record_store;

pub use record_store::RecordStore;

use crate::config::StoreConfig;
use crate::error::{DrawtickError, Result};
use rusqlite::Connection;
use std::path::Path;
use tokio::sync::Mutex;

pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    pub async fn new(db_path: &Path, config: &StoreConfig) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DrawtickError::internal(format!("Failed to create directory: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)?;
        conn.busy_timeout(config.busy_timeout)?;

        let storage = Self {
            conn: Mutex::new(conn),
        };

        storage.init_schema().await?;
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        // Draw records, primary key is the store-assigned id
        conn.execute(
            "CREATE TABLE IF NOT EXISTS draws (
                id INTEGER PRIMARY KEY,
                lottery_type TEXT NOT NULL,
                draw TEXT NOT NULL,
                guesses TEXT NOT NULL,
                score REAL NOT NULL,
                timestamp INTEGER NOT NULL
            )",
            [],
        )?;

        // Type-partitioned index, newest-first when walked backwards
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_draws_type_id ON draws (lottery_type, id)",
            [],
        )?;

        // Counters: id sequence, tick lock, maintenance flag, aggregates
        conn.execute(
            "CREATE TABLE IF NOT EXISTS counters (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            )",
            [],
        )?;

        for key in counters::BASELINE_KEYS {
            conn.execute(
                "INSERT OR IGNORE INTO counters (key, value) VALUES (?1, 0)",
                [key],
            )?;
        }

        Ok(())
    }

    pub async fn get_connection(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
