use crate::config::StoreConfig;
use crate::error::{DrawtickError, Result};
use crate::storage::counters::{self, COOLDOWN_KEY, ID_KEY, MAINTENANCE_KEY, TICK_KEY};
use crate::storage::Storage;
use crate::types::{NewDraw, PrizeTier, StoredDraw};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::sync::Arc;

/// Append-only draw records plus the counters derived from them.
///
/// Cheap to clone; every clone shares the same [`Storage`] handle.
#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<Storage>,
    config: StoreConfig,
}

/// Row as read from SQLite, before the JSON columns are parsed.
struct DrawRow {
    id: i64,
    lottery_type: String,
    draw: String,
    guesses: String,
    score: f64,
    timestamp: i64,
}

impl DrawRow {
    fn into_stored(self) -> Result<StoredDraw> {
        let id = self.id;
        let invalid = |what: &str, e: &dyn std::fmt::Display| {
            DrawtickError::validation(format!("Record {} has invalid {}: {}", id, what, e))
        };

        let draw = serde_json::from_str(&self.draw).map_err(|e| invalid("draw", &e))?;
        let guesses = serde_json::from_str(&self.guesses).map_err(|e| invalid("guesses", &e))?;
        let score = PrizeTier::try_from(self.score).map_err(|e| invalid("score", &e))?;
        let timestamp = DateTime::from_timestamp_millis(self.timestamp)
            .ok_or_else(|| invalid("timestamp", &self.timestamp))?;

        Ok(StoredDraw {
            id,
            lottery_type: self.lottery_type,
            draw,
            guesses,
            score,
            timestamp,
        })
    }
}

impl RecordStore {
    /// Wraps an opened [`Storage`], clearing a maintenance flag left behind
    /// by a reset that never finished.
    pub async fn open(storage: Arc<Storage>, config: StoreConfig) -> Result<Self> {
        config.validate()?;

        let store = Self { storage, config };
        store.recover_maintenance().await?;
        Ok(store)
    }

    pub async fn open_path(db_path: &Path, config: StoreConfig) -> Result<Self> {
        let storage = Arc::new(Storage::new(db_path, &config).await?);
        Self::open(storage, config).await
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Runs `op` against the connection, retrying while SQLite reports the
    /// database busy. The connection lock is released between attempts.
    async fn with_retry<T, F>(&self, operation: &'static str, mut op: F) -> Result<T>
    where
        F: FnMut(&mut Connection) -> Result<T>,
    {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let result = {
                let mut conn = self.storage.get_connection().await;
                op(&mut *conn)
            };

            match result {
                Err(e) if e.is_transient() && attempt < self.config.retry_budget => {
                    tracing::debug!(
                        "Store operation '{}' busy (attempt {}): {}",
                        operation,
                        attempt,
                        e
                    );
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                }
                Err(e) if e.is_transient() => {
                    tracing::warn!("Store operation '{}' abandoned: {}", operation, e);
                    return Err(DrawtickError::Transient {
                        operation,
                        attempts: attempt,
                    });
                }
                other => return other,
            }
        }
    }

    /// Persist a draw. Id assignment, both index entries and the counter
    /// increments happen in a single transaction, so counters never drift
    /// from the records they summarize.
    pub async fn commit(&self, new_draw: &NewDraw) -> Result<StoredDraw> {
        let draw_json = serde_json::to_string(&new_draw.draw)?;
        let guesses_json = serde_json::to_string(&new_draw.guesses)?;
        let type_key = counters::type_key(&new_draw.lottery_type);
        let score_key = counters::score_key(new_draw.score);

        let (id, timestamp_ms) = self
            .with_retry("commit", |conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

                let id = counters::increment(&tx, ID_KEY)?;

                // timestamps never run backwards relative to ids
                let previous: Option<i64> = tx
                    .query_row(
                        "SELECT timestamp FROM draws ORDER BY id DESC LIMIT 1",
                        [],
                        |row| row.get(0),
                    )
                    .optional()?;
                let timestamp_ms = previous.map_or(Utc::now().timestamp_millis(), |prev| {
                    Utc::now().timestamp_millis().max(prev)
                });

                tx.execute(
                    "INSERT INTO draws (id, lottery_type, draw, guesses, score, timestamp)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        id,
                        new_draw.lottery_type,
                        draw_json,
                        guesses_json,
                        new_draw.score.value(),
                        timestamp_ms,
                    ],
                )?;

                counters::increment(&tx, &type_key)?;
                if new_draw.score.is_winning() {
                    counters::increment(&tx, &score_key)?;
                }

                tx.commit()?;
                Ok((id, timestamp_ms))
            })
            .await?;

        let timestamp = DateTime::from_timestamp_millis(timestamp_ms)
            .ok_or_else(|| DrawtickError::internal("Commit timestamp out of range"))?;

        tracing::debug!(
            "Committed {} draw {} with score {}",
            new_draw.lottery_type,
            id,
            new_draw.score
        );

        Ok(StoredDraw {
            id,
            lottery_type: new_draw.lottery_type.clone(),
            draw: new_draw.draw.clone(),
            guesses: new_draw.guesses.clone(),
            score: new_draw.score,
            timestamp,
        })
    }

    /// Newest-first page of one lottery type's records.
    pub async fn list_by_type(
        &self,
        lottery_type: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoredDraw>> {
        // an offset SQLite cannot represent is past every record
        let Ok(offset) = i64::try_from(offset) else {
            return Ok(Vec::new());
        };
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = self
            .with_retry("list_by_type", |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, lottery_type, draw, guesses, score, timestamp
                     FROM draws WHERE lottery_type = ?1
                     ORDER BY id DESC LIMIT ?2 OFFSET ?3",
                )?;

                let row_iter = stmt.query_map(
                    params![lottery_type, limit, offset],
                    |row| {
                        Ok(DrawRow {
                            id: row.get(0)?,
                            lottery_type: row.get(1)?,
                            draw: row.get(2)?,
                            guesses: row.get(3)?,
                            score: row.get(4)?,
                            timestamp: row.get(5)?,
                        })
                    },
                )?;

                let mut rows = Vec::new();
                for row in row_iter {
                    rows.push(row?);
                }
                Ok(rows)
            })
            .await?;

        rows.into_iter().map(DrawRow::into_stored).collect()
    }

    pub async fn count_by_type(&self, lottery_type: &str) -> Result<u64> {
        let key = counters::type_key(lottery_type);
        self.read_counter("count_by_type", &key)
            .await
            .map(|n| n.max(0) as u64)
    }

    /// Number of committed draws that scored `tier`. Only winning tiers are
    /// counted, so [`PrizeTier::NoPrize`] always reads zero.
    pub async fn count_by_score(&self, tier: PrizeTier) -> Result<u64> {
        let key = counters::score_key(tier);
        self.read_counter("count_by_score", &key)
            .await
            .map(|n| n.max(0) as u64)
    }

    /// Claim `tick_unit` for this caller. Exactly one caller wins a given
    /// tick; `false` means someone already drew for it.
    pub async fn try_claim_tick(&self, tick_unit: i64) -> Result<bool> {
        let claimed = self
            .with_retry("claim_tick", |conn| {
                counters::raise_to(conn, TICK_KEY, tick_unit)
            })
            .await?;

        if !claimed {
            tracing::debug!("Tick {} already claimed", tick_unit);
        }
        Ok(claimed)
    }

    pub async fn last_claimed_tick(&self) -> Result<i64> {
        self.read_counter("last_claimed_tick", TICK_KEY).await
    }

    /// Shared cool-down deadline, visible to every worker on this database.
    pub async fn cooldown_until(&self) -> Result<Option<DateTime<Utc>>> {
        let until_ms = self.read_counter("cooldown_until", COOLDOWN_KEY).await?;
        if until_ms <= 0 {
            return Ok(None);
        }
        Ok(DateTime::from_timestamp_millis(until_ms))
    }

    /// Push the cool-down deadline out to `until`; an earlier deadline
    /// than the stored one is ignored.
    pub async fn extend_cooldown(&self, until: DateTime<Utc>) -> Result<bool> {
        let until_ms = until.timestamp_millis();
        self.with_retry("extend_cooldown", |conn| {
            counters::raise_to(conn, COOLDOWN_KEY, until_ms)
        })
        .await
    }

    pub async fn is_under_maintenance(&self) -> Result<bool> {
        Ok(self.read_counter("maintenance", MAINTENANCE_KEY).await? != 0)
    }

    /// Remove every record and return all counters, the tick lock included,
    /// to baseline. Returns the number of records deleted.
    ///
    /// Not exclusive: commits racing with a reset may or may not survive it.
    /// If this fails part way the maintenance flag stays raised until the
    /// next [`RecordStore::open`].
    pub async fn reset(&self) -> Result<usize> {
        self.with_retry("enter_maintenance", |conn| {
            counters::set(conn, MAINTENANCE_KEY, 1)
        })
        .await?;

        tracing::warn!(
            "Store under maintenance, draining in-flight writes for {:?}",
            self.config.reset_grace_period
        );
        tokio::time::sleep(self.config.reset_grace_period).await;

        let batch_size = self.config.reset_batch_size as i64;

        let mut removed = 0;
        loop {
            let deleted = self
                .with_retry("delete_draws", |conn| {
                    Ok(conn.execute(
                        "DELETE FROM draws WHERE id IN
                         (SELECT id FROM draws ORDER BY id LIMIT ?1)",
                        params![batch_size],
                    )?)
                })
                .await?;
            if deleted == 0 {
                break;
            }
            removed += deleted;
            tracing::debug!("Reset removed {} draws so far", removed);
        }

        loop {
            let deleted = self
                .with_retry("delete_counters", |conn| {
                    Ok(conn.execute(
                        "DELETE FROM counters WHERE key IN
                         (SELECT key FROM counters
                          WHERE key NOT IN (?1, ?2, ?3, ?4) LIMIT ?5)",
                        params![ID_KEY, TICK_KEY, MAINTENANCE_KEY, COOLDOWN_KEY, batch_size],
                    )?)
                })
                .await?;
            if deleted == 0 {
                break;
            }
        }

        // Draws committed during the sweep would otherwise sit above the
        // fresh id baseline.
        let stragglers = self
            .with_retry("reset_baseline", |conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
                let stragglers = tx.execute("DELETE FROM draws", [])?;
                tx.execute(
                    "DELETE FROM counters WHERE key NOT IN (?1, ?2, ?3, ?4)",
                    params![ID_KEY, TICK_KEY, MAINTENANCE_KEY, COOLDOWN_KEY],
                )?;
                for key in [ID_KEY, TICK_KEY, COOLDOWN_KEY] {
                    counters::set(&tx, key, 0)?;
                }
                tx.commit()?;
                Ok(stragglers)
            })
            .await?;
        removed += stragglers;

        self.with_retry("leave_maintenance", |conn| {
            counters::set(conn, MAINTENANCE_KEY, 0)
        })
        .await?;

        tracing::info!("Store reset complete, {} draws removed", removed);
        Ok(removed)
    }

    async fn recover_maintenance(&self) -> Result<()> {
        let cleared = self
            .with_retry("recover_maintenance", |conn| {
                if counters::read(conn, MAINTENANCE_KEY)? == 0 {
                    return Ok(false);
                }
                counters::set(conn, MAINTENANCE_KEY, 0)?;
                Ok(true)
            })
            .await?;

        if cleared {
            tracing::warn!("Cleared stale maintenance flag from an interrupted reset");
        }
        Ok(())
    }

    async fn read_counter(&self, operation: &'static str, key: &str) -> Result<i64> {
        self.with_retry(operation, |conn| counters::read(conn, key))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_config() -> StoreConfig {
        StoreConfig {
            reset_grace_period: Duration::ZERO,
            reset_batch_size: 3,
            ..StoreConfig::default()
        }
    }

    async fn test_store(dir: &Path) -> RecordStore {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        RecordStore::open_path(&dir.join("draws.db"), test_config())
            .await
            .unwrap()
    }

    fn new_draw(lottery_type: &str, seed: u64, score: PrizeTier) -> NewDraw {
        NewDraw {
            lottery_type: lottery_type.to_string(),
            draw: json!({ "type": lottery_type, "numbers": [1, 2, 3, 4, 5, 6], "additional": seed }),
            guesses: vec![json!({ "type": lottery_type, "numbers": [7, 8, 9, 10, 11, 12], "additional": 13 })],
            score,
        }
    }

    #[tokio::test]
    async fn test_commit_assigns_sequential_ids() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        for expected in 1..=3 {
            let stored = store
                .commit(&new_draw("toto", expected as u64, PrizeTier::NoPrize))
                .await
                .unwrap();
            assert_eq!(stored.id, expected);
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_payload() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        let draw = new_draw("toto", 42, PrizeTier::Group4);
        let committed = store.commit(&draw).await.unwrap();

        let listed = store.list_by_type("toto", 10, 0).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].draw, draw.draw);
        assert_eq!(listed[0].guesses, draw.guesses);
        assert_eq!(listed[0].score, draw.score);
        assert_eq!(listed[0].id, committed.id);
        assert_eq!(listed[0].timestamp, committed.timestamp);
    }

    #[tokio::test]
    async fn test_list_by_type_newest_first() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        let mut toto_ids = Vec::new();
        for i in 0..5 {
            toto_ids.push(
                store
                    .commit(&new_draw("toto", i, PrizeTier::NoPrize))
                    .await
                    .unwrap()
                    .id,
            );
            store
                .commit(&new_draw("other", i, PrizeTier::NoPrize))
                .await
                .unwrap();
        }
        toto_ids.reverse();

        let first = store.list_by_type("toto", 2, 0).await.unwrap();
        let ids: Vec<i64> = first.iter().map(|d| d.id).collect();
        assert_eq!(ids, toto_ids[..2]);
        assert!(first.iter().all(|d| d.lottery_type == "toto"));

        let rest = store.list_by_type("toto", 10, 2).await.unwrap();
        let ids: Vec<i64> = rest.iter().map(|d| d.id).collect();
        assert_eq!(ids, toto_ids[2..]);

        assert!(store.list_by_type("toto", 10, 5).await.unwrap().is_empty());
        assert!(store.list_by_type("missing", 10, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_type_far_past_the_end_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        for i in 0..3 {
            store
                .commit(&new_draw("toto", i, PrizeTier::NoPrize))
                .await
                .unwrap();
        }

        assert!(store.list_by_type("toto", 10, usize::MAX).await.unwrap().is_empty());
        assert!(store
            .list_by_type("toto", 10, i64::MAX as usize + 1)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(store.list_by_type("toto", usize::MAX, 0).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_counters_track_commits() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        let scores = [
            PrizeTier::Group1,
            PrizeTier::Group7,
            PrizeTier::Group7,
            PrizeTier::NoPrize,
        ];
        for (i, score) in scores.into_iter().enumerate() {
            store.commit(&new_draw("toto", i as u64, score)).await.unwrap();
        }
        store
            .commit(&new_draw("other", 0, PrizeTier::Group7))
            .await
            .unwrap();

        assert_eq!(store.count_by_type("toto").await.unwrap(), 4);
        assert_eq!(store.count_by_type("other").await.unwrap(), 1);
        assert_eq!(store.count_by_type("missing").await.unwrap(), 0);
        assert_eq!(store.count_by_score(PrizeTier::Group1).await.unwrap(), 1);
        assert_eq!(store.count_by_score(PrizeTier::Group7).await.unwrap(), 3);
        assert_eq!(store.count_by_score(PrizeTier::Group2).await.unwrap(), 0);
        assert_eq!(store.count_by_score(PrizeTier::NoPrize).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_timestamps_follow_ids() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        for i in 0..5 {
            store
                .commit(&new_draw("toto", i, PrizeTier::NoPrize))
                .await
                .unwrap();
        }

        let listed = store.list_by_type("toto", 10, 0).await.unwrap();
        for pair in listed.windows(2) {
            assert!(pair[0].id > pair[1].id);
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_claim_tick_once() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        assert!(store.try_claim_tick(1_000).await.unwrap());
        assert!(!store.try_claim_tick(1_000).await.unwrap());
        assert!(!store.try_claim_tick(999).await.unwrap());
        assert_eq!(store.last_claimed_tick().await.unwrap(), 1_000);
        assert!(store.try_claim_tick(1_001).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_claims_have_one_winner() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;
        // a second handle on the same file behaves like another process
        let other = RecordStore::open_path(&temp_dir.path().join("draws.db"), test_config())
            .await
            .unwrap();

        let mut tasks = Vec::new();
        for i in 0..8 {
            let store = if i % 2 == 0 { store.clone() } else { other.clone() };
            tasks.push(tokio::spawn(
                async move { store.try_claim_tick(5_000).await },
            ));
        }

        let mut winners = 0;
        for task in futures::future::join_all(tasks).await {
            if task.unwrap().unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_commits_get_distinct_sequential_ids() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;
        let other = RecordStore::open_path(&temp_dir.path().join("draws.db"), test_config())
            .await
            .unwrap();

        const WORKERS: usize = 4;
        const PER_WORKER: usize = 25;

        let mut tasks = Vec::new();
        for worker in 0..WORKERS {
            let store = if worker % 2 == 0 { store.clone() } else { other.clone() };
            tasks.push(tokio::spawn(async move {
                let mut ids = Vec::new();
                for i in 0..PER_WORKER {
                    let stored = store
                        .commit(&new_draw("toto", i as u64, PrizeTier::NoPrize))
                        .await
                        .unwrap();
                    ids.push(stored.id);
                }
                ids
            }));
        }

        let mut ids = Vec::new();
        for task in futures::future::join_all(tasks).await {
            ids.extend(task.unwrap());
        }
        ids.sort_unstable();

        let total = (WORKERS * PER_WORKER) as i64;
        assert_eq!(ids, (1..=total).collect::<Vec<_>>());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
        assert_eq!(store.count_by_type("toto").await.unwrap(), total as u64);
    }

    #[tokio::test]
    async fn test_reset_returns_to_baseline() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        for i in 0..7 {
            store
                .commit(&new_draw("toto", i, PrizeTier::Group5))
                .await
                .unwrap();
        }
        store.try_claim_tick(42).await.unwrap();
        store
            .extend_cooldown(Utc::now() + chrono::Duration::seconds(30))
            .await
            .unwrap();

        let removed = store.reset().await.unwrap();
        assert_eq!(removed, 7);

        assert_eq!(store.count_by_type("toto").await.unwrap(), 0);
        assert_eq!(store.count_by_score(PrizeTier::Group5).await.unwrap(), 0);
        assert!(store.list_by_type("toto", 10, 0).await.unwrap().is_empty());
        assert_eq!(store.last_claimed_tick().await.unwrap(), 0);
        assert_eq!(store.cooldown_until().await.unwrap(), None);
        assert!(!store.is_under_maintenance().await.unwrap());

        let next = store
            .commit(&new_draw("toto", 0, PrizeTier::NoPrize))
            .await
            .unwrap();
        assert_eq!(next.id, 1);
        assert!(store.try_claim_tick(42).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reset_alongside_commits_stays_consistent() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;
        let other = RecordStore::open_path(&temp_dir.path().join("draws.db"), test_config())
            .await
            .unwrap();

        for i in 0..10 {
            store
                .commit(&new_draw("toto", i, PrizeTier::Group7))
                .await
                .unwrap();
        }

        let writer = tokio::spawn(async move {
            for i in 0..40 {
                other
                    .commit(&new_draw("toto", i, PrizeTier::Group7))
                    .await
                    .unwrap();
                tokio::task::yield_now().await;
            }
        });

        store.reset().await.unwrap();
        writer.await.unwrap();

        let present = store.list_by_type("toto", usize::MAX, 0).await.unwrap();
        let count = store.count_by_type("toto").await.unwrap();
        assert_eq!(count, present.len() as u64);
        assert_eq!(store.count_by_score(PrizeTier::Group7).await.unwrap(), count);

        let id_counter = store.read_counter("id", ID_KEY).await.unwrap();
        assert!(present.iter().all(|d| d.id <= id_counter));
        assert!(!store.is_under_maintenance().await.unwrap());
    }

    #[tokio::test]
    async fn test_stale_maintenance_cleared_on_open() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("draws.db");
        let storage = Arc::new(Storage::new(&db_path, &test_config()).await.unwrap());

        {
            let conn = storage.get_connection().await;
            counters::set(&conn, MAINTENANCE_KEY, 1).unwrap();
        }

        let store = RecordStore::open(storage, test_config()).await.unwrap();
        assert!(!store.is_under_maintenance().await.unwrap());
    }

    #[tokio::test]
    async fn test_cooldown_only_moves_forward() {
        let temp_dir = tempdir().unwrap();
        let store = test_store(temp_dir.path()).await;

        assert_eq!(store.cooldown_until().await.unwrap(), None);

        let later = DateTime::from_timestamp_millis(2_000_000).unwrap();
        let earlier = DateTime::from_timestamp_millis(1_000_000).unwrap();

        assert!(store.extend_cooldown(later).await.unwrap());
        assert!(!store.extend_cooldown(earlier).await.unwrap());
        assert_eq!(store.cooldown_until().await.unwrap(), Some(later));
    }

    #[tokio::test]
    async fn test_corrupt_record_is_validation_error() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("draws.db");
        let storage = Arc::new(Storage::new(&db_path, &test_config()).await.unwrap());

        {
            let conn = storage.get_connection().await;
            conn.execute(
                "INSERT INTO draws (id, lottery_type, draw, guesses, score, timestamp)
                 VALUES (1, 'toto', 'not json', '[]', 0.0, 0)",
                [],
            )
            .unwrap();
        }

        let store = RecordStore::open(storage, test_config()).await.unwrap();
        let err = store.list_by_type("toto", 10, 0).await.unwrap_err();
        assert!(matches!(err, DrawtickError::Validation(_)));
    }
}
