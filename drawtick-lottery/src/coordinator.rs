use crate::config::CoordinatorConfig;
use crate::lottery::{play, DrawRecord, Lottery, LotteryRegistry};
use crate::publisher::DrawPublisher;
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use drawtick_core::RecordStore;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Whether this worker is drawing or sitting out a jackpot pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorState {
    Running,
    CoolingDown { until: DateTime<Utc> },
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Committed(Vec<DrawRecord>),
    /// Another worker already drew for this tick.
    ClaimConflict,
    CoolingDown { until: DateTime<Utc> },
    /// A reset is clearing the store.
    Maintenance,
    /// Generation, scoring or persistence failed. The tick's slot is spent.
    Failed(String),
}

/// Drives the draw loop: at most one committed draw per lottery type per
/// tick unit, however many coordinators share the store.
pub struct TickCoordinator {
    worker_id: Uuid,
    store: RecordStore,
    registry: Arc<LotteryRegistry>,
    publisher: Arc<dyn DrawPublisher>,
    config: CoordinatorConfig,
    state: Mutex<CoordinatorState>,
}

impl TickCoordinator {
    pub fn new(
        store: RecordStore,
        registry: Arc<LotteryRegistry>,
        publisher: Arc<dyn DrawPublisher>,
        config: CoordinatorConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            worker_id: Uuid::new_v4(),
            store,
            registry,
            publisher,
            config,
            state: Mutex::new(CoordinatorState::Running),
        })
    }

    pub fn worker_id(&self) -> Uuid {
        self.worker_id
    }

    pub fn state(&self) -> CoordinatorState {
        *self.state.lock()
    }

    pub fn tick_unit(&self, now: DateTime<Utc>) -> i64 {
        let width = self.config.tick_interval.as_millis() as i64;
        now.timestamp_millis().div_euclid(width)
    }

    /// Run the tick loop until `shutdown` flips to true or its sender is
    /// dropped. Each iteration sleeps for whatever is left of the interval.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            "Worker {} drawing {:?} every {:?}",
            self.worker_id,
            self.registry.types(),
            self.config.tick_interval
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            let started = tokio::time::Instant::now();
            self.tick_at(Utc::now()).await;
            let pause = self.config.tick_interval.saturating_sub(started.elapsed());

            tokio::select! {
                _ = tokio::time::sleep(pause) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Worker {} stopped", self.worker_id);
    }

    /// One iteration of the loop as of `now`. Never fails: every problem is
    /// logged and reported through the returned outcome.
    pub async fn tick_at(&self, now: DateTime<Utc>) -> TickOutcome {
        let tick_unit = self.tick_unit(now);

        // claim first so the race between workers stays fair during a pause
        match self.store.try_claim_tick(tick_unit).await {
            Ok(true) => {}
            Ok(false) => return TickOutcome::ClaimConflict,
            Err(e) => {
                tracing::error!("Worker {} could not claim tick {}: {}", self.worker_id, tick_unit, e);
                return TickOutcome::Failed(e.to_string());
            }
        }

        match self.store.is_under_maintenance().await {
            Ok(false) => {}
            Ok(true) => {
                tracing::debug!("Tick {} skipped, store under maintenance", tick_unit);
                return TickOutcome::Maintenance;
            }
            Err(e) => {
                tracing::error!("Could not read maintenance flag for tick {}: {}", tick_unit, e);
                return TickOutcome::Failed(e.to_string());
            }
        }

        match self.store.cooldown_until().await {
            Ok(Some(until)) => self.adopt_cooldown(until, now),
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not read shared cool-down: {}", e),
        }

        if let Some(until) = self.cooling_down(now) {
            tracing::debug!("Tick {} skipped, cooling down until {}", tick_unit, until);
            return TickOutcome::CoolingDown { until };
        }

        self.draw_all(tick_unit, now).await
    }

    async fn draw_all(&self, tick_unit: i64, now: DateTime<Utc>) -> TickOutcome {
        let rounds = self
            .registry
            .iter()
            .map(|lottery| self.draw_and_commit(lottery.as_ref()));
        let results = futures::future::join_all(rounds).await;

        let mut records = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(record) => records.push(record),
                Err(e) => failures.push(e.to_string()),
            }
        }

        if records.iter().any(|r| r.score.is_jackpot()) {
            self.enter_cooldown(now).await;
        }

        if !records.is_empty() {
            if let Err(e) = self.publisher.publish(&records).await {
                tracing::warn!("Failed to publish tick {}: {}", tick_unit, e);
            }
        }

        if failures.is_empty() {
            tracing::debug!("Tick {} committed {} draw(s)", tick_unit, records.len());
            TickOutcome::Committed(records)
        } else {
            let reason = failures.join("; ");
            tracing::error!("Tick {} failed: {}", tick_unit, reason);
            TickOutcome::Failed(reason)
        }
    }

    async fn draw_and_commit(&self, lottery: &dyn Lottery) -> Result<DrawRecord> {
        let new_draw = play(lottery)?;
        let stored = self.store.commit(&new_draw).await?;
        DrawRecord::from_stored(lottery, stored)
    }

    async fn enter_cooldown(&self, now: DateTime<Utc>) {
        let until = now + Duration::milliseconds(self.config.jackpot_pause.as_millis() as i64);
        *self.state.lock() = CoordinatorState::CoolingDown { until };

        tracing::warn!("JACKPOT! Pausing draws until {}", until);

        if let Err(e) = self.store.extend_cooldown(until).await {
            tracing::warn!("Could not share cool-down with other workers: {}", e);
        }
    }

    /// Take on a deadline another worker set, if it is still ahead of us.
    fn adopt_cooldown(&self, until: DateTime<Utc>, now: DateTime<Utc>) {
        if until <= now {
            return;
        }

        let mut state = self.state.lock();
        let already = matches!(*state, CoordinatorState::CoolingDown { until: ours } if ours >= until);
        if !already {
            *state = CoordinatorState::CoolingDown { until };
        }
    }

    /// The deadline while still cooling down; flips back to running once it
    /// has passed.
    fn cooling_down(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut state = self.state.lock();
        match *state {
            CoordinatorState::CoolingDown { until } if now < until => Some(until),
            CoordinatorState::CoolingDown { .. } => {
                *state = CoordinatorState::Running;
                tracing::info!("Resuming lottery draws after jackpot cool-down");
                None
            }
            CoordinatorState::Running => None,
        }
    }
}
