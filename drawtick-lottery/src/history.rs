use crate::lottery::{DrawRecord, LotteryRegistry};
use crate::Result;
use drawtick_core::{PrizeTier, RecordStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PAGE_SIZE: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub data: Vec<DrawRecord>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsSummary {
    pub wins: u64,
    pub total_prizes: u64,
}

/// Read-only view over committed draws for reporting. Every record handed
/// out has been checked against its lottery's schema.
#[derive(Clone)]
pub struct DrawHistory {
    store: RecordStore,
    registry: Arc<LotteryRegistry>,
}

impl DrawHistory {
    pub fn new(store: RecordStore, registry: Arc<LotteryRegistry>) -> Self {
        Self { store, registry }
    }

    pub async fn list(
        &self,
        lottery_type: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<DrawRecord>> {
        let lottery = self.registry.get(lottery_type)?;
        let stored = self
            .store
            .list_by_type(lottery_type, limit, offset)
            .await?;

        stored
            .into_iter()
            .map(|s| DrawRecord::from_stored(lottery.as_ref(), s))
            .collect()
    }

    /// Zero-based page of [`PAGE_SIZE`] records, newest first.
    pub async fn page(&self, lottery_type: &str, page: usize) -> Result<HistoryPage> {
        self.registry.get(lottery_type)?;

        let total = self.store.count_by_type(lottery_type).await?;
        if total == 0 {
            return Ok(HistoryPage {
                data: Vec::new(),
                total,
            });
        }

        let data = self
            .list(lottery_type, PAGE_SIZE, PAGE_SIZE.saturating_mul(page))
            .await?;
        Ok(HistoryPage { data, total })
    }

    pub async fn wins_in_tier(&self, tier: PrizeTier) -> Result<u64> {
        Ok(self.store.count_by_score(tier).await?)
    }

    /// Winning draws across every tier and what they would have paid.
    pub async fn wins(&self) -> Result<WinsSummary> {
        let mut summary = WinsSummary {
            wins: 0,
            total_prizes: 0,
        };

        for tier in PrizeTier::WINNING {
            let count = self.store.count_by_score(tier).await?;
            summary.wins += count;
            summary.total_prizes += count * tier.prize_amount();
        }

        Ok(summary)
    }
}
