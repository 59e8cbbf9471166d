pub mod toto;

pub use toto::{Toto, TotoTicket};

use crate::{LotteryError, Result};
use chrono::{DateTime, Utc};
use drawtick_core::{NewDraw, PrizeTier, StoredDraw};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of a draw or a guess, one variant per built-in rule-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outcome {
    Toto(TotoTicket),
}

/// A lottery rule-set: how to draw, how to guess, how to score, and what a
/// well-formed outcome looks like.
pub trait Lottery: Send + Sync {
    fn lottery_type(&self) -> &'static str;

    fn draw(&self) -> Result<Outcome>;

    /// Quick pick by default: an independent run of the draw.
    fn guess(&self) -> Result<Outcome> {
        self.draw()
    }

    fn score(&self, draw: &Outcome, guess: &Outcome) -> Result<PrizeTier>;

    /// Parse and check an outcome read back from storage.
    fn validate(&self, value: &serde_json::Value) -> Result<Outcome>;
}

/// A committed draw with its outcomes checked against the owning rule-set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub id: i64,
    pub lottery_type: String,
    pub draw: Outcome,
    pub guesses: Vec<Outcome>,
    pub score: PrizeTier,
    pub timestamp: DateTime<Utc>,
}

impl DrawRecord {
    pub fn from_stored(lottery: &dyn Lottery, stored: StoredDraw) -> Result<Self> {
        if stored.lottery_type != lottery.lottery_type() {
            return Err(LotteryError::validation(format!(
                "Record {} is a {} draw, not {}",
                stored.id,
                stored.lottery_type,
                lottery.lottery_type()
            )));
        }

        let draw = lottery.validate(&stored.draw)?;
        let guesses = stored
            .guesses
            .iter()
            .map(|guess| lottery.validate(guess))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: stored.id,
            lottery_type: stored.lottery_type,
            draw,
            guesses,
            score: stored.score,
            timestamp: stored.timestamp,
        })
    }
}

/// Run one round of `lottery`: draw, guess, then score, in that order.
pub fn play(lottery: &dyn Lottery) -> Result<NewDraw> {
    let draw = lottery.draw()?;
    let guess = lottery.guess()?;
    let score = lottery.score(&draw, &guess)?;

    Ok(NewDraw {
        lottery_type: lottery.lottery_type().to_string(),
        draw: serde_json::to_value(&draw)?,
        guesses: vec![serde_json::to_value(&guess)?],
        score,
    })
}

/// The lottery types a coordinator draws for, fixed at startup.
#[derive(Clone, Default)]
pub struct LotteryRegistry {
    lotteries: Vec<Arc<dyn Lottery>>,
}

impl LotteryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in rule-set.
    pub fn with_defaults() -> Self {
        Self {
            lotteries: vec![Arc::new(Toto::new())],
        }
    }

    pub fn register(&mut self, lottery: Arc<dyn Lottery>) -> Result<()> {
        if self.contains(lottery.lottery_type()) {
            return Err(LotteryError::config(format!(
                "Lottery type '{}' registered twice",
                lottery.lottery_type()
            )));
        }

        tracing::debug!("Registered lottery type '{}'", lottery.lottery_type());
        self.lotteries.push(lottery);
        Ok(())
    }

    pub fn get(&self, lottery_type: &str) -> Result<&Arc<dyn Lottery>> {
        self.lotteries
            .iter()
            .find(|l| l.lottery_type() == lottery_type)
            .ok_or_else(|| LotteryError::UnknownLottery(lottery_type.to_string()))
    }

    pub fn contains(&self, lottery_type: &str) -> bool {
        self.lotteries
            .iter()
            .any(|l| l.lottery_type() == lottery_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Lottery>> {
        self.lotteries.iter()
    }

    pub fn types(&self) -> Vec<&'static str> {
        self.lotteries.iter().map(|l| l.lottery_type()).collect()
    }

    pub fn len(&self) -> usize {
        self.lotteries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lotteries.is_empty()
    }

    pub fn to_record(&self, stored: StoredDraw) -> Result<DrawRecord> {
        let lottery = self.get(&stored.lottery_type)?;
        DrawRecord::from_stored(lottery.as_ref(), stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = LotteryRegistry::with_defaults();
        assert!(registry.contains("toto"));
        assert!(registry.register(Arc::new(Toto::new())).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_lottery() {
        let registry = LotteryRegistry::with_defaults();
        assert!(matches!(
            registry.get("lotto"),
            Err(LotteryError::UnknownLottery(t)) if t == "lotto"
        ));
    }

    #[test]
    fn test_play_produces_one_scored_guess() {
        let toto = Toto::new();
        let new_draw = play(&toto).unwrap();

        assert_eq!(new_draw.lottery_type, "toto");
        assert_eq!(new_draw.guesses.len(), 1);

        let draw = toto.validate(&new_draw.draw).unwrap();
        let guess = toto.validate(&new_draw.guesses[0]).unwrap();
        assert_eq!(toto.score(&draw, &guess).unwrap(), new_draw.score);
    }

    #[test]
    fn test_record_shape_matches_wire_format() {
        let registry = LotteryRegistry::with_defaults();
        let stored = StoredDraw {
            id: 9,
            lottery_type: "toto".to_string(),
            draw: json!({ "type": "toto", "numbers": [1, 2, 3, 4, 5, 6], "additional": 7 }),
            guesses: vec![json!({ "type": "toto", "numbers": [1, 2, 3, 4, 5, 6], "additional": 9 })],
            score: PrizeTier::Group1,
            timestamp: Utc::now(),
        };

        let record = registry.to_record(stored).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["lottery_type"], "toto");
        assert_eq!(value["score"], 1.0);
        assert_eq!(value["draw"]["type"], "toto");
        assert_eq!(value["draw"]["additional"], 7);
        assert_eq!(value["guesses"][0]["numbers"], json!([1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_record_with_malformed_outcome_is_rejected() {
        let registry = LotteryRegistry::with_defaults();
        let stored = StoredDraw {
            id: 1,
            lottery_type: "toto".to_string(),
            draw: json!({ "type": "toto", "numbers": [1, 2, 3], "additional": 7 }),
            guesses: vec![],
            score: PrizeTier::NoPrize,
            timestamp: Utc::now(),
        };

        let err = registry.to_record(stored).unwrap_err();
        assert!(err.is_validation());
    }
}
