//! Lottery simulation for drawtick
//!
//! Draws are generated by a registered rule-set, scored against an
//! independent quick-pick guess, and committed through the core record store
//! once per tick by the [`TickCoordinator`].

pub mod config;
pub mod coordinator;
pub mod error;
pub mod history;
pub mod lottery;
pub mod publisher;
pub mod rng;

pub use config::CoordinatorConfig;
pub use coordinator::{CoordinatorState, TickCoordinator, TickOutcome};
pub use error::{LotteryError, Result};
pub use history::{DrawHistory, HistoryPage, WinsSummary, PAGE_SIZE};
pub use lottery::{play, DrawRecord, Lottery, LotteryRegistry, Outcome, Toto, TotoTicket};
pub use publisher::{BroadcastPublisher, DrawPublisher};
