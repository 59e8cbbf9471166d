//! drawtick core - storage and coordination primitives for the lottery simulator
//!
//! This library owns the SQLite-backed record store: append-only draw
//! records, denormalized counters, and the per-tick lock that lets several
//! workers share one database while committing at most one draw per tick.

pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use config::StoreConfig;
pub use error::{DrawtickError, Result};
pub use storage::{RecordStore, Storage};
pub use types::{NewDraw, PrizeTier, StoredDraw};
