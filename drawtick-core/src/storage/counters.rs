//! Counter rows and the compare-and-set primitives that mutate them.
//!
//! All counter writes go through [`compare_and_set`] so that two connections
//! racing on the same key resolve optimistically: the loser re-reads and
//! tries again instead of blocking.

use crate::error::{DrawtickError, Result};
use crate::types::PrizeTier;
use rusqlite::{params, Connection, OptionalExtension};

pub const ID_KEY: &str = "draw:id";
pub const TICK_KEY: &str = "tick:last";
pub const MAINTENANCE_KEY: &str = "maintenance";
pub const COOLDOWN_KEY: &str = "cooldown:until";

/// Rows that always exist and return to zero on reset.
pub const BASELINE_KEYS: [&str; 4] = [ID_KEY, TICK_KEY, MAINTENANCE_KEY, COOLDOWN_KEY];

const MAX_SPINS: u32 = 64;

pub fn type_key(lottery_type: &str) -> String {
    format!("type:{}", lottery_type)
}

pub fn score_key(tier: PrizeTier) -> String {
    format!("score:{}", tier.key())
}

/// Current value, zero for a key that was never written.
pub fn read(conn: &Connection, key: &str) -> Result<i64> {
    let value = conn
        .query_row(
            "SELECT value FROM counters WHERE key = ?1",
            params![key],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(value.unwrap_or(0))
}

pub fn compare_and_set(conn: &Connection, key: &str, expected: i64, new: i64) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE counters SET value = ?3 WHERE key = ?1 AND value = ?2",
        params![key, expected, new],
    )?;
    Ok(changed == 1)
}

fn ensure(conn: &Connection, key: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO counters (key, value) VALUES (?1, 0)",
        params![key],
    )?;
    Ok(())
}

fn contended(operation: &'static str) -> DrawtickError {
    DrawtickError::Transient {
        operation,
        attempts: MAX_SPINS,
    }
}

/// Adds one and returns the new value.
pub fn increment(conn: &Connection, key: &str) -> Result<i64> {
    ensure(conn, key)?;
    for _ in 0..MAX_SPINS {
        let current = read(conn, key)?;
        if compare_and_set(conn, key, current, current + 1)? {
            return Ok(current + 1);
        }
    }
    Err(contended("increment"))
}

/// Moves the value up to `target`. Returns false, leaving the row alone,
/// when the stored value is already at or past it.
pub fn raise_to(conn: &Connection, key: &str, target: i64) -> Result<bool> {
    ensure(conn, key)?;
    for _ in 0..MAX_SPINS {
        let current = read(conn, key)?;
        if current >= target {
            return Ok(false);
        }
        if compare_and_set(conn, key, current, target)? {
            return Ok(true);
        }
    }
    Err(contended("raise_to"))
}

pub fn set(conn: &Connection, key: &str, value: i64) -> Result<()> {
    ensure(conn, key)?;
    for _ in 0..MAX_SPINS {
        let current = read(conn, key)?;
        if current == value || compare_and_set(conn, key, current, value)? {
            return Ok(());
        }
    }
    Err(contended("set"))
}
