//! Unbiased integer sampling and frequency-weighted selection.
//!
//! Both functions take the generator as a parameter so tests can drive them
//! from a seeded [`rand::rngs::StdRng`]; production callers use
//! [`rand::rngs::OsRng`].

use crate::{LotteryError, Result};
use rand::RngCore;

const SPACE: u64 = 1 << 32;

/// Uniform integer in `[min, max]` without modulo bias.
///
/// 32-bit samples at or above the largest multiple of the range size are
/// rejected, so every outcome covers the same number of raw values.
pub fn uniform_int<R: RngCore + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max, "empty range [{}, {}]", min, max);
    if min >= max {
        return min;
    }

    let range = u64::from(max - min) + 1;
    let limit = SPACE - (SPACE % range);

    loop {
        let value = u64::from(rng.next_u32());
        if value < limit {
            return min + (value % range) as u32;
        }
    }
}

/// [`uniform_int`] drawing from the operating system's entropy source.
pub fn random_int(min: u32, max: u32) -> u32 {
    uniform_int(&mut rand::rngs::OsRng, min, max)
}

/// Pick one item not in `exclude`, with probability proportional to its
/// weight. Items are walked in slice order, which keeps the mapping from
/// random value to item deterministic.
///
/// Excluding every item is a caller bug: it panics in debug builds and
/// returns [`LotteryError::GeneratorInvariant`] otherwise.
pub fn weighted_select<T, R>(rng: &mut R, weights: &[(T, u32)], exclude: &[T]) -> Result<T>
where
    T: Copy + PartialEq + std::fmt::Debug,
    R: RngCore + ?Sized,
{
    let eligible: Vec<(T, u32)> = weights
        .iter()
        .copied()
        .filter(|(item, weight)| *weight > 0 && !exclude.contains(item))
        .collect();

    debug_assert!(
        !eligible.is_empty(),
        "exclude set covers the whole frequency table"
    );
    let (last, _) = *eligible.last().ok_or_else(|| {
        LotteryError::GeneratorInvariant("exclude set covers the whole frequency table".into())
    })?;

    let total: u64 = eligible.iter().map(|(_, weight)| u64::from(*weight)).sum();
    let total = u32::try_from(total).map_err(|_| {
        LotteryError::GeneratorInvariant(format!("total weight {} exceeds u32", total))
    })?;

    let mut remaining = i64::from(uniform_int(rng, 1, total));
    for (item, weight) in &eligible {
        remaining -= i64::from(*weight);
        if remaining <= 0 {
            return Ok(*item);
        }
    }

    Ok(last)
}
