//! Singapore Toto: six winning numbers from 1-49 plus one additional number.
//!
//! Draws are weighted by how often each ball has come up in real Singapore
//! Pools results (Oct 9, 2014 onwards), with a separate table for the
//! additional number.

use super::{Lottery, Outcome};
use crate::rng::weighted_select;
use crate::{LotteryError, Result};
use drawtick_core::PrizeTier;
use rand::RngCore;
use serde::{Deserialize, Serialize};

pub const TOTO: &str = "toto";

pub const PICK: usize = 6;
pub const MAX_NUMBER: u8 = 49;

#[rustfmt::skip]
const MAIN_FREQUENCY: [(u8, u32); 49] = [
    (1, 152), (2, 148), (3, 137), (4, 141), (5, 148), (6, 137), (7, 134), (8, 149), (9, 144), (10, 148),
    (11, 134), (12, 153), (13, 135), (14, 132), (15, 168), (16, 131), (17, 138), (18, 132), (19, 139), (20, 140),
    (21, 136), (22, 153), (23, 136), (24, 146), (25, 128), (26, 133), (27, 137), (28, 155), (29, 128), (30, 146),
    (31, 144), (32, 149), (33, 119), (34, 142), (35, 147), (36, 145), (37, 145), (38, 139), (39, 133), (40, 163),
    (41, 129), (42, 123), (43, 138), (44, 148), (45, 117), (46, 153), (47, 133), (48, 143), (49, 152),
];

#[rustfmt::skip]
const ADDITIONAL_FREQUENCY: [(u8, u32); 49] = [
    (1, 27), (2, 26), (3, 21), (4, 16), (5, 19), (6, 31), (7, 23), (8, 25), (9, 18), (10, 24),
    (11, 16), (12, 22), (13, 24), (14, 18), (15, 20), (16, 27), (17, 19), (18, 26), (19, 22), (20, 35),
    (21, 27), (22, 22), (23, 24), (24, 24), (25, 24), (26, 20), (27, 24), (28, 20), (29, 28), (30, 23),
    (31, 30), (32, 13), (33, 32), (34, 30), (35, 25), (36, 26), (37, 24), (38, 18), (39, 23), (40, 16),
    (41, 24), (42, 27), (43, 19), (44, 25), (45, 20), (46, 25), (47, 20), (48, 30), (49, 28),
];

/// Six main numbers in ascending order and the additional number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotoTicket {
    pub numbers: [u8; PICK],
    pub additional: u8,
}

impl TotoTicket {
    pub fn new(numbers: [u8; PICK], additional: u8) -> Result<Self> {
        let ticket = Self {
            numbers,
            additional,
        };
        ticket.check()?;
        Ok(ticket)
    }

    fn check(&self) -> Result<()> {
        let in_range = |n: u8| (1..=MAX_NUMBER).contains(&n);

        if let Some(n) = self.numbers.iter().find(|n| !in_range(**n)) {
            return Err(LotteryError::validation(format!(
                "Toto number {} outside 1-{}",
                n, MAX_NUMBER
            )));
        }

        for (i, n) in self.numbers.iter().enumerate() {
            if self.numbers[..i].contains(n) {
                return Err(LotteryError::validation(format!(
                    "Toto number {} appears twice",
                    n
                )));
            }
        }

        if !in_range(self.additional) {
            return Err(LotteryError::validation(format!(
                "Additional number {} outside 1-{}",
                self.additional, MAX_NUMBER
            )));
        }

        if self.numbers.contains(&self.additional) {
            return Err(LotteryError::validation(format!(
                "Additional number {} repeats a main number",
                self.additional
            )));
        }

        Ok(())
    }

    /// How many of this guess's main numbers are among `draw`'s.
    pub fn main_matches(&self, draw: &TotoTicket) -> usize {
        self.numbers
            .iter()
            .filter(|n| draw.numbers.contains(n))
            .count()
    }

    /// Whether any of this guess's main numbers is `draw`'s additional
    /// number. The guess's own additional number plays no part.
    pub fn additional_match(&self, draw: &TotoTicket) -> bool {
        self.numbers.contains(&draw.additional)
    }
}

/// Prize tier for `guess` against `draw`; highest tier first, first match wins.
pub fn score(draw: &TotoTicket, guess: &TotoTicket) -> PrizeTier {
    match (guess.main_matches(draw), guess.additional_match(draw)) {
        (6, _) => PrizeTier::Group1,
        (5, true) => PrizeTier::Group2,
        (5, false) => PrizeTier::Group3,
        (4, true) => PrizeTier::Group4,
        (4, false) => PrizeTier::Group5,
        (3, true) => PrizeTier::Group6,
        (3, false) => PrizeTier::Group7,
        _ => PrizeTier::NoPrize,
    }
}

/// Weighted draw without replacement from the historical frequency tables.
pub fn draw_with<R: RngCore + ?Sized>(rng: &mut R) -> Result<TotoTicket> {
    let mut drawn: Vec<u8> = Vec::with_capacity(PICK);
    while drawn.len() < PICK {
        let number = weighted_select(rng, &MAIN_FREQUENCY, &drawn[..])?;
        drawn.push(number);
    }

    let additional = weighted_select(rng, &ADDITIONAL_FREQUENCY, &drawn[..])?;

    drawn.sort_unstable();
    let mut numbers = [0u8; PICK];
    numbers.copy_from_slice(&drawn);

    TotoTicket::new(numbers, additional)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Toto;

impl Toto {
    pub fn new() -> Self {
        Self
    }

    fn ticket<'a>(&self, outcome: &'a Outcome) -> &'a TotoTicket {
        match outcome {
            Outcome::Toto(ticket) => ticket,
        }
    }
}

impl Lottery for Toto {
    fn lottery_type(&self) -> &'static str {
        TOTO
    }

    fn draw(&self) -> Result<Outcome> {
        draw_with(&mut rand::rngs::OsRng).map(Outcome::Toto)
    }

    fn score(&self, draw: &Outcome, guess: &Outcome) -> Result<PrizeTier> {
        Ok(score(self.ticket(draw), self.ticket(guess)))
    }

    fn validate(&self, value: &serde_json::Value) -> Result<Outcome> {
        let outcome: Outcome = serde_json::from_value(value.clone())
            .map_err(|e| LotteryError::validation(format!("Malformed toto outcome: {}", e)))?;
        self.ticket(&outcome).check()?;
        Ok(outcome)
    }
}
