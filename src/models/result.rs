// src/models/result.rs

//! Outcome of checking one purchased slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Rank;
use crate::utils::format::{format_amount, format_numbers};

/// Result for a single slot against a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResult {
    pub slot: String,
    pub mode: String,
    pub numbers: Vec<u32>,

    /// `None` when the slot did not win
    pub rank: Option<Rank>,

    /// Per-winner prize; 0 when not ranked or the tier is unpublished
    pub prize: i64,
}

impl TicketResult {
    /// Create a result holding its own copy of `numbers`.
    pub fn new(slot: &str, mode: &str, numbers: &[u32], rank: Option<Rank>, prize: i64) -> Self {
        Self {
            slot: slot.to_string(),
            mode: mode.to_string(),
            numbers: numbers.to_vec(),
            rank,
            prize,
        }
    }

    pub fn is_winner(&self) -> bool {
        self.rank.is_some()
    }
}

impl fmt::Display for TicketResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers = format_numbers(&self.numbers);
        match self.rank {
            Some(rank) => write!(
                f,
                "   슬롯 {} ({} / {}): {} 🎉 (당첨금: {}원)",
                self.slot,
                self.mode,
                numbers,
                rank,
                format_amount(self.prize)
            ),
            None => write!(f, "   슬롯 {} ({} / {}): 낙첨", self.slot, self.mode, numbers),
        }
    }
}
