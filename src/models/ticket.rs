// src/models/ticket.rs

//! Tickets to purchase and their selection mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::WINNING_NUMBER_COUNT;

/// How the numbers of a slot were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketMode {
    /// The machine picks every number
    Auto,
    /// Some numbers picked, the rest filled automatically
    SemiAuto,
    /// All six numbers picked
    Manual,
}

impl TicketMode {
    pub fn label(self) -> &'static str {
        match self {
            TicketMode::Auto => "자동",
            TicketMode::SemiAuto => "반자동",
            TicketMode::Manual => "수동",
        }
    }

    /// Match a mode label as printed on a purchase detail page.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "자동" => Some(TicketMode::Auto),
            "반자동" => Some(TicketMode::SemiAuto),
            "수동" => Some(TicketMode::Manual),
            _ => None,
        }
    }

    /// Mode implied by how many numbers were chosen by hand.
    pub fn for_selection(count: usize) -> Self {
        match count {
            0 => TicketMode::Auto,
            n if n < WINNING_NUMBER_COUNT => TicketMode::SemiAuto,
            _ => TicketMode::Manual,
        }
    }
}

impl fmt::Display for TicketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A ticket to be purchased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Hand-picked numbers; empty for a fully automatic ticket
    pub numbers: Vec<u32>,
    pub mode: TicketMode,
}

impl Ticket {
    /// A fully automatic ticket.
    pub fn auto() -> Self {
        Self {
            numbers: Vec::new(),
            mode: TicketMode::Auto,
        }
    }

    /// `count` fully automatic tickets.
    pub fn auto_tickets(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::auto()).collect()
    }

    /// A ticket with hand-picked numbers; the mode follows from how many.
    pub fn with_numbers(numbers: &[u32]) -> Self {
        Self {
            numbers: numbers.to_vec(),
            mode: TicketMode::for_selection(numbers.len()),
        }
    }
}
