// src/models/mod.rs

//! Domain models for the lottery account, purchases and draws.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod balance;
mod notification;
mod purchase;
mod result;
mod summary;
mod ticket;
mod winning;

// Re-export all public types
pub use balance::Balance;
pub use notification::EmailMessage;
pub use purchase::{PurchaseDetail, PurchaseDetailPage, PurchaseSummary};
pub use result::TicketResult;
pub use summary::CheckSummary;
pub use ticket::{Ticket, TicketMode};
pub use winning::{
    MAX_NUMBER, MIN_NUMBER, PrizeInfo, PrizeTable, Rank, WINNING_NUMBER_COUNT, WinningNumbers,
    rank_label,
};
