//! Page extractors and ticket checking.
//!
//! Each extractor is a pure function from a parsed page to a domain record:
//! - Login result (`parse_login`)
//! - Deposit balance (`parse_balance`)
//! - Round open for purchase (`parse_current_round`)
//! - Purchase history list and detail (`parse_purchase_list`, `parse_purchase_detail`)
//! - Winning numbers and prizes (`parse_winning_numbers`)
//!
//! `matching` maps purchased numbers against a draw.

mod balance;
mod login;
pub mod matching;
mod purchase;
mod round;
mod winning;

use scraper::Selector;

pub use balance::{FieldOffsets, PageVariant, parse_balance};
pub use login::parse_login;
pub use matching::{check_winning, evaluate, matching_numbers, prize_for, summarize};
pub use purchase::{parse_purchase_detail, parse_purchase_list};
pub use round::parse_current_round;
pub use winning::{parse_draw_date, parse_winning_numbers};

/// Parse one of the built-in selectors.
///
/// Only called from `Lazy` initializers with constant input.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("built-in selector {css:?} is invalid: {e:?}"))
}
