// src/models/balance.rs

//! Deposit balance of the lottery account.

use serde::{Deserialize, Serialize};

use crate::utils::format::format_amount;

/// Deposit balance, all values in won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Total deposit
    pub total: u64,

    /// Amount available for purchases
    pub available: u64,

    /// Reserved for pending purchases
    pub reserved: u64,

    /// Requested for withdrawal, not yet paid out
    pub withdraw_pending: u64,

    /// Not available for purchases
    pub unavailable: u64,

    /// Purchases made this month
    pub monthly_total: u64,
}

impl Balance {
    /// Items for a summary log.
    pub fn summary_items(&self) -> Vec<(&'static str, String)> {
        [
            ("총예치금", self.total),
            ("구매가능", self.available),
            ("예약구매", self.reserved),
            ("출금신청중", self.withdraw_pending),
            ("구매불가", self.unavailable),
            ("이번달 누적 구매", self.monthly_total),
        ]
        .into_iter()
        .map(|(label, amount)| (label, format!("{}원", format_won(amount))))
        .collect()
    }
}

fn format_won(amount: u64) -> String {
    format_amount(i64::try_from(amount).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_items() {
        let balance = Balance {
            total: 15_000,
            available: 10_000,
            ..Balance::default()
        };
        let items = balance.summary_items();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], ("총예치금", "15,000원".to_string()));
        assert_eq!(items[1], ("구매가능", "10,000원".to_string()));
    }
}
