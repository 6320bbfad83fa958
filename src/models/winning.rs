// src/models/winning.rs

//! Draw results: winning numbers, bonus number and the prize table.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ExtractError, ExtractResult};
use crate::utils::format::{format_amount, format_numbers};

/// Number of main balls in a draw.
pub const WINNING_NUMBER_COUNT: usize = 6;

/// Smallest ball number.
pub const MIN_NUMBER: u32 = 1;

/// Largest ball number.
pub const MAX_NUMBER: u32 = 45;

/// Prize tier, best first. A ticket with no tier is `Option::<Rank>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "rank1")]
    First,
    #[serde(rename = "rank2")]
    Second,
    #[serde(rename = "rank3")]
    Third,
    #[serde(rename = "rank4")]
    Fourth,
    #[serde(rename = "rank5")]
    Fifth,
}

impl Rank {
    /// All tiers, best first.
    pub const ALL: [Rank; 5] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
    ];

    fn index(self) -> usize {
        match self {
            Rank::First => 0,
            Rank::Second => 1,
            Rank::Third => 2,
            Rank::Fourth => 3,
            Rank::Fifth => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::First => "1등",
            Rank::Second => "2등",
            Rank::Third => "3등",
            Rank::Fourth => "4등",
            Rank::Fifth => "5등",
        }
    }

    /// Exact lookup of a prize table label such as `"1등"`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an optional rank; a losing ticket reads `낙첨`.
pub fn rank_label(rank: Option<Rank>) -> &'static str {
    rank.map_or("낙첨", Rank::label)
}

/// Published prize information for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeInfo {
    pub rank: Rank,

    /// Total amount paid out for the tier (won)
    pub total_amount: i64,

    pub winner_count: u64,

    /// Amount paid to each winner (won)
    pub amount_per_winner: i64,
}

impl fmt::Display for PrizeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: 총 {}원 ({}명, 1인당 {}원)",
            self.rank,
            format_amount(self.total_amount),
            self.winner_count,
            format_amount(self.amount_per_winner)
        )
    }
}

/// Prize information keyed by tier.
///
/// A missing tier means the site has not published it, which is not the
/// same as a published tier with zero winners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeTable {
    slots: [Option<PrizeInfo>; 5],
}

impl PrizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `info` under its own rank, returning any previous entry.
    pub fn insert(&mut self, info: PrizeInfo) -> Option<PrizeInfo> {
        self.slots[info.rank.index()].replace(info)
    }

    pub fn get(&self, rank: Rank) -> Option<&PrizeInfo> {
        self.slots[rank.index()].as_ref()
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.get(rank).is_some()
    }

    /// Per-winner amount of a tier, if published.
    pub fn amount_for(&self, rank: Rank) -> Option<i64> {
        self.get(rank).map(|info| info.amount_per_winner)
    }

    /// Published tiers, best first.
    pub fn iter(&self) -> impl Iterator<Item = &PrizeInfo> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl FromIterator<PrizeInfo> for PrizeTable {
    fn from_iter<I: IntoIterator<Item = PrizeInfo>>(iter: I) -> Self {
        let mut table = PrizeTable::new();
        for info in iter {
            table.insert(info);
        }
        table
    }
}

impl Serialize for PrizeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for info in self.iter() {
            map.serialize_entry(&info.rank, info)?;
        }
        map.end()
    }
}

/// Result of one draw.
///
/// Only constructed through [`WinningNumbers::new`], which enforces that the
/// six numbers are in range, unique and ascending and that the bonus number
/// is distinct from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningNumbers {
    round: u32,
    draw_date: DateTime<FixedOffset>,
    numbers: [u32; WINNING_NUMBER_COUNT],
    bonus_number: u32,
    prizes: PrizeTable,
}

impl WinningNumbers {
    pub fn new(
        round: u32,
        draw_date: DateTime<FixedOffset>,
        numbers: &[u32],
        bonus_number: u32,
        prizes: PrizeTable,
    ) -> ExtractResult<Self> {
        let numbers: [u32; WINNING_NUMBER_COUNT] = numbers.try_into().map_err(|_| {
            ExtractError::count("winning numbers", WINNING_NUMBER_COUNT, numbers.len())
        })?;

        if round == 0 {
            return Err(ExtractError::format("round", "0"));
        }
        if !numbers.iter().all(|n| is_valid_number(*n)) {
            return Err(ExtractError::format(
                "winning numbers",
                format_numbers(&numbers),
            ));
        }
        if !numbers.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ExtractError::format(
                "winning number order",
                format_numbers(&numbers),
            ));
        }
        if !is_valid_number(bonus_number) || numbers.contains(&bonus_number) {
            return Err(ExtractError::format(
                "bonus number",
                bonus_number.to_string(),
            ));
        }

        Ok(Self {
            round,
            draw_date,
            numbers,
            bonus_number,
            prizes,
        })
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Draw date at midnight, Korea Standard Time.
    pub fn draw_date(&self) -> DateTime<FixedOffset> {
        self.draw_date
    }

    /// The six winning numbers, ascending.
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn bonus_number(&self) -> u32 {
        self.bonus_number
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    pub fn is_winning_number(&self, number: u32) -> bool {
        self.numbers.contains(&number)
    }
}

fn is_valid_number(n: u32) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn kst_midnight() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 12, 6, 0, 0, 0)
            .unwrap()
    }

    fn prize(rank: Rank, per_winner: i64, winners: u64) -> PrizeInfo {
        PrizeInfo {
            rank,
            total_amount: per_winner * winners as i64,
            winner_count: winners,
            amount_per_winner: per_winner,
        }
    }

    #[test]
    fn test_rank_from_label() {
        assert_eq!(Rank::from_label("1등"), Some(Rank::First));
        assert_eq!(Rank::from_label("5등"), Some(Rank::Fifth));
        assert_eq!(Rank::from_label(" 1등"), None);
        assert_eq!(Rank::from_label("6등"), None);
    }

    #[test]
    fn test_rank_label_none_is_lose() {
        assert_eq!(rank_label(None), "낙첨");
        assert_eq!(rank_label(Some(Rank::Third)), "3등");
    }

    #[test]
    fn test_prize_table_distinguishes_missing_from_zero_winners() {
        let mut table = PrizeTable::new();
        table.insert(prize(Rank::First, 0, 0));

        assert_eq!(table.amount_for(Rank::First), Some(0));
        assert_eq!(table.amount_for(Rank::Second), None);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_prize_table_iterates_best_first() {
        let table: PrizeTable = [prize(Rank::Fifth, 5_000, 10), prize(Rank::First, 1, 1)]
            .into_iter()
            .collect();
        let ranks: Vec<_> = table.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![Rank::First, Rank::Fifth]);
    }

    #[test]
    fn test_prize_table_serializes_as_rank_map() {
        let table: PrizeTable = [prize(Rank::Fifth, 5_000, 2)].into_iter().collect();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["rank5"]["amount_per_winner"], 5_000);
    }

    #[test]
    fn test_prize_info_display() {
        let info = prize(Rank::Fourth, 50_000, 3);
        assert_eq!(info.to_string(), "4등: 총 150,000원 (3명, 1인당 50,000원)");
    }

    #[test]
    fn test_winning_numbers_valid() {
        let draw =
            WinningNumbers::new(1201, kst_midnight(), &[1, 2, 3, 4, 5, 6], 7, PrizeTable::new())
                .unwrap();
        assert_eq!(draw.numbers(), &[1, 2, 3, 4, 5, 6]);
        assert!(draw.is_winning_number(4));
        assert!(!draw.is_winning_number(7));
    }

    #[test]
    fn test_winning_numbers_rejects_wrong_count() {
        let err = WinningNumbers::new(1, kst_midnight(), &[1, 2, 3, 4, 5], 7, PrizeTable::new())
            .unwrap_err();
        assert!(matches!(err, ExtractError::CountMismatch { found: 5, .. }));
    }

    #[test]
    fn test_winning_numbers_rejects_out_of_range_and_duplicates() {
        let date = kst_midnight();
        assert!(WinningNumbers::new(1, date, &[0, 2, 3, 4, 5, 6], 7, PrizeTable::new()).is_err());
        assert!(WinningNumbers::new(1, date, &[1, 2, 3, 4, 5, 46], 7, PrizeTable::new()).is_err());
        assert!(WinningNumbers::new(1, date, &[1, 2, 2, 4, 5, 6], 7, PrizeTable::new()).is_err());
        assert!(WinningNumbers::new(1, date, &[6, 5, 4, 3, 2, 1], 7, PrizeTable::new()).is_err());
    }

    #[test]
    fn test_winning_numbers_rejects_bad_bonus() {
        let date = kst_midnight();
        assert!(WinningNumbers::new(1, date, &[1, 2, 3, 4, 5, 6], 6, PrizeTable::new()).is_err());
        assert!(WinningNumbers::new(1, date, &[1, 2, 3, 4, 5, 6], 46, PrizeTable::new()).is_err());
    }
}
