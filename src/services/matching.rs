// src/services/matching.rs

//! Rank determination for purchased numbers.

use crate::models::{CheckSummary, PurchaseDetail, Rank, TicketResult, WinningNumbers};

/// Rank of `purchased` against `draw`, or `None` for no prize.
///
/// | matches | bonus | rank   |
/// |---------|-------|--------|
/// | 6       |       | First  |
/// | 5       | yes   | Second |
/// | 5       | no    | Third  |
/// | 4       |       | Fourth |
/// | 3       |       | Fifth  |
///
/// Every purchased number that is a winning number counts, duplicates
/// included. The order of `purchased` does not matter.
pub fn check_winning(purchased: &[u32], draw: &WinningNumbers) -> Option<Rank> {
    let match_count = purchased
        .iter()
        .filter(|n| draw.is_winning_number(**n))
        .count();
    let bonus_match = purchased.contains(&draw.bonus_number());

    match match_count {
        6 => Some(Rank::First),
        5 if bonus_match => Some(Rank::Second),
        5 => Some(Rank::Third),
        4 => Some(Rank::Fourth),
        3 => Some(Rank::Fifth),
        _ => None,
    }
}

/// Purchased numbers that are winning numbers, in purchase order.
pub fn matching_numbers(purchased: &[u32], draw: &WinningNumbers) -> Vec<u32> {
    purchased
        .iter()
        .copied()
        .filter(|n| draw.is_winning_number(*n))
        .collect()
}

/// Per-winner prize for `rank`; 0 when not ranked or not published.
pub fn prize_for(rank: Option<Rank>, draw: &WinningNumbers) -> i64 {
    rank.and_then(|rank| draw.prizes().amount_for(rank))
        .unwrap_or(0)
}

/// Check one purchased slot.
pub fn evaluate(detail: &PurchaseDetail, draw: &WinningNumbers) -> TicketResult {
    let rank = check_winning(&detail.numbers, draw);
    if let Some(rank) = rank {
        if !draw.prizes().contains(rank) {
            log::warn!(
                "Slot {} won {} in round {} but that tier has no published prize",
                detail.slot,
                rank,
                draw.round()
            );
        }
    }

    TicketResult::new(
        &detail.slot,
        &detail.mode,
        &detail.numbers,
        rank,
        prize_for(rank, draw),
    )
}

/// Check every slot and collect the results, in order.
pub fn summarize(draw: &WinningNumbers, details: &[PurchaseDetail]) -> CheckSummary {
    let mut summary = CheckSummary::new(draw);
    for detail in details {
        summary.add_ticket(&evaluate(detail, draw));
    }
    summary
}
