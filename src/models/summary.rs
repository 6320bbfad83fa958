// src/models/summary.rs

//! Per-round accumulation of ticket results and its text renderings.

use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::models::{PrizeTable, Rank, TicketResult, WinningNumbers, rank_label};
use crate::utils::format::{format_amount, format_numbers};

/// Check results for one round.
///
/// Holds its own copies of the draw data and of every added ticket, so later
/// changes to the caller's values never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    round: u32,
    draw_date: DateTime<FixedOffset>,
    winning_numbers: Vec<u32>,
    bonus_number: u32,
    prizes: PrizeTable,
    tickets: Vec<TicketResult>,
}

impl CheckSummary {
    /// Start an empty summary for `draw`.
    pub fn new(draw: &WinningNumbers) -> Self {
        Self {
            round: draw.round(),
            draw_date: draw.draw_date(),
            winning_numbers: draw.numbers().to_vec(),
            bonus_number: draw.bonus_number(),
            prizes: draw.prizes().clone(),
            tickets: Vec::new(),
        }
    }

    /// Append a copy of `result`.
    pub fn add_ticket(&mut self, result: &TicketResult) {
        self.tickets.push(result.clone());
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn draw_date(&self) -> DateTime<FixedOffset> {
        self.draw_date
    }

    pub fn winning_numbers(&self) -> &[u32] {
        &self.winning_numbers
    }

    pub fn bonus_number(&self) -> u32 {
        self.bonus_number
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    /// Ticket results in the order they were checked.
    pub fn tickets(&self) -> &[TicketResult] {
        &self.tickets
    }

    /// Whether any ticket placed in a prize tier.
    pub fn has_winner(&self) -> bool {
        self.tickets.iter().any(TicketResult::is_winner)
    }

    pub fn winner_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_winner()).count()
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn total_prize(&self) -> i64 {
        self.tickets.iter().map(|t| t.prize).sum()
    }

    /// Winning tickets whose tier has no published prize.
    ///
    /// Their stored prize is 0; this makes that case visible.
    pub fn unpublished_wins(&self) -> Vec<&TicketResult> {
        self.tickets
            .iter()
            .filter(|t| t.rank.is_some_and(|rank| !self.prizes.contains(rank)))
            .collect()
    }

    /// One-line outcome, e.g. `1201회 당첨 결과: 5장 중 2장 당첨! (3등 1장, 5등 1장)`.
    pub fn headline(&self) -> String {
        let total = self.ticket_count();
        let winners = self.winner_count();
        if winners == 0 {
            return format!("{}회 당첨 결과: {}장 모두 낙첨", self.round, total);
        }

        let by_rank = Rank::ALL
            .into_iter()
            .filter_map(|rank| {
                let count = self.tickets.iter().filter(|t| t.rank == Some(rank)).count();
                (count > 0).then(|| format!("{rank} {count}장"))
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}회 당첨 결과: {}장 중 {}장 당첨! ({})",
            self.round, total, winners, by_rank
        )
    }

    /// Plain-text body for the result email.
    pub fn email_body(&self) -> String {
        let mut body = String::new();
        let _ = writeln!(
            body,
            "🎰 {}회 ({} 추첨)",
            self.round,
            self.draw_date.format("%Y-%m-%d")
        );
        let _ = writeln!(
            body,
            "당첨 번호: {} + {}\n",
            format_numbers(&self.winning_numbers),
            self.bonus_number
        );

        for ticket in &self.tickets {
            let prize = if ticket.is_winner() {
                format!(" (당첨금 {}원)", format_amount(ticket.prize))
            } else {
                String::new()
            };
            let _ = writeln!(
                body,
                "- 슬롯 {} ({} / {}): {}{}",
                ticket.slot,
                ticket.mode,
                format_numbers(&ticket.numbers),
                rank_label(ticket.rank),
                prize
            );
        }

        body
    }
}

/// Multi-line report for logging.
impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n📋 [{}회] 당첨 확인 결과:", self.round)?;
        for ticket in &self.tickets {
            writeln!(f, "{ticket}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::PrizeInfo;

    fn draw() -> WinningNumbers {
        let date = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 12, 6, 0, 0, 0)
            .unwrap();
        let prizes: PrizeTable = [
            PrizeInfo {
                rank: Rank::Third,
                total_amount: 3_000_000,
                winner_count: 2,
                amount_per_winner: 1_500_000,
            },
            PrizeInfo {
                rank: Rank::Fifth,
                total_amount: 50_000,
                winner_count: 10,
                amount_per_winner: 5_000,
            },
        ]
        .into_iter()
        .collect();
        WinningNumbers::new(1201, date, &[3, 11, 19, 25, 33, 42], 7, prizes).unwrap()
    }

    fn sample_summary() -> CheckSummary {
        let mut summary = CheckSummary::new(&draw());
        summary.add_ticket(&TicketResult::new(
            "A",
            "자동",
            &[3, 11, 19, 25, 33, 45],
            Some(Rank::Third),
            1_500_000,
        ));
        summary.add_ticket(&TicketResult::new("B", "수동", &[1, 2, 4, 5, 6, 8], None, 0));
        summary
    }

    #[test]
    fn test_new_copies_draw() {
        let draw = draw();
        let summary = CheckSummary::new(&draw);
        assert_eq!(summary.round(), 1201);
        assert_eq!(summary.winning_numbers(), draw.numbers());
        assert_eq!(summary.bonus_number(), 7);
        assert_eq!(summary.prizes(), draw.prizes());
        assert!(summary.tickets().is_empty());
        assert!(!summary.has_winner());
    }

    #[test]
    fn test_add_ticket_stores_independent_copy() {
        let mut summary = CheckSummary::new(&draw());
        let mut result = TicketResult::new("A", "자동", &[1, 2, 3, 4, 5, 6], None, 0);
        summary.add_ticket(&result);

        result.numbers[0] = 44;
        result.numbers.push(45);
        result.slot.push('!');

        let stored = &summary.tickets()[0];
        assert_eq!(stored.numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(stored.slot, "A");
    }

    #[test]
    fn test_has_winner_and_counts() {
        let summary = sample_summary();
        assert!(summary.has_winner());
        assert_eq!(summary.winner_count(), 1);
        assert_eq!(summary.ticket_count(), 2);
        assert_eq!(summary.total_prize(), 1_500_000);
    }

    #[test]
    fn test_unpublished_wins() {
        let mut summary = sample_summary();
        assert!(summary.unpublished_wins().is_empty());

        summary.add_ticket(&TicketResult::new(
            "C",
            "자동",
            &[3, 11, 19, 25, 1, 2],
            Some(Rank::Fourth),
            0,
        ));
        let unpublished = summary.unpublished_wins();
        assert_eq!(unpublished.len(), 1);
        assert_eq!(unpublished[0].slot, "C");
        assert_eq!(unpublished[0].prize, 0);
    }

    #[test]
    fn test_headline() {
        assert_eq!(
            sample_summary().headline(),
            "1201회 당첨 결과: 2장 중 1장 당첨! (3등 1장)"
        );

        let mut losing = CheckSummary::new(&draw());
        losing.add_ticket(&TicketResult::new("A", "자동", &[1, 2, 4, 5, 6, 8], None, 0));
        assert_eq!(losing.headline(), "1201회 당첨 결과: 1장 모두 낙첨");
    }

    #[test]
    fn test_report() {
        let expected = "\n📋 [1201회] 당첨 확인 결과:\n\
            \x20  슬롯 A (자동 / 3, 11, 19, 25, 33, 45): 3등 🎉 (당첨금: 1,500,000원)\n\
            \x20  슬롯 B (수동 / 1, 2, 4, 5, 6, 8): 낙첨\n";
        assert_eq!(sample_summary().to_string(), expected);
    }

    #[test]
    fn test_email_body() {
        let expected = "🎰 1201회 (2025-12-06 추첨)\n\
            당첨 번호: 3, 11, 19, 25, 33, 42 + 7\n\
            \n\
            - 슬롯 A (자동 / 3, 11, 19, 25, 33, 45): 3등 (당첨금 1,500,000원)\n\
            - 슬롯 B (수동 / 1, 2, 4, 5, 6, 8): 낙첨\n";
        assert_eq!(sample_summary().email_body(), expected);
    }
}
