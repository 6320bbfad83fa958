// src/services/winning.rs

//! Winning numbers and the prize table from the draw result page.

use chrono::{DateTime, FixedOffset, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::document::StructuredDocument;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{PrizeInfo, PrizeTable, Rank, WINNING_NUMBER_COUNT, WinningNumbers};
use crate::utils::{element_text, parse_amount};

use super::selector;

/// Korea Standard Time, the site's home timezone (no daylight saving).
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// `2025년 12월 06일`
static DRAW_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일").expect("draw date pattern is valid")
});

static RESULT_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.win_result"));
static RESULT_ROUND: Lazy<Selector> = Lazy::new(|| selector("h4 strong"));
static DRAW_DATE: Lazy<Selector> = Lazy::new(|| selector("p.desc"));
static WINNING_BALL: Lazy<Selector> = Lazy::new(|| selector("div.num.win p span.ball_645"));
static BONUS_BALL: Lazy<Selector> = Lazy::new(|| selector("div.num.bonus p span.ball_645"));
static PRIZE_ROW: Lazy<Selector> = Lazy::new(|| selector("table tbody tr"));
static CELL: Lazy<Selector> = Lazy::new(|| selector("td"));
static EMPHASIS: Lazy<Selector> = Lazy::new(|| selector("strong"));

/// Read the draw result: round, date, numbers, bonus number and prizes.
pub fn parse_winning_numbers(document: &StructuredDocument) -> ExtractResult<WinningNumbers> {
    let block = document
        .first(&RESULT_BLOCK)
        .ok_or_else(|| ExtractError::structure("div.win_result"))?;

    let round = parse_round(&text_of_all(block, &RESULT_ROUND))?;
    let draw_date = parse_draw_date(&text_of_all(block, &DRAW_DATE))?;

    let numbers: Vec<u32> = block
        .select(&WINNING_BALL)
        .filter_map(|ball| element_text(ball).trim().parse().ok())
        .collect();
    if numbers.len() != WINNING_NUMBER_COUNT {
        return Err(ExtractError::count(
            "winning numbers",
            WINNING_NUMBER_COUNT,
            numbers.len(),
        ));
    }

    let bonus_text = text_of_all(block, &BONUS_BALL);
    let bonus_text = bonus_text.trim();
    let bonus_number: u32 = bonus_text
        .parse()
        .map_err(|_| ExtractError::format("bonus number", bonus_text))?;

    let prizes = parse_prize_table(document);
    log::debug!(
        "Round {round}: {} prize tier(s) published",
        prizes.len()
    );

    WinningNumbers::new(round, draw_date, &numbers, bonus_number, prizes)
}

/// Parse a phrase such as `(2025년 12월 06일 추첨)` into midnight KST.
pub fn parse_draw_date(text: &str) -> ExtractResult<DateTime<FixedOffset>> {
    let invalid = || ExtractError::format("draw date", text.trim());

    let caps = DRAW_DATE_PATTERN.captures(text).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let day: u32 = caps[3].parse().map_err(|_| invalid())?;

    FixedOffset::east_opt(KST_OFFSET_SECS)
        .and_then(|kst| kst.with_ymd_and_hms(year, month, day, 0, 0, 0).single())
        .ok_or_else(invalid)
}

/// `1201회` → 1201
fn parse_round(text: &str) -> ExtractResult<u32> {
    let cleaned = text.replace('회', "");
    let cleaned = cleaned.trim();
    cleaned
        .parse()
        .map_err(|_| ExtractError::format("round", cleaned))
}

fn parse_prize_table(document: &StructuredDocument) -> PrizeTable {
    document.select(&PRIZE_ROW).filter_map(parse_prize_row).collect()
}

/// Read one prize row; rows without a known rank label are skipped.
fn parse_prize_row(row: ElementRef<'_>) -> Option<PrizeInfo> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
    if cells.len() < 4 {
        return None;
    }

    let label = element_text(cells[0]);
    let Some(rank) = Rank::from_label(label.trim()) else {
        log::debug!("Skipping prize row with label {:?}", label.trim());
        return None;
    };

    let winner_count = element_text(cells[2])
        .trim()
        .replace(',', "")
        .parse()
        .unwrap_or(0);

    Some(PrizeInfo {
        rank,
        total_amount: parse_amount(&text_of_all(cells[1], &EMPHASIS)),
        winner_count,
        amount_per_winner: parse_amount(&element_text(cells[3])),
    })
}

/// Concatenated text of every element under `scope` matching `selector`.
fn text_of_all(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope.select(selector).map(element_text).collect()
}
