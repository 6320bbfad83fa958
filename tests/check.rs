//! Checking purchased slots against a draw and rendering the outcome.

use lotto::document::StructuredDocument;
use lotto::models::{EmailMessage, Rank};
use lotto::services::{parse_purchase_detail, parse_winning_numbers, summarize};
use pretty_assertions::assert_eq;

const PURCHASE_DETAIL: &str = include_str!("fixtures/purchase_detail.html");
const WINNING: &str = include_str!("fixtures/winning.html");

#[test]
fn test_check_saved_pages() {
    let draw = parse_winning_numbers(&StructuredDocument::parse(WINNING)).unwrap();
    let page = parse_purchase_detail(&StructuredDocument::parse(PURCHASE_DETAIL)).unwrap();
    assert_eq!(page.round, draw.round());

    let summary = summarize(&draw, &page.details);
    let ranks: Vec<_> = summary.tickets().iter().map(|t| t.rank).collect();
    assert_eq!(ranks, vec![Some(Rank::First), Some(Rank::Second), None]);
    assert_eq!(summary.total_prize(), 2_067_427_588 + 56_701_601);
    assert!(summary.unpublished_wins().is_empty());

    assert_eq!(
        summary.to_string(),
        "\n📋 [1201회] 당첨 확인 결과:\n\
         \x20  슬롯 A (자동 / 3, 11, 19, 25, 33, 42): 1등 🎉 (당첨금: 2,067,427,588원)\n\
         \x20  슬롯 B (반자동 / 3, 11, 19, 25, 33, 7): 2등 🎉 (당첨금: 56,701,601원)\n\
         \x20  슬롯 C (수동 / 1, 2, 4, 5, 6, 8): 낙첨\n"
    );

    let mail = EmailMessage::check_result(&summary);
    assert_eq!(mail.subject, "[로또 당첨!] 1201회 - 2장 당첨!");
    assert!(mail.body.starts_with("🎰 1201회 (2025-12-06 추첨)\n"));
}

#[test]
fn test_check_all_losing() {
    let draw = parse_winning_numbers(&StructuredDocument::parse(WINNING)).unwrap();
    let page = parse_purchase_detail(&StructuredDocument::parse(PURCHASE_DETAIL)).unwrap();
    let losing: Vec<_> = page
        .details
        .into_iter()
        .filter(|d| d.slot == "C")
        .collect();

    let summary = summarize(&draw, &losing);
    assert!(!summary.has_winner());
    assert_eq!(
        EmailMessage::check_result(&summary).subject,
        "[로또 결과] 1201회 - 1장 낙첨"
    );
}
