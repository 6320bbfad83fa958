// src/services/purchase.rs

//! Purchase history: the list page and the per-purchase detail page.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::document::StructuredDocument;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{PurchaseDetail, PurchaseDetailPage, PurchaseSummary};
use crate::utils::{element_text, has_child_elements, normalize_whitespace, parse_digits};

use super::selector;

/// Inline `detailPop('order','barcode','issue')` handlers on the list page.
static DETAIL_POPUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"detailPop\('([^']+)'\s*,\s*'([^']+)'\s*,\s*'([^']+)'\)")
        .expect("detail popup pattern is valid")
});

static DETAIL_ROUND: Lazy<Selector> = Lazy::new(|| selector("h3 strong"));
static SELECTED_SLOT: Lazy<Selector> = Lazy::new(|| selector("div.selected li"));
static SLOT_LABEL: Lazy<Selector> = Lazy::new(|| selector("strong span"));
static SLOT_NUMBER: Lazy<Selector> = Lazy::new(|| selector("div.nums span"));

/// Extract purchase identifiers from the raw list page text.
///
/// Duplicate triples are dropped, keeping the first occurrence.
pub fn parse_purchase_list(source: &str) -> ExtractResult<Vec<PurchaseSummary>> {
    let mut matched = 0;
    let mut seen = HashSet::new();
    let mut summaries = Vec::new();

    for caps in DETAIL_POPUP.captures_iter(source) {
        matched += 1;
        let summary = PurchaseSummary {
            order_no: caps[1].to_string(),
            barcode: caps[2].to_string(),
            issue_no: caps[3].to_string(),
        };
        if seen.insert(summary.clone()) {
            summaries.push(summary);
        }
    }

    if matched == 0 {
        return Err(ExtractError::structure("detailPop purchase links"));
    }
    if summaries.is_empty() {
        return Err(ExtractError::structure("purchase history entries"));
    }

    log::debug!(
        "Found {} purchase(s) in {} detail link(s)",
        summaries.len(),
        matched
    );
    Ok(summaries)
}

/// Extract the draw round and the selected slots of one purchase.
pub fn parse_purchase_detail(document: &StructuredDocument) -> ExtractResult<PurchaseDetailPage> {
    let round = document
        .first(&DETAIL_ROUND)
        .map_or(0, |el| parse_digits(element_text(el).trim()));
    let round = u32::try_from(round).unwrap_or(0);
    if round == 0 {
        return Err(ExtractError::count("draw round", 1, 0));
    }

    let details: Vec<PurchaseDetail> = document
        .select(&SELECTED_SLOT)
        .filter_map(parse_slot)
        .collect();
    if details.is_empty() {
        return Err(ExtractError::count("slots with numbers", "at least 1", 0));
    }

    Ok(PurchaseDetailPage { round, details })
}

/// Read one slot; `None` when it has no label or no numbers.
fn parse_slot(slot: ElementRef<'_>) -> Option<PurchaseDetail> {
    let mut labels = slot.select(&SLOT_LABEL).map(element_text);
    let label = labels.next().unwrap_or_default().trim().to_string();
    let mode = normalize_whitespace(&labels.next().unwrap_or_default());

    // Spans with nested elements are ball templates, not numbers.
    let numbers: Vec<u32> = slot
        .select(&SLOT_NUMBER)
        .filter(|span| !has_child_elements(*span))
        .filter_map(|span| element_text(span).trim().parse().ok())
        .collect();

    if label.is_empty() || numbers.is_empty() {
        log::debug!("Skipping slot {label:?} with {} number(s)", numbers.len());
        return None;
    }

    Some(PurchaseDetail {
        slot: label,
        mode,
        numbers,
    })
}
