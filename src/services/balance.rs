// src/services/balance.rs

//! Deposit balance from the account page.
//!
//! The money summary block lays out its amounts as a run of right-aligned
//! cells. When the account has a linked bank account for quick charging, two
//! extra cells precede the balance fields, so the page variant is detected
//! first and selects the cell offsets.

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::document::StructuredDocument;
use crate::error::{ExtractError, ExtractResult};
use crate::models::Balance;
use crate::utils::{element_text, parse_digits};

use super::selector;

static LINKED_ACCOUNT_CELL: Lazy<Selector> =
    Lazy::new(|| selector(".tbl_total_account_number_top tbody tr td"));
static MONEY_BOX: Lazy<Selector> = Lazy::new(|| selector("div.box.money"));
static TOTAL: Lazy<Selector> = Lazy::new(|| selector("p.total_new > strong"));
static AMOUNT_CELL: Lazy<Selector> = Lazy::new(|| selector("td.ta_right"));

/// Layout of the account page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// No linked bank account table
    Standard,
    /// A linked bank account table is shown above the balance
    LinkedAccount,
}

/// Positions of the balance fields among the right-aligned amount cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets {
    pub available: usize,
    pub reserved: usize,
    pub withdraw_pending: usize,
    pub unavailable: usize,
    pub monthly_total: usize,
}

const STANDARD_OFFSETS: FieldOffsets = FieldOffsets {
    available: 1,
    reserved: 2,
    withdraw_pending: 3,
    unavailable: 4,
    monthly_total: 5,
};

const LINKED_ACCOUNT_OFFSETS: FieldOffsets = FieldOffsets {
    available: 3,
    reserved: 4,
    withdraw_pending: 5,
    unavailable: 6,
    monthly_total: 7,
};

impl PageVariant {
    pub fn detect(document: &StructuredDocument) -> Self {
        if document.contains(&LINKED_ACCOUNT_CELL) {
            PageVariant::LinkedAccount
        } else {
            PageVariant::Standard
        }
    }

    pub fn offsets(self) -> FieldOffsets {
        match self {
            PageVariant::Standard => STANDARD_OFFSETS,
            PageVariant::LinkedAccount => LINKED_ACCOUNT_OFFSETS,
        }
    }
}

/// Read the deposit balance.
pub fn parse_balance(document: &StructuredDocument) -> ExtractResult<Balance> {
    let variant = PageVariant::detect(document);
    log::debug!("Balance page variant: {variant:?}");

    let money_box = document
        .first(&MONEY_BOX)
        .ok_or_else(|| ExtractError::structure("div.box.money"))?;

    let total = money_box
        .select(&TOTAL)
        .next()
        .map_or(0, |el| parse_digits(&element_text(el)));

    let cells: Vec<String> = money_box.select(&AMOUNT_CELL).map(element_text).collect();
    let amount_at = |index: usize| cells.get(index).map_or(0, |text| parse_digits(text));

    let offsets = variant.offsets();
    Ok(Balance {
        total,
        available: amount_at(offsets.available),
        reserved: amount_at(offsets.reserved),
        withdraw_pending: amount_at(offsets.withdraw_pending),
        unavailable: amount_at(offsets.unavailable),
        monthly_total: amount_at(offsets.monthly_total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_standard() {
        let doc = StructuredDocument::parse("<div class=\"box money\"></div>");
        assert_eq!(PageVariant::detect(&doc), PageVariant::Standard);
    }

    #[test]
    fn test_detect_linked_account() {
        let doc = StructuredDocument::parse(
            "<table class=\"tbl_total_account_number_top\"><tbody><tr><td>농협 123-45</td></tr></tbody></table>",
        );
        assert_eq!(PageVariant::detect(&doc), PageVariant::LinkedAccount);
    }

    #[test]
    fn test_empty_linked_table_is_standard() {
        let doc = StructuredDocument::parse(
            "<table class=\"tbl_total_account_number_top\"><tbody></tbody></table>",
        );
        assert_eq!(PageVariant::detect(&doc), PageVariant::Standard);
    }

    #[test]
    fn test_offsets_shift_by_two() {
        let standard = PageVariant::Standard.offsets();
        let linked = PageVariant::LinkedAccount.offsets();
        assert_eq!(linked.available, standard.available + 2);
        assert_eq!(linked.monthly_total, standard.monthly_total + 2);
    }

    #[test]
    fn test_missing_money_box() {
        let doc = StructuredDocument::parse("<div class=\"box\"></div>");
        assert_eq!(
            parse_balance(&doc),
            Err(ExtractError::structure("div.box.money"))
        );
    }

    #[test]
    fn test_missing_cells_parse_to_zero() {
        let doc = StructuredDocument::parse(
            "<div class=\"box money\"><p class=\"total_new\"><strong>1,000원</strong></p></div>",
        );
        let balance = parse_balance(&doc).unwrap();
        assert_eq!(balance.total, 1_000);
        assert_eq!(balance.available, 0);
        assert_eq!(balance.monthly_total, 0);
    }
}
