// src/services/round.rs

//! Current round from the main page.

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::document::StructuredDocument;
use crate::error::{ExtractError, ExtractResult};
use crate::utils::element_text;

use super::selector;

/// Latest completed round shown on the main page.
static LATEST_ROUND: Lazy<Selector> = Lazy::new(|| selector("strong#lottoDrwNo"));

/// Round currently open for purchase: the latest drawn round plus one.
pub fn parse_current_round(document: &StructuredDocument) -> ExtractResult<u32> {
    let element = document
        .first(&LATEST_ROUND)
        .ok_or_else(|| ExtractError::structure("strong#lottoDrwNo"))?;

    let text = element_text(element);
    let text = text.trim();
    let latest: u32 = text
        .parse()
        .map_err(|_| ExtractError::format("latest round", text))?;

    latest
        .checked_add(1)
        .ok_or_else(|| ExtractError::format("latest round", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_next_round() {
        let doc = StructuredDocument::parse("<strong id=\"lottoDrwNo\"> 1201 </strong>");
        assert_eq!(parse_current_round(&doc), Ok(1202));
    }

    #[test]
    fn test_missing_element() {
        let doc = StructuredDocument::parse("<strong id=\"other\">1201</strong>");
        assert!(matches!(
            parse_current_round(&doc),
            Err(ExtractError::StructureNotFound { .. })
        ));
    }

    #[test]
    fn test_non_numeric_text() {
        let doc = StructuredDocument::parse("<strong id=\"lottoDrwNo\">1201회</strong>");
        assert_eq!(
            parse_current_round(&doc),
            Err(ExtractError::format("latest round", "1201회"))
        );
    }
}
