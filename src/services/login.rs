// src/services/login.rs

//! Login result page.

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::document::StructuredDocument;
use crate::error::{ExtractError, ExtractResult};

use super::selector;

/// Action button that only renders when login is rejected.
static FAILURE_MARKER: Lazy<Selector> = Lazy::new(|| selector("a.btn_common"));

/// Check the page returned after submitting credentials.
pub fn parse_login(document: &StructuredDocument) -> ExtractResult<()> {
    if document.contains(&FAILURE_MARKER) {
        return Err(ExtractError::Authentication);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success() {
        let doc = StructuredDocument::parse("<div class=\"myinfo\"><a class=\"btn_logout\">로그아웃</a></div>");
        assert!(parse_login(&doc).is_ok());
    }

    #[test]
    fn test_login_failure_marker() {
        let doc = StructuredDocument::parse(
            "<p>아이디 또는 비밀번호가 일치하지 않습니다.</p><a class=\"btn_common mid\" href=\"#\">확인</a>",
        );
        assert_eq!(parse_login(&doc), Err(ExtractError::Authentication));
    }
}
