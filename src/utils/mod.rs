//! Utility functions and helpers.

pub mod decode;
pub mod format;

use scraper::ElementRef;

/// Collect all descendant text of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Whether an element has nested elements (text-only nodes return false).
pub fn has_child_elements(element: ElementRef<'_>) -> bool {
    element.children().any(|child| child.value().is_element())
}

/// Parse the digits of a string as an integer, ignoring everything else.
///
/// `"1,234,567원"` becomes `1234567`. Text with no digits, or more digits
/// than fit in a `u64`, parses to 0.
pub fn parse_digits(text: &str) -> u64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Parse a won amount such as `"26,876,558,642원"`.
///
/// Unparsable text yields 0.
pub fn parse_amount(text: &str) -> i64 {
    text.trim()
        .replace(',', "")
        .replace('원', "")
        .trim()
        .parse()
        .unwrap_or(0)
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
