// src/utils/format.rs

//! Display formatting for amounts and number lists.

/// Format an amount with thousands separators: `1234567` → `"1,234,567"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let len = digits.len();

    let mut result = String::with_capacity(len + len / 3 + 1);
    if amount < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Join numbers with `", "`: `[1, 2, 3]` → `"1, 2, 3"`.
pub fn format_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_234_567), "1,234,567");
        assert_eq!(format_amount(123), "123");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(26_876_558_642), "26,876,558,642");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1_500), "-1,500");
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_numbers(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(format_numbers(&[]), "");
    }
}
