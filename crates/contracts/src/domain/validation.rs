//! Shared validation primitives.
//!
//! Validators are pure: they take the record plus explicit rules (including
//! the current year) and return a map of messages keyed by field name. An
//! empty map means the record is submittable.

use std::collections::HashMap;

/// Validation messages keyed by the record's serde field name.
pub type FieldErrors = HashMap<&'static str, String>;

/// Synthetic error key for submission-level failures. Never a record field.
pub const SUBMIT: &str = "submit";

/// True when the string is empty after trimming.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a year entered as free text. `None` for anything that is not an
/// integer, so non-numeric input can never slip through a range comparison.
pub fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Message for a year outside `[min, max]` or not a number at all.
pub fn year_range_message(min: i32, max: i32) -> String {
    format!("Please enter a valid year between {} and {}", min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year("1965"), Some(1965));
        assert_eq!(parse_year(" 1965 "), Some(1965));
        assert_eq!(parse_year("next year"), None);
        assert_eq!(parse_year("19sixty5"), None);
        assert_eq!(parse_year(""), None);
    }
}
