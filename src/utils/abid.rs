//! ABID formatting and parsing
//!
//! Every registered user has an internal serial id; the public-facing
//! festival identifier (ABID) is that serial id left-padded to six digits
//! behind an `AB_` prefix, e.g. serial 123 -> `AB_000123`. User-typed
//! variants like `AB00123` are accepted when parsing.

use regex::Regex;
use std::sync::OnceLock;

/// Display width of the numeric part of an ABID
pub const ABID_DIGITS: usize = 6;

fn abid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^AB[_\s-]?(\d+)$").expect("valid ABID pattern"))
}

/// Left-pad a serial id to the ABID display width
pub fn pad_serial_id(serial_id: Option<i64>) -> String {
    match serial_id {
        Some(id) => format!("{:0width$}", id, width = ABID_DIGITS),
        None => "0".repeat(ABID_DIGITS),
    }
}

/// Format a serial id as a public ABID (`AB_000123`)
pub fn serial_id_to_abid(serial_id: Option<i64>) -> String {
    format!("AB_{}", pad_serial_id(serial_id))
}

/// Extract the serial id from an ABID string
///
/// Accepts `AB_000123`, `AB-000123`, `AB 000123` and `AB000123` forms,
/// case-insensitively. Returns `None` for anything that is not an ABID
/// or whose numeric part does not fit an `i64`.
pub fn abid_to_serial_id(abid: &str) -> Option<i64> {
    let trimmed = abid.trim().to_uppercase();
    let captures = abid_pattern().captures(&trimmed)?;
    captures.get(1)?.as_str().parse::<i64>().ok()
}

/// Strip every non-digit character and parse what remains
///
/// Lenient fallback used for raw roster input where users paste ABIDs with
/// arbitrary separators. Empty or non-numeric input yields `None`.
pub fn digits_to_serial_id(input: &str) -> Option<i64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_known_ids() {
        assert_eq!(serial_id_to_abid(Some(123)), "AB_000123");
        assert_eq!(serial_id_to_abid(Some(1_234_567)), "AB_1234567");
        assert_eq!(serial_id_to_abid(None), "AB_000000");
    }

    #[test]
    fn test_parse_accepted_variants() {
        assert_eq!(abid_to_serial_id("AB_000123"), Some(123));
        assert_eq!(abid_to_serial_id("AB00123"), Some(123));
        assert_eq!(abid_to_serial_id("ab-42"), Some(42));
        assert_eq!(abid_to_serial_id("  AB 7  "), Some(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(abid_to_serial_id(""), None);
        assert_eq!(abid_to_serial_id("XYZ123"), None);
        assert_eq!(abid_to_serial_id("AB_"), None);
        assert_eq!(abid_to_serial_id("AB_12a3"), None);
    }

    #[test]
    fn test_digits_fallback() {
        assert_eq!(digits_to_serial_id("AB00123"), Some(123));
        assert_eq!(digits_to_serial_id("no digits here"), None);
    }

    proptest! {
        #[test]
        fn abid_round_trips_for_all_positive_serial_ids(serial_id in 1i64..=i64::MAX) {
            let abid = serial_id_to_abid(Some(serial_id));
            prop_assert_eq!(abid_to_serial_id(&abid), Some(serial_id));
            prop_assert_eq!(digits_to_serial_id(&abid), Some(serial_id));
        }
    }
}
