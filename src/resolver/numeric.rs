//! Explicit scanners for numeric Thirukkural references.
//!
//! Deliberately implemented as character walks with documented boundary
//! rules instead of regular expressions, so the behavior stays portable and
//! testable independent of any pattern engine's dialect.

/// Tokens that mark a query as a Thirukkural reference. Matched by substring
/// containment against the lowercased, trimmed query, so `thirukkural`
/// (which contains `kural`) also matches.
const KURAL_MARKERS: [&str; 2] = ["திருக்குறள்", "kural"];

/// True if the (lowercased, trimmed) query names the Thirukkural.
pub(crate) fn has_kural_marker(key: &str) -> bool {
    KURAL_MARKERS.iter().any(|m| key.contains(m))
}

/// Extract the first run of ASCII decimal digits from `text`, truncated to
/// at most 4 digits, and parse it.
///
/// Rules:
/// - Only the first run counts; later digits are ignored.
/// - A run longer than 4 digits contributes its first 4 digits (`"12345"`
///   yields `1234`), matching the original extraction behavior.
/// - No word-boundary requirement: digits glued to letters still count.
///
/// At most 4 digits always fit a `u32`.
pub(crate) fn first_digit_run(text: &str) -> Option<u32> {
    let mut digits = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            if digits.len() == 4 {
                break;
            }
        } else if !digits.is_empty() {
            break;
        }
    }

    if digits.is_empty() { None } else { digits.parse().ok() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_detection_covers_both_scripts() {
        assert!(has_kural_marker("திருக்குறள் 5 சொல்"));
        assert!(has_kural_marker("kural 5"));
        // "thirukkural" contains "kural" as a substring.
        assert!(has_kural_marker("thirukkural 5"));
        assert!(!has_kural_marker("சிலப்பதிகாரம் பற்றி"));
    }

    #[test]
    fn first_run_of_digits_wins() {
        assert_eq!(first_digit_run("திருக்குறள் 1330 அல்லது 5"), Some(1330));
        assert_eq!(first_digit_run("kural 7"), Some(7));
        assert_eq!(first_digit_run("no digits here"), None);
        assert_eq!(first_digit_run(""), None);
    }

    #[test]
    fn runs_longer_than_four_digits_are_truncated() {
        assert_eq!(first_digit_run("kural 12345"), Some(1234));
        assert_eq!(first_digit_run("99999"), Some(9999));
    }

    #[test]
    fn digits_glued_to_letters_still_count() {
        assert_eq!(first_digit_run("kural42please"), Some(42));
    }

    #[test]
    fn leading_zeros_parse_as_the_same_number() {
        assert_eq!(first_digit_run("kural 0001"), Some(1));
    }
}
