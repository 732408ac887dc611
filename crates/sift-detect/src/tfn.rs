//! Tax File Number checksum validation.
//!
//! Candidates are standalone 8- or 9-digit runs; only candidates whose
//! weighted digit sum is divisible by 11 are reported. Pattern hits that
//! fail the checksum are discarded outright, not kept as low-confidence.

use once_cell::sync::Lazy;
use regex::Regex;

/// Weight vector for 9-digit TFNs.
const WEIGHTS_9: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

/// Weight vector for legacy 8-digit TFNs.
const WEIGHTS_8: [u32; 8] = [10, 7, 8, 4, 6, 3, 5, 1];

/// Standalone 8- or 9-digit runs. Word boundaries keep this from firing
/// inside longer digit sequences such as card or phone numbers.
static TFN_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{8,9}\b").expect("TFN candidate regex is hardcoded and valid"));

/// Validate a digit string against the TFN weighted checksum.
///
/// Returns false for anything that is not exactly 8 or 9 ASCII digits.
#[must_use]
pub fn is_valid_tax_file_number(candidate: &str) -> bool {
    let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != candidate.len() {
        return false;
    }

    let weights: &[u32] = match digits.len() {
        9 => &WEIGHTS_9,
        8 => &WEIGHTS_8,
        _ => return false,
    };

    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    sum % 11 == 0
}

/// Find checksum-valid TFNs in text.
#[must_use]
pub fn find_valid_tfns(text: &str) -> Vec<String> {
    TFN_CANDIDATE
        .find_iter(text)
        .filter(|m| is_valid_tax_file_number(m.as_str()))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_digit_checksum() {
        // 1*1 + 2*4 + 3*3 + 4*7 + 5*5 + 6*8 + 7*6 + 8*9 + 2*10 = 253 = 23 * 11
        assert!(is_valid_tax_file_number("123456782"));
        assert!(!is_valid_tax_file_number("123456789"));
        assert!(!is_valid_tax_file_number("123456783"));
    }

    #[test]
    fn test_eight_digit_checksum() {
        // 1*10 + 2*7 + 3*8 + 4*4 + 5*6 + 6*3 + 7*5 + 7*1 = 154 = 14 * 11
        assert!(is_valid_tax_file_number("12345677"));
        assert!(!is_valid_tax_file_number("12345678"));
    }

    #[test]
    fn test_rejects_non_candidates() {
        assert!(!is_valid_tax_file_number(""));
        assert!(!is_valid_tax_file_number("1234567"));
        assert!(!is_valid_tax_file_number("1234567890"));
        assert!(!is_valid_tax_file_number("12345678a"));
    }

    #[test]
    fn test_find_keeps_only_checksum_valid_runs() {
        let text = "TFN 123456782, not 123456789, legacy 12345677.";
        assert_eq!(find_valid_tfns(text), vec!["123456782", "12345677"]);
    }

    #[test]
    fn test_candidates_do_not_fire_inside_longer_runs() {
        // A valid TFN embedded in a longer digit run is not a standalone
        // candidate.
        assert!(find_valid_tfns("01234567821").is_empty());
    }
}
