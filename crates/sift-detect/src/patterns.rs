//! Fixed-pattern detectors.
//!
//! Each detector scans the whole text independently. Overlapping claims
//! between categories are kept; reconciling them would invent a precedence
//! the taxonomy does not define.

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard `local@domain.tld` token shape.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Email regex is hardcoded and valid")
});

/// 13-16 digits, single space or hyphen allowed between digit groups.
static CREDIT_CARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d(?:[ -]?\d){12,15}\b").expect("Credit card regex is hardcoded and valid")
});

/// Medicare card number: 10 digits grouped 4-5-1, optional whitespace.
static MEDICARE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{4}\s?\d{5}\s?\d\b").expect("Medicare regex is hardcoded and valid")
});

/// Centrelink CRN: one uppercase letter then 8 digits. Case-sensitive.
static CRN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]\d{8}\b").expect("CRN regex is hardcoded and valid"));

/// Find email addresses.
#[must_use]
pub fn find_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_PATTERN, text)
}

/// Find credit-card-shaped digit runs.
///
/// Pattern-only: no issuer-prefix or Luhn validation is applied, matching
/// the fixed taxonomy's definition of this category.
#[must_use]
pub fn find_credit_cards(text: &str) -> Vec<String> {
    find_all(&CREDIT_CARD_PATTERN, text)
}

/// Find Medicare numbers.
#[must_use]
pub fn find_medicare_numbers(text: &str) -> Vec<String> {
    find_all(&MEDICARE_PATTERN, text)
}

/// Find Centrelink Customer Reference Numbers.
#[must_use]
pub fn find_centrelink_crns(text: &str) -> Vec<String> {
    find_all(&CRN_PATTERN, text)
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert_eq!(
            find_emails("contact me at john@example.com"),
            vec!["john@example.com"]
        );
        assert_eq!(
            find_emails("Email: alice.smith@company.co.uk"),
            vec!["alice.smith@company.co.uk"]
        );
        assert!(find_emails("not an email").is_empty());
        assert!(find_emails("@invalid").is_empty());
    }

    #[test]
    fn test_credit_card_pattern() {
        assert_eq!(
            find_credit_cards("Card: 4111 1111 1111 1111"),
            vec!["4111 1111 1111 1111"]
        );
        assert_eq!(
            find_credit_cards("4111-1111-1111-1111 on file"),
            vec!["4111-1111-1111-1111"]
        );
        // 13 digits (shortest accepted shape)
        assert_eq!(find_credit_cards("4222222222222"), vec!["4222222222222"]);
        // Too short, too long
        assert!(find_credit_cards("411111111111").is_empty());
        assert!(find_credit_cards("41111111111111111").is_empty());
    }

    #[test]
    fn test_medicare_pattern() {
        assert_eq!(find_medicare_numbers("2123 45670 1"), vec!["2123 45670 1"]);
        assert_eq!(find_medicare_numbers("2123456701"), vec!["2123456701"]);
        assert!(find_medicare_numbers("212 345 670").is_empty());
    }

    #[test]
    fn test_crn_pattern_is_case_sensitive() {
        assert_eq!(find_centrelink_crns("CRN A12345678"), vec!["A12345678"]);
        assert!(find_centrelink_crns("a12345678").is_empty());
        // Letter must start the token
        assert!(find_centrelink_crns("XA12345678").is_empty());
    }

    #[test]
    fn test_overlapping_categories_both_claim() {
        // A 16-digit card number contains no standalone 8-9 digit run, but a
        // Medicare-shaped 10-digit group and a card can coexist in one text
        // and each detector reports its own view of it.
        let text = "2123456701 and 4111111111111111";
        assert_eq!(find_medicare_numbers(text), vec!["2123456701"]);
        assert_eq!(find_credit_cards(text), vec!["4111111111111111"]);
    }
}
