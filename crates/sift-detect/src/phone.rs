//! Australian phone number detection and canonicalization.
//!
//! Candidates are found permissively (international `+61` prefix, national
//! `0` prefix, parenthesised area codes, embedded spaces and hyphens) and
//! validated against the Australian numbering plan: a nine-digit national
//! significant number starting with 2, 3, 4, 7 or 8. Every accepted match
//! is emitted as `+61XXXXXXXXX`, so the same number written in different
//! notations collapses to a single reported value.

use once_cell::sync::Lazy;
use regex::Regex;

/// Candidate shapes, with exact digit counts per prefix form so a match
/// never swallows trailing unrelated digits.
static PHONE_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \+?61[\s-]?\d(?:[\s-]?\d){8}        # +61 412 345 678
        | \(0\d\)[\s-]?\d(?:[\s-]?\d){7}    # (04)1234-5678
        | 0\d(?:[\s-]?\d){8}                # 0412 345 678
        ",
    )
    .expect("Phone candidate regex is hardcoded and valid")
});

/// Find phone numbers, deduplicated by canonical form, in text order of
/// first appearance.
#[must_use]
pub fn find_phone_numbers(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut seen = std::collections::BTreeSet::new();
    let mut out = Vec::new();

    for m in PHONE_CANDIDATE.find_iter(text) {
        // A candidate butting against further digits is part of some longer
        // number, not an Australian phone number.
        if m.start() > 0 && bytes[m.start() - 1].is_ascii_digit() {
            continue;
        }
        if m.end() < bytes.len() && bytes[m.end()].is_ascii_digit() {
            continue;
        }
        if let Some(canonical) = canonicalize(m.as_str()) {
            if seen.insert(canonical.clone()) {
                out.push(canonical);
            }
        }
    }
    out
}

/// Reduce a candidate span to canonical `+61XXXXXXXXX` form, or reject it.
#[must_use]
pub fn canonicalize(candidate: &str) -> Option<String> {
    let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();

    let nsn = if let Some(rest) = digits.strip_prefix("61") {
        if rest.len() == 9 {
            rest
        } else {
            // 61x... with a 0 trunk prefix repeated, or a truncated run
            return None;
        }
    } else if let Some(rest) = digits.strip_prefix('0') {
        if rest.len() == 9 {
            rest
        } else {
            return None;
        }
    } else {
        return None;
    };

    // Area codes 02/03/07/08 and mobiles 04xx
    if !matches!(nsn.as_bytes()[0], b'2' | b'3' | b'4' | b'7' | b'8') {
        return None;
    }

    Some(format!("+61{nsn}"))
}
