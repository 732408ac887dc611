//! Named-entity extraction seam.
//!
//! Person-name detection is delegated to a collaborator behind
//! [`NameExtractor`]: rule-based, statistical, and model-backed
//! implementations are all valid, and the engine depends only on the
//! contract. The bundled [`HeuristicNameExtractor`] is the default.

use crate::error::{DetectorError, DetectorResult};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

/// Extracts person-name spans from a text blob.
///
/// Implementations must be thread-safe (Send + Sync) for use across
/// concurrent per-file tasks, and should answer promptly: the engine
/// applies a deadline to every invocation.
#[async_trait]
pub trait NameExtractor: Send + Sync {
    /// Return every person name found in `text`.
    ///
    /// # Errors
    /// Returns error if the underlying capability fails; the engine
    /// degrades that to an empty category rather than failing the file.
    async fn extract_person_names(&self, text: &str) -> DetectorResult<Vec<String>>;

    /// Whether the capability can serve requests at all. Checked once at
    /// orchestrator construction; an unavailable extractor is run-fatal.
    fn is_available(&self) -> bool {
        true
    }
}

/// Honorific-anchored names: "Dr Jane Citizen", "Mr. Smith".
static HONORIFIC_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)")
        .expect("Honorific regex is hardcoded and valid")
});

/// Capitalized bigrams: "Jane Citizen".
static CAPITALIZED_BIGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+)[ \t]([A-Z][a-z]+)\b")
        .expect("Bigram regex is hardcoded and valid")
});

/// Capitalized words that start sentences or headings far more often than
/// they start names.
const STOPWORDS: &[&str] = &[
    "The", "This", "That", "These", "Those", "Dear", "Hello", "Regards", "Kind", "Best", "Please",
    "Contact", "Phone", "Email", "Account", "Invoice", "Medicare", "Centrelink", "Tax", "File",
    "Credit", "Card", "Customer", "Reference", "Number", "January", "February", "March", "April",
    "May", "June", "July", "August", "September", "October", "November", "December", "Monday",
    "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "New", "South", "North",
    "West", "East", "Western", "Australia", "Street", "Road",
];

/// Rule-based person-name extractor.
///
/// A deliberately modest stand-in for a model-backed NER service:
/// honorific-anchored spans plus capitalized bigrams filtered through a
/// stopword list. Good enough to exercise the pipeline end to end and to
/// be replaced without touching the engine.
#[derive(Debug, Default)]
pub struct HeuristicNameExtractor;

impl HeuristicNameExtractor {
    fn extract(text: &str) -> Vec<String> {
        let mut names = Vec::new();

        for captures in HONORIFIC_NAME.captures_iter(text) {
            if let Some(name) = captures.get(1) {
                names.push(name.as_str().to_string());
            }
        }

        for captures in CAPITALIZED_BIGRAM.captures_iter(text) {
            let (first, second) = (&captures[1], &captures[2]);
            if STOPWORDS.contains(&first) || STOPWORDS.contains(&second) {
                continue;
            }
            names.push(format!("{first} {second}"));
        }

        names
    }
}

#[async_trait]
impl NameExtractor for HeuristicNameExtractor {
    async fn extract_person_names(&self, text: &str) -> DetectorResult<Vec<String>> {
        Ok(Self::extract(text))
    }
}

/// An extractor that always fails, for wiring tests around degraded NER.
#[derive(Debug, Default)]
pub struct UnavailableNameExtractor;

#[async_trait]
impl NameExtractor for UnavailableNameExtractor {
    async fn extract_person_names(&self, _text: &str) -> DetectorResult<Vec<String>> {
        Err(DetectorError::NerFailed("capability offline".to_string()))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_honorific_names() {
        let names = HeuristicNameExtractor
            .extract_person_names("Please ask Dr Jane Citizen to call back.")
            .await
            .unwrap();
        assert!(names.contains(&"Jane Citizen".to_string()));
    }

    #[tokio::test]
    async fn test_bigram_names() {
        let names = HeuristicNameExtractor
            .extract_person_names("Signed by Alex Nguyen on behalf of the team.")
            .await
            .unwrap();
        assert!(names.contains(&"Alex Nguyen".to_string()));
    }

    #[tokio::test]
    async fn test_stopwords_filtered() {
        let names = HeuristicNameExtractor
            .extract_person_names("Kind Regards and Best Wishes from The Office")
            .await
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_unavailable_extractor_reports_itself() {
        assert!(!UnavailableNameExtractor.is_available());
        assert!(HeuristicNameExtractor.is_available());
    }
}
