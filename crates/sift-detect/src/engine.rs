//! The detection engine: one call, every detector.

use crate::error::{DetectorError, DetectorResult};
use crate::ner::NameExtractor;
use crate::{patterns, phone, tfn};
use sift_core::{DetectionCategory, MatchSet};
use std::sync::Arc;
use std::time::Duration;

/// Runs the fixed detector set over normalized text.
///
/// Pattern and checksum detectors are infallible once compiled; the one
/// external capability (NER) is bounded by a deadline. Detectors never see
/// each other's results, so overlapping spans may be claimed by several
/// categories at once.
pub struct DetectionEngine {
    name_extractor: Arc<dyn NameExtractor>,
    ner_timeout: Duration,
}

impl DetectionEngine {
    /// Create an engine around a name-extraction collaborator.
    #[must_use]
    pub fn new(name_extractor: Arc<dyn NameExtractor>, ner_timeout: Duration) -> Self {
        Self {
            name_extractor,
            ner_timeout,
        }
    }

    /// Whether the configured name extractor can serve requests.
    #[must_use]
    pub fn extractor_available(&self) -> bool {
        self.name_extractor.is_available()
    }

    /// Classify `text` into a per-category match set.
    ///
    /// Empty text yields an all-empty `MatchSet`, never an error. An NER
    /// *timeout* is the only failure surfaced to the caller (the file is
    /// then recorded as failed); an NER internal error merely leaves the
    /// `PersonName` category empty with a diagnostic.
    pub async fn detect(&self, text: &str) -> DetectorResult<MatchSet> {
        let mut matches = MatchSet::new();
        if text.is_empty() {
            return Ok(matches);
        }

        matches.extend(DetectionCategory::Email, patterns::find_emails(text));
        matches.extend(DetectionCategory::CreditCard, patterns::find_credit_cards(text));
        matches.extend(
            DetectionCategory::MedicareNumber,
            patterns::find_medicare_numbers(text),
        );
        matches.extend(
            DetectionCategory::CentrelinkCrn,
            patterns::find_centrelink_crns(text),
        );
        matches.extend(DetectionCategory::TaxFileNumber, tfn::find_valid_tfns(text));
        matches.extend(DetectionCategory::Phone, phone::find_phone_numbers(text));

        let ner = self.name_extractor.extract_person_names(text);
        match tokio::time::timeout(self.ner_timeout, ner).await {
            Ok(Ok(names)) => matches.extend(DetectionCategory::PersonName, names),
            Ok(Err(e)) => {
                tracing::warn!("NER failed, leaving person names empty: {}", e);
            }
            Err(_) => return Err(DetectorError::NerTimeout(self.ner_timeout)),
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::{HeuristicNameExtractor, UnavailableNameExtractor};
    use async_trait::async_trait;

    fn engine() -> DetectionEngine {
        DetectionEngine::new(
            Arc::new(HeuristicNameExtractor),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_empty_text_yields_empty_categories_not_error() {
        let matches = engine().detect("").await.unwrap();
        assert!(matches.is_empty());
        for category in DetectionCategory::ALL {
            assert!(matches.values(category).is_empty());
        }
    }

    #[tokio::test]
    async fn test_detects_across_categories() {
        let text = "Jane Citizen (jane@example.com, 0412 345 678) quoted \
                    TFN 123456782 and CRN A12345678, Medicare 2123 45670 1.";
        let matches = engine().detect(text).await.unwrap();

        assert_eq!(matches.values(DetectionCategory::Email), vec!["jane@example.com"]);
        assert_eq!(matches.values(DetectionCategory::Phone), vec!["+61412345678"]);
        assert_eq!(matches.values(DetectionCategory::TaxFileNumber), vec!["123456782"]);
        assert_eq!(matches.values(DetectionCategory::CentrelinkCrn), vec!["A12345678"]);
        assert_eq!(matches.values(DetectionCategory::MedicareNumber), vec!["2123 45670 1"]);
        assert!(matches
            .values(DetectionCategory::PersonName)
            .contains(&"Jane Citizen"));
    }

    #[tokio::test]
    async fn test_verbatim_duplicates_collapse() {
        let text = "jane@example.com then again jane@example.com";
        let matches = engine().detect(text).await.unwrap();
        assert_eq!(matches.values(DetectionCategory::Email).len(), 1);
    }

    #[tokio::test]
    async fn test_ner_internal_error_degrades_to_empty_category() {
        let engine = DetectionEngine::new(
            Arc::new(UnavailableNameExtractor),
            Duration::from_secs(5),
        );
        let matches = engine
            .detect("Jane Citizen wrote to jane@example.com")
            .await
            .unwrap();
        assert!(matches.values(DetectionCategory::PersonName).is_empty());
        assert_eq!(matches.values(DetectionCategory::Email).len(), 1);
    }

    struct HangingExtractor;

    #[async_trait]
    impl NameExtractor for HangingExtractor {
        async fn extract_person_names(
            &self,
            _text: &str,
        ) -> crate::DetectorResult<Vec<String>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ner_timeout_is_surfaced() {
        let engine = DetectionEngine::new(Arc::new(HangingExtractor), Duration::from_millis(50));
        let result = engine.detect("some text").await;
        assert!(matches!(result, Err(DetectorError::NerTimeout(_))));
    }
}
