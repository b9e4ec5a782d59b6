use chrono::{DateTime, Local};

use crate::actions::extract_actions;
use crate::error::BriefingError;
use crate::extractor::TextExtractor;
use crate::models::Briefing;
use crate::segmenter::segment;
use crate::store::BriefingStore;
use crate::summarizer::{rank_sentences, word_frequencies};

/// Wires extraction, segmentation, ranking, and action detection into one
/// ingestion operation backed by a [`BriefingStore`].
pub struct BriefingPipeline {
    extractor: TextExtractor,
    store: BriefingStore,
}

impl BriefingPipeline {
    pub fn new(store: BriefingStore) -> Self {
        Self {
            extractor: TextExtractor::new(),
            store,
        }
    }

    pub fn store(&self) -> &BriefingStore {
        &self.store
    }

    /// Run the full document-to-briefing pipeline and persist the result.
    ///
    /// A failure at any stage aborts the whole ingestion; no partial
    /// briefing is ever stored.
    pub fn ingest(&self, bytes: &[u8], filename: &str) -> Result<Briefing, BriefingError> {
        if filename.trim().is_empty() {
            return Err(BriefingError::InvalidInput("no file uploaded".to_string()));
        }
        if bytes.is_empty() {
            return Err(BriefingError::InvalidInput(
                "uploaded file is empty".to_string(),
            ));
        }

        let text = self.extractor.extract(bytes, filename)?;
        let sentences = segment(&text);
        let frequencies = word_frequencies(&text);
        let digest = rank_sentences(&sentences, &frequencies);
        let actions = extract_actions(&sentences);

        let summary = Self::compose_summary(&digest, &actions, Local::now());
        self.store.create(filename, &summary)
    }

    /// Assemble the stored summary text: key-sentence digest, action
    /// points (or the explicit placeholder line), and a generation stamp.
    pub fn compose_summary(
        digest: &[String],
        actions: &[String],
        generated_at: DateTime<Local>,
    ) -> String {
        let action_lines = if actions.is_empty() {
            "- No clear action items detected".to_string()
        } else {
            actions
                .iter()
                .map(|action| format!("- {action}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "📄 **Document Briefing**\n{}\n\n🗒 **Action Points**\n{}\n\n📆 Generated on: {}",
            digest.join(" "),
            action_lines,
            generated_at.format("%a %-d %b %Y at %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DeleteOutcome;
    use chrono::TimeZone;

    fn pipeline() -> BriefingPipeline {
        BriefingPipeline::new(BriefingStore::in_memory())
    }

    #[test]
    fn test_ingest_plain_text_end_to_end() {
        let pipeline = pipeline();
        let text = "Please review the budget. The weather is nice. We must approve the plan by Friday.";

        let briefing = pipeline.ingest(text.as_bytes(), "minutes.txt").unwrap();

        assert_eq!(briefing.filename, "minutes.txt");
        // Three sentences, all within the top-5 digest.
        assert!(briefing.summary.contains("Please review the budget."));
        assert!(briefing.summary.contains("The weather is nice."));
        assert!(briefing.summary.contains("We must approve the plan by Friday."));
        // The review and approve sentences carry action verbs.
        assert!(briefing.summary.contains("- Please review the budget."));
        assert!(briefing
            .summary
            .contains("- We must approve the plan by Friday."));

        let stored = pipeline.store().list();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, briefing.id);
        assert_eq!(stored[0].summary, briefing.summary);
    }

    #[test]
    fn test_ingest_then_delete_round_trip() {
        let pipeline = pipeline();
        let briefing = pipeline
            .ingest(b"Schedule the kickoff meeting.", "agenda.txt")
            .unwrap();

        assert_eq!(
            pipeline.store().delete(briefing.id).unwrap(),
            DeleteOutcome::Deleted
        );
        assert!(pipeline.store().list().is_empty());
    }

    #[test]
    fn test_missing_filename_is_invalid_input() {
        let err = pipeline().ingest(b"content", "").unwrap_err();
        assert!(matches!(err, BriefingError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_upload_is_invalid_input() {
        let err = pipeline().ingest(b"", "notes.txt").unwrap_err();
        assert!(matches!(err, BriefingError::InvalidInput(_)));
    }

    #[test]
    fn test_extraction_failure_stores_nothing() {
        let pipeline = pipeline();
        let err = pipeline.ingest(b"not a pdf", "broken.pdf").unwrap_err();
        assert!(matches!(err, BriefingError::Extraction(_)));
        assert!(pipeline.store().list().is_empty());
    }

    #[test]
    fn test_compose_summary_with_actions() {
        let digest = vec!["Key sentence one.".to_string(), "Key two.".to_string()];
        let actions = vec!["call the vendor".to_string()];
        let date = Local.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();

        let summary = BriefingPipeline::compose_summary(&digest, &actions, date);

        assert!(summary.contains("Key sentence one. Key two."));
        assert!(summary.contains("- call the vendor"));
        assert!(summary.contains("Generated on: Sun 1 Feb 2026 at 12:00"));
    }

    #[test]
    fn test_compose_summary_without_actions_renders_placeholder() {
        let digest = vec!["Only sentence.".to_string()];
        let date = Local.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();

        let summary = BriefingPipeline::compose_summary(&digest, &[], date);
        assert!(summary.contains("- No clear action items detected"));
    }
}
