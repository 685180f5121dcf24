//! The analysis result set: single source of truth for generated content.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::items::{
    BilingualSegment, Exercise, GoldenSentence, PodcastLine, QaItem, SummarySection, VocabItem,
};

/// Identifier for one generated feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FeatureKind {
    Summary,
    Bilingual,
    GoldenSentences,
    Exercises,
    Qa,
    Vocabulary,
    ActionPlan,
    BeginnerGuide,
    BookReview,
    Podcast,
}

/// All generated content, keyed by feature.
///
/// Every field is replaced wholesale after a successful fetch; nothing
/// mutates an existing field in place. Sequence fields are empty and
/// long-form fields `None` before their first generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub summary_zh: Vec<SummarySection>,
    pub summary_en: Vec<SummarySection>,
    pub bilingual: Vec<BilingualSegment>,
    pub golden_sentences: Vec<GoldenSentence>,
    pub exercises: Vec<Exercise>,
    pub qa: Vec<QaItem>,
    pub vocabulary: Vec<VocabItem>,
    pub action_plan: Option<String>,
    pub beginner_guide: Option<String>,
    pub review: Option<String>,
    pub podcast_script: Vec<PodcastLine>,
}

impl AnalysisData {
    /// True when no feature has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.summary_zh.is_empty()
            && self.summary_en.is_empty()
            && self.bilingual.is_empty()
            && self.golden_sentences.is_empty()
            && self.exercises.is_empty()
            && self.qa.is_empty()
            && self.vocabulary.is_empty()
            && self.action_plan.is_none()
            && self.beginner_guide.is_none()
            && self.review.is_none()
            && self.podcast_script.is_empty()
    }

    /// Append newly translated segments to the bilingual sequence.
    ///
    /// Chunked "load more" extends the sequence; it never replaces
    /// previously loaded chunks.
    pub fn extend_bilingual(&mut self, segments: Vec<BilingualSegment>) {
        self.bilingual.extend(segments);
    }
}
