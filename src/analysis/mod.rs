//! Content analysis: per-feature fetches and the batch pipeline.
//!
//! [`Analyzer`] wraps a [`TextGenerator`] and exposes one fetch per feature.
//! Transport failures propagate as errors; unparseable model output degrades
//! to the feature's empty default (see [`crate::repair`]). The batch
//! pipeline in [`orchestrator`] composes the fetches into three sequential
//! concurrent stages.

pub mod bilingual;
pub mod orchestrator;

pub use bilingual::{ChunkCursor, DEFAULT_CHUNK_SIZE};
pub use orchestrator::{AnalysisOptions, AnalysisPhase};

use std::sync::Arc;

use crate::error::Result;
use crate::prompt;
use crate::provider::TextGenerator;
use crate::repair::parse_or_default;
use crate::types::{
    AnalysisData, BilingualSegment, Exercise, FeatureKind, GoldenSentence, Language, PodcastLine,
    QaItem, ReviewStyle, SummarySection, VocabItem,
};

/// Fetches generated artifacts for one source text.
#[derive(Clone)]
pub struct Analyzer {
    generator: Arc<dyn TextGenerator>,
}

impl Analyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Sectioned summary in the requested language.
    pub async fn summary(&self, text: &str, lang: Language) -> Result<Vec<SummarySection>> {
        let raw = self.generator.generate(&prompt::summary(text, lang)).await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Translate one piece of text into original/translation pairs.
    ///
    /// The prompt bounds its own excerpt; pass a pre-sliced chunk for
    /// chunked extension (see [`Analyzer::extend_bilingual`]).
    pub async fn bilingual(&self, text: &str) -> Result<Vec<BilingualSegment>> {
        let raw = self.generator.generate(&prompt::bilingual(text)).await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Translate the cursor's current chunk and advance the cursor.
    ///
    /// A cursor past the end of the text yields an empty chunk without
    /// issuing a request; the caller treats that as "nothing more to load."
    pub async fn extend_bilingual(
        &self,
        text: &str,
        cursor: &mut ChunkCursor,
    ) -> Result<Vec<BilingualSegment>> {
        let chunk = cursor.current_chunk(text);
        if chunk.is_empty() {
            return Ok(Vec::new());
        }
        let segments = self.bilingual(chunk).await?;
        cursor.advance();
        Ok(segments)
    }

    /// Five quotable sentences with translations.
    pub async fn golden_sentences(&self, text: &str) -> Result<Vec<GoldenSentence>> {
        let raw = self
            .generator
            .generate(&prompt::golden_sentences(text))
            .await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Five multiple-choice exercises.
    pub async fn exercises(&self, text: &str, lang: Language) -> Result<Vec<Exercise>> {
        let raw = self
            .generator
            .generate(&prompt::exercises(text, lang))
            .await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Five deep Q&A pairs.
    pub async fn qa(&self, text: &str, lang: Language) -> Result<Vec<QaItem>> {
        let raw = self.generator.generate(&prompt::qa(text, lang)).await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Ten advanced vocabulary entries.
    pub async fn vocabulary(&self, text: &str) -> Result<Vec<VocabItem>> {
        let raw = self.generator.generate(&prompt::vocabulary(text)).await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Seven-day action plan, markdown-like text.
    pub async fn action_plan(&self, text: &str, lang: Language) -> Result<String> {
        self.generator
            .generate(&prompt::action_plan(text, lang))
            .await
    }

    /// Beginner-level walkthrough, markdown-like text.
    pub async fn beginner_guide(&self, text: &str, lang: Language) -> Result<String> {
        self.generator
            .generate(&prompt::beginner_guide(text, lang))
            .await
    }

    /// Book review in the given style, markdown-like text.
    pub async fn review(&self, text: &str, style: ReviewStyle, lang: Language) -> Result<String> {
        self.generator
            .generate(&prompt::review(text, style, lang))
            .await
    }

    /// Two-speaker podcast script.
    pub async fn podcast_script(&self, text: &str, lang: Language) -> Result<Vec<PodcastLine>> {
        let raw = self
            .generator
            .generate(&prompt::podcast_script(text, lang))
            .await?;
        Ok(parse_or_default(&raw, Vec::new()))
    }

    /// Refetch a single feature and replace exactly its field in `data`.
    ///
    /// Summaries refetch into the field matching `options.language`; other
    /// fields are untouched even when the fetch fails.
    pub async fn refetch(
        &self,
        data: &mut AnalysisData,
        feature: FeatureKind,
        text: &str,
        options: &AnalysisOptions,
    ) -> Result<()> {
        match feature {
            FeatureKind::Summary => match options.language {
                Language::Zh => data.summary_zh = self.summary(text, Language::Zh).await?,
                Language::En => data.summary_en = self.summary(text, Language::En).await?,
            },
            FeatureKind::Bilingual => {
                let prefix = crate::util::text::excerpt(text, options.bilingual_prefix);
                data.bilingual = self.bilingual(prefix).await?;
            }
            FeatureKind::GoldenSentences => {
                data.golden_sentences = self.golden_sentences(text).await?;
            }
            FeatureKind::Exercises => {
                data.exercises = self.exercises(text, options.language).await?;
            }
            FeatureKind::Qa => data.qa = self.qa(text, options.language).await?,
            FeatureKind::Vocabulary => data.vocabulary = self.vocabulary(text).await?,
            FeatureKind::ActionPlan => {
                data.action_plan = Some(self.action_plan(text, options.language).await?);
            }
            FeatureKind::BeginnerGuide => {
                data.beginner_guide = Some(self.beginner_guide(text, options.language).await?);
            }
            FeatureKind::BookReview => {
                data.review = Some(
                    self.review(text, options.review_style, options.language)
                        .await?,
                );
            }
            FeatureKind::Podcast => {
                data.podcast_script = self.podcast_script(text, options.language).await?;
            }
        }
        Ok(())
    }
}
