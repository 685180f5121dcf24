//! The batch analysis pipeline: three sequential stages of concurrent
//! fetches, committed as a single result set.

use bon::Builder;
use strum::Display;
use tracing::debug;

use crate::error::Result;
use crate::types::{AnalysisData, Language, ReviewStyle};
use crate::util::text::excerpt;

use super::{Analyzer, DEFAULT_CHUNK_SIZE};

/// Options for one batch run.
#[derive(Debug, Clone, Builder)]
pub struct AnalysisOptions {
    /// Output language for exercises, Q&A, the action plan, and the review.
    #[builder(default)]
    pub language: Language,
    /// Style for the stage-2 book review.
    #[builder(default)]
    pub review_style: ReviewStyle,
    /// How much of the source the initial bilingual pass covers, in
    /// characters. Further chunks load incrementally afterwards.
    #[builder(default = DEFAULT_CHUNK_SIZE)]
    pub bilingual_prefix: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Progress label reported between pipeline stages. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AnalysisPhase {
    #[strum(serialize = "Warming up the reading engine…")]
    Initializing,
    #[strum(serialize = "Distilling the chapter essentials…")]
    Summaries,
    #[strum(serialize = "Building the action guides…")]
    Guides,
    #[strum(serialize = "Generating interactive content…")]
    Interactive,
}

impl Analyzer {
    /// Run the full batch pipeline over `text`.
    ///
    /// Three stages run strictly in sequence; fetches within a stage run
    /// concurrently. The first failing fetch fails the whole run — no
    /// retries, and nothing is committed (the caller keeps whatever result
    /// set it already had). `progress` is invoked before each stage.
    pub async fn run_analysis(
        &self,
        text: &str,
        options: &AnalysisOptions,
        mut progress: impl FnMut(AnalysisPhase),
    ) -> Result<AnalysisData> {
        progress(AnalysisPhase::Initializing);

        progress(AnalysisPhase::Summaries);
        debug!("analysis stage 1: summaries, golden sentences, vocabulary");
        let (summary_zh, summary_en, golden_sentences, vocabulary) = tokio::try_join!(
            self.summary(text, Language::Zh),
            self.summary(text, Language::En),
            self.golden_sentences(text),
            self.vocabulary(text),
        )?;

        progress(AnalysisPhase::Guides);
        debug!("analysis stage 2: action plan, review");
        let (action_plan, review) = tokio::try_join!(
            self.action_plan(text, options.language),
            self.review(text, options.review_style, options.language),
        )?;

        progress(AnalysisPhase::Interactive);
        debug!("analysis stage 3: exercises, Q&A, bilingual prefix");
        let bilingual_prefix = excerpt(text, options.bilingual_prefix);
        let (exercises, qa, bilingual) = tokio::try_join!(
            self.exercises(text, options.language),
            self.qa(text, options.language),
            self.bilingual(bilingual_prefix),
        )?;

        Ok(AnalysisData {
            summary_zh,
            summary_en,
            bilingual,
            golden_sentences,
            exercises,
            qa,
            vocabulary,
            action_plan: Some(action_plan),
            beginner_guide: None,
            review: Some(review),
            podcast_script: Vec::new(),
        })
    }
}
