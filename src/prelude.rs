//! Convenience re-exports for common use.

pub use crate::analysis::{AnalysisOptions, AnalysisPhase, Analyzer, ChunkCursor};
pub use crate::config::LecternConfig;
pub use crate::error::{LecternError, Result};
pub use crate::provider::{GeminiClient, SpeechSynthesizer, TextGenerator, Voice};
pub use crate::theme::ThemeId;
pub use crate::types::{
    AnalysisData, BilingualSegment, Exercise, GoldenSentence, Language, PodcastLine, QaItem,
    ReviewStyle, Speaker, SummarySection, VocabItem,
};
