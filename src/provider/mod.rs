//! Generation backends behind trait seams.
//!
//! `TextGenerator` and `SpeechSynthesizer` are the two collaborator seams:
//! the analysis pipeline and the podcast sequencer only see the traits, so
//! tests can substitute scripted doubles for the hosted API.

pub mod gemini;
pub mod http;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use bon::Builder;
use strum::{Display, EnumString};

use crate::error::Result;
use crate::types::{FeatureKind, Speaker};

/// Request for one generated artifact.
#[derive(Debug, Clone, Builder)]
pub struct GenerateRequest {
    /// Full prompt: the instruction plus a bounded excerpt of the source.
    #[builder(into)]
    pub prompt: String,
    /// Ask the model for `application/json` output.
    #[builder(default)]
    pub json: bool,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// Prebuilt synthesis voice identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Voice {
    Kore,
    Fenrir,
    Puck,
    Zephyr,
    Charon,
}

impl Voice {
    /// Fixed per-speaker voice mapping for podcast dialogue.
    pub fn for_speaker(speaker: Speaker) -> Self {
        match speaker {
            Speaker::Host => Voice::Fenrir,
            Speaker::Guest => Voice::Kore,
        }
    }

    /// Narration voice for reading a single item of a feature aloud.
    /// `None` for features that are not narrated.
    pub fn narration(feature: FeatureKind) -> Option<Self> {
        match feature {
            FeatureKind::Bilingual => Some(Voice::Kore),
            FeatureKind::GoldenSentences => Some(Voice::Zephyr),
            FeatureKind::Vocabulary => Some(Voice::Puck),
            _ => None,
        }
    }
}

/// Text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate one response for the request. The returned string is either
    /// JSON (when `request.json` is set) or markdown-like plain text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}

/// Speech synthesis backend.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for `text`, returning a base64-encoded 16-bit PCM
    /// mono payload at 24 kHz, or `None` when the backend produced no audio.
    /// Callers treat `None` as "skip playback," never as a hard error.
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Option<String>>;
}
