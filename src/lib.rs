//! Lectern — AI reading companion engine
//!
//! Turns a plain-text book chapter into study material with the Gemini API:
//! bilingual summaries, paragraph-pair translations, golden sentences,
//! exercises, Q&A, vocabulary, action plans, beginner guides, styled book
//! reviews, and a two-speaker podcast script with synthesized playback.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use lectern::prelude::*;
//!
//! # async fn example() -> lectern::error::Result<()> {
//! let config = LecternConfig::from_env();
//! let client = GeminiClient::from_config(&config)?;
//! let analyzer = Analyzer::new(Arc::new(client));
//!
//! let data = analyzer
//!     .run_analysis("chapter text...", &AnalysisOptions::default(), |phase| {
//!         println!("{phase}");
//!     })
//!     .await?;
//! println!("{} golden sentences", data.golden_sentences.len());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod audio;
pub mod config;
pub mod error;
pub mod export;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod repair;
pub mod source;
pub mod theme;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
