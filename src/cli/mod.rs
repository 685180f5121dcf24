//! CLI entry point for Lectern.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::types::{Language, ReviewStyle};
use crate::theme::ThemeId;

/// Lectern reading companion CLI
#[derive(Parser, Debug)]
#[command(name = "lectern", version, about = "Lectern — AI reading companion")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis pipeline over a text file
    Analyze(AnalyzeArgs),
    /// Generate a two-speaker podcast script (optionally play it)
    Podcast(PodcastArgs),
    /// Write a book review in a selectable style
    Review(ReviewArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Plain-text source file (.txt)
    pub input: PathBuf,

    /// Summary language
    #[arg(short, long, default_value = "zh")]
    pub lang: Language,

    /// Write a standalone HTML export to this path
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Theme for the HTML export
    #[arg(long, default_value = "song")]
    pub theme: ThemeId,
}

/// Arguments for the `podcast` subcommand.
#[derive(Parser, Debug)]
pub struct PodcastArgs {
    /// Plain-text source file (.txt)
    pub input: PathBuf,

    /// Script language
    #[arg(short, long, default_value = "zh")]
    pub lang: Language,

    /// Synthesize and play the script (requires the `playback` feature)
    #[arg(long)]
    pub play: bool,
}

/// Arguments for the `review` subcommand.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Plain-text source file (.txt)
    pub input: PathBuf,

    /// Review style (e.g. standard, nietzsche, liu-zongyuan, socratic)
    #[arg(short, long, default_value = "standard")]
    pub style: ReviewStyle,

    /// Review language
    #[arg(short, long, default_value = "zh")]
    pub lang: Language,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
