//! Domain types: generated artifacts and the analysis result set.

pub mod analysis;
pub mod items;

pub use analysis::{AnalysisData, FeatureKind};
pub use items::{
    BilingualSegment, Exercise, GoldenSentence, PodcastLine, QaItem, Speaker, SummarySection,
    VocabItem,
};

use strum::{Display, EnumIter, EnumString};

/// Output language for generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese.
    #[default]
    Zh,
    /// English.
    En,
}

/// Voice a book review is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ReviewStyle {
    #[default]
    Standard,
    Nietzsche,
    LiuZongyuan,
    Hemingway,
    Sarcastic,
    Academic,
    Motivational,
    Socratic,
    Poetic,
    Journalistic,
}

impl ReviewStyle {
    /// Name used inside prompts ("in the style of ...").
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Nietzsche => "Nietzsche",
            Self::LiuZongyuan => "Liu Zongyuan",
            Self::Hemingway => "Hemingway",
            Self::Sarcastic => "Sarcastic",
            Self::Academic => "Academic",
            Self::Motivational => "Motivational",
            Self::Socratic => "Socratic",
            Self::Poetic => "Poetic",
            Self::Journalistic => "Journalistic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_round_trips_through_strings() {
        assert_eq!(Language::from_str("zh").unwrap(), Language::Zh);
        assert_eq!(Language::En.to_string(), "en");
    }

    #[test]
    fn review_style_parses_kebab_case() {
        assert_eq!(
            ReviewStyle::from_str("liu-zongyuan").unwrap(),
            ReviewStyle::LiuZongyuan
        );
    }
}
