//! Generated artifact items, deserialized from model JSON output.

use serde::{Deserialize, Serialize};
use strum::Display;

/// One section of a structured summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    pub title: String,
    pub content: String,
}

/// One original/translation paragraph pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualSegment {
    pub original: String,
    pub translation: String,
}

/// A "golden sentence": a quotable line extracted from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenSentence {
    pub sentence: String,
    pub translation: String,
    #[serde(default)]
    pub id: String,
}

/// A multiple-choice exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub question: String,
    pub options: Vec<String>,
    /// The correct answer content.
    pub answer: String,
    /// The correct option letter ("A".."D").
    #[serde(rename = "correctLetter")]
    pub correct_letter: String,
    pub explanation: String,
}

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
}

/// An advanced vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub word: String,
    #[serde(default)]
    pub ipa: String,
    /// Part of speech.
    #[serde(default)]
    pub pos: String,
    pub meaning: String,
}

/// Speaker role in a podcast dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Speaker {
    Host,
    Guest,
}

/// One line of a two-speaker podcast script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastLine {
    pub speaker: Speaker,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_deserializes_camel_case_letter() {
        let raw = r#"{
            "question": "What is the theme?",
            "options": ["A. time", "B. memory", "C. loss", "D. hope"],
            "correctLetter": "B",
            "answer": "memory",
            "explanation": "The text centers on remembrance."
        }"#;
        let ex: Exercise = serde_json::from_str(raw).unwrap();
        assert_eq!(ex.correct_letter, "B");
        assert_eq!(ex.options.len(), 4);
    }

    #[test]
    fn podcast_line_speaker_uses_capitalized_names() {
        let raw = r#"{"speaker": "Host", "text": "Welcome back."}"#;
        let line: PodcastLine = serde_json::from_str(raw).unwrap();
        assert_eq!(line.speaker, Speaker::Host);
    }

    #[test]
    fn golden_sentence_id_defaults_to_empty() {
        let raw = r#"{"sentence": "To be.", "translation": "存在。"}"#;
        let s: GoldenSentence = serde_json::from_str(raw).unwrap();
        assert!(s.id.is_empty());
    }
}
