//! Best-effort repair of malformed model JSON output.
//!
//! Model responses asked for JSON frequently arrive wrapped in markdown
//! code fences or with small syntax defects (trailing commas, missing
//! separators between adjacent objects). Parsing runs an ordered chain of
//! repair strategies until one produces valid JSON; if all fail, the caller
//! gets its fallback value instead of an error.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:json)?\s*").expect("valid regex"))
}

fn trailing_comma_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*([}\]])").expect("valid regex"))
}

fn missing_separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\}\s*\{").expect("valid regex"))
}

/// Strip markdown code fences and surrounding whitespace.
fn strip_fences(text: &str) -> String {
    fence_re().replace_all(text, "").trim().to_string()
}

/// Remove trailing commas before a closing brace or bracket.
fn strip_trailing_commas(text: &str) -> String {
    trailing_comma_re().replace_all(text, "$1").into_owned()
}

/// Insert the missing comma between adjacent objects (`} {` -> `}, {`).
fn insert_separators(text: &str) -> String {
    missing_separator_re().replace_all(text, "}, {").into_owned()
}

/// Parse model output as JSON, repairing as needed.
///
/// Returns `None` only when every strategy in the chain fails.
pub fn parse_json_lenient<T: DeserializeOwned>(text: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }

    let mut candidate = strip_fences(text);
    if let Ok(value) = serde_json::from_str(&candidate) {
        return Some(value);
    }

    candidate = strip_trailing_commas(&candidate);
    if let Ok(value) = serde_json::from_str(&candidate) {
        return Some(value);
    }

    candidate = insert_separators(&candidate);
    serde_json::from_str(&candidate).ok()
}

/// Parse model output as JSON, falling back to `fallback` when every
/// repair strategy fails. Total failure is logged, never propagated.
pub fn parse_or_default<T: DeserializeOwned>(text: &str, fallback: T) -> T {
    match parse_json_lenient(text) {
        Some(value) => value,
        None => {
            tracing::warn!(
                len = text.len(),
                "Model output was not parseable JSON; using fallback"
            );
            fallback
        }
    }
}
