//! Google Gemini backend: text generation and speech synthesis.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::LecternConfig;
use crate::error::{LecternError, Result};
use crate::util::retry::RetryPolicy;
use crate::util::timeout::with_timeout;

use super::http::{shared_client, status_to_error};
use super::{GenerateRequest, SpeechSynthesizer, TextGenerator, Voice};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    text_model: String,
    tts_model: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            text_model: crate::config::DEFAULT_TEXT_MODEL.to_string(),
            tts_model: crate::config::DEFAULT_TTS_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Build a client from resolved configuration.
    pub fn from_config(config: &LecternConfig) -> Result<Self> {
        let mut client = Self::new(config.require_api_key()?);
        if let Some(url) = config.base_url() {
            client.base_url = url.trim_end_matches('/').to_string();
        }
        client.text_model = config.text_model().to_string();
        client.tts_model = config.tts_model().to_string();
        Ok(client)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    fn build_text_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{"parts": [{"text": request.prompt}]}]
        });
        let obj = body.as_object_mut().expect("body is an object");

        let mut gen_config = serde_json::Map::new();
        if request.json {
            gen_config.insert("responseMimeType".into(), "application/json".into());
        }
        if let Some(temp) = request.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(max) = request.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if !gen_config.is_empty() {
            obj.insert(
                "generationConfig".into(),
                serde_json::Value::Object(gen_config),
            );
        }

        body
    }

    fn build_speech_body(&self, text: &str, voice: Voice) -> serde_json::Value {
        serde_json::json!({
            "contents": [{"parts": [{"text": text}]}],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": {"voiceName": voice.to_string()}
                    }
                }
            }
        })
    }

    async fn post_generate(&self, model: &str, body: &serde_json::Value) -> Result<GeminiResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let resp = shared_client().post(&url).json(body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(LecternError::Authentication(
                "Missing Gemini API key".to_string(),
            ));
        }

        let body = self.build_text_body(request);
        debug!(model = %self.text_model, json = request.json, "Gemini generate");

        let data = self
            .retry_policy
            .execute(|| with_timeout(self.timeout, self.post_generate(&self.text_model, &body)))
            .await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LecternError::api(200, "No candidates in Gemini response"))?;

        let mut text = String::new();
        for part in candidate.content.parts {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiClient {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Option<String>> {
        if self.api_key.trim().is_empty() {
            return Err(LecternError::Authentication(
                "Missing Gemini API key".to_string(),
            ));
        }

        let body = self.build_speech_body(text, voice);
        debug!(model = %self.tts_model, voice = %voice, "Gemini synthesize");

        let data = self
            .retry_policy
            .execute(|| with_timeout(self.timeout, self.post_generate(&self.tts_model, &body)))
            .await?;

        let payload = data
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.inline_data)
            .map(|d| d.data);

        Ok(payload)
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_body_sets_json_mime_type_only_when_requested() {
        let client = GeminiClient::new("k");

        let plain = client.build_text_body(&GenerateRequest::builder().prompt("hi").build());
        assert!(plain.get("generationConfig").is_none());

        let json = client
            .build_text_body(&GenerateRequest::builder().prompt("hi").json(true).build());
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn speech_body_carries_voice_name() {
        let client = GeminiClient::new("k");
        let body = client.build_speech_body("hello", Voice::Zephyr);
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Zephyr"
        );
    }

    #[test]
    fn response_parses_inline_audio_data() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "audio/pcm", "data": "AAAA"}}]}
            }]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(raw).unwrap();
        let data = resp.candidates[0].content.parts[0]
            .inline_data
            .as_ref()
            .map(|d| d.data.as_str());
        assert_eq!(data, Some("AAAA"));
    }
}
