//! Shared HTTP client and error mapping.

use std::sync::OnceLock;

use crate::error::LecternError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-200 HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> LecternError {
    match status {
        401 | 403 => LecternError::Authentication(body.to_string()),
        429 => LecternError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => LecternError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Try to parse retry-after from JSON error body
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}
