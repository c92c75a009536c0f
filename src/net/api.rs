//! Webhook client for rhyme generation.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the call is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GenerateError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::RhymeResponse;
#[cfg(feature = "hydrate")]
use super::types::RhymeRequest;

/// Fixed third-party automation webhook that turns keywords into rhymes.
pub const WEBHOOK_URL: &str = "https://kennedy-torres.app.n8n.cloud/webhook-test/URLDOVIDEO";

#[cfg(any(test, feature = "hydrate"))]
fn rhyme_from_response(body: &RhymeResponse) -> Result<String, GenerateError> {
    body.rhyme_text()
        .map(str::to_owned)
        .ok_or(GenerateError::MissingRhyme)
}

/// POST the trimmed keywords to the webhook and extract the rhyme text.
///
/// # Errors
///
/// Returns a [`GenerateError`] on non-success status, transport failure,
/// malformed body, or a body without rhyme text. Callers surface all of
/// them as a single generic retry message.
pub async fn generate_rhyme(words: &str) -> Result<String, GenerateError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RhymeRequest {
            words: words.to_owned(),
        };
        log::info!("posting keywords to rhyme webhook");
        let resp = gloo_net::http::Request::post(WEBHOOK_URL)
            .json(&payload)
            .map_err(|e| GenerateError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(GenerateError::Status(resp.status()));
        }
        let body: RhymeResponse = resp
            .json()
            .await
            .map_err(|e| GenerateError::MalformedBody(e.to_string()))?;
        rhyme_from_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = words;
        Err(GenerateError::Network("not available on server".to_owned()))
    }
}
