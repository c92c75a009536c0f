//! Wire DTOs for the rhyme webhook.
//!
//! DESIGN
//! ======
//! The webhook is a third-party automation flow, so the response schema is
//! loose: rhyme text may arrive under `rima` or under `output`, and extra
//! fields are ignored rather than rejected.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload sent to the webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RhymeRequest {
    /// Trimmed user keywords, free text.
    pub words: String,
}

/// Webhook response body. Either field may carry the rhyme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RhymeResponse {
    #[serde(default)]
    pub rima: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

impl RhymeResponse {
    /// Rhyme text carried by this response: `rima` wins over `output`,
    /// and empty strings count as absent.
    #[must_use]
    pub fn rhyme_text(&self) -> Option<&str> {
        non_empty(self.rima.as_deref()).or_else(|| non_empty(self.output.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Failure modes of the generate-rhyme call. The UI collapses all of
/// them into one generic retry message; the variants exist for logging.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Webhook answered with a non-success HTTP status.
    #[error("webhook returned status {0}")]
    Status(u16),
    /// The request never completed (network failure, CORS, abort).
    #[error("request failed: {0}")]
    Network(String),
    /// The response body was not the expected JSON object.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    /// The body parsed but carried neither `rima` nor `output`.
    #[error("response carries no rhyme text")]
    MissingRhyme,
}
