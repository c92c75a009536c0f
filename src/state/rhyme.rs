//! Rhyme request state — the single request/response state machine.
//!
//! DESIGN
//! ======
//! The four ad-hoc flags of a naive form (input, result, loading, error)
//! collapse into one [`RequestPhase`] value so exactly one of
//! idle/loading/success/failed holds at any time. A `request_seq` token
//! pairs each in-flight request with its outcome; a response arriving
//! after a newer submit is dropped instead of overwriting it.

#[cfg(test)]
#[path = "rhyme_test.rs"]
mod rhyme_test;

/// Phase of the rhyme request lifecycle. Exactly one variant holds at a
/// time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request issued yet.
    #[default]
    Idle,
    /// A webhook call is in flight.
    Loading,
    /// The webhook returned rhyme text.
    Success(String),
    /// Validation or the webhook call failed; carries the user-facing
    /// message.
    Failed(String),
}

/// State machine for the generate-rhyme flow.
#[derive(Clone, Debug, Default)]
pub struct RhymeState {
    pub phase: RequestPhase,
    request_seq: u64,
}

impl RhymeState {
    /// Start a new request: clears any prior result or error, enters
    /// `Loading`, and returns the token the eventual outcome must
    /// present. A second `begin` supersedes the first request; the
    /// superseded outcome becomes a stale no-op.
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.phase = RequestPhase::Loading;
        self.request_seq
    }

    /// Apply a successful response. Ignored (returns `false`) when
    /// `token` no longer matches the latest request.
    pub fn resolve_success(&mut self, token: u64, text: String) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = RequestPhase::Success(text);
        true
    }

    /// Apply a failed response. Same staleness rule as
    /// [`RhymeState::resolve_success`].
    pub fn resolve_failure(&mut self, token: u64, message: String) -> bool {
        if token != self.request_seq {
            return false;
        }
        self.phase = RequestPhase::Failed(message);
        true
    }

    /// Reject input before any network call is made. Also invalidates any
    /// in-flight request so its late outcome cannot clobber the message.
    pub fn fail_validation(&mut self, message: String) {
        self.request_seq += 1;
        self.phase = RequestPhase::Failed(message);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Loading
    }

    /// Generated rhyme text, when the last request succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Success(text) => Some(text),
            _ => None,
        }
    }

    /// User-facing error message, when the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
