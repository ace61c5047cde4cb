//! Engine error taxonomy.
//!
//! Only collaborator failures are errors. Malformed record fields are
//! coerced at deserialization, stale responses are dropped silently, and
//! empty criteria are valid identity filters; none of those surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned status {code}")]
    Status { code: u16 },

    #[error("failed to decode remote response: {0}")]
    Decode(#[from] serde_json::Error),
}
