//! Request-level error taxonomy.
//!
//! Three outcomes are surfaced to the inbound caller; per-item lookup
//! failures are recovered inside the enrichment step and never appear here.

use thiserror::Error;

/// Errors surfaced to the inbound caller.
///
/// `Internal` deliberately carries no detail: unexpected pipeline faults
/// are logged at the point of failure and degrade to this opaque variant,
/// so no internal state leaks through the response.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecommendError {
    /// Missing or malformed request input (maps to bad-request)
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Startup load failed or never ran (maps to service-unavailable)
    #[error("The recommendation engine is not ready")]
    ModelUnavailable,

    /// Unexpected pipeline fault (maps to internal error)
    #[error("Internal recommendation error")]
    Internal,
}
