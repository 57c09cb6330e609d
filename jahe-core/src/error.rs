//! Error taxonomy for the prediction and analytics flows.
//!
//! Every error is rendered inline by the flow that hit it; the typed values
//! are still returned so callers can log or inspect them.

use thiserror::Error;

/// Shown to the user for any rejected day-count input.
pub const INVALID_DAYS_MESSAGE: &str = "Mohon masukkan jumlah hari antara 1-30";

/// Why a day-count input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("day count is empty")]
    Empty,
    #[error("day count {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("day count {0} is outside 1..=30")]
    OutOfRange(i64),
}

impl ValidationError {
    /// The message surfaced to the user, independent of the variant.
    pub fn user_message(&self) -> &'static str {
        INVALID_DAYS_MESSAGE
    }
}

/// A failed call to one of the backend endpoints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },
    /// The server answered with a non-2xx status.
    #[error("{endpoint} answered HTTP {status}")]
    Status {
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },
    /// The body was not the JSON shape the endpoint promises.
    #[error("could not decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },
    /// The body decoded but broke an invariant (e.g. mismatched series lengths).
    #[error("inconsistent {endpoint} response: {reason}")]
    Inconsistent { endpoint: String, reason: String },
}

/// Anything that stopped a flow from reaching its rendering step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
