//! Error types for the food-item API client.
//!
//! # Design
//! Two kinds only. `ValidationError` is the pre-flight check on user input;
//! when it fires, no request is ever built. `ApiError` covers everything that
//! can go wrong once a request leaves the client: transport failure, any
//! non-2xx status (carried uniformly in `Http` with the code and body for
//! diagnostics; callers never branch on specific statuses), and JSON
//! encode/decode failures.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by `FoodItemClient` and the request executor.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS failure, etc.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The request payload could not be encoded to JSON.
    #[error("request encoding failed: {0}")]
    Encode(String),
}

/// Pre-flight rejection of a new food item. The messages are user-facing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    EmptyName,

    #[error("Quantity must be greater than 0")]
    ZeroQuantity,

    #[error("Expiry date cannot be in the past")]
    PastExpiry(NaiveDate),
}
