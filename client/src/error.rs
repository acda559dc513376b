//! Client error taxonomy

use thiserror::Error;

/// A failed exchange with the game service.
///
/// The battle state machine is never advanced on error, so every variant is
/// recoverable by re-triggering the same action.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: connect, send or body decode
    #[error("request to the game service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status and (usually) an
    /// `{"error": ...}` payload
    #[error("game service error ({status}): {message}")]
    Api { status: u16, message: String },
}
