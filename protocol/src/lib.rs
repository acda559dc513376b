//! Wire types for the battle-compute HTTP API.
//!
//! Two endpoints make up the whole contract with the battle-compute service:
//!
//! - `GET /api/game/start` → a [`RosterBundle`] of [`CombatantSeed`]s
//! - `POST /api/game/turn` carrying a [`TurnRequest`], answered by a
//!   [`TurnResponse`]
//!
//! The service is authoritative for all combat resolution. This crate only
//! describes what travels on the wire and which responses break the contract
//! ([`ResponseError`]); it performs no combat math of its own.

use thiserror::Error;

pub mod game;
pub mod turn;

pub use game::{CombatantSeed, RosterBundle, Species};
pub use turn::{Combatant, TurnRequest, TurnResponse, Winner};

/// A turn response that violates the resolution contract.
///
/// A rejected response must not be adopted; the caller keeps its
/// last-known-good state and may retry the same turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// Non-terminal responses must advance the turn counter.
    #[error("turn counter did not advance: sent {sent}, received {received}")]
    TurnNotAdvanced { sent: u32, received: u32 },

    /// No response may move the turn counter backwards.
    #[error("turn counter went backwards: sent {sent}, received {received}")]
    TurnRewound { sent: u32, received: u32 },

    /// A response with `gameOver` set must name a winner.
    #[error("terminal response carries no winner")]
    MissingWinner,

    /// Teams are echoed back member-for-member, never resized.
    #[error("{side} team changed size: sent {sent}, received {received}")]
    TeamResized {
        side: &'static str,
        sent: usize,
        received: usize,
    },
}

/// Error payload the service attaches to non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// Parse an error body, if the payload has the expected shape
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_body_parse() {
        let body = r#"{"error": "No data provided."}"#;
        let parsed = ApiErrorBody::parse(body).unwrap();
        assert_eq!(parsed.error, "No data provided.");
    }

    #[test]
    fn test_api_error_body_rejects_other_shapes() {
        assert!(ApiErrorBody::parse("").is_none());
        assert!(ApiErrorBody::parse("<html>502</html>").is_none());
        assert!(ApiErrorBody::parse(r#"{"message": "nope"}"#).is_none());
    }
}
