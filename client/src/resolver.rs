//! The abstract turn-resolution boundary

use async_trait::async_trait;

use machop_protocol::{RosterBundle, TurnRequest, TurnResponse};

use crate::api::GameClient;
use crate::error::ClientError;

/// The external battle-compute capability.
///
/// All combat math lives behind this boundary. Implementations return
/// authoritative state and the session adopts it verbatim; nothing here may
/// be assumed deterministic. [`GameClient`] implements it over HTTP; tests
/// substitute scripted doubles.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Fetch a fresh pair of rosters for a new battle
    async fn start_battle(&self) -> Result<RosterBundle, ClientError>;

    /// Resolve one turn from the given authoritative snapshot
    async fn resolve_turn(&self, request: TurnRequest) -> Result<TurnResponse, ClientError>;
}

#[async_trait]
impl Resolver for GameClient {
    async fn start_battle(&self) -> Result<RosterBundle, ClientError> {
        self.start_game().await
    }

    async fn resolve_turn(&self, request: TurnRequest) -> Result<TurnResponse, ClientError> {
        GameClient::resolve_turn(self, &request).await
    }
}
