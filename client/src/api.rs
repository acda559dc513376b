//! HTTP client for the battle-compute service

use machop_protocol::{ApiErrorBody, RosterBundle, TurnRequest, TurnResponse};

use crate::error::ClientError;

/// Default base URL of a locally running game service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client for the two game endpoints.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct GameClient {
    http: reqwest::Client,
    base_url: String,
}

impl GameClient {
    /// Create a client against `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing a preconfigured `reqwest::Client`
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/game/start`: fetch fresh rosters for both sides
    pub async fn start_game(&self) -> Result<RosterBundle, ClientError> {
        let url = format!("{}/api/game/start", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `POST /api/game/turn`: resolve one turn from the given snapshot
    pub async fn resolve_turn(&self, request: &TurnRequest) -> Result<TurnResponse, ClientError> {
        let url = format!("{}/api/game/turn", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`ClientError::Api`], preferring the service's `{"error"}` message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ApiErrorBody::parse(&body)
            .map(|payload| payload.error)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        tracing::warn!(
            status = status.as_u16(),
            message = %message,
            "game service rejected request"
        );
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
