//! HTTP client for the players API

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ErrorResponse;
use crate::storage::{DeleteConfirmation, NewPlayer, Player, PlayerUpdate};
use crate::{PlayerError, PlayerId, Result, SERVICE_URL_ENV_VAR};

/// Collection URL used when neither `--url` nor `PLAYER_DIRECTORY_URL` is set.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/players/";

/// Resolve the service URL from option or environment variable
pub fn resolve_service_url(url: Option<String>) -> String {
    url.or_else(|| {
        std::env::var(SERVICE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
    })
    .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

/// Thin wrapper over the six player endpoints
#[derive(Debug, Clone)]
pub struct PlayerApiClient {
    client: Client,
    base_url: Url,
}

impl PlayerApiClient {
    /// `base_url` points at the players collection, e.g.
    /// `http://127.0.0.1:8000/players/`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|e| PlayerError::InvalidUrl {
            url: normalized.clone(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PlayerError::InvalidUrl {
                url: normalized,
                message: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let res = self.client.get(self.base_url.clone()).send().await?;
        decode(res).await
    }

    pub async fn get_player(&self, id: PlayerId) -> Result<Player> {
        let url = self.endpoint(&[&id.to_string()])?;
        decode(self.client.get(url).send().await?).await
    }

    pub async fn get_players_by_team(&self, team: &str) -> Result<Vec<Player>> {
        let url = self.endpoint(&["team", team])?;
        decode(self.client.get(url).send().await?).await
    }

    pub async fn create_player(&self, player: &NewPlayer) -> Result<Player> {
        let res = self
            .client
            .post(self.base_url.clone())
            .json(player)
            .send()
            .await?;
        decode(res).await
    }

    pub async fn update_player(&self, id: PlayerId, update: &PlayerUpdate) -> Result<Player> {
        let url = self.endpoint(&[&id.to_string()])?;
        decode(self.client.put(url).json(update).send().await?).await
    }

    pub async fn delete_player(&self, id: PlayerId) -> Result<DeleteConfirmation> {
        let url = self.endpoint(&[&id.to_string()])?;
        decode(self.client.delete(url).send().await?).await
    }

    /// Append percent-encoded path segments to the collection URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlayerError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decode a success body, or turn the error body into [`PlayerError::Api`]
async fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }

    let text = res.text().await?;
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(PlayerError::Api {
        status: status.as_u16(),
        message,
    })
}
