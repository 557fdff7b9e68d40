//! Events: REST access, the admin editor and its shift patcher

mod editor;
mod patch;
mod types;

use reqwest::Client;

use crate::auth::TokenStore;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use editor::*;
pub use patch::*;
pub use types::*;

/// Client for the `/events` endpoints
#[derive(Debug, Clone)]
pub struct EventsClient {
    /// The base URL of the portal backend
    url: String,

    /// HTTP client
    client: Client,

    options: ClientOptions,

    tokens: TokenStore,
}

impl EventsClient {
    pub fn new(url: &str, client: Client, options: ClientOptions, tokens: TokenStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            options,
            tokens,
        }
    }

    fn get_url(&self, path: &str) -> String {
        self.options.endpoint(&self.url, path)
    }

    fn require_token(&self) -> Result<String, Error> {
        self.tokens.bearer().ok_or(Error::Unauthorized)
    }

    /// Fetch every event visible to the current user
    pub async fn list(&self) -> Result<Vec<Event>, Error> {
        let url = self.get_url("/events");
        let token = self.tokens.bearer();

        Fetch::get(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .maybe_bearer_auth(token.as_deref())
            .execute::<Vec<Event>>()
            .await
    }

    /// Save an event's top-level fields. Returns the server's confirmation text.
    pub async fn update(&self, event_id: u64, update: &EventUpdate) -> Result<String, Error> {
        let url = self.get_url(&format!("/events/{}", event_id));
        let token = self.require_token()?;

        Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .bearer_auth(&token)
            .json(update)?
            .execute::<String>()
            .await
    }

    /// Delete an event. Returns the server's confirmation text.
    pub async fn delete(&self, event_id: u64) -> Result<String, Error> {
        let url = self.get_url(&format!("/events/{}", event_id));
        let token = self.require_token()?;

        Fetch::delete(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .bearer_auth(&token)
            .execute::<String>()
            .await
    }
}
