//! Volunteer Portal client library
//!
//! State and backend access behind the Volunteering Peel portal: the admin event
//! editor and its staged shift edits, the public signup modal, the user dashboard,
//! the notification list and the route tables.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod fetch;
pub mod format;
pub mod messages;
pub mod routes;
pub mod signup;

mod busy;

use reqwest::Client;

use crate::auth::TokenStore;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::events::{Event, EventEditor, EventsClient};
use crate::messages::{MessageBox, MessageStore};
use crate::signup::{Registration, SignupClient, SignupModal};

/// The main entry point for the portal client
pub struct Portal {
    /// The base URL of the portal backend
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
    /// Identity token shared by every sub-client
    pub tokens: TokenStore,
    /// Notifications shared by every page
    pub messages: MessageStore,
}

impl Portal {
    /// Create a new portal client
    ///
    /// # Example
    ///
    /// ```
    /// use volunteer_portal::Portal;
    ///
    /// let portal = Portal::new("https://volunteeringpeel.org").unwrap();
    /// ```
    pub fn new(url: &str) -> Result<Self, Error> {
        Self::new_with_options(url, ClientOptions::default())
    }

    /// Create a new portal client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use volunteer_portal::{Portal, config::ClientOptions};
    ///
    /// let options = ClientOptions::default().with_request_timeout(Some(Duration::from_secs(5)));
    /// let portal = Portal::new_with_options("http://localhost:19876", options).unwrap();
    /// ```
    pub fn new_with_options(url: &str, options: ClientOptions) -> Result<Self, Error> {
        url::Url::parse(url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            http_client,
            options,
            tokens: TokenStore::new(),
            messages: MessageStore::new(),
        })
    }

    /// Create a client from `VOLUNTEER_PORTAL_URL` and, when set, `VOLUNTEER_PORTAL_TOKEN`
    pub fn from_env() -> Result<Self, Error> {
        let url = std::env::var("VOLUNTEER_PORTAL_URL").map_err(|_| {
            Error::config("VOLUNTEER_PORTAL_URL environment variable not found")
        })?;
        let portal = Self::new(&url)?;
        if let Ok(token) = std::env::var("VOLUNTEER_PORTAL_TOKEN") {
            portal.tokens.set(&token);
        }
        Ok(portal)
    }

    /// Get a reference to the token store
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Get a reference to the shared notification store
    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    /// Client for the event endpoints
    pub fn events(&self) -> EventsClient {
        EventsClient::new(
            &self.url,
            self.http_client.clone(),
            self.options.clone(),
            self.tokens.clone(),
        )
    }

    /// Client for the signup endpoint
    pub fn signup(&self) -> SignupClient {
        SignupClient::new(
            &self.url,
            self.http_client.clone(),
            self.options.clone(),
            self.tokens.clone(),
        )
    }

    /// Open the admin editor on an event
    pub fn edit_event(&self, original: Event) -> EventEditor {
        EventEditor::new(original, self.events(), self.messages.clone())
    }

    /// Signup modal state for an event
    pub fn signup_modal(&self, event: Event, registration: Registration) -> SignupModal {
        SignupModal::new(event, registration, self.signup(), self.messages.clone())
    }

    /// View over the shared notifications
    pub fn message_box(&self) -> MessageBox {
        MessageBox::new(self.messages.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::Portal;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::config::ClientOptions;
    pub use crate::events::{Event, EventEditor, EventFieldEdit, EditorHost, Meal, Shift, ShiftEdit};
    pub use crate::messages::{Message, MessageStore, Severity};
    pub use crate::signup::{Registration, SignupHost, SignupModal};
}
