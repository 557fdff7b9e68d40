//! Error handling for the volunteer portal client

use std::fmt;
use thiserror::Error;

use crate::events::EditError;

/// Unified error type for the volunteer portal client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Identity token decoding errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The backend rejected the request
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// The backend refused the credentials, or none were available
    #[error("Not authorized")]
    Unauthorized,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A staged shift edit could not be applied
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    /// A request from the same form is still in flight
    #[error("A request is already in progress")]
    Busy,

    /// General errors
    #[error("{0}")]
    General(String),
}

/// Coarse classification used by presentation code to pick a treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend answered and said no
    Rejected,
    /// Credentials missing or refused
    Unauthorized,
    /// The request never got a usable answer
    Transport,
    /// The answer could not be understood
    Decode,
    /// Nothing left the client
    Local,
}

impl Error {
    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Create a backend rejection
    pub fn api<T: fmt::Display>(status: u16, message: T, details: Option<String>) -> Self {
        Error::Api {
            status,
            message: message.to_string(),
            details,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Api { .. } => ErrorKind::Rejected,
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::Http(e) if e.is_decode() => ErrorKind::Decode,
            Error::Http(_) => ErrorKind::Transport,
            Error::Json(_) | Error::Jwt(_) => ErrorKind::Decode,
            Error::Url(_) | Error::Config(_) | Error::Edit(_) | Error::Busy | Error::General(_) => {
                ErrorKind::Local
            }
        }
    }

    /// Extra detail text supplied by the backend, if any
    pub fn details(&self) -> Option<&str> {
        match self {
            Error::Api { details, .. } => details.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
