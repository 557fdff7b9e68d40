//! Types for notifications

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Visual treatment of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Negative,
    Info,
    Warning,
}

/// A notification waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned identifier, zero until stored
    #[serde(default)]
    pub id: u64,

    /// Headline text
    pub message: String,

    /// Optional detail text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<String>,

    pub severity: Severity,
}

impl Message {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: 0,
            message: message.into(),
            more: None,
            severity,
        }
    }

    pub fn positive(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Positive)
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Negative)
    }

    /// Attach detail text
    pub fn with_more(mut self, more: Option<String>) -> Self {
        self.more = more;
        self
    }

    /// Build the negative notification shown for a failed request
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Api { message, details, .. } => {
                Self::negative(message.clone()).with_more(details.clone())
            }
            other => Self::negative(other.to_string()),
        }
    }
}

/// One row of the message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: u64,
    pub header: String,
    pub content: Option<String>,
    pub severity: Severity,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            header: message.message.clone(),
            content: message.more.clone(),
            severity: message.severity,
        }
    }
}
