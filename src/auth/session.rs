//! Identity token held for the signed-in user

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::Error;

/// Claims read from an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub exp: Option<i64>,
}

/// Session data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The raw identity token sent as bearer credentials
    pub id_token: String,

    /// Subject of the token, when it is a JWT
    pub user_id: Option<String>,

    /// The expiry timestamp in seconds since the epoch
    pub expires_at: Option<i64>,
}

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs() as i64
}

impl Session {
    /// Read the claims of a JWT identity token.
    ///
    /// The signature is not checked; only the backend can do that.
    pub fn decode(id_token: &str) -> Result<Self, Error> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(id_token, &DecodingKey::from_secret(&[]), &validation)?;

        Ok(Self {
            id_token: id_token.to_string(),
            user_id: data.claims.sub,
            expires_at: data.claims.exp,
        })
    }

    /// Wrap a token, reading its claims when it is a JWT and treating it as opaque otherwise
    pub fn from_token(id_token: &str) -> Self {
        Self::decode(id_token).unwrap_or_else(|_| Self {
            id_token: id_token.to_string(),
            user_id: None,
            expires_at: None,
        })
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => now() >= expires_at,
            None => false,
        }
    }
}
