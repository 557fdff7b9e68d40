//! HTTP request helper speaking the backend's `{data}` / `{error, details}` envelope

use log::{debug, error, warn};
use reqwest::{header::{HeaderMap, HeaderValue}, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Rejected response body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add bearer authentication when a token is available
    pub fn maybe_bearer_auth(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.bearer_auth(token),
            None => self,
        }
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    fn build(&self) -> Result<RequestBuilder, Error> {
        let url = Url::parse(&self.url)?;

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and unwrap the `data` member of the response
    pub async fn execute<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.url);

        let response = req.send().await.map_err(|e| {
            error!("{} {} failed: {}", self.method, self.url, e);
            Error::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = rejection(status, &bytes);
            warn!("{} {} rejected with {}: {}", self.method, self.url, status, err);
            return Err(err);
        }

        let envelope: DataEnvelope<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    /// Execute the request, checking only that it succeeded
    pub async fn execute_unit(&self) -> Result<(), Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.url);

        let response = req.send().await.map_err(|e| {
            error!("{} {} failed: {}", self.method, self.url, e);
            Error::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            let err = rejection(status, &bytes);
            warn!("{} {} rejected with {}: {}", self.method, self.url, status, err);
            return Err(err);
        }

        Ok(())
    }
}

fn rejection(status: StatusCode, body: &[u8]) -> Error {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return Error::api(status.as_u16(), envelope.error, envelope.details);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    let message = if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        text
    };
    Error::api(status.as_u16(), message, None)
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_envelope() {
        let err = rejection(
            StatusCode::BAD_REQUEST,
            br#"{"error":"Name taken","details":"duplicate"}"#,
        );
        match err {
            Error::Api { status, message, details } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Name taken");
                assert_eq!(details.as_deref(), Some("duplicate"));
            }
            other => panic!("Expected Error::Api, got {:?}", other),
        }
    }

    #[test]
    fn bare_unauthorized_maps_to_unauthorized() {
        assert!(matches!(
            rejection(StatusCode::UNAUTHORIZED, b"nope"),
            Error::Unauthorized
        ));
    }

    #[test]
    fn empty_body_falls_back_to_reason() {
        match rejection(StatusCode::INTERNAL_SERVER_ERROR, b"") {
            Error::Api { message, details, .. } => {
                assert_eq!(message, "Internal Server Error");
                assert!(details.is_none());
            }
            other => panic!("Expected Error::Api, got {:?}", other),
        }
    }
}
