//! Search API HTTP client.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use hnfeed_core::error::{Error, ProtocolError, TransportError};

use crate::endpoint::EndpointUrl;

/// HTTP client for search API requests.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: EndpointUrl,
    timeout: Option<Duration>,
}

impl SearchClient {
    /// Create a new client for the given endpoint.
    ///
    /// `timeout` bounds each whole request; `None` leaves it unbounded.
    pub fn new(endpoint: EndpointUrl, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("hnfeed/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| TransportError::Http {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Returns the endpoint this client is configured for.
    pub fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Make a GET request to `method` with `params` as the query string.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn query<Q, R>(&self, method: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.endpoint.method_url(method);
        debug!(method, "Search query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.handle_response(response).await
    }

    /// Decode a success body, or turn the status into a protocol error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "Search response");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .map(|body| body.trim().to_string())
                .filter(|body| !body.is_empty());
            return Err(ProtocolError::new(status.as_u16(), message).into());
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_slice(&body)
            .map_err(|e| Error::from(ProtocolError::malformed(status.as_u16(), e.to_string())))
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        let err = if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self
                    .timeout
                    .map(|t| t.as_millis() as u64)
                    .unwrap_or_default(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        };
        Error::Transport(err)
    }
}
