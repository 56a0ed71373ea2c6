//! HTTP transport wrapper.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use prexcol_core::error::{AuthError, Error, HttpError, TransportError};
use prexcol_core::types::ApiUrl;

use crate::endpoints::ErrorBody;

/// Map a reqwest failure to a transport error.
pub(crate) fn into_transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Thin reqwest wrapper for API requests.
///
/// Attaches a bearer token when one is provided and parses success and
/// error bodies. Retry and refresh decisions live in
/// [`crate::client::ApiClient`]; this type sends exactly what it is asked
/// to send.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a new HTTP client for the given API root.
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prexcol/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    /// Returns the API root this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Send a request, attaching a bearer token when one is provided.
    pub async fn send<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response, Error>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.api.endpoint(path);
        debug!(%method, path, "API request");

        let mut request = self.client.request(method, &url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.headers(self.auth_headers(token));
        }

        let response = request.send().await.map_err(into_transport)?;
        trace!(status = %response.status(), "API response");
        Ok(response)
    }

    /// Parse a response body, or the error body on a non-success status.
    pub async fn expect_json<R: DeserializeOwned>(&self, response: Response) -> Result<R, Error> {
        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(into_transport)
        } else {
            Err(Error::Http(self.parse_error_response(response).await))
        }
    }

    /// Parse a login/refresh response body.
    ///
    /// Token responses are validated strictly: a success status with a body
    /// that does not carry the expected fields is an authentication error,
    /// not a transport hiccup.
    pub async fn expect_token_json<R: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<R, Error> {
        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(into_transport)?;
            serde_json::from_slice(&bytes).map_err(|e| {
                Error::Auth(AuthError::MalformedTokenResponse {
                    reason: e.to_string(),
                })
            })
        } else {
            Err(Error::Http(self.parse_error_response(response).await))
        }
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Parse an error response body.
    ///
    /// The backend answers with `{"error": ...}`, `{"detail": ...}` or
    /// `{"message": ...}` depending on the view; field-validation maps fall
    /// through to a bare status.
    async fn parse_error_response(&self, response: Response) -> HttpError {
        let status = response.status().as_u16();

        match response.json::<ErrorBody>().await {
            Ok(body) => HttpError::new(status, body.error, body.detail.or(body.message)),
            Err(_) => HttpError::new(status, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
        let client = HttpClient::new(api.clone());
        assert_eq!(client.api().as_str(), api.as_str());
    }
}
