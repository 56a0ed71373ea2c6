//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated PREXCOL API base URL.
///
/// The base URL points at the API root (typically ending in `/api`) and
/// endpoint paths are joined under it.
///
/// URLs must use HTTPS; HTTP is allowed only for localhost, which covers
/// local development backends.
///
/// # Example
///
/// ```
/// use prexcol_core::ApiUrl;
///
/// let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
/// assert_eq!(api.endpoint("auth/login/"),
///            "http://127.0.0.1:8000/api/auth/login/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for an endpoint path under the API root.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim before joining
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme (e.g., "https", "http").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://api.prexcol.example/api").unwrap();
        assert_eq!(api.host(), Some("api.prexcol.example"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:8000/api").unwrap();
        assert_eq!(api.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_construction() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(
            api.endpoint("auth/login/"),
            "http://127.0.0.1:8000/api/auth/login/"
        );
    }

    #[test]
    fn endpoint_with_leading_slash() {
        let api = ApiUrl::new("http://127.0.0.1:8000/api").unwrap();
        assert_eq!(
            api.endpoint("/productos/"),
            "http://127.0.0.1:8000/api/productos/"
        );
    }

    #[test]
    fn normalizes_trailing_slash_in_endpoint() {
        let api = ApiUrl::new("https://api.prexcol.example/").unwrap();
        assert_eq!(
            api.endpoint("tiendas/"),
            "https://api.prexcol.example/tiendas/"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://api.prexcol.example").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/auth/login/").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let api = ApiUrl::new("https://api.prexcol.example/api").unwrap();
        let json = serde_json::to_string(&api).unwrap();
        let back: ApiUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(api, back);
    }
}
