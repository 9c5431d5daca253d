//! Search endpoint URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use hnfeed_core::Error;
use hnfeed_core::error::InvalidInputError;

/// Base URL of the public HN search API.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1";

/// A validated search API base URL.
///
/// Must use HTTPS, except for loopback hosts where plain HTTP is allowed.
/// A trailing slash is ignored.
///
/// # Example
///
/// ```
/// use hnfeed_http::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://hn.algolia.com/api/v1/").unwrap();
/// assert_eq!(endpoint.method_url("search_by_date"),
///            "https://hn.algolia.com/api/v1/search_by_date");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Create a new endpoint URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::EndpointUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut url = url;
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Returns the URL for an API method below this base.
    pub fn method_url(&self, method: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, method)
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_loopback = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_loopback) {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::EndpointUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"))
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EndpointUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
