//! Client configuration options.
//!
//! A [`ClientOption`] is a single mutation of a [`DnbClient`](crate::DnbClient)'s
//! configuration. Options are applied in the order they are given, so a later
//! option overrides an earlier one for the same setting.

use std::fmt;

/// API key and secret used for the token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The API key (Basic auth user).
    pub key: String,
    /// The API secret (Basic auth password).
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// A single client configuration change.
///
/// # Example
///
/// ```no_run
/// use dnbapi::{ClientOption, DnbClient, BASE_URL_V3};
///
/// # fn example() -> dnbapi::Result<()> {
/// let client = DnbClient::new([
///     ClientOption::base_url(BASE_URL_V3),
///     ClientOption::credentials("my-key", "my-secret"),
/// ])?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub enum ClientOption {
    /// Override the API base URL (e.g. `https://plus.dnb.com/v3`).
    BaseUrl(String),
    /// Credentials for the token exchange.
    Credentials(Credentials),
    /// A bearer token issued earlier by the token exchange.
    BearerToken(String),
    /// Use a caller-built HTTP client (timeouts, proxies, ...).
    HttpClient(reqwest::Client),
}

impl ClientOption {
    pub fn base_url(url: impl Into<String>) -> Self {
        ClientOption::BaseUrl(url.into())
    }

    pub fn credentials(key: impl Into<String>, secret: impl Into<String>) -> Self {
        ClientOption::Credentials(Credentials::new(key, secret))
    }

    pub fn bearer_token(token: impl Into<String>) -> Self {
        ClientOption::BearerToken(token.into())
    }

    pub fn http_client(client: reqwest::Client) -> Self {
        ClientOption::HttpClient(client)
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientOption::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
            ClientOption::Credentials(creds) => f.debug_tuple("Credentials").field(creds).finish(),
            ClientOption::BearerToken(_) => f.write_str("BearerToken(..)"),
            ClientOption::HttpClient(_) => f.write_str("HttpClient(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_secrets() {
        let creds = format!("{:?}", ClientOption::credentials("key-1", "s3cret"));
        assert!(creds.contains("key-1"));
        assert!(!creds.contains("s3cret"));

        let token = format!("{:?}", ClientOption::bearer_token("tok-123"));
        assert!(!token.contains("tok-123"));
    }
}
