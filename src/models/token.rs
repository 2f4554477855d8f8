//! Token exchange.
//!
//! Direct+ issues short-lived bearer tokens in exchange for an API key and
//! secret sent with HTTP Basic auth.

use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use crate::client::{decode, DnbClient, TOKEN_PATH};
use crate::error::{DnbError, Operation, Result};
use crate::options::ClientOption;

/// A bearer token issued by the token endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds (`expiresIn` on v2, `expires_in` on v3).
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

impl DnbClient {
    /// Exchange the configured credentials for a bearer token string.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::GetToken`] when no credentials are configured,
    /// the endpoint answers with a non-200 status, or the reply is malformed.
    pub async fn get_token(&self) -> Result<String> {
        self.request_token().await.map(|token| token.access_token)
    }

    /// Exchange the configured credentials for a bearer token.
    ///
    /// Same as [`get_token`](Self::get_token) but returns the token's type and
    /// lifetime as well.
    #[tracing::instrument(skip(self))]
    pub async fn request_token(&self) -> Result<AccessToken> {
        self.exchange_credentials()
            .await
            .map_err(|e| e.during(Operation::GetToken))
    }

    /// Exchange credentials and return a copy of this client that uses the
    /// issued token for subsequent calls.
    pub async fn authenticated(&self) -> Result<Self> {
        let token = self.get_token().await?;
        self.with_options([ClientOption::BearerToken(token)])
    }

    async fn exchange_credentials(&self) -> Result<AccessToken> {
        let credentials = self.credentials().ok_or_else(|| {
            DnbError::ConfigMissing("API key and secret are required to request a token".to_string())
        })?;

        let url = self.endpoint(TOKEN_PATH)?;
        let request = self
            .http()
            .post(url)
            .basic_auth(&credentials.key, Some(&credentials.secret))
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")]);

        let body = self.execute(request).await?;
        let token: AccessToken = decode(&body)?;
        tracing::debug!(expires_in = ?token.expires_in, "token issued");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_v3_shape() {
        let json = r#"{"access_token": "tok", "token_type": "Bearer", "expires_in": 3600}"#;
        let token: AccessToken = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(token.access_token, "tok");
        assert_eq!(token.token_type.as_deref(), Some("Bearer"));
        assert_eq!(token.expires_in, Some(3600));
    }

    #[test]
    fn test_access_token_v2_shape() {
        let json = r#"{"access_token": "tok", "expiresIn": 86400}"#;
        let token: AccessToken = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(token.expires_in, Some(86400));
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_access_token_debug_hides_token() {
        let token = AccessToken {
            access_token: "super-secret".to_string(),
            token_type: None,
            expires_in: None,
        };
        assert!(!format!("{token:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn test_get_token_without_credentials_fails_locally() {
        let client = DnbClient::new([ClientOption::base_url("http://127.0.0.1:9")]).unwrap();
        let err = client.get_token().await.unwrap_err();
        assert_eq!(err.operation(), Some(Operation::GetToken));
        assert!(err.is_authentication_error());
        assert!(err.to_string().starts_with("get token failed"));
    }
}
