//! D&B Direct+ API client.
//!
//! Low-level HTTP client that handles configuration, authentication headers
//! and raw requests. The endpoint operations are implemented next to their
//! request and response types in the `models` module.

use std::env;
use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{DnbError, Result};
use crate::models::ErrorResponse;
use crate::options::{ClientOption, Credentials};

/// Direct+ v1 base URL (the default).
pub const BASE_URL_V1: &str = "https://plus.dnb.com/v1";

/// Direct+ v3 base URL.
pub const BASE_URL_V3: &str = "https://plus.dnb.com/v3";

pub(crate) const TOKEN_PATH: &str = "token";
pub(crate) const CRITERIA_SEARCH_PATH: &str = "search/criteria";
pub(crate) const COMPANY_LIST_PATH: &str = "search/companyList";
pub(crate) const TYPEAHEAD_SEARCH_PATH: &str = "search/typeahead";
pub(crate) const CONTACT_SEARCH_PATH: &str = "search/contact";

const USER_AGENT: &str = concat!("dnbapi/", env!("CARGO_PKG_VERSION"));
const JSON: &str = "application/json";

/// D&B Direct+ API client.
///
/// Holds the base URL, the bearer token and the credentials used to obtain
/// one. The request payload of each call is passed to the operation itself,
/// so one client can serve concurrent calls.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use dnbapi::{ClientOption, DnbClient};
///
/// # async fn example() -> dnbapi::Result<()> {
/// // Create from environment variables
/// let client = DnbClient::from_env()?;
///
/// // Or configure manually and exchange credentials for a token
/// let client = DnbClient::new([ClientOption::credentials("key", "secret")])?
///     .authenticated()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DnbClient {
    http: Client,
    base_url: Arc<Url>,
    credentials: Option<Credentials>,
    token: String,
}

impl std::fmt::Debug for DnbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnbClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.has_token())
            .finish_non_exhaustive()
    }
}

impl DnbClient {
    /// Create a client from defaults plus the given options, applied in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL option is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(DnbError::HttpError)?;

        let mut client = Self {
            http,
            base_url: Arc::new(parse_base_url(BASE_URL_V1)?),
            credentials: None,
            token: String::new(),
        };
        client.apply(options)?;
        Ok(client)
    }

    /// Create a client from environment variables.
    ///
    /// Reads `DNB_API_TOKEN` for a pre-issued bearer token, `DNB_API_KEY` and
    /// `DNB_API_SECRET` for the token exchange, and optionally `DNB_API_URL`
    /// for the base URL (defaults to `https://plus.dnb.com/v1`).
    ///
    /// # Errors
    ///
    /// Returns an error if neither a token nor a key/secret pair is set.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        let mut options = Vec::new();
        if let Some(url) = var("DNB_API_URL") {
            options.push(ClientOption::BaseUrl(url));
        }

        let has_credentials = match (var("DNB_API_KEY"), var("DNB_API_SECRET")) {
            (Some(key), Some(secret)) => {
                options.push(ClientOption::credentials(key, secret));
                true
            }
            _ => false,
        };

        let has_token = match var("DNB_API_TOKEN") {
            Some(token) => {
                options.push(ClientOption::BearerToken(token));
                true
            }
            None => false,
        };

        if !has_credentials && !has_token {
            return Err(DnbError::ConfigMissing(
                "set DNB_API_TOKEN, or DNB_API_KEY and DNB_API_SECRET".to_string(),
            ));
        }

        Self::new(options)
    }

    /// Return a copy of this client with further options applied.
    ///
    /// This is how per-call configuration is done; `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL option is not a valid URL.
    pub fn with_options<I>(&self, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let mut client = self.clone();
        client.apply(options)?;
        Ok(client)
    }

    fn apply<I>(&mut self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        for option in options {
            match option {
                ClientOption::BaseUrl(url) => self.base_url = Arc::new(parse_base_url(&url)?),
                ClientOption::Credentials(credentials) => self.credentials = Some(credentials),
                ClientOption::BearerToken(token) => self.token = token,
                ClientOption::HttpClient(http) => self.http = http,
            }
        }
        Ok(())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub(crate) fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Resolve an endpoint path against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Make a bearer-authenticated POST request with a JSON body.
    #[tracing::instrument(skip(self, body))]
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint(path)?;
        let payload = serde_json::to_vec(body)?;

        let request = self.authorized(self.http.post(url)).body(payload);
        self.execute(request).await
    }

    /// Make a bearer-authenticated GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Vec<u8>> {
        let url = self.endpoint(path)?;

        let request = self.authorized(self.http.get(url)).query(query);
        self.execute(request).await
    }

    /// Attach the bearer token and JSON content headers.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
    }

    /// Send a request, read the whole body and map non-200 replies to errors.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await.map_err(DnbError::HttpError)?;
        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "D&B response received");

        let body = response.bytes().await.map_err(DnbError::HttpError)?;

        if status != StatusCode::OK {
            return Err(Self::api_error(status, &body));
        }

        Ok(body.to_vec())
    }

    /// Build an error from a non-200 reply, using the vendor envelope if it decodes.
    fn api_error(status: StatusCode, body: &[u8]) -> DnbError {
        let fallback = || format!("HTTP {}", status.as_u16());

        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(envelope) => {
                tracing::debug!(?envelope, "decoded D&B error envelope");
                DnbError::ApiError {
                    message: envelope.message().unwrap_or_else(fallback),
                    code: envelope.code(),
                    status_code: status.as_u16(),
                }
            }
            Err(_) => DnbError::ApiError {
                message: fallback(),
                code: None,
                status_code: status.as_u16(),
            },
        }
    }
}

/// Decode a JSON response body.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse a base URL, ensuring it ends with `/` so paths join underneath it.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let base_url_str = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };

    Ok(Url::parse(&base_url_str)?)
}
