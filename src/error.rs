//! Error types for D&B Direct+ API operations.

use std::fmt;

use thiserror::Error;

/// The API operation a failure happened in.
///
/// Every public client operation wraps its failure in [`DnbError::Failed`]
/// carrying one of these, so callers can tell which call failed without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Token exchange (`POST /token`).
    GetToken,
    /// Criteria search (`POST /search/criteria`).
    CriteriaSearch,
    /// Company list search (`POST /search/companyList`).
    CompanyListSearch,
    /// Typeahead search (`GET /search/typeahead`).
    TypeaheadSearch,
    /// Contact search (`POST /search/contact`).
    ContactSearch,
    /// Contact lookup by id, email or DUNS (`GET /search/contact`).
    GetContacts,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sentinel = match self {
            Operation::GetToken => "get token failed",
            Operation::CriteriaSearch => "search criteria failed",
            Operation::CompanyListSearch => "company list search failed",
            Operation::TypeaheadSearch => "typeahead search failed",
            Operation::ContactSearch => "contact search failed",
            Operation::GetContacts => "get contacts failed",
        };
        f.write_str(sentinel)
    }
}

/// Errors that can occur during D&B API operations.
#[derive(Debug, Error)]
pub enum DnbError {
    /// Configuration is missing or incomplete.
    #[error("D&B configuration required: {0}")]
    ConfigMissing(String),

    /// The API answered with a non-200 status.
    #[error("D&B API error (HTTP {status_code}): {message}")]
    ApiError {
        message: String,
        code: Option<String>,
        status_code: u16,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON encoding or decoding error.
    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// A client operation failed.
    #[error("{operation}: {source}")]
    Failed {
        operation: Operation,
        #[source]
        source: Box<DnbError>,
    },
}

impl DnbError {
    /// Wrap this error with the operation it happened in.
    ///
    /// An error that is already wrapped keeps its original operation.
    #[must_use]
    pub fn during(self, operation: Operation) -> Self {
        match self {
            DnbError::Failed { .. } => self,
            other => DnbError::Failed {
                operation,
                source: Box::new(other),
            },
        }
    }

    /// The operation this error was raised by, if it has been wrapped.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            DnbError::Failed { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The HTTP status returned by the API, if the failure was a non-200 reply.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DnbError::ApiError { status_code, .. } => Some(*status_code),
            DnbError::Failed { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// The vendor's message, if the API returned a decodable error envelope.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            DnbError::ApiError { message, .. } => Some(message),
            DnbError::Failed { source, .. } => source.api_message(),
            _ => None,
        }
    }

    /// True for token exchange failures and HTTP 401 replies.
    pub fn is_authentication_error(&self) -> bool {
        self.operation() == Some(Operation::GetToken) || self.status_code() == Some(401)
    }
}

/// Result type alias for D&B operations.
pub type Result<T> = core::result::Result<T, DnbError>;
