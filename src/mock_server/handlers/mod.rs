//! HTTP request handlers for the mock server.

pub mod companies;
pub mod contacts;
pub mod token;
pub mod typeahead;

pub use companies::*;
pub use contacts::*;
pub use token::*;
pub use typeahead::*;

use std::sync::Arc;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::TransactionDetail;

pub(crate) type SharedState = Arc<RwLock<MockState>>;

/// Page size D&B uses when the request does not set one.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 10;

/// Transaction metadata for a reply.
pub(crate) fn transaction(transaction_id: String) -> TransactionDetail {
    TransactionDetail {
        transaction_id,
        transaction_timestamp: Some(Utc::now()),
        in_language: Some("en-US".to_string()),
        service_version: Some("1".to_string()),
    }
}

/// Direct+ v1 error reply: `{"transactionDetail": .., "error": {"errorCode": .., "errorMessage": ..}}`.
pub(crate) fn api_error(
    status: StatusCode,
    transaction_id: String,
    code: &str,
    message: &str,
) -> Response {
    (
        status,
        Json(serde_json::json!({
            "transactionDetail": transaction(transaction_id),
            "error": {
                "errorCode": code,
                "errorMessage": message
            }
        })),
    )
        .into_response()
}

/// Bearer token from the `Authorization` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Reject the request unless its bearer token is accepted.
pub(crate) fn check_token(state: &mut MockState, headers: &HeaderMap) -> Result<(), Response> {
    if state.accepts_token(bearer_token(headers)) {
        return Ok(());
    }
    Err(api_error(
        StatusCode::UNAUTHORIZED,
        state.next_transaction_id(),
        "00004",
        "Access token is invalid or has expired",
    ))
}

/// Number of items before a 1-based page.
pub(crate) fn page_offset(page: Option<u32>, page_size: Option<u32>) -> u64 {
    let page = u64::from(page.unwrap_or(1).max(1));
    let size = u64::from(page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1));
    (page - 1).saturating_mul(size)
}

/// Slice one 1-based page out of the matches.
pub(crate) fn paginate<T: Clone>(items: &[&T], page: Option<u32>, page_size: Option<u32>) -> Vec<T> {
    let offset = usize::try_from(page_offset(page, page_size)).unwrap_or(usize::MAX);
    let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;

    items
        .iter()
        .skip(offset)
        .take(size)
        .map(|item| (*item).clone())
        .collect()
}

/// Display sequence of each item on a page, starting after the page offset.
/// Sequences past `u32::MAX` are omitted.
pub(crate) fn display_sequences(
    page: Option<u32>,
    page_size: Option<u32>,
) -> impl Iterator<Item = Option<u32>> {
    let offset = page_offset(page, page_size);
    (1u64..).map(move |n| u32::try_from(offset.saturating_add(n)).ok())
}
