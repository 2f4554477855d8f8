//! Typeahead endpoint handler.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::{api_error, check_token, transaction, SharedState};
use crate::{CompanyCandidate, TypeaheadQuery, TypeaheadSearch};

/// Shortest search term D&B accepts.
const MIN_TERM_LENGTH: usize = 2;

/// GET /search/typeahead
pub async fn typeahead_search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<TypeaheadQuery>,
) -> Response {
    let mut state = state.write().await;

    if let Err(rejection) = check_token(&mut state, &headers) {
        return rejection;
    }

    let transaction_id = state.next_transaction_id();
    if query.search_term.chars().count() < MIN_TERM_LENGTH {
        return api_error(
            StatusCode::BAD_REQUEST,
            transaction_id,
            "40105",
            "searchTerm must be at least 2 characters",
        );
    }

    let matches = state.typeahead(&query);
    let limit = query
        .candidate_maximum_quantity
        .map_or(usize::MAX, |max| max as usize);
    let returned: Vec<_> = matches.iter().take(limit).collect();

    let reply = TypeaheadSearch {
        transaction_detail: transaction(transaction_id),
        candidates_matched_quantity: Some(matches.len() as u64),
        candidates_returned_quantity: Some(returned.len() as u64),
        search_candidates: returned
            .into_iter()
            .zip(1..)
            .map(|(org, sequence)| CompanyCandidate {
                display_sequence: Some(sequence),
                organization: (*org).clone(),
            })
            .collect(),
        inquiry_detail: Some(query),
    };

    (StatusCode::OK, Json(reply)).into_response()
}
