//! Company search endpoint handlers.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::{api_error, check_token, display_sequences, paginate, transaction, SharedState};
use crate::{
    CompanyCandidate, CompanySearch, CompanySearchRequest, NavigatorBucket, NavigatorFacet,
    Navigators, Organization,
};

/// Keys that shape the reply but do not select anything.
const PAGING_KEYS: [&str; 4] = ["pageNumber", "pageSize", "returnNavigators", "sort"];

/// Whether the request carries at least one selection criterion.
fn has_criteria(request: &CompanySearchRequest) -> bool {
    match serde_json::to_value(request) {
        Ok(serde_json::Value::Object(fields)) => fields
            .keys()
            .any(|key| !PAGING_KEYS.contains(&key.as_str())),
        _ => false,
    }
}

/// Country navigator: number of matches per country code.
fn country_navigator(matches: &[&Organization]) -> Navigators {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for org in matches {
        if let Some(code) = org.primary_address.as_ref().and_then(|a| a.country_code()) {
            *counts.entry(code.to_string()).or_default() += 1;
        }
    }

    let buckets = counts
        .into_iter()
        .map(|(code, count)| NavigatorBucket {
            query: Some(code.clone()),
            description: Some(code),
            candidates_matched_quantity: Some(count),
        })
        .collect();

    let mut navigators = Navigators::new();
    navigators.insert(
        "countryISOAlpha2Code".to_string(),
        NavigatorFacet::Buckets(buckets),
    );
    navigators
}

async fn search(state: SharedState, headers: HeaderMap, request: CompanySearchRequest) -> Response {
    let mut state = state.write().await;

    if let Err(rejection) = check_token(&mut state, &headers) {
        return rejection;
    }

    let transaction_id = state.next_transaction_id();
    if !has_criteria(&request) {
        return api_error(
            StatusCode::BAD_REQUEST,
            transaction_id,
            "10001",
            "Insufficient search criteria",
        );
    }

    let matches = state.search_organizations(&request);
    let page = paginate(&matches, request.page_number, request.page_size);
    let navigators = if request.return_navigators == Some(true) {
        country_navigator(&matches)
    } else {
        Navigators::new()
    };

    let sequences = display_sequences(request.page_number, request.page_size);
    let reply = CompanySearch {
        transaction_detail: transaction(transaction_id),
        candidates_matched_quantity: Some(matches.len() as u64),
        candidates_returned_quantity: Some(page.len() as u64),
        search_candidates: page
            .into_iter()
            .zip(sequences)
            .map(|(organization, display_sequence)| CompanyCandidate {
                display_sequence,
                organization,
            })
            .collect(),
        navigators,
        inquiry_detail: Some(request),
    };

    (StatusCode::OK, Json(reply)).into_response()
}

/// POST /search/criteria
pub async fn criteria_search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<CompanySearchRequest>,
) -> Response {
    search(state, headers, request).await
}

/// POST /search/companyList
pub async fn company_list_search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<CompanySearchRequest>,
) -> Response {
    search(state, headers, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_has_criteria_ignores_paging() {
        let paging_only = CompanySearchRequest {
            page_number: Some(2),
            page_size: Some(5),
            return_navigators: Some(true),
            ..Default::default()
        };
        assert!(!has_criteria(&paging_only));

        let with_term = CompanySearchRequest {
            search_term: Some("gorman".to_string()),
            ..paging_only
        };
        assert!(has_criteria(&with_term));
    }

    #[test]
    fn test_country_navigator_counts() {
        let us1 = Fixtures::organization("1", "A", "US");
        let us2 = Fixtures::organization("2", "B", "US");
        let gb = Fixtures::organization("3", "C", "GB");

        let navigators = country_navigator(&[&us1, &us2, &gb]);
        match navigators.get("countryISOAlpha2Code") {
            Some(NavigatorFacet::Buckets(buckets)) => {
                assert_eq!(buckets.len(), 2);
                assert_eq!(buckets[0].query.as_deref(), Some("GB"));
                assert_eq!(buckets[1].candidates_matched_quantity, Some(2));
            }
            other => panic!("unexpected navigator: {other:?}"),
        }
    }
}
