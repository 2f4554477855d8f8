//! Contact search and lookup endpoint handlers.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{
    api_error, check_token, display_sequences, paginate, transaction, SharedState,
    DEFAULT_PAGE_SIZE,
};
use crate::{
    Contact, ContactCandidate, ContactInquiryDetail, ContactLookup, ContactSearch,
    ContactSearchRequest, Links,
};

/// Query parameters of a contact lookup. Exactly one must be set.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLookupQuery {
    #[serde(rename = "contactID")]
    pub contact_id: Option<String>,
    pub contact_email: Option<String>,
    pub duns: Option<String>,
}

impl ContactLookupQuery {
    fn lookup(self) -> Option<ContactLookup> {
        match (self.contact_id, self.contact_email, self.duns) {
            (Some(id), None, None) => Some(ContactLookup::Id(id)),
            (None, Some(email), None) => Some(ContactLookup::Email(email)),
            (None, None, Some(duns)) => Some(ContactLookup::Duns(duns)),
            _ => None,
        }
    }
}

fn reply(
    transaction_id: String,
    criteria: ContactSearchRequest,
    matches: &[&Contact],
) -> ContactSearch {
    let page_number = criteria.page_number.unwrap_or(1).max(1);
    let page_size = criteria.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let page = paginate(matches, criteria.page_number, criteria.page_size);

    let matched = matches.len() as u64;
    let returned = page.len() as u64;
    let last_page =
        u32::try_from(matched.div_ceil(u64::from(page_size)).max(1)).unwrap_or(u32::MAX);

    let page_link = |n: u32| format!("/search/contact?pageNumber={n}&pageSize={page_size}");
    let links = Links {
        self_link: Some(page_link(page_number)),
        first: Some(page_link(1)),
        prev: (page_number > 1).then(|| page_link(page_number - 1)),
        next: (page_number < last_page).then(|| page_link(page_number + 1)),
        last: Some(page_link(last_page)),
    };

    let sequences = display_sequences(criteria.page_number, criteria.page_size);
    ContactSearch {
        transaction_detail: transaction(transaction_id),
        inquiry_detail: Some(ContactInquiryDetail {
            criteria,
            candidates_matched_quantity: Some(matched),
            candidates_returned_quantity: Some(returned),
        }),
        candidates_matched_quantity: Some(matched),
        candidates_returned_quantity: Some(returned),
        links: Some(links),
        search_candidates: page
            .into_iter()
            .zip(sequences)
            .map(|(contact, display_sequence)| ContactCandidate {
                display_sequence,
                contact,
            })
            .collect(),
        navigators: Default::default(),
    }
}

/// POST /search/contact
pub async fn contact_search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(request): Json<ContactSearchRequest>,
) -> Response {
    let mut state = state.write().await;

    if let Err(rejection) = check_token(&mut state, &headers) {
        return rejection;
    }

    let transaction_id = state.next_transaction_id();
    let matches = state.search_contacts(&request);
    (StatusCode::OK, Json(reply(transaction_id, request, &matches))).into_response()
}

/// GET /search/contact
pub async fn lookup_contacts(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<ContactLookupQuery>,
) -> Response {
    let mut state = state.write().await;

    if let Err(rejection) = check_token(&mut state, &headers) {
        return rejection;
    }

    let transaction_id = state.next_transaction_id();
    let Some(lookup) = query.lookup() else {
        return api_error(
            StatusCode::BAD_REQUEST,
            transaction_id,
            "10002",
            "Exactly one of contactID, contactEmail or duns is required",
        );
    };

    let criteria = match &lookup {
        ContactLookup::Id(id) => ContactSearchRequest {
            contact_id: Some(id.clone()),
            ..Default::default()
        },
        ContactLookup::Email(email) => ContactSearchRequest {
            contact_email: Some(email.clone()),
            ..Default::default()
        },
        ContactLookup::Duns(duns) => ContactSearchRequest {
            duns: Some(duns.clone()),
            ..Default::default()
        },
    };

    let matches = state.lookup_contacts(&lookup);
    (StatusCode::OK, Json(reply(transaction_id, criteria, &matches))).into_response()
}
