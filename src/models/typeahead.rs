//! Typeahead search.
//!
//! Finds companies from a partial name, without a full set of criteria.
//! Parameters travel in the query string.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{decode, DnbClient, TYPEAHEAD_SEARCH_PATH};
use crate::error::{Operation, Result};
use crate::models::common::TransactionDetail;
use crate::models::company::CompanyCandidate;

/// Query parameters for a typeahead search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeaheadQuery {
    /// 2 to 30 characters matched against the primary or a tradestyle name.
    pub search_term: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(rename = "countryISOAlpha2Code")]
    pub country_iso_alpha2_code: Option<String>,
    pub address_region: Option<String>,
    pub address_locality: Option<String>,
    pub postal_code: Option<String>,
    pub street_address_line1: Option<String>,
    pub is_out_of_business: Option<bool>,
    pub candidate_maximum_quantity: Option<u32>,
    pub customer_reference: Option<String>,
}

impl TypeaheadQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Default::default()
        }
    }

    /// Restrict the search to one country.
    #[must_use]
    pub fn country(mut self, iso_alpha2_code: impl Into<String>) -> Self {
        self.country_iso_alpha2_code = Some(iso_alpha2_code.into());
        self
    }
}

/// Reply to a typeahead search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeaheadSearch {
    pub transaction_detail: TransactionDetail,
    pub inquiry_detail: Option<TypeaheadQuery>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_candidates: Vec<CompanyCandidate>,
}

impl DnbClient {
    /// Typeahead search: quickly find companies by a partial name.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::TypeaheadSearch`] wrapping the HTTP, status or
    /// decode failure.
    #[tracing::instrument(skip(self, query))]
    pub async fn typeahead_search(&self, query: &TypeaheadQuery) -> Result<TypeaheadSearch> {
        async {
            let body = self.get_with_query(TYPEAHEAD_SEARCH_PATH, query).await?;
            decode(&body)
        }
        .await
        .map_err(|e| e.during(Operation::TypeaheadSearch))
    }
}
