//! Schema types shared by several D&B endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DisplayFromStr, PickFirst};

/// Transaction metadata returned with every D&B reply.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDetail {
    /// Unique id D&B assigns to the transaction.
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    /// When D&B processed the transaction.
    pub transaction_timestamp: Option<DateTime<Utc>>,
    /// Language of the reply (e.g. "en-US").
    pub in_language: Option<String>,
    /// Version of the service that answered.
    pub service_version: Option<String>,
}

/// A D&B code table entry (`{"description": ..., "dnbCode": ...}`).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeDescription {
    pub description: Option<String>,
    pub dnb_code: Option<i64>,
}

/// Sort order for search results.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortCriteria {
    /// Field to sort by.
    #[serde(alias = "field")]
    pub item: String,
    /// "ascending" or "descending".
    pub direction: Option<String>,
}

impl SortCriteria {
    pub fn ascending(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            direction: Some("ascending".to_string()),
        }
    }

    pub fn descending(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            direction: Some("descending".to_string()),
        }
    }
}

/// Industry codes of one classification scheme.
///
/// Used as a search filter and in contact replies, where D&B lists
/// codes and descriptions as parallel arrays.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryCodeSet {
    /// D&B code of the classification scheme (e.g. 3599 for US SIC).
    pub type_dnb_code: Option<i64>,
    pub type_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
}

/// Inclusive numeric range filter.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange<T> {
    pub minimum_value: Option<T>,
    pub maximum_value: Option<T>,
}

impl<T> ValueRange<T> {
    pub fn between(minimum_value: T, maximum_value: T) -> Self {
        Self {
            minimum_value: Some(minimum_value),
            maximum_value: Some(maximum_value),
        }
    }
}

/// Postal address as D&B returns it.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_country: Option<AddressCountry>,
    pub address_region: Option<NamedArea>,
    pub address_county: Option<NamedArea>,
    pub address_locality: Option<NamedArea>,
    pub postal_code: Option<String>,
    pub street_address: Option<StreetAddress>,
}

impl Address {
    /// Locality name, if present.
    pub fn locality(&self) -> Option<&str> {
        self.address_locality.as_ref()?.name.as_deref()
    }

    /// ISO 3166-1 alpha-2 country code, if present.
    pub fn country_code(&self) -> Option<&str> {
        self.address_country.as_ref()?.iso_alpha2_code.as_deref()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressCountry {
    pub iso_alpha2_code: Option<String>,
    pub name: Option<String>,
}

/// A region, county or locality.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedArea {
    pub name: Option<String>,
    pub abbreviated_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetAddress {
    pub line1: Option<String>,
    pub line2: Option<String>,
}

/// Result navigation links.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// One bucket of a navigator (facet) breakdown.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigatorBucket {
    /// Value to filter on to narrow the search to this bucket.
    #[serde(alias = "name")]
    pub query: Option<String>,
    pub description: Option<String>,
    /// Number of candidates in this bucket.
    #[serde(alias = "count")]
    pub candidates_matched_quantity: Option<u64>,
}

/// A navigator is either a flat list of buckets or buckets grouped by sub-facet
/// (e.g. location by country, state and city). Any other shape is kept as raw
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigatorFacet {
    Buckets(Vec<NavigatorBucket>),
    Grouped(BTreeMap<String, Vec<NavigatorBucket>>),
    Other(serde_json::Value),
}

/// Navigators keyed by facet name.
pub type Navigators = BTreeMap<String, NavigatorFacet>;

/// Inquiry echo of the lookups keyed by a single DUNS (competitors,
/// educational institutions).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DunsInquiryDetail {
    pub duns: Option<String>,
    /// Sent as a string by some service versions.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub max_results: Option<u32>,
    /// Whether results were traded up to the headquarters ("hq").
    pub trade_up: Option<String>,
    pub customer_reference: Option<String>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
}

/// Error envelope D&B returns with non-200 replies.
///
/// The shape differs across API versions: the OAuth token endpoint uses
/// `error`/`error_description`, Direct+ v1 uses `errorCode`/`errorMessage`,
/// either flat or nested under `error`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    #[serde(rename = "transactionDetail")]
    pub transaction_detail: Option<TransactionDetail>,
    pub error: Option<ErrorField>,
    pub error_description: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

/// The `error` member: a bare OAuth error code or a Direct+ error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Code(String),
    Detail(ErrorDetail),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorDetail {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// The most descriptive message present, trying each known field in turn.
    pub fn message(&self) -> Option<String> {
        let detail = self.detail();
        let bare = match &self.error {
            Some(ErrorField::Code(code)) => Some(code),
            _ => None,
        };

        self.error_description
            .as_ref()
            .or(self.error_message.as_ref())
            .or(detail.and_then(|d| d.error_message.as_ref()))
            .or(bare)
            .or(self.error_code.as_ref())
            .or(detail.and_then(|d| d.error_code.as_ref()))
            .filter(|m| !m.is_empty())
            .cloned()
    }

    /// The vendor error code, if any.
    pub fn code(&self) -> Option<String> {
        let bare = match &self.error {
            Some(ErrorField::Code(code)) => Some(code),
            _ => None,
        };

        self.error_code
            .as_ref()
            .or(self.detail().and_then(|d| d.error_code.as_ref()))
            .or(bare)
            .cloned()
    }

    fn detail(&self) -> Option<&ErrorDetail> {
        match &self.error {
            Some(ErrorField::Detail(detail)) => Some(detail),
            _ => None,
        }
    }
}
