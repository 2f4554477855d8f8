//! Company search: criteria search and company list search.
//!
//! Both endpoints take the same [`CompanySearchRequest`] and answer with a
//! [`CompanySearch`]. Criteria search is the looser of the two and returns at
//! most 1,000 candidates; company list search requires every criterion to
//! match and returns up to 10,000.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{decode, DnbClient, COMPANY_LIST_PATH, CRITERIA_SEARCH_PATH};
use crate::error::{Operation, Result};
use crate::models::common::{
    Address, CodeDescription, IndustryCodeSet, Navigators, SortCriteria, TransactionDetail,
    ValueRange,
};

/// Request body for criteria and company list searches.
///
/// Every field is optional; unset fields are left out of the JSON body.
///
/// # Example
///
/// ```
/// use dnbapi::CompanySearchRequest;
///
/// let request = CompanySearchRequest {
///     search_term: Some("Gorman Manufacturing".to_string()),
///     country_iso_alpha2_code: Some("US".to_string()),
///     page_size: Some(25),
///     ..Default::default()
/// };
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySearchRequest {
    pub duns: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duns_list: Vec<String>,
    pub search_term: Option<String>,
    pub primary_name: Option<String>,
    pub trade_style_name: Option<String>,
    #[serde(rename = "countryISOAlpha2Code")]
    pub country_iso_alpha2_code: Option<String>,
    pub address_region: Option<String>,
    pub address_locality: Option<String>,
    pub street_address_line1: Option<String>,
    pub postal_code: Option<String>,
    pub telephone_number: Option<String>,
    pub domain: Option<String>,
    pub ticker_symbol: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registration_numbers: Vec<String>,

    pub is_marketable: Option<bool>,
    pub is_out_of_business: Option<bool>,
    pub is_telephone_disconnected: Option<bool>,
    pub is_mail_undeliverable: Option<bool>,
    pub is_standalone: Option<bool>,
    pub is_importer: Option<bool>,
    pub is_exporter: Option<bool>,

    /// D&B codes of legal forms to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub business_entity_type: Vec<i64>,
    /// D&B codes of family tree roles (e.g. 12775 for global ultimate).
    #[serde(rename = "familytreeRolesPlayed", skip_serializing_if = "Vec::is_empty")]
    pub familytree_roles_played: Vec<i64>,
    #[serde(rename = "usSicV4", skip_serializing_if = "Vec::is_empty")]
    pub us_sic_v4: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry_codes: Vec<IndustryCodeSet>,

    pub location_radius: Option<LocationRadius>,
    pub number_of_employees: Option<EmployeeRange>,
    pub yearly_revenue: Option<ValueRange<f64>>,
    pub global_ultimate_family_tree_members_count: Option<ValueRange<u64>>,

    /// 1-based page to return.
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub return_navigators: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortCriteria>,
}

/// Search around a geographic point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRadius {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    /// "mi" or "km".
    pub unit: String,
}

/// Employee count filter.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRange {
    /// D&B code for the scope counted (individual site or consolidated).
    pub information_scope: Option<i64>,
    pub minimum_value: Option<u64>,
    pub maximum_value: Option<u64>,
}

/// Reply to a criteria or company list search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySearch {
    pub transaction_detail: TransactionDetail,
    /// The search criteria as D&B understood them.
    pub inquiry_detail: Option<CompanySearchRequest>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_candidates: Vec<CompanyCandidate>,
    #[serde(skip_serializing_if = "Navigators::is_empty")]
    pub navigators: Navigators,
}

impl CompanySearch {
    /// Iterate over the organizations in display order.
    pub fn organizations(&self) -> impl Iterator<Item = &Organization> {
        self.search_candidates.iter().map(|c| &c.organization)
    }
}

/// One search hit.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyCandidate {
    pub display_sequence: Option<u32>,
    pub organization: Organization,
}

/// An organization record as returned by the search endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub duns: String,
    pub duns_control_status: Option<DunsControlStatus>,
    pub primary_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trade_style_names: Vec<TradeStyleName>,
    pub primary_address: Option<Address>,
    pub mailing_address: Option<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub telephone: Vec<Telephone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub primary_industry_codes: Vec<PrimaryIndustryCode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry_codes: Vec<IndustryCode>,
    pub corporate_linkage: Option<CorporateLinkage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub financials: Vec<Financial>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub number_of_employees: Vec<EmployeeCount>,
    pub business_entity_type: Option<CodeDescription>,
    pub is_standalone: Option<bool>,
}

impl Organization {
    /// Whether D&B marks the organization as out of business.
    pub fn is_out_of_business(&self) -> bool {
        self.duns_control_status
            .as_ref()
            .and_then(|s| s.is_out_of_business)
            .unwrap_or(false)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DunsControlStatus {
    pub operating_status: Option<CodeDescription>,
    pub is_marketable: Option<bool>,
    pub is_mail_undeliverable: Option<bool>,
    pub is_telephone_disconnected: Option<bool>,
    pub is_out_of_business: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeStyleName {
    pub name: Option<String>,
    pub priority: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Telephone {
    pub telephone_number: Option<String>,
    pub isd_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryIndustryCode {
    #[serde(rename = "usSicV4")]
    pub us_sic_v4: Option<String>,
    #[serde(rename = "usSicV4Description")]
    pub us_sic_v4_description: Option<String>,
}

/// A single industry classification of an organization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndustryCode {
    pub code: Option<String>,
    pub description: Option<String>,
    pub type_description: Option<String>,
    pub type_dnb_code: Option<i64>,
    pub priority: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorporateLinkage {
    pub is_branch: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub familytree_roles_played: Vec<CodeDescription>,
    pub global_ultimate: Option<LinkedOrganization>,
    pub domestic_ultimate: Option<LinkedOrganization>,
    pub parent: Option<LinkedOrganization>,
    pub headquarter: Option<LinkedOrganization>,
}

/// Another member of the organization's family tree.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedOrganization {
    pub duns: Option<String>,
    pub primary_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Financial {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub yearly_revenue: Vec<Revenue>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revenue {
    pub value: Option<f64>,
    pub currency: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeCount {
    pub value: Option<u64>,
    pub information_scope_description: Option<String>,
    pub information_scope_dnb_code: Option<i64>,
}

impl DnbClient {
    /// Criteria search: locate candidate entities when there is not enough
    /// known data for a match. Returns at most 1,000 candidates.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::CriteriaSearch`] wrapping the HTTP, status or
    /// decode failure.
    #[tracing::instrument(skip(self, request))]
    pub async fn criteria_search(&self, request: &CompanySearchRequest) -> Result<CompanySearch> {
        self.search_companies(CRITERIA_SEARCH_PATH, request)
            .await
            .map_err(|e| e.during(Operation::CriteriaSearch))
    }

    /// Company list search: entities that match every criterion. Returns at
    /// most 10,000 candidates.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::CompanyListSearch`] wrapping the HTTP, status
    /// or decode failure.
    #[tracing::instrument(skip(self, request))]
    pub async fn company_list_search(
        &self,
        request: &CompanySearchRequest,
    ) -> Result<CompanySearch> {
        self.search_companies(COMPANY_LIST_PATH, request)
            .await
            .map_err(|e| e.during(Operation::CompanyListSearch))
    }

    async fn search_companies(
        &self,
        path: &str,
        request: &CompanySearchRequest,
    ) -> Result<CompanySearch> {
        let body = self.post_json(path, request).await?;
        decode(&body)
    }
}
