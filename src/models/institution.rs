//! Educational institution data keyed by the DUNS of a school or district.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::common::{
    DunsInquiryDetail, Links, NamedArea, NavigatorBucket, TransactionDetail,
};

/// Reply listing educational institutions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationalDataSearch {
    pub transaction_detail: TransactionDetail,
    pub inquiry_detail: Option<DunsInquiryDetail>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigators: Vec<InstitutionNavigators>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Links>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub institutions: Vec<Institution>,
}

impl EducationalDataSearch {
    /// Institutions located in the given country.
    pub fn in_country<'a>(
        &'a self,
        iso_alpha2_code: &'a str,
    ) -> impl Iterator<Item = &'a Institution> {
        self.institutions.iter().filter(move |i| {
            i.country_code()
                .is_some_and(|code| code.eq_ignore_ascii_case(iso_alpha2_code))
        })
    }
}

/// Facet breakdowns of an institution search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionNavigators {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigators: Vec<NavigatorBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_type: Vec<NavigatorBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub school_type: Vec<NavigatorBucket>,
    #[serde(rename = "countryISOAlpha2Code", skip_serializing_if = "Vec::is_empty")]
    pub country_iso_alpha2_code: Vec<NavigatorBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_region: Vec<NavigatorBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_county: Vec<NavigatorBucket>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_locality: Vec<NavigatorBucket>,
}

/// A school, college or district.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Institution {
    pub duns: Option<String>,
    #[serde(rename = "institutionID")]
    pub institution_id: Option<i64>,
    pub institution_full_name: Option<String>,
    pub postal_code: Option<String>,
    pub mailing_address: Option<InstitutionArea>,
    pub address_country: Option<InstitutionArea>,
    pub address_region: Option<InstitutionArea>,
    pub address_county: Option<NamedArea>,
    pub address_locality: Option<NamedArea>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub personnel: Vec<InstitutionPerson>,
}

impl Institution {
    /// ISO 3166-1 alpha-2 country code, if present.
    pub fn country_code(&self) -> Option<&str> {
        self.address_country.as_ref()?.iso_alpha2_code.as_deref()
    }
}

/// Country, region or mailing area of an institution.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstitutionArea {
    pub iso_alpha2_code: Option<String>,
    pub abbreviated_name: Option<String>,
}

/// Reference to a person at the institution.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionPerson {
    #[serde(rename = "personCompositeID")]
    pub person_composite_id: Option<String>,
}
