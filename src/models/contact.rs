//! Contact search and contact lookup.
//!
//! Contact search posts a [`ContactSearchRequest`]; the lookups fetch the
//! same endpoint with a single query parameter (contact id, email or DUNS).
//! Both answer with a [`ContactSearch`].

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::{decode, DnbClient, CONTACT_SEARCH_PATH};
use crate::error::{Operation, Result};
use crate::models::common::{
    CodeDescription, IndustryCodeSet, Links, Navigators, SortCriteria, TransactionDetail,
};

/// Request body for a contact search.
///
/// Standard or premium search is selected by D&B from the fields present.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSearchRequest {
    pub view: Option<String>,
    pub search_term: Option<String>,
    pub family_tree_scope: Option<String>,
    #[serde(rename = "contactID")]
    pub contact_id: Option<String>,
    pub contact_email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub full_name: Option<String>,
    pub duns: Option<String>,
    pub primary_name: Option<String>,
    #[serde(rename = "countryISOAlpha2Code")]
    pub country_iso_alpha2_code: Option<String>,
    pub address_region: Option<String>,
    pub address_locality: Option<String>,
    pub postal_code: Option<String>,
    pub ticker_symbol: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub job_titles: Vec<String>,
    #[serde(rename = "usSicV4", skip_serializing_if = "Vec::is_empty")]
    pub us_sic_v4: Vec<String>,
    /// Management responsibility codes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrc_code: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry_codes: Vec<IndustryCodeSet>,

    pub confidence_lower_level_threshold_value: Option<u32>,
    pub telephone_accuracy_score_threshold_value: Option<u32>,
    pub email_accuracy_score_threshold_value: Option<u32>,
    pub has_direct_dial: Option<bool>,
    pub customer_reference: Option<String>,

    pub return_navigators: Option<bool>,
    pub return_management_responsibilities_navigators: Option<bool>,
    pub return_industry_navigators: Option<bool>,
    pub return_location_navigators: Option<bool>,
    pub location_navigator_type: Option<String>,
    pub max_navigator_buckets: Option<u32>,
    pub include_search_results: Option<bool>,

    /// 1-based page to return.
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortCriteria>,
}

/// How to look up a single contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLookup {
    /// D&B contact id (1 to 16 characters).
    Id(String),
    /// Contact email address.
    Email(String),
    /// DUNS of the contact's organization.
    Duns(String),
}

impl ContactLookup {
    /// The single query parameter this lookup sends.
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            ContactLookup::Id(id) => ("contactID", id),
            ContactLookup::Email(email) => ("contactEmail", email),
            ContactLookup::Duns(duns) => ("duns", duns),
        }
    }
}

/// Reply to a contact search or lookup.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSearch {
    pub transaction_detail: TransactionDetail,
    pub inquiry_detail: Option<ContactInquiryDetail>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_candidates: Vec<ContactCandidate>,
    #[serde(skip_serializing_if = "Navigators::is_empty")]
    pub navigators: Navigators,
}

impl ContactSearch {
    /// Iterate over the contacts in display order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.search_candidates.iter().map(|c| &c.contact)
    }
}

/// The request criteria as D&B echoes them, plus result counts.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInquiryDetail {
    #[serde(flatten)]
    pub criteria: ContactSearchRequest,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactCandidate {
    pub display_sequence: Option<u32>,
    pub contact: Contact,
}

/// A person at an organization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub id: String,
    pub global_contact_key: Option<String>,
    pub email: Option<String>,
    pub email_domain_name: Option<String>,
    pub given_name: Option<String>,
    pub middle_name: Option<String>,
    pub family_name: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub additional_name: Option<String>,
    pub is_title_matched: Option<bool>,
    pub is_social_verified: Option<bool>,
    pub data_freshness_score: Option<u32>,
    pub confidence_level: Option<String>,
    pub verified_date: Option<String>,
    pub match_quality_information: Option<MatchQualityInformation>,
    pub email_accuracy: Option<EmailAccuracy>,
    pub title_accuracy: Option<AccuracyScore>,
    pub organization: Option<ContactOrganization>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub management_responsibilities: Vec<ManagementResponsibility>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry_codes: Vec<IndustryCodeSet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub telephone: Vec<ContactTelephone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_media: Vec<SocialMedia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vanity_titles: Vec<Title>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub job_titles: Vec<Title>,
}

impl Contact {
    /// Given and family name joined with a space.
    pub fn display_name(&self) -> String {
        [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The first job title, if any.
    pub fn primary_job_title(&self) -> Option<&str> {
        self.job_titles.first().and_then(|t| t.title.as_deref())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchQualityInformation {
    pub confidence_code: Option<u32>,
    pub match_grade: Option<String>,
    pub match_data_profile: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailAccuracy {
    pub deliverability_score: Option<u32>,
    pub verified_date: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccuracyScore {
    pub accuracy_score: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactOrganization {
    pub duns: Option<String>,
    pub primary_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagementResponsibility {
    pub mrc_code: Option<String>,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactTelephone {
    pub telephone_number: Option<String>,
    pub telephone_accuracy: Option<AccuracyScore>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub platform: Option<CodeDescription>,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub title: Option<String>,
}

impl DnbClient {
    /// Search for contacts. Performs a standard or premium search depending
    /// on the criteria in `request`.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::ContactSearch`] wrapping the HTTP, status or
    /// decode failure.
    #[tracing::instrument(skip(self, request))]
    pub async fn contact_search(&self, request: &ContactSearchRequest) -> Result<ContactSearch> {
        async {
            let body = self.post_json(CONTACT_SEARCH_PATH, request).await?;
            decode(&body)
        }
        .await
        .map_err(|e| e.during(Operation::ContactSearch))
    }

    /// Look up a contact by its D&B contact id.
    pub async fn get_contact_by_id(&self, contact_id: &str) -> Result<ContactSearch> {
        self.lookup_contact(&ContactLookup::Id(contact_id.to_string()))
            .await
    }

    /// Look up a contact by email address.
    pub async fn get_contact_by_email(&self, email: &str) -> Result<ContactSearch> {
        self.lookup_contact(&ContactLookup::Email(email.to_string()))
            .await
    }

    /// Look up contacts by the DUNS of their organization.
    pub async fn get_contact_by_duns(&self, duns: &str) -> Result<ContactSearch> {
        self.lookup_contact(&ContactLookup::Duns(duns.to_string()))
            .await
    }

    /// Fetch contacts matching a single lookup parameter.
    ///
    /// # Errors
    ///
    /// Fails with [`Operation::GetContacts`] wrapping the HTTP, status or
    /// decode failure.
    #[tracing::instrument(skip(self, lookup))]
    pub async fn lookup_contact(&self, lookup: &ContactLookup) -> Result<ContactSearch> {
        async {
            let body = self
                .get_with_query(CONTACT_SEARCH_PATH, &[lookup.query_pair()])
                .await?;
            decode(&body)
        }
        .await
        .map_err(|e| e.during(Operation::GetContacts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_serializes_to_empty_object() {
        let json = serde_json::to_string(&ContactSearchRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_request_uses_vendor_keys() {
        let request = ContactSearchRequest {
            contact_id: Some("c-1".to_string()),
            duns: Some("804735132".to_string()),
            country_iso_alpha2_code: Some("US".to_string()),
            job_titles: vec!["CEO".to_string()],
            mrc_code: vec!["A1A1".to_string()],
            has_direct_dial: Some(true),
            page_size: Some(10),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contactID": "c-1",
                "duns": "804735132",
                "countryISOAlpha2Code": "US",
                "jobTitles": ["CEO"],
                "mrcCode": ["A1A1"],
                "hasDirectDial": true,
                "pageSize": 10
            })
        );
    }

    #[test]
    fn test_lookup_query_pairs() {
        assert_eq!(
            ContactLookup::Id("abc".into()).query_pair(),
            ("contactID", "abc")
        );
        assert_eq!(
            ContactLookup::Email("a@b.com".into()).query_pair(),
            ("contactEmail", "a@b.com")
        );
        assert_eq!(
            ContactLookup::Duns("804735132".into()).query_pair(),
            ("duns", "804735132")
        );
    }

    #[test]
    fn test_lookup_query_string() {
        let lookup = ContactLookup::Email("jane.doe@example.com".into());
        let request = reqwest::Client::new()
            .get("https://plus.dnb.com/v1/search/contact")
            .query(&[lookup.query_pair()])
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("contactEmail=jane.doe%40example.com"));
    }

    #[test]
    fn test_contact_search_deserialize() {
        let json = r#"{
            "transactionDetail": {"transactionID": "rrt-contact-1", "serviceVersion": "1"},
            "inquiryDetail": {
                "duns": "804735132",
                "jobTitles": ["CEO"],
                "pageSize": 10,
                "candidatesMatchedQuantity": 3,
                "candidatesReturnedQuantity": 1
            },
            "candidatesMatchedQuantity": 3,
            "candidatesReturnedQuantity": 1,
            "links": {"self": "https://plus.dnb.com/v1/search/contact?page=1", "last": "https://plus.dnb.com/v1/search/contact?page=3"},
            "searchCandidates": [{
                "displaySequence": 1,
                "contact": {
                    "id": "c-1",
                    "email": "leslie.smith@gorman.com",
                    "givenName": "Leslie",
                    "familyName": "Smith",
                    "isTitleMatched": true,
                    "matchQualityInformation": {"confidenceCode": 8, "matchGrade": "AAAA"},
                    "emailAccuracy": {"deliverabilityScore": 95},
                    "organization": {"duns": "804735132", "primaryName": "Gorman Manufacturing"},
                    "managementResponsibilities": [{"mrcCode": "A1A1", "description": "CEO"}],
                    "industryCodes": [{"code": ["2752"], "description": ["Printing"], "typeDnbCode": 3599}],
                    "telephone": [{"telephoneNumber": "6505550100", "telephoneAccuracy": {"accuracyScore": 80}}],
                    "socialMedia": [{"platform": {"description": "LinkedIn", "dnbCode": 33423}, "url": "https://linkedin.com/in/lsmith"}],
                    "jobTitles": [{"title": "Chief Executive Officer"}]
                }
            }]
        }"#;

        let result: ContactSearch = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(result.transaction_detail.transaction_id, "rrt-contact-1");

        let inquiry = result.inquiry_detail.as_ref().unwrap();
        assert_eq!(inquiry.criteria.duns.as_deref(), Some("804735132"));
        assert_eq!(inquiry.criteria.job_titles, vec!["CEO"]);
        assert_eq!(inquiry.candidates_matched_quantity, Some(3));

        assert_eq!(
            result.links.as_ref().and_then(|l| l.last.as_deref()),
            Some("https://plus.dnb.com/v1/search/contact?page=3")
        );

        let contact = result.contacts().next().unwrap();
        assert_eq!(contact.display_name(), "Leslie Smith");
        assert_eq!(contact.primary_job_title(), Some("Chief Executive Officer"));
        assert_eq!(contact.industry_codes[0].type_dnb_code, Some(3599));
        assert_eq!(
            contact.social_media[0].platform.as_ref().and_then(|p| p.dnb_code),
            Some(33423)
        );
        assert_eq!(
            contact.telephone[0].telephone_accuracy.as_ref().and_then(|a| a.accuracy_score),
            Some(80)
        );
    }

    #[test]
    fn test_display_name_with_missing_parts() {
        let contact = Contact {
            family_name: Some("Smith".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.display_name(), "Smith");
    }
}
