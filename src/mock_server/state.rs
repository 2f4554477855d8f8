//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Direct+ API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    CompanySearchRequest, Contact, ContactLookup, ContactSearchRequest, Credentials, Organization,
    TypeaheadQuery,
};

/// Token the mock server issues unless told otherwise.
pub const DEFAULT_TOKEN: &str = "mock-token";

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Organizations indexed by DUNS.
    pub organizations: BTreeMap<String, Organization>,

    /// Contacts in display order.
    pub contacts: Vec<Contact>,

    /// Credentials the token endpoint accepts. `None` rejects every exchange.
    pub credentials: Option<Credentials>,

    /// Token handed out by the token endpoint.
    pub issued_token: String,

    /// If true, search requests must carry `issued_token` as bearer token.
    pub require_token: bool,

    /// Number of transactions served so far.
    pub transactions: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            organizations: BTreeMap::new(),
            contacts: Vec::new(),
            credentials: None,
            issued_token: DEFAULT_TOKEN.to_string(),
            require_token: false,
            transactions: 0,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an organization to the state.
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organizations
            .insert(organization.duns.clone(), organization);
        self
    }

    /// Add a contact to the state.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Accept this key and secret at the token endpoint.
    pub fn with_credentials(mut self, key: &str, secret: &str) -> Self {
        self.credentials = Some(Credentials::new(key, secret));
        self
    }

    /// Require the issued token on search requests.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.issued_token = token.to_string();
        self.require_token = true;
        self
    }

    /// Allocate the id of the next transaction.
    pub fn next_transaction_id(&mut self) -> String {
        self.transactions += 1;
        format!("rrt-mock-{:06}", self.transactions)
    }

    /// Whether the key and secret match the configured credentials.
    pub fn accepts_credentials(&self, key: &str, secret: &str) -> bool {
        self.credentials
            .as_ref()
            .map(|c| c.key == key && c.secret == secret)
            .unwrap_or(false)
    }

    /// Whether a bearer token may call the search endpoints.
    pub fn accepts_token(&self, token: Option<&str>) -> bool {
        !self.require_token || token == Some(self.issued_token.as_str())
    }

    /// Get an organization by DUNS.
    pub fn get_organization(&self, duns: &str) -> Option<&Organization> {
        self.organizations.get(duns)
    }

    /// Organizations matching the company search criteria, ordered by DUNS.
    pub fn search_organizations(&self, request: &CompanySearchRequest) -> Vec<&Organization> {
        self.organizations
            .values()
            .filter(|o| {
                let duns_ok = match (&request.duns, request.duns_list.is_empty()) {
                    (Some(duns), _) => &o.duns == duns,
                    (None, false) => request.duns_list.contains(&o.duns),
                    (None, true) => true,
                };
                duns_ok
                    && request
                        .search_term
                        .as_deref()
                        .map(|t| name_matches(o, t))
                        .unwrap_or(true)
                    && request
                        .primary_name
                        .as_deref()
                        .map(|n| contains_ignore_case(o.primary_name.as_deref(), n))
                        .unwrap_or(true)
                    && request
                        .country_iso_alpha2_code
                        .as_deref()
                        .map(|c| in_country(o, c))
                        .unwrap_or(true)
                    && request
                        .address_locality
                        .as_deref()
                        .map(|l| {
                            let locality = o.primary_address.as_ref().and_then(|a| a.locality());
                            contains_ignore_case(locality, l)
                        })
                        .unwrap_or(true)
                    && request
                        .address_region
                        .as_deref()
                        .map(|r| {
                            let region = o
                                .primary_address
                                .as_ref()
                                .and_then(|a| a.address_region.as_ref())
                                .and_then(|r| r.name.as_deref());
                            contains_ignore_case(region, r)
                        })
                        .unwrap_or(true)
                    && request
                        .postal_code
                        .as_deref()
                        .map(|p| {
                            o.primary_address
                                .as_ref()
                                .and_then(|a| a.postal_code.as_deref())
                                == Some(p)
                        })
                        .unwrap_or(true)
                    && request
                        .is_out_of_business
                        .map(|flag| o.is_out_of_business() == flag)
                        .unwrap_or(true)
            })
            .collect()
    }

    /// Organizations whose primary or tradestyle name contains the term.
    pub fn typeahead(&self, query: &TypeaheadQuery) -> Vec<&Organization> {
        self.organizations
            .values()
            .filter(|o| name_matches(o, &query.search_term))
            .filter(|o| {
                query
                    .country_iso_alpha2_code
                    .as_deref()
                    .map(|c| in_country(o, c))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Contacts matching the contact search criteria.
    pub fn search_contacts(&self, request: &ContactSearchRequest) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| {
                request
                    .contact_id
                    .as_deref()
                    .map(|id| c.id == id)
                    .unwrap_or(true)
                    && request
                        .contact_email
                        .as_deref()
                        .map(|e| eq_ignore_case(c.email.as_deref(), e))
                        .unwrap_or(true)
                    && request
                        .duns
                        .as_deref()
                        .map(|d| contact_duns(c) == Some(d))
                        .unwrap_or(true)
                    && request
                        .given_name
                        .as_deref()
                        .map(|n| eq_ignore_case(c.given_name.as_deref(), n))
                        .unwrap_or(true)
                    && request
                        .family_name
                        .as_deref()
                        .map(|n| eq_ignore_case(c.family_name.as_deref(), n))
                        .unwrap_or(true)
                    && (request.job_titles.is_empty()
                        || request.job_titles.iter().any(|wanted| {
                            c.job_titles
                                .iter()
                                .any(|t| contains_ignore_case(t.title.as_deref(), wanted))
                        }))
            })
            .collect()
    }

    /// Contacts matching a single lookup parameter.
    pub fn lookup_contacts(&self, lookup: &ContactLookup) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| match lookup {
                ContactLookup::Id(id) => &c.id == id,
                ContactLookup::Email(email) => eq_ignore_case(c.email.as_deref(), email),
                ContactLookup::Duns(duns) => contact_duns(c) == Some(duns.as_str()),
            })
            .collect()
    }
}

fn contact_duns(contact: &Contact) -> Option<&str> {
    contact.organization.as_ref()?.duns.as_deref()
}

fn name_matches(org: &Organization, term: &str) -> bool {
    contains_ignore_case(org.primary_name.as_deref(), term)
        || org
            .trade_style_names
            .iter()
            .any(|t| contains_ignore_case(t.name.as_deref(), term))
}

fn in_country(org: &Organization, code: &str) -> bool {
    org.primary_address
        .as_ref()
        .and_then(|a| a.country_code())
        .map(|c| c.eq_ignore_ascii_case(code))
        .unwrap_or(false)
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

fn eq_ignore_case(value: Option<&str>, expected: &str) -> bool {
    value
        .map(|v| v.eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}
