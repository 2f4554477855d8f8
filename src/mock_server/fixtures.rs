//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{
    Address, AddressCountry, Contact, ContactOrganization, CorporateLinkage, DunsControlStatus,
    EmployeeCount, Financial, LinkedOrganization, NamedArea, Organization, PrimaryIndustryCode,
    Revenue, StreetAddress, Telephone, Title, TradeStyleName,
};

/// API key accepted by the default scenario.
pub const MOCK_KEY: &str = "mock-key";

/// API secret accepted by the default scenario.
pub const MOCK_SECRET: &str = "mock-secret";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Organization Fixtures
    // =========================================================================

    /// Create an organization with a DUNS, a name and a country only.
    pub fn organization(duns: &str, name: &str, country: &str) -> Organization {
        Organization {
            duns: duns.to_string(),
            primary_name: Some(name.to_string()),
            primary_address: Some(Address {
                address_country: Some(AddressCountry {
                    iso_alpha2_code: Some(country.to_string()),
                    name: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Create an organization with a full primary address.
    pub fn located_organization(
        duns: &str,
        name: &str,
        street: &str,
        locality: &str,
        region: &str,
        postal_code: &str,
        country: &str,
    ) -> Organization {
        let mut org = Self::organization(duns, name, country);
        org.primary_address = Some(Address {
            address_country: Some(AddressCountry {
                iso_alpha2_code: Some(country.to_string()),
                name: None,
            }),
            address_region: Some(NamedArea {
                name: Some(region.to_string()),
                abbreviated_name: None,
            }),
            address_county: None,
            address_locality: Some(NamedArea {
                name: Some(locality.to_string()),
                abbreviated_name: None,
            }),
            postal_code: Some(postal_code.to_string()),
            street_address: Some(StreetAddress {
                line1: Some(street.to_string()),
                line2: None,
            }),
        });
        org
    }

    /// Create a headquarters organization with tradestyle, industry and size data.
    pub fn detailed_organization(duns: &str, name: &str, trade_style: &str) -> Organization {
        let mut org = Self::located_organization(
            duns,
            name,
            "492 Koller St",
            "San Francisco",
            "California",
            "94110",
            "US",
        );
        org.duns_control_status = Some(DunsControlStatus {
            is_marketable: Some(true),
            is_out_of_business: Some(false),
            ..Default::default()
        });
        org.trade_style_names = vec![TradeStyleName {
            name: Some(trade_style.to_string()),
            priority: Some(1),
        }];
        org.telephone = vec![Telephone {
            telephone_number: Some("6505550000".to_string()),
            isd_code: Some("1".to_string()),
        }];
        org.primary_industry_codes = vec![PrimaryIndustryCode {
            us_sic_v4: Some("2752".to_string()),
            us_sic_v4_description: Some("Commercial printing, lithographic".to_string()),
        }];
        org.corporate_linkage = Some(CorporateLinkage {
            is_branch: Some(false),
            ..Default::default()
        });
        org.financials = vec![Financial {
            yearly_revenue: vec![Revenue {
                value: Some(21_100_000.0),
                currency: Some("USD".to_string()),
            }],
        }];
        org.number_of_employees = vec![EmployeeCount {
            value: Some(125),
            information_scope_description: Some("Consolidated".to_string()),
            information_scope_dnb_code: Some(9067),
        }];
        org
    }

    /// Create an organization D&B reports as out of business.
    pub fn closed_organization(duns: &str, name: &str, country: &str) -> Organization {
        let mut org = Self::organization(duns, name, country);
        org.duns_control_status = Some(DunsControlStatus {
            is_out_of_business: Some(true),
            ..Default::default()
        });
        org
    }

    // =========================================================================
    // Contact Fixtures
    // =========================================================================

    /// Create a contact working for the organization with the given DUNS.
    pub fn contact(id: &str, given_name: &str, family_name: &str, duns: &str) -> Contact {
        Contact {
            id: id.to_string(),
            given_name: Some(given_name.to_string()),
            family_name: Some(family_name.to_string()),
            email: Some(format!(
                "{}.{}@example.com",
                given_name.to_lowercase(),
                family_name.to_lowercase()
            )),
            organization: Some(ContactOrganization {
                duns: Some(duns.to_string()),
                primary_name: None,
            }),
            ..Default::default()
        }
    }

    /// Create a contact with a job title.
    pub fn contact_with_title(
        id: &str,
        given_name: &str,
        family_name: &str,
        duns: &str,
        title: &str,
    ) -> Contact {
        let mut contact = Self::contact(id, given_name, family_name, duns);
        contact.job_titles = vec![Title {
            title: Some(title.to_string()),
        }];
        contact
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create a complete test scenario.
    ///
    /// Returns organizations and contacts that form a coherent dataset,
    /// plus the credentials the token endpoint accepts.
    pub fn default_scenario() -> DefaultScenario {
        let gorman = Self::detailed_organization(
            "804735132",
            "Gorman Manufacturing Company, Inc.",
            "Gorman Printing",
        );
        let mut gorman_london = Self::located_organization(
            "229515499",
            "Gorman Manufacturing (UK) Ltd",
            "1 King Street",
            "London",
            "Greater London",
            "EC2V 8AU",
            "GB",
        );
        gorman_london.corporate_linkage = Some(CorporateLinkage {
            is_branch: Some(false),
            parent: Some(LinkedOrganization {
                duns: Some("804735132".to_string()),
                primary_name: Some("Gorman Manufacturing Company, Inc.".to_string()),
            }),
            ..Default::default()
        });

        let organizations = vec![
            gorman,
            gorman_london,
            Self::located_organization(
                "060704780",
                "Acme Widgets LLC",
                "100 Main St",
                "Austin",
                "Texas",
                "78701",
                "US",
            ),
            Self::closed_organization("123456789", "Gorman Shipping Co", "US"),
        ];

        let contacts = vec![
            Self::contact_with_title(
                "gm-ceo-1",
                "Leslie",
                "Smith",
                "804735132",
                "Chief Executive Officer",
            ),
            Self::contact_with_title(
                "gm-cfo-2",
                "Morgan",
                "Lee",
                "804735132",
                "Chief Financial Officer",
            ),
            Self::contact_with_title(
                "acme-vp-3",
                "Jordan",
                "Diaz",
                "060704780",
                "VP Engineering",
            ),
        ];

        DefaultScenario {
            organizations,
            contacts,
            key: MOCK_KEY.to_string(),
            secret: MOCK_SECRET.to_string(),
        }
    }
}

/// A complete test scenario with related data.
pub struct DefaultScenario {
    pub organizations: Vec<Organization>,
    pub contacts: Vec<Contact>,
    pub key: String,
    pub secret: String,
}
