//! D&B Direct+ API client library.
//!
//! A Rust library for the Dun & Bradstreet Direct+ REST API: token exchange,
//! company search by criteria or company list, typeahead search, contact
//! search and contact lookup.
//!
//! # Quick Start
//!
//! ```no_run
//! use dnbapi::{ClientOption, CompanySearchRequest, DnbClient, TypeaheadQuery};
//!
//! #[tokio::main]
//! async fn main() -> dnbapi::Result<()> {
//!     // Exchange an API key and secret for a bearer token
//!     let client = DnbClient::new([ClientOption::credentials("key", "secret")])?
//!         .authenticated()
//!         .await?;
//!
//!     // Search companies by criteria
//!     let request = CompanySearchRequest {
//!         search_term: Some("gorman manufacturing".to_string()),
//!         country_iso_alpha2_code: Some("US".to_string()),
//!         ..Default::default()
//!     };
//!     let result = client.criteria_search(&request).await?;
//!     for org in result.organizations() {
//!         println!("{} {:?}", org.duns, org.primary_name);
//!     }
//!
//!     // Typeahead against the v3 API for a single call
//!     let v3 = client.with_options([ClientOption::base_url(dnbapi::BASE_URL_V3)])?;
//!     let matches = v3.typeahead_search(&TypeaheadQuery::new("gorm")).await?;
//!     println!("{:?} matches", matches.candidates_matched_quantity);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Options
//!
//! A client is configured with an ordered list of [`ClientOption`]s; a later
//! option overrides an earlier one for the same setting. Use
//! [`DnbClient::with_options`] to derive a reconfigured copy for a single
//! call. Request payloads are always passed to the operation itself.
//!
//! # Errors
//!
//! Every operation fails with [`DnbError::Failed`], naming the [`Operation`]
//! and wrapping the cause (transport, non-200 status or decoding).
//!
//! # Configuration
//!
//! [`DnbClient::from_env`] reads configuration from environment variables:
//!
//! - `DNB_API_TOKEN` - a bearer token issued earlier
//! - `DNB_API_KEY` / `DNB_API_SECRET` - credentials for the token exchange
//! - `DNB_API_URL` (optional) - base URL (defaults to `https://plus.dnb.com/v1`)

mod client;
mod error;
mod models;
mod options;

pub mod cli;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{DnbClient, BASE_URL_V1, BASE_URL_V3};
pub use error::{DnbError, Operation, Result};
pub use options::{ClientOption, Credentials};
pub use output::PrettyPrint;

// Re-export models
pub use models::{
    // Token
    AccessToken,
    // Shared types
    Address,
    AddressCountry,
    CodeDescription,
    DunsInquiryDetail,
    ErrorDetail,
    ErrorField,
    ErrorResponse,
    IndustryCodeSet,
    Links,
    NamedArea,
    NavigatorBucket,
    NavigatorFacet,
    Navigators,
    SortCriteria,
    StreetAddress,
    TransactionDetail,
    ValueRange,
    // Company search types
    CompanyCandidate,
    CompanySearch,
    CompanySearchRequest,
    CorporateLinkage,
    DunsControlStatus,
    EmployeeCount,
    EmployeeRange,
    Financial,
    IndustryCode,
    LinkedOrganization,
    LocationRadius,
    Organization,
    PrimaryIndustryCode,
    Revenue,
    Telephone,
    TradeStyleName,
    // Typeahead types
    TypeaheadQuery,
    TypeaheadSearch,
    // Contact types
    AccuracyScore,
    Contact,
    ContactCandidate,
    ContactInquiryDetail,
    ContactLookup,
    ContactOrganization,
    ContactSearch,
    ContactSearchRequest,
    ContactTelephone,
    EmailAccuracy,
    ManagementResponsibility,
    MatchQualityInformation,
    SocialMedia,
    Title,
    // Competitor types
    Competitor,
    CompetitorsSearch,
    // Educational institution types
    EducationalDataSearch,
    Institution,
    InstitutionArea,
    InstitutionNavigators,
    InstitutionPerson,
};
