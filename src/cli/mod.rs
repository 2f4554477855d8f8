//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the dnbapi binary.

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::{CompanySearchRequest, ContactLookup, ContactSearchRequest, TypeaheadQuery};

/// D&B Direct+ command-line interface.
#[derive(Parser, Debug)]
#[command(name = "dnbapi", about = "D&B Direct+ API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests and responses to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Direct+ base URL, e.g. https://plus.dnb.com/v3.
    #[arg(long, global = true, env = "DNB_API_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Exchange DNB_API_KEY and DNB_API_SECRET for a bearer token.
    Token,

    /// Search companies by criteria.
    Criteria {
        #[command(flatten)]
        filters: CompanyFilters,
    },

    /// Search companies by company list criteria.
    CompanyList {
        #[command(flatten)]
        filters: CompanyFilters,
    },

    /// Find companies by a partial name.
    Typeahead {
        /// Search term (2 to 30 characters).
        term: String,

        /// ISO 3166-1 alpha-2 country code.
        #[arg(long)]
        country: Option<String>,
    },

    /// Search contacts.
    Contacts(ContactFilters),

    /// Look up contacts by id, email or organization DUNS.
    Contact(ContactSelector),
}

/// Filters shared by the company search commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilters {
    /// Free-text search term.
    #[arg(long)]
    pub search_term: Option<String>,

    /// Primary name of the organization.
    #[arg(long)]
    pub name: Option<String>,

    /// DUNS number; repeat to search a list.
    #[arg(long)]
    pub duns: Vec<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[arg(long)]
    pub country: Option<String>,

    /// State or region.
    #[arg(long)]
    pub region: Option<String>,

    /// City or town.
    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    /// Page number (1-indexed).
    #[arg(long)]
    pub page: Option<u32>,

    /// Number of candidates per page.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Return navigators (facet counts) with the results.
    #[arg(long, default_value = "false")]
    pub navigators: bool,
}

impl CompanyFilters {
    /// Build the search request. One `--duns` sets `duns`; several set `dunsList`.
    pub fn to_request(&self) -> CompanySearchRequest {
        let (duns, duns_list) = match self.duns.as_slice() {
            [] => (None, Vec::new()),
            [single] => (Some(single.clone()), Vec::new()),
            many => (None, many.to_vec()),
        };

        CompanySearchRequest {
            search_term: self.search_term.clone(),
            primary_name: self.name.clone(),
            duns,
            duns_list,
            country_iso_alpha2_code: self.country.clone(),
            address_region: self.region.clone(),
            address_locality: self.locality.clone(),
            postal_code: self.postal_code.clone(),
            page_number: self.page,
            page_size: self.page_size,
            return_navigators: self.navigators.then_some(true),
            ..Default::default()
        }
    }
}

/// Contact search filters.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilters {
    /// DUNS of the contact's organization.
    #[arg(long)]
    pub duns: Option<String>,

    #[arg(long)]
    pub given_name: Option<String>,

    #[arg(long)]
    pub family_name: Option<String>,

    /// Job title; repeat for several.
    #[arg(long)]
    pub job_title: Vec<String>,

    /// Page number (1-indexed).
    #[arg(long)]
    pub page: Option<u32>,

    /// Number of contacts per page.
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl ContactFilters {
    pub fn to_request(&self) -> ContactSearchRequest {
        ContactSearchRequest {
            duns: self.duns.clone(),
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            job_titles: self.job_title.clone(),
            page_number: self.page,
            page_size: self.page_size,
            ..Default::default()
        }
    }
}

/// Exactly one way to select contacts.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[command(group(ArgGroup::new("selector").required(true).args(["id", "email", "duns"])))]
pub struct ContactSelector {
    /// D&B contact id.
    #[arg(long)]
    pub id: Option<String>,

    /// Contact email address.
    #[arg(long)]
    pub email: Option<String>,

    /// DUNS of the contact's organization.
    #[arg(long)]
    pub duns: Option<String>,
}

impl ContactSelector {
    /// The lookup this selector describes. `None` only if clap's group check was bypassed.
    pub fn lookup(&self) -> Option<ContactLookup> {
        match (&self.id, &self.email, &self.duns) {
            (Some(id), _, _) => Some(ContactLookup::Id(id.clone())),
            (_, Some(email), _) => Some(ContactLookup::Email(email.clone())),
            (_, _, Some(duns)) => Some(ContactLookup::Duns(duns.clone())),
            _ => None,
        }
    }
}

/// Build the typeahead query for the `typeahead` command.
pub fn typeahead_query(term: &str, country: Option<&str>) -> TypeaheadQuery {
    let query = TypeaheadQuery::new(term);
    match country {
        Some(code) => query.country(code),
        None => query,
    }
}
