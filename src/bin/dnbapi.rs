//! D&B Direct+ CLI binary.
//!
//! A command-line interface for the D&B Direct+ search API.

use clap::Parser;
use dnbapi::cli::{typeahead_query, Cli, Command};
use dnbapi::{
    ClientOption, CompanySearch, Contact, ContactSearch, DnbClient, DnbError, Organization,
    PrettyPrint,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;

/// Page size D&B applies when the request does not set one.
const DEFAULT_PAGE_SIZE: u32 = 10;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set DNB_API_TOKEN, or DNB_API_KEY and DNB_API_SECRET");
            return ExitCode::FAILURE;
        }
    };

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> dnbapi::Result<DnbClient> {
    let client = DnbClient::from_env()?;
    match &cli.base_url {
        Some(url) => client.with_options([ClientOption::base_url(url.as_str())]),
        None => Ok(client),
    }
}

/// Exchange credentials for a token unless one is already configured.
async fn ensure_token(client: DnbClient) -> dnbapi::Result<DnbClient> {
    if client.has_token() {
        Ok(client)
    } else {
        client.authenticated().await
    }
}

async fn run(client: DnbClient, cli: Cli) -> dnbapi::Result<()> {
    if let Command::Token = cli.command {
        let token = client.request_token().await?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&token)?);
        } else {
            println!("{}", token.access_token);
        }
        return Ok(());
    }

    let client = ensure_token(client).await?;

    match cli.command {
        Command::Token => Ok(()),
        Command::Criteria { filters } => {
            let request = filters.to_request();
            let result = client.criteria_search(&request).await?;
            output_companies(&result, filters.page, filters.page_size, cli.json)
        }
        Command::CompanyList { filters } => {
            let request = filters.to_request();
            let result = client.company_list_search(&request).await?;
            output_companies(&result, filters.page, filters.page_size, cli.json)
        }
        Command::Typeahead { term, country } => {
            let query = typeahead_query(&term, country.as_deref());
            let result = client.typeahead_search(&query).await?;
            output_single(&result, cli.json)
        }
        Command::Contacts(filters) => {
            let request = filters.to_request();
            let result = client.contact_search(&request).await?;
            output_contacts(&result, filters.page, filters.page_size, cli.json)
        }
        Command::Contact(selector) => {
            let lookup = selector.lookup().ok_or_else(|| {
                DnbError::ConfigMissing("one of --id, --email or --duns is required".to_string())
            })?;
            let result = client.lookup_contact(&lookup).await?;
            output_single(&result, cli.json)
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> dnbapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_companies(
    result: &CompanySearch,
    page: Option<u32>,
    page_size: Option<u32>,
    json: bool,
) -> dnbapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let rows: Vec<CompanyRow> = result.organizations().map(CompanyRow::from).collect();
        println!("{}", Table::new(rows));
        print_footer(page, page_size, result.candidates_matched_quantity);
    }
    Ok(())
}

fn output_contacts(
    result: &ContactSearch,
    page: Option<u32>,
    page_size: Option<u32>,
    json: bool,
) -> dnbapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let rows: Vec<ContactRow> = result.contacts().map(ContactRow::from).collect();
        println!("{}", Table::new(rows));
        print_footer(page, page_size, result.candidates_matched_quantity);
    }
    Ok(())
}

fn print_footer(page: Option<u32>, page_size: Option<u32>, matched: Option<u64>) {
    let page = page.unwrap_or(1);
    let page_size = u64::from(page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1));

    match matched {
        Some(total) => {
            let total_pages = total.div_ceil(page_size).max(1);
            println!("\nPage {}/{} ({} candidates matched)", page, total_pages, total);
        }
        None => println!("\nPage {}", page),
    }
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct CompanyRow {
    duns: String,
    name: String,
    locality: String,
    country: String,
    status: String,
}

impl From<&Organization> for CompanyRow {
    fn from(o: &Organization) -> Self {
        let address = o.primary_address.as_ref();
        Self {
            duns: o.duns.clone(),
            name: o.primary_name.clone().unwrap_or_default(),
            locality: address
                .and_then(|a| a.locality())
                .unwrap_or_default()
                .to_string(),
            country: address
                .and_then(|a| a.country_code())
                .unwrap_or_default()
                .to_string(),
            status: if o.is_out_of_business() {
                "out of business".to_string()
            } else {
                "active".to_string()
            },
        }
    }
}

#[derive(Tabled)]
struct ContactRow {
    id: String,
    name: String,
    title: String,
    email: String,
    organization: String,
}

impl From<&Contact> for ContactRow {
    fn from(c: &Contact) -> Self {
        Self {
            id: c.id.clone(),
            name: c.display_name(),
            title: c.primary_job_title().unwrap_or_default().to_string(),
            email: c.email.clone().unwrap_or_default(),
            organization: c
                .organization
                .as_ref()
                .and_then(|o| o.primary_name.clone())
                .unwrap_or_default(),
        }
    }
}
