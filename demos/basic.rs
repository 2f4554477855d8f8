//! Basic example demonstrating the D&B Direct+ client.
//!
//! Run with:
//! ```
//! DNB_API_KEY=your-key DNB_API_SECRET=your-secret cargo run --example basic
//! ```

use dnbapi::{
    ClientOption, CompanySearchRequest, ContactSearchRequest, DnbClient, TypeaheadQuery,
    BASE_URL_V3,
};

#[tokio::main]
async fn main() -> dnbapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables and exchange credentials
    println!("Creating D&B client...");
    let client = DnbClient::from_env()?;
    let client = if client.has_token() {
        client
    } else {
        client.authenticated().await?
    };
    println!("Connected to: {}", client.base_url());

    // Typeahead on a partial name
    println!("\n--- Typeahead ---");
    let typeahead = client
        .typeahead_search(&TypeaheadQuery::new("gorman").country("US"))
        .await?;
    for candidate in &typeahead.search_candidates {
        println!(
            "  {} {}",
            candidate.organization.duns,
            candidate.organization.primary_name.as_deref().unwrap_or("")
        );
    }

    // Criteria search
    println!("\n--- Criteria Search ---");
    let request = CompanySearchRequest {
        search_term: Some("gorman manufacturing".to_string()),
        country_iso_alpha2_code: Some("US".to_string()),
        page_size: Some(5),
        ..Default::default()
    };
    let companies = client.criteria_search(&request).await?;
    println!(
        "Matched {:?}, transaction {}",
        companies.candidates_matched_quantity, companies.transaction_detail.transaction_id
    );

    // Contacts of the first company
    if let Some(org) = companies.organizations().next() {
        println!("\n--- Contacts at {} ---", org.duns);
        let contacts = client.get_contact_by_duns(&org.duns).await?;
        for contact in contacts.contacts() {
            println!(
                "  {} {}",
                contact.display_name(),
                contact.primary_job_title().unwrap_or("")
            );
        }
    }

    // Same contact search against the v3 API for this call only
    println!("\n--- Contact Search (v3) ---");
    let v3 = client.with_options([ClientOption::base_url(BASE_URL_V3)])?;
    let request = ContactSearchRequest {
        job_titles: vec!["Chief Executive Officer".to_string()],
        country_iso_alpha2_code: Some("US".to_string()),
        page_size: Some(5),
        ..Default::default()
    };
    match v3.contact_search(&request).await {
        Ok(result) => println!("Matched {:?} contacts", result.candidates_matched_quantity),
        Err(e) => println!("v3 contact search failed: {e}"),
    }

    println!("\nDone!");
    Ok(())
}
