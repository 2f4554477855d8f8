//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{CompanySearch, ContactSearch, Organization, TransactionDetail, TypeaheadSearch};

/// Trait for human-readable output.
///
/// Implemented by the search replies to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

/// Header shared by every search reply.
fn header(
    title: &str,
    transaction: &TransactionDetail,
    matched: Option<u64>,
    returned: Option<u64>,
) -> Vec<String> {
    let divider = "─".repeat(title.len().max(30));
    let count = |n: Option<u64>| n.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());

    vec![
        title.to_string(),
        divider,
        format!("Transaction:    {}", transaction.transaction_id),
        format!("Matched:        {}", count(matched)),
        format!("Returned:       {}", count(returned)),
        String::new(),
    ]
}

fn organization_line(sequence: Option<u32>, org: &Organization) -> String {
    let mut line = format!(
        "{:>3}. {}  {}",
        sequence.unwrap_or_default(),
        org.duns,
        org.primary_name.as_deref().unwrap_or("(unnamed)")
    );

    if let Some(address) = &org.primary_address {
        let place: Vec<&str> = [address.locality(), address.country_code()]
            .into_iter()
            .flatten()
            .collect();
        if !place.is_empty() {
            line.push_str(&format!(" ({})", place.join(", ")));
        }
    }

    if org.is_out_of_business() {
        line.push_str(" [out of business]");
    }
    line
}

impl PrettyPrint for CompanySearch {
    fn pretty_print(&self) -> String {
        let mut lines = header(
            "Company search",
            &self.transaction_detail,
            self.candidates_matched_quantity,
            self.candidates_returned_quantity,
        );

        lines.extend(
            self.search_candidates
                .iter()
                .map(|c| organization_line(c.display_sequence, &c.organization)),
        );

        if !self.navigators.is_empty() {
            let facets: Vec<&str> = self.navigators.keys().map(String::as_str).collect();
            lines.push(String::new());
            lines.push(format!("Navigators:     {}", facets.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for TypeaheadSearch {
    fn pretty_print(&self) -> String {
        let mut lines = header(
            "Typeahead search",
            &self.transaction_detail,
            self.candidates_matched_quantity,
            self.candidates_returned_quantity,
        );

        lines.extend(
            self.search_candidates
                .iter()
                .map(|c| organization_line(c.display_sequence, &c.organization)),
        );

        lines.join("\n")
    }
}

impl PrettyPrint for ContactSearch {
    fn pretty_print(&self) -> String {
        let mut lines = header(
            "Contact search",
            &self.transaction_detail,
            self.candidates_matched_quantity,
            self.candidates_returned_quantity,
        );

        for candidate in &self.search_candidates {
            let contact = &candidate.contact;
            let mut line = format!(
                "{:>3}. {}  {}",
                candidate.display_sequence.unwrap_or_default(),
                contact.id,
                contact.display_name()
            );
            if let Some(title) = contact.primary_job_title() {
                line.push_str(&format!(", {title}"));
            }
            if let Some(email) = &contact.email {
                line.push_str(&format!(" <{email}>"));
            }
            if let Some(org) = contact.organization.as_ref().and_then(|o| o.primary_name.as_deref()) {
                line.push_str(&format!(" @ {org}"));
            }
            lines.push(line);
        }

        if let Some(next) = self.links.as_ref().and_then(|l| l.next.as_deref()) {
            lines.push(String::new());
            lines.push(format!("Next page:      {next}"));
        }

        lines.join("\n")
    }
}
