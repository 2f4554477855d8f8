//! Competitors of a company, keyed by its DUNS.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::common::{Address, DunsInquiryDetail, TransactionDetail};
use crate::models::company::CorporateLinkage;

/// Reply listing a company's competitors.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitorsSearch {
    pub transaction_detail: TransactionDetail,
    pub inquiry_detail: Option<DunsInquiryDetail>,
    pub candidates_matched_quantity: Option<u64>,
    pub candidates_returned_quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competitors: Vec<Competitor>,
}

impl CompetitorsSearch {
    /// Competitors ordered by sales revenue, largest first. Competitors
    /// without a revenue figure come last.
    pub fn by_revenue(&self) -> Vec<&Competitor> {
        let mut ranked: Vec<&Competitor> = self.competitors.iter().collect();
        ranked.sort_by(|a, b| {
            b.sales_revenue
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&a.sales_revenue.unwrap_or(f64::NEG_INFINITY))
        });
        ranked
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Competitor {
    pub duns: Option<String>,
    pub primary_name: Option<String>,
    pub consolidated_employee_count: Option<u64>,
    pub sales_revenue: Option<f64>,
    pub sales_revenue_currency: Option<String>,
    pub issued_share_capital_amount: Option<f64>,
    pub corporate_linkage: Option<CorporateLinkage>,
    pub primary_address: Option<Address>,
}

impl Competitor {
    /// DUNS of the competitor's global ultimate parent, if known.
    pub fn global_ultimate_duns(&self) -> Option<&str> {
        self.corporate_linkage
            .as_ref()?
            .global_ultimate
            .as_ref()?
            .duns
            .as_deref()
    }
}
