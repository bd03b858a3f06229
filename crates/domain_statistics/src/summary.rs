//! Inputs to the aggregator as produced by the record store

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::PersonId;

/// Global invoice summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    /// Number of invoices considered
    pub invoices_count: u64,
    /// Sum of prices issued in the current calendar year
    pub current_year_sum: Decimal,
    /// Sum of prices over all years
    pub all_time_sum: Decimal,
}

/// Per-person yearly figures
///
/// Revenue is the person's seller-side turnover, expenses the buyer-side
/// turnover, both keyed by the year the invoice was issued. Years absent
/// from a mapping contribute zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFigures {
    pub person_id: PersonId,
    pub person_name: String,
    /// All-time seller-side turnover
    pub revenue: Decimal,
    pub revenue_per_year: BTreeMap<i32, Decimal>,
    pub expenses_per_year: BTreeMap<i32, Decimal>,
}

impl CompanyFigures {
    /// Revenue for one year, zero when absent
    pub fn revenue_in(&self, year: i32) -> Decimal {
        self.revenue_per_year.get(&year).copied().unwrap_or_default()
    }

    /// Expenses for one year, zero when absent
    pub fn expenses_in(&self, year: i32) -> Decimal {
        self.expenses_per_year
            .get(&year)
            .copied()
            .unwrap_or_default()
    }

    /// Cash flow for one year
    pub fn cash_flow_in(&self, year: i32) -> Decimal {
        self.revenue_in(year) - self.expenses_in(year)
    }
}
