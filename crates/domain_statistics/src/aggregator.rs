//! Year-window selection and cash-flow derivation
//!
//! The dashboard compares companies over a shared window of at most the
//! five most recent years, so every row of the comparison table has aligned
//! columns. The window is the union of all years present in any revenue
//! mapping with the current calendar year, sorted most-recent-first, never
//! padded when fewer distinct years exist.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use core_kernel::PersonId;

use crate::summary::CompanyFigures;

/// Maximum number of years shown in the comparison window
pub const YEAR_WINDOW_SIZE: usize = 5;

/// Selects the shared year window, most recent first
pub fn year_window(companies: &[CompanyFigures], current_year: i32) -> Vec<i32> {
    let mut years: BTreeSet<i32> = companies
        .iter()
        .flat_map(|c| c.revenue_per_year.keys().copied())
        .collect();
    years.insert(current_year);

    years.into_iter().rev().take(YEAR_WINDOW_SIZE).collect()
}

/// One row of the cash-flow comparison table
///
/// `cash_flow` is aligned to the window the row was derived with: the
/// value at index `i` belongs to `window[i]` (most recent first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRow {
    pub person_id: PersonId,
    pub person_name: String,
    pub cash_flow: Vec<Decimal>,
    /// Sum over the window only, not all-time
    pub total_cash_flow: Decimal,
}

impl CashFlowRow {
    /// Chronological (oldest-first) series for a detail chart
    ///
    /// Tables read most-recent-first; a single company's time series reads
    /// left-to-right, so the window order is reversed here.
    pub fn chronological_series(&self, window: &[i32]) -> Vec<(i32, Decimal)> {
        window
            .iter()
            .copied()
            .zip(self.cash_flow.iter().copied())
            .rev()
            .collect()
    }
}

/// Derives cash-flow rows for every company over the shared window
///
/// Input ordering is preserved; missing years contribute zero.
pub fn cash_flow_rows(companies: &[CompanyFigures], window: &[i32]) -> Vec<CashFlowRow> {
    companies
        .iter()
        .map(|company| {
            let cash_flow: Vec<Decimal> =
                window.iter().map(|&y| company.cash_flow_in(y)).collect();
            let total_cash_flow = cash_flow.iter().copied().sum();
            CashFlowRow {
                person_id: company.person_id,
                person_name: company.person_name.clone(),
                cash_flow,
                total_cash_flow,
            }
        })
        .collect()
}
