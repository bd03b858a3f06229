//! Statistics DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::PersonId;
use domain_statistics::CompanyFigures;

/// Per-person statistics row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatisticsDto {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub revenue: Decimal,
    pub revenue_per_year: BTreeMap<i32, Decimal>,
    pub expenses_per_year: BTreeMap<i32, Decimal>,
}

impl From<CompanyFigures> for PersonStatisticsDto {
    fn from(figures: CompanyFigures) -> Self {
        PersonStatisticsDto {
            id: figures.person_id,
            name: figures.person_name,
            revenue: figures.revenue,
            revenue_per_year: figures.revenue_per_year,
            expenses_per_year: figures.expenses_per_year,
        }
    }
}

/// Query switch for the global invoice summary
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryQuery {
    #[serde(rename = "includeArchived")]
    pub include_archived: Option<String>,
}

impl SummaryQuery {
    /// True for `true`/`1`/`yes`, anything else keeps archived out
    pub fn include_archived(&self) -> bool {
        matches!(
            self.include_archived.as_deref().map(str::trim),
            Some("true") | Some("1") | Some("yes")
        )
    }
}
