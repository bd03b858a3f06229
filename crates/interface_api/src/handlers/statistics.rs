//! Statistics handlers

use axum::{
    extract::{Query, State},
    Json,
};

use domain_statistics::GlobalSummary;

use crate::dto::statistics::{PersonStatisticsDto, SummaryQuery};
use crate::error::ApiError;
use crate::AppState;

/// Global invoice summary; archived invoices join in on request
pub async fn invoice_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<GlobalSummary>, ApiError> {
    let summary = state
        .invoices
        .global_summary(query.include_archived())
        .await?;
    Ok(Json(summary))
}

/// Per-person yearly revenue and expense breakdown
pub async fn person_statistics(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonStatisticsDto>>, ApiError> {
    let figures = state.invoices.company_figures().await?;
    Ok(Json(
        figures.into_iter().map(PersonStatisticsDto::from).collect(),
    ))
}
