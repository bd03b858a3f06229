//! Identification-number lookups
//!
//! Sales are invoices where a person with the given identification number
//! is the seller; purchases are those where it is the buyer. Multiple
//! persons may share an identification number and all of them count.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::invoice::InvoiceDto;
use crate::error::ApiError;
use crate::handlers::invoice::embed_parties;
use crate::AppState;

/// Lists invoices sold under an identification number
pub async fn list_sales(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> Result<Json<Vec<InvoiceDto>>, ApiError> {
    let invoices = state
        .invoices
        .sales_by_identification(&identification)
        .await?;
    Ok(Json(embed_parties(&state, invoices).await?))
}

/// Lists invoices bought under an identification number
pub async fn list_purchases(
    State(state): State<AppState>,
    Path(identification): Path<String>,
) -> Result<Json<Vec<InvoiceDto>>, ApiError> {
    let invoices = state
        .invoices
        .purchases_by_identification(&identification)
        .await?;
    Ok(Json(embed_parties(&state, invoices).await?))
}
