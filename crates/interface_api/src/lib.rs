//! HTTP API Layer
//!
//! This crate provides the REST API for the invoice register using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for persons, invoices, statistics
//! - **DTOs**: Request/Response data transfer objects (camelCase wire form)
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_invoice::InvoiceStore;
use domain_party::PartyStore;

use crate::handlers::{health, identification, invoice, person, statistics};

/// Application state shared across handlers
///
/// Both trait objects may point at the same adapter; the handlers only
/// ever see the ports.
#[derive(Clone)]
pub struct AppState {
    pub parties: Arc<dyn PartyStore>,
    pub invoices: Arc<dyn InvoiceStore>,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let person_routes = Router::new()
        .route("/", get(person::list_persons))
        .route("/", post(person::create_person))
        .route("/statistics", get(statistics::person_statistics))
        .route("/:id", get(person::get_person))
        .route("/:id", put(person::update_person))
        .route("/:id", delete(person::delete_person));

    let invoice_routes = Router::new()
        .route("/", get(invoice::list_invoices))
        .route("/", post(invoice::create_invoice))
        .route("/archived", get(invoice::list_archived))
        .route("/products", get(invoice::list_products))
        .route("/statistics", get(statistics::invoice_summary))
        .route("/:id", get(invoice::get_invoice))
        .route("/:id", put(invoice::update_invoice))
        .route("/:id", delete(invoice::archive_invoice))
        .route("/:id/restore", post(invoice::restore_invoice))
        .route("/:id/credit-note", post(invoice::issue_credit_note));

    let identification_routes = Router::new()
        .route("/:ic/sales", get(identification::list_sales))
        .route("/:ic/purchases", get(identification::list_purchases));

    let api_routes = Router::new()
        .nest("/persons", person_routes)
        .nest("/invoices", invoice_routes)
        .nest("/identification", identification_routes);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
