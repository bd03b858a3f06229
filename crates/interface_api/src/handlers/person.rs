//! Person handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::PersonId;
use domain_party::{PersonDraft, PersonValidator};

use crate::dto::person::{PersonDto, PersonPayload};
use crate::error::ApiError;
use crate::AppState;

/// Lists all persons
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<PersonDto>>, ApiError> {
    let persons = state.parties.list_persons().await?;
    Ok(Json(persons.into_iter().map(PersonDto::from).collect()))
}

/// Gets a person by identifier
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<Json<PersonDto>, ApiError> {
    let person = state.parties.get_person(id).await?;
    Ok(Json(person.into()))
}

/// Creates a new person
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonPayload>,
) -> Result<(StatusCode, Json<PersonDto>), ApiError> {
    let draft = checked_draft(payload)?;
    let person = state.parties.create_person(draft).await?;
    tracing::info!(id = %person.id, "person created");
    Ok((StatusCode::CREATED, Json(person.into())))
}

/// Full-replace update at an existing identifier
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
    Json(payload): Json<PersonPayload>,
) -> Result<Json<PersonDto>, ApiError> {
    let draft = checked_draft(payload)?;
    let person = state.parties.update_person(id, draft).await?;
    Ok(Json(person.into()))
}

/// Deletes a person unless invoices still reference it
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError> {
    state.parties.delete_person(id).await?;
    tracing::info!(%id, "person deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn checked_draft(payload: PersonPayload) -> Result<PersonDraft, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let draft = PersonDraft::from(payload);
    PersonValidator::check(&draft)?;
    Ok(draft)
}
