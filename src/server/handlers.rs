//! Request handlers for the contacts resource.

use super::AppState;
use crate::error::ServiceError;
use crate::models::{Contact, DeletedContact, NewContact};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// `GET /api/contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ServiceError> {
    let contacts = state.service.list_contacts().await?;
    Ok(Json(contacts))
}

/// `POST /api/contacts`
///
/// A body that is not a JSON object is a bad request like any other
/// create failure.
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ServiceError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable create payload: {}", rejection);
        ServiceError::BadRequest(rejection.body_text())
    })?;

    let contact = state.service.create_contact(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// `DELETE /api/contacts/:id`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedContact>, ServiceError> {
    let deleted = state.service.delete_contact(&id).await?;
    Ok(Json(deleted))
}
