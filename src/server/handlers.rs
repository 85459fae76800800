//! HTTP handlers for the contact REST API.

use super::response::route_not_found_response;
use super::AppState;
use crate::error::ContactError;
use crate::models::{ApiResponse, Contact, ContactForm, DeletedContact};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "message": "Contact API is running" }))
}

pub(crate) async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Contact>>>, ContactError> {
    let contacts = state.contacts.list_contacts().await?;
    let count = contacts.len();
    Ok(Json(ApiResponse::ok(contacts).with_count(count)))
}

pub(crate) async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), ContactError> {
    let Json(form) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable contact body: {}", rejection.body_text());
        ContactError::InvalidRequest("Invalid request body".to_string())
    })?;

    let contact = state.contacts.create_contact(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(contact).with_message("Contact created successfully")),
    ))
}

pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedContact>>, ContactError> {
    let id = state.contacts.delete_contact(&id).await?;
    Ok(Json(
        ApiResponse::ok(DeletedContact {
            id: id.into_inner(),
        })
        .with_message("Contact deleted successfully"),
    ))
}

pub(crate) async fn route_not_found() -> Response {
    route_not_found_response()
}
