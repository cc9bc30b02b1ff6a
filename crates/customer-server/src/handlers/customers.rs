//! Customer handlers
//!
//! Path ids and JSON bodies are parsed here by hand so that every malformed
//! request gets the same structured 400 response.

use super::ApiError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use customer_core::validation::parse_id;
use customer_core::{Customer, CustomerError, CustomerPayload};

pub const CUSTOMERS_PATH: &str = "/customers";

/// Location of a single customer, resolvable through `get`
pub fn customer_location(customer: &Customer) -> String {
    format!("{}/{}", CUSTOMERS_PATH, customer.id)
}

fn parse_payload(body: &[u8]) -> Result<CustomerPayload, CustomerError> {
    serde_json::from_slice(body)
        .map_err(|e| CustomerError::invalid("body", &format!("is not a valid customer: {}", e)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    let customers = state.records.list_all().await?;
    Ok(Json(customers))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let id = parse_id(&id)?;

    match state.records.get_by_id(id).await? {
        Some(customer) => Ok(Json(customer)),
        None => Err(CustomerError::NotFound(id).into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload = parse_payload(&body)?;
    let customer = state.records.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, customer_location(&customer))],
        Json(customer),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let payload = parse_payload(&body)?;

    state.records.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state.records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
