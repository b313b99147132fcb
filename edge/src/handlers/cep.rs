//! HTTP handler for the caller-facing postal code endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::Deserialize;
use shared::PostalCode;
use tracing::field;

use crate::error::{AppError, AppResult};
use crate::external::backend::WeatherBody;
use crate::AppState;

/// Largest accepted `POST /cep` body; `{"cep":"01001000"}` is 18 bytes
pub const MAX_BODY_BYTES: usize = 1024;

/// Request body for `POST /cep`
#[derive(Debug, Deserialize)]
pub struct CepRequest {
    pub cep: String,
}

/// Validate a postal code locally and relay the backend's answer
///
/// The body is decoded regardless of `Content-Type`; anything that is not
/// `{"cep": "<string>"}`, including an oversized or unreadable body, is
/// treated as an invalid zipcode.
#[tracing::instrument(
    name = "post_cep",
    skip(state, body),
    fields(cep = field::Empty, error = field::Empty)
)]
pub async fn post_cep(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<WeatherBody>> {
    let result = forward_cep(&state, body).await;
    if let Err(e) = &result {
        tracing::Span::current().record("error", field::display(e));
    }
    Ok(Json(result?))
}

async fn forward_cep(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<WeatherBody> {
    let body = body.map_err(|e| {
        tracing::debug!("Unreadable request body: {}", e);
        AppError::InvalidZipcode
    })?;

    let request: CepRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::InvalidZipcode
    })?;

    let cep = PostalCode::parse(&request.cep)?;
    tracing::Span::current().record("cep", cep.as_str());

    state.backend.forward(&cep).await
}
