//! HTTP handler for the weather lookup endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use shared::WeatherResult;
use tracing::field;

use crate::error::AppResult;
use crate::AppState;

/// Resolve the current temperature for a postal code
///
/// `GET /weather/:cep`
#[tracing::instrument(name = "get_weather", skip(state), fields(error = field::Empty))]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> AppResult<Json<WeatherResult>> {
    let result = state.lookup.lookup(&cep).await;
    if let Err(e) = &result {
        tracing::Span::current().record("error", field::display(e));
    }
    Ok(Json(result?))
}
