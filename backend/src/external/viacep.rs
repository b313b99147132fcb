//! ViaCEP client for resolving postal codes to localities
//!
//! ViaCEP answers unknown-but-well-formed codes with `200 {"erro": ...}`,
//! so "not found" is read from the body rather than the status.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use shared::{LocalityRecord, PostalCode};
use tracing::field;

use crate::error::{AppError, AppResult};

/// ViaCEP API client
#[derive(Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

/// ViaCEP response for `/ws/{cep}/json/`
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<Value>,
}

impl ViaCepResponse {
    /// ViaCEP has sent both `"erro": "true"` and `"erro": true` over time
    fn is_not_found(&self) -> bool {
        match &self.erro {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    fn into_record(self) -> LocalityRecord {
        let not_found = self.is_not_found();
        LocalityRecord {
            name: self.localidade,
            state: self.uf,
            not_found,
        }
    }
}

impl ViaCepClient {
    /// Create a new client against `base_url` (e.g. `https://viacep.com.br/ws`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a postal code to its locality
    ///
    /// Returns `ZipcodeNotFound` when ViaCEP flags the code as unknown and
    /// `Geocoding` for any transport, status or decode failure.
    #[tracing::instrument(
        name = "viacep_request",
        skip(self),
        fields(cep = %cep, error = field::Empty)
    )]
    pub async fn resolve_locality(&self, cep: &PostalCode) -> AppResult<LocalityRecord> {
        let result = self.fetch_locality(cep).await.and_then(|record| {
            if record.not_found {
                Err(AppError::ZipcodeNotFound)
            } else {
                Ok(record)
            }
        });
        if let Err(e) = &result {
            tracing::Span::current().record("error", field::display(e));
        }
        result
    }

    async fn fetch_locality(&self, cep: &PostalCode) -> AppResult<LocalityRecord> {
        let url = format!("{}/{}/json/", self.base_url, cep);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("ViaCEP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Geocoding(format!(
                "ViaCEP error: {} - {}",
                status, body
            )));
        }

        let data: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("Failed to parse ViaCEP response: {}", e)))?;

        tracing::debug!(
            cep = %data.cep,
            street = %data.logradouro,
            district = %data.bairro,
            not_found = data.is_not_found(),
            "ViaCEP answered {} with {}/{}",
            cep,
            data.localidade,
            data.uf
        );

        Ok(data.into_record())
    }
}
