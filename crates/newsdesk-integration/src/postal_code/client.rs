//! HTTP client for the ViaCEP postal-code API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use newsdesk_core::config::PostalCodeConfig;
use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;

use super::model::{Address, ViaCepResponse};

/// Resolves a postal code to an address.
#[async_trait]
pub trait PostalCodeLookup: Send + Sync + 'static {
    /// Look up `cep`. Formatting characters are ignored.
    async fn lookup(&self, cep: &str) -> AppResult<Address>;
}

/// ViaCEP-compatible lookup client.
///
/// Requests are `GET {base_url}/{cep}/json/` with a client-wide timeout.
/// An HTTP 500 answer is retried up to `max_retries` more times; every other
/// failure is returned at once.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl ViaCepClient {
    /// Build a client from configuration.
    pub fn new(config: &PostalCodeConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to create postal code HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    fn url_for(&self, cep: &str) -> String {
        format!("{}/{cep}/json/", self.base_url)
    }
}

#[async_trait]
impl PostalCodeLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> AppResult<Address> {
        let cep = clean_cep(cep)?;
        let url = self.url_for(&cep);

        let mut retries = 0;
        let response = loop {
            debug!(%url, attempt = retries + 1, "Requesting postal code");
            let response = self.client.get(&url).send().await.map_err(|e| {
                let reason = if e.is_timeout() { "timed out" } else { "failed" };
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Postal code lookup {reason}"),
                    e,
                )
            })?;

            if response.status() == StatusCode::INTERNAL_SERVER_ERROR && retries < self.max_retries {
                retries += 1;
                warn!(%cep, retries, "Postal code service answered 500, retrying");
                continue;
            }
            break response;
        };

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Postal code service answered {status}"
            )));
        }

        let body: ViaCepResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Postal code service returned an unreadable body",
                e,
            )
        })?;
        body.into_address(&cep)
    }
}

/// Strip everything but digits; the result must be exactly eight digits.
pub fn clean_cep(raw: &str) -> AppResult<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 8 {
        Ok(digits)
    } else {
        Err(AppError::validation("Invalid postal code"))
    }
}
