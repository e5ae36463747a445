//! Postal-code lookup configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external postal-code (CEP) lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalCodeConfig {
    /// Base URL of the lookup API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Extra attempts made when the upstream answers HTTP 500.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for PostalCodeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

fn default_timeout_ms() -> u64 {
    4000
}

fn default_max_retries() -> u32 {
    3
}
