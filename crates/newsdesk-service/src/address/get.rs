//! Resolve a postal code to an address.

use std::sync::Arc;

use tracing::info;

use newsdesk_core::result::AppResult;
use newsdesk_core::traits::Service;
use newsdesk_integration::postal_code::{Address, PostalCodeLookup};

/// Looks up addresses through the configured postal-code client.
#[derive(Clone)]
pub struct GetAddressService {
    lookup: Arc<dyn PostalCodeLookup>,
}

impl GetAddressService {
    /// Creates a new address service.
    pub fn new(lookup: Arc<dyn PostalCodeLookup>) -> Self {
        Self { lookup }
    }

    /// Look up the address for `cep`.
    pub async fn perform(&self, cep: &str) -> AppResult<Address> {
        info!(cep, "Looking up address");
        self.lookup.lookup(cep).await
    }
}

impl Service for GetAddressService {}
