//! # newsdesk-integration
//!
//! Clients for the external services Newsdesk calls. Each client maps
//! upstream failures into [`newsdesk_core::AppError`] and exposes a trait
//! so the service layer can be exercised without the network.

pub mod postal_code;

pub use postal_code::{Address, PostalCodeLookup, ViaCepClient};
