//! Postal-code (CEP) lookup.

pub mod client;
pub mod model;

pub use client::{PostalCodeLookup, ViaCepClient, clean_cep};
pub use model::Address;
