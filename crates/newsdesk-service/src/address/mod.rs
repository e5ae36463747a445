//! Address use cases.

pub mod get;

pub use get::GetAddressService;
