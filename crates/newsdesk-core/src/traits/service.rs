//! Service marker trait.

/// Marker trait for use-case services.
///
/// Every use case in `newsdesk-service` implements this so handlers and the
/// CLI can hold them behind `Arc` uniformly.
pub trait Service: Send + Sync + 'static {}
