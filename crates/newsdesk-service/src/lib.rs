//! # newsdesk-service
//!
//! Use-case services for Newsdesk, one struct per operation. Each service
//! receives its collaborators at construction time as `Arc` trait objects
//! and exposes a single `perform` method.
//!
//! Existence checks and "not found" translation live here; the repository
//! layer only ever answers `None`.

pub mod address;
pub mod news;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use address::GetAddressService;
pub use news::{
    CreateNewsService, DeleteNewsService, GetNewsService, ListNewsService, NewsRepositoryRef,
    UpdateNewsService,
};
