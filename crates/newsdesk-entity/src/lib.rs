//! # newsdesk-entity
//!
//! Domain entity models for Newsdesk. Row structs derive `sqlx::FromRow`;
//! partial inputs implement [`newsdesk_core::traits::Changeset`] so the
//! generic repository can persist them without knowing their fields.

pub mod news;
