//! # ukfast-core
//!
//! Core types and utilities for working with the UKFast API.
//!
//! This crate provides the shared plumbing used by every UKFast resource
//! client: the authenticated HTTP client, error handling, field-name
//! translation between friendly and wire conventions, and the paginated
//! response envelopes.
//!
//! ## Modules
//!
//! - [`error`] - Error types and API error envelope decoding
//! - [`alias`] - Friendly/wire field-name translation and entity hydration
//! - [`page`] - Paginated and single-entity response envelopes
//! - [`client`] - The authenticated HTTP client shared by resource clients
//! - [`query`] - Query parameter builder
//! - [`uuid`] - Strongly-typed UUID wrappers for UKFast resources
//! - [`config`] - SDK configuration

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod alias;
pub mod client;
pub mod config;
pub mod error;
pub mod page;
pub mod query;
pub mod uuid;

// Re-export commonly used types
pub use alias::FieldAliasMap;
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ApiErrorDetail, Error, Result};
pub use page::{Page, Pagination, SelfResponse};
