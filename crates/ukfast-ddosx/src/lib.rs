//! DDoSX client and data models for the UKFast API.
//!
//! Provides typed entities and an asynchronous client for managing DNS
//! records under the UKFast DDoS protection (DDoSX) product.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{RecordClient, RecordClientBuilder};
pub use models::{Record, RECORD_ALIASES};

/// Convenient result alias that reuses the shared UKFast error type.
pub type Result<T> = ukfast_core::Result<T>;
