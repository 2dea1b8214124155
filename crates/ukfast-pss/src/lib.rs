//! PSS client and data models for the UKFast API.
//!
//! Provides typed entities and an asynchronous client for UKFast
//! professional-services-support (PSS) tickets: listing and fetching
//! requests, raising and updating them, and submitting feedback.
//!
//! Unlike the DDoSX and DRaaS clients, PSS requests hydrate through manual
//! per-field code rather than a generic alias map alone: the author and
//! product sub-entities, the reply timestamp and the CC list all carry
//! conditional handling that a flat rename table cannot express.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{RequestClient, RequestClientBuilder};
pub use models::{
    Author, Feedback, Product, Request, FEEDBACK_ALIASES, REQUEST_ALIASES,
    REQUEST_PAYLOAD_ALIASES,
};

/// Convenient result alias that reuses the shared UKFast error type.
pub type Result<T> = ukfast_core::Result<T>;
