//! # API client
//!
//! Typed client for the clinic backend REST API.
//!
//! Handles:
//! - Wire models for the backend's entities, tolerant of schema additions
//! - Response envelope and pagination decoding with failing-path diagnostics
//! - The error policy around detail fetches (404 is "no data") and agreement
//!   signing (the backend's already-signed code is success)
//! - An explicit query cache with typed keys and topic invalidation
//!
//! The backend is the system of record; everything cached here is a
//! possibly-stale snapshot keyed by id.

pub mod cache;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod query;
pub mod workflow;

pub use cache::{QueryCache, QueryKey, Topic};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use query::QueryService;
