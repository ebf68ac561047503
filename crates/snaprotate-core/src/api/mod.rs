//! REST API client module for the Contabo compute service.
//!
//! This module provides the `ApiClient` for obtaining a token and for
//! listing instances and listing, deleting and creating their snapshots.
//!
//! The API uses bearer token authentication obtained through a password
//! grant against the provider's OpenID Connect endpoint.

pub mod client;
pub mod error;

pub use client::{ApiClient, API_BASE_URL, AUTH_URL, REQUEST_TIMEOUT_SECS};
pub use error::ApiError;
