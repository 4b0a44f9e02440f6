//! # turista-client
//!
//! Typed HTTP client for the turista REST API, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! The only configuration is the base URL of the server; every call maps
//! one-to-one onto an API route. Server-side error messages are surfaced
//! verbatim through [`error::ClientError`], so callers can show them to
//! the operator unchanged.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ClientError;
