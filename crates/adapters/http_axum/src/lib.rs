//! # turista-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for the back office
//!   (`/api/utenti`, `/api/host`, `/api/abitazioni`, `/api/prenotazioni`,
//!   `/api/feedback`, `/api/dashboard/*`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `turista-app` (for port traits and services) and
//! `turista-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
