//! # turista-domain
//!
//! Pure domain model for the turista booking back office.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the five records: **Utente**, **Host**, **Abitazione**,
//!   **Prenotazione**, **Feedback**
//! - Contain all per-record invariant enforcement (`validate()`)
//! - Pagination arithmetic shared by list screens and dashboard grids
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod page;

pub mod abitazione;
pub mod feedback;
pub mod host;
pub mod prenotazione;
pub mod utente;
