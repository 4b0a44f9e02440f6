//! # turista-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): one repository per record, including the fixed report queries
//! - Provide the per-record services (validation, not-found mapping, the
//!   cross-record rules: availability containment, codice-host uniqueness,
//!   one feedback per prenotazione)
//! - Provide the dashboard use-cases (summary, searchable views, reminders)
//!
//! ## Dependency rule
//! Depends on `turista-domain` only. Never imports adapter crates; adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
