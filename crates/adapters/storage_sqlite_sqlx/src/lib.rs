//! # turista-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `turista-app::ports`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `turista-app` (for port traits) and `turista-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod abitazione_repo;
pub mod error;
pub mod feedback_repo;
pub mod host_repo;
pub mod pool;
pub mod prenotazione_repo;
pub mod utente_repo;
