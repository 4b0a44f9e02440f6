//! Application services — one per record, plus the dashboard use-cases.

pub mod abitazione_service;
pub mod dashboard_service;
pub mod feedback_service;
pub mod host_service;
pub mod prenotazione_service;
pub mod utente_service;
