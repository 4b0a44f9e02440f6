//! Storage port — repository traits for persistence.
//!
//! One trait per record. CRUD methods follow the same shape everywhere;
//! the extra methods are the fixed lookups and report queries of the back
//! office. "Ultimo mese" always means bookings whose start date falls in
//! the last month before now.

use std::future::Future;

use turista_domain::abitazione::Abitazione;
use turista_domain::error::TuristaError;
use turista_domain::feedback::Feedback;
use turista_domain::host::Host;
use turista_domain::id::{AbitazioneId, FeedbackId, HostId, PrenotazioneId, UtenteId};
use turista_domain::prenotazione::Prenotazione;
use turista_domain::utente::Utente;

/// Persistence for [`Utente`] records.
pub trait UtenteRepository {
    /// Insert a new record and return it with its assigned id.
    fn create(&self, utente: Utente) -> impl Future<Output = Result<Utente, TuristaError>> + Send;

    fn get_by_id(
        &self,
        id: UtenteId,
    ) -> impl Future<Output = Result<Option<Utente>, TuristaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Utente>, TuristaError>> + Send;

    fn update(&self, utente: Utente) -> impl Future<Output = Result<Utente, TuristaError>> + Send;

    fn delete(&self, id: UtenteId) -> impl Future<Output = Result<(), TuristaError>> + Send;

    /// Utenti ranked by total days booked in the last month, best first.
    fn top_giorni_ultimo_mese(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Utente>, TuristaError>> + Send;
}

/// Persistence for [`Host`] records.
pub trait HostRepository {
    fn create(&self, host: Host) -> impl Future<Output = Result<Host, TuristaError>> + Send;

    fn get_by_id(
        &self,
        id: HostId,
    ) -> impl Future<Output = Result<Option<Host>, TuristaError>> + Send;

    fn get_by_codice(
        &self,
        codice: &str,
    ) -> impl Future<Output = Result<Option<Host>, TuristaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send;

    fn update(&self, host: Host) -> impl Future<Output = Result<Host, TuristaError>> + Send;

    fn delete(&self, id: HostId) -> impl Future<Output = Result<(), TuristaError>> + Send;

    /// Hosts ranked by booking count in the last month, busiest first.
    fn top_prenotazioni_ultimo_mese(
        &self,
    ) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send;

    /// Hosts with at least 100 total prenotazioni across their abitazioni.
    fn super_host(&self) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send;
}

/// Persistence for [`Abitazione`] records.
pub trait AbitazioneRepository {
    fn create(
        &self,
        abitazione: Abitazione,
    ) -> impl Future<Output = Result<Abitazione, TuristaError>> + Send;

    fn get_by_id(
        &self,
        id: AbitazioneId,
    ) -> impl Future<Output = Result<Option<Abitazione>, TuristaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Abitazione>, TuristaError>> + Send;

    /// All abitazioni owned by the host with the given codice.
    fn get_by_codice_host(
        &self,
        codice: &str,
    ) -> impl Future<Output = Result<Vec<Abitazione>, TuristaError>> + Send;

    fn update(
        &self,
        abitazione: Abitazione,
    ) -> impl Future<Output = Result<Abitazione, TuristaError>> + Send;

    fn delete(&self, id: AbitazioneId) -> impl Future<Output = Result<(), TuristaError>> + Send;

    /// The single most-booked abitazione in the last month, if any booking
    /// happened at all.
    fn piu_gettonata_ultimo_mese(
        &self,
    ) -> impl Future<Output = Result<Option<Abitazione>, TuristaError>> + Send;

    /// Average beds per abitazione across all records, `0.0` when empty.
    fn media_posti_letto(&self) -> impl Future<Output = Result<f64, TuristaError>> + Send;
}

/// Persistence for [`Prenotazione`] records.
pub trait PrenotazioneRepository {
    fn create(
        &self,
        prenotazione: Prenotazione,
    ) -> impl Future<Output = Result<Prenotazione, TuristaError>> + Send;

    fn get_by_id(
        &self,
        id: PrenotazioneId,
    ) -> impl Future<Output = Result<Option<Prenotazione>, TuristaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Prenotazione>, TuristaError>> + Send;

    fn update(
        &self,
        prenotazione: Prenotazione,
    ) -> impl Future<Output = Result<Prenotazione, TuristaError>> + Send;

    fn delete(&self, id: PrenotazioneId) -> impl Future<Output = Result<(), TuristaError>> + Send;

    /// The utente's most recent prenotazione by start date.
    fn ultima_by_utente(
        &self,
        utente_id: UtenteId,
    ) -> impl Future<Output = Result<Option<Prenotazione>, TuristaError>> + Send;
}

/// Persistence for [`Feedback`] records.
pub trait FeedbackRepository {
    fn create(
        &self,
        feedback: Feedback,
    ) -> impl Future<Output = Result<Feedback, TuristaError>> + Send;

    fn get_by_id(
        &self,
        id: FeedbackId,
    ) -> impl Future<Output = Result<Option<Feedback>, TuristaError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Feedback>, TuristaError>> + Send;

    fn update(
        &self,
        feedback: Feedback,
    ) -> impl Future<Output = Result<Feedback, TuristaError>> + Send;

    fn delete(&self, id: FeedbackId) -> impl Future<Output = Result<(), TuristaError>> + Send;

    /// The single feedback attached to a prenotazione, if present.
    fn get_by_prenotazione(
        &self,
        prenotazione_id: PrenotazioneId,
    ) -> impl Future<Output = Result<Option<Feedback>, TuristaError>> + Send;
}
