//! Prenotazione service — use-cases for managing bookings.
//!
//! Create and update run the availability containment rule: the booked
//! range must fall inside the referenced abitazione's window. A booking
//! whose abitazione no longer exists skips the check. Overlap between
//! bookings on the same abitazione is not enforced (pending product
//! decision, see DESIGN.md).

use turista_domain::error::{NotFoundError, TuristaError};
use turista_domain::id::{PrenotazioneId, UtenteId};
use turista_domain::prenotazione::Prenotazione;

use crate::ports::{AbitazioneRepository, PrenotazioneRepository};

/// Application service for prenotazione CRUD and the last-booking lookup.
pub struct PrenotazioneService<R, A> {
    repo: R,
    abitazioni: A,
}

impl<R, A> PrenotazioneService<R, A>
where
    R: PrenotazioneRepository,
    A: AbitazioneRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, abitazioni: A) -> Self {
        Self { repo, abitazioni }
    }

    async fn valida_disponibilita(&self, prenotazione: &Prenotazione) -> Result<(), TuristaError> {
        prenotazione.validate()?;
        if let Some(abitazione) = self.abitazioni.get_by_id(prenotazione.abitazione_id).await? {
            prenotazione.validate_in_disponibilita(&abitazione)?;
        }
        Ok(())
    }

    /// Create a new prenotazione after the availability check.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when the range is inverted or
    /// falls outside the abitazione's availability window.
    #[tracing::instrument(skip(self, prenotazione), fields(abitazione_id = %prenotazione.abitazione_id))]
    pub async fn create_prenotazione(
        &self,
        prenotazione: Prenotazione,
    ) -> Result<Prenotazione, TuristaError> {
        self.valida_disponibilita(&prenotazione).await?;
        self.repo.create(prenotazione).await
    }

    /// Look up a prenotazione by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no prenotazione with `id`
    /// exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_prenotazione(&self, id: PrenotazioneId) -> Result<Prenotazione, TuristaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Prenotazione(id).into())
    }

    /// List all prenotazioni.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_prenotazioni(&self) -> Result<Vec<Prenotazione>, TuristaError> {
        self.repo.get_all().await
    }

    /// The utente's most recent prenotazione by start date.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the utente has no booking.
    #[tracing::instrument(skip(self))]
    pub async fn ultima_by_utente(&self, utente_id: UtenteId) -> Result<Prenotazione, TuristaError> {
        self.repo
            .ultima_by_utente(utente_id)
            .await?
            .ok_or_else(|| NotFoundError::UltimaPrenotazione(utente_id).into())
    }

    /// Replace the mutable fields of an existing prenotazione.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when the availability check
    /// fails, or [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self, prenotazione))]
    pub async fn update_prenotazione(
        &self,
        id: PrenotazioneId,
        mut prenotazione: Prenotazione,
    ) -> Result<Prenotazione, TuristaError> {
        prenotazione.id = Some(id);
        self.valida_disponibilita(&prenotazione).await?;
        self.get_prenotazione(id).await?;
        self.repo.update(prenotazione).await
    }

    /// Delete a prenotazione by id.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_prenotazione(&self, id: PrenotazioneId) -> Result<(), TuristaError> {
        self.get_prenotazione(id).await?;
        self.repo.delete(id).await
    }
}
