//! Utente service — use-cases for managing guests.

use turista_domain::error::{NotFoundError, TuristaError};
use turista_domain::id::UtenteId;
use turista_domain::utente::Utente;

use crate::ports::UtenteRepository;

/// How many rows the top-giorni report returns.
const TOP_GIORNI_LIMIT: usize = 5;

/// Application service for utente CRUD and the top-giorni report.
pub struct UtenteService<R> {
    repo: R,
}

impl<R: UtenteRepository> UtenteService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new utente after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, utente), fields(utente_email = %utente.email))]
    pub async fn create_utente(&self, utente: Utente) -> Result<Utente, TuristaError> {
        utente.validate()?;
        self.repo.create(utente).await
    }

    /// Look up an utente by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no utente with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_utente(&self, id: UtenteId) -> Result<Utente, TuristaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Utente(id).into())
    }

    /// List all utenti.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_utenti(&self) -> Result<Vec<Utente>, TuristaError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing utente.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] if invariants fail, or
    /// [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self, utente))]
    pub async fn update_utente(
        &self,
        id: UtenteId,
        mut utente: Utente,
    ) -> Result<Utente, TuristaError> {
        utente.id = Some(id);
        utente.validate()?;
        self.get_utente(id).await?;
        self.repo.update(utente).await
    }

    /// Delete an utente by id.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_utente(&self, id: UtenteId) -> Result<(), TuristaError> {
        self.get_utente(id).await?;
        self.repo.delete(id).await
    }

    /// Top 5 utenti by total days booked in the last month.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn top_giorni_ultimo_mese(&self) -> Result<Vec<Utente>, TuristaError> {
        self.repo.top_giorni_ultimo_mese(TOP_GIORNI_LIMIT).await
    }
}
