//! Abitazione service — use-cases for managing rental listings.

use turista_domain::abitazione::Abitazione;
use turista_domain::error::{NotFoundError, TuristaError};
use turista_domain::id::AbitazioneId;

use crate::ports::AbitazioneRepository;

/// Application service for abitazione CRUD, host lookups, and the two
/// listing reports.
pub struct AbitazioneService<R> {
    repo: R,
}

impl<R: AbitazioneRepository> AbitazioneService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new abitazione after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, abitazione), fields(abitazione_nome = %abitazione.nome))]
    pub async fn create_abitazione(&self, abitazione: Abitazione) -> Result<Abitazione, TuristaError> {
        abitazione.validate()?;
        self.repo.create(abitazione).await
    }

    /// Look up an abitazione by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no abitazione with `id`
    /// exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_abitazione(&self, id: AbitazioneId) -> Result<Abitazione, TuristaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Abitazione(id).into())
    }

    /// List all abitazioni.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_abitazioni(&self) -> Result<Vec<Abitazione>, TuristaError> {
        self.repo.get_all().await
    }

    /// List the abitazioni owned by the host with the given codice.
    ///
    /// An unknown codice yields an empty list, not an error — the report
    /// screen shows "no results" for it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_codice_host(&self, codice: &str) -> Result<Vec<Abitazione>, TuristaError> {
        self.repo.get_by_codice_host(codice).await
    }

    /// Replace the mutable fields of an existing abitazione.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] if invariants fail, or
    /// [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self, abitazione))]
    pub async fn update_abitazione(
        &self,
        id: AbitazioneId,
        mut abitazione: Abitazione,
    ) -> Result<Abitazione, TuristaError> {
        abitazione.id = Some(id);
        abitazione.validate()?;
        self.get_abitazione(id).await?;
        self.repo.update(abitazione).await
    }

    /// Delete an abitazione by id.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_abitazione(&self, id: AbitazioneId) -> Result<(), TuristaError> {
        self.get_abitazione(id).await?;
        self.repo.delete(id).await
    }

    /// The most-booked abitazione in the last month, `None` when no
    /// booking happened.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn piu_gettonata_ultimo_mese(&self) -> Result<Option<Abitazione>, TuristaError> {
        self.repo.piu_gettonata_ultimo_mese().await
    }

    /// Average beds per abitazione across all records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn media_posti_letto(&self) -> Result<f64, TuristaError> {
        self.repo.media_posti_letto().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use turista_domain::error::ValidationError;
    use turista_domain::id::HostId;

    #[derive(Default)]
    struct InMemoryAbitazioneRepo {
        store: Mutex<BTreeMap<i64, Abitazione>>,
    }

    impl AbitazioneRepository for InMemoryAbitazioneRepo {
        async fn create(&self, mut abitazione: Abitazione) -> Result<Abitazione, TuristaError> {
            let mut store = self.store.lock().unwrap();
            let id = store.keys().next_back().copied().unwrap_or(0) + 1;
            abitazione.id = Some(AbitazioneId::new(id));
            store.insert(id, abitazione.clone());
            Ok(abitazione)
        }

        async fn get_by_id(&self, id: AbitazioneId) -> Result<Option<Abitazione>, TuristaError> {
            Ok(self.store.lock().unwrap().get(&id.value()).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Abitazione>, TuristaError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }

        async fn get_by_codice_host(&self, _codice: &str) -> Result<Vec<Abitazione>, TuristaError> {
            Ok(vec![])
        }

        async fn update(&self, abitazione: Abitazione) -> Result<Abitazione, TuristaError> {
            let id = abitazione.id.unwrap().value();
            self.store.lock().unwrap().insert(id, abitazione.clone());
            Ok(abitazione)
        }

        async fn delete(&self, id: AbitazioneId) -> Result<(), TuristaError> {
            self.store.lock().unwrap().remove(&id.value());
            Ok(())
        }

        async fn piu_gettonata_ultimo_mese(&self) -> Result<Option<Abitazione>, TuristaError> {
            Ok(None)
        }

        async fn media_posti_letto(&self) -> Result<f64, TuristaError> {
            let store = self.store.lock().unwrap();
            if store.is_empty() {
                return Ok(0.0);
            }
            let total: i32 = store.values().map(|a| a.posti_letto).sum();
            Ok(f64::from(total) / store.len() as f64)
        }
    }

    fn make_service() -> AbitazioneService<InMemoryAbitazioneRepo> {
        AbitazioneService::new(InMemoryAbitazioneRepo::default())
    }

    fn valid_abitazione() -> Abitazione {
        Abitazione {
            id: None,
            nome: "Trilocale".to_string(),
            indirizzo: "Via Po 5, Torino".to_string(),
            locali: 3,
            posti_letto: 4,
            piano: None,
            prezzo: 95.0,
            data_inizio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            data_fine: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            host_id: HostId::new(1),
        }
    }

    #[tokio::test]
    async fn should_create_valid_abitazione() {
        let svc = make_service();
        let created = svc.create_abitazione(valid_abitazione()).await.unwrap();
        assert!(created.id.is_some());
    }

    #[tokio::test]
    async fn should_reject_window_ending_before_it_starts() {
        let svc = make_service();
        let mut ab = valid_abitazione();
        ab.data_fine = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let result = svc.create_abitazione(ab).await;
        assert!(matches!(
            result,
            Err(TuristaError::Validation(ValidationError::PeriodoInvertito))
        ));
    }

    #[tokio::test]
    async fn should_refuse_update_of_missing_abitazione() {
        let svc = make_service();
        let result = svc
            .update_abitazione(AbitazioneId::new(9), valid_abitazione())
            .await;
        assert!(matches!(result, Err(TuristaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_compute_media_posti_letto_over_store() {
        let svc = make_service();
        svc.create_abitazione(valid_abitazione()).await.unwrap();
        let mut second = valid_abitazione();
        second.posti_letto = 2;
        svc.create_abitazione(second).await.unwrap();

        let media = svc.media_posti_letto().await.unwrap();
        assert!((media - 3.0).abs() < f64::EPSILON);
    }
}
