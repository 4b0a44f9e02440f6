//! Host service — use-cases for managing listing owners.
//!
//! On top of plain CRUD the service guards the codice-host uniqueness
//! rule: two hosts can never share a codice.

use turista_domain::error::{ConflictError, NotFoundError, TuristaError};
use turista_domain::host::Host;
use turista_domain::id::HostId;

use crate::ports::HostRepository;

/// Application service for host CRUD, lookup by codice, and host reports.
pub struct HostService<R> {
    repo: R,
}

impl<R: HostRepository> HostService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new host after validating invariants and checking codice
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] if invariants fail,
    /// [`TuristaError::Conflict`] when the codice is already taken, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, host), fields(codice_host = %host.codice_host))]
    pub async fn create_host(&self, host: Host) -> Result<Host, TuristaError> {
        host.validate()?;
        if self.repo.get_by_codice(host.codice_host.trim()).await?.is_some() {
            return Err(ConflictError::CodiceHostEsistente.into());
        }
        self.repo.create(host).await
    }

    /// Look up a host by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no host with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_host(&self, id: HostId) -> Result<Host, TuristaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Host(id).into())
    }

    /// Look up a host by codice, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no host carries `codice`.
    #[tracing::instrument(skip(self))]
    pub async fn get_host_by_codice(&self, codice: &str) -> Result<Host, TuristaError> {
        self.repo
            .get_by_codice(codice)
            .await?
            .ok_or_else(|| NotFoundError::HostCodice(codice.to_string()).into())
    }

    /// List all hosts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_host(&self) -> Result<Vec<Host>, TuristaError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing host.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Conflict`] when the codice belongs to a
    /// different host, [`TuristaError::NotFound`] when the record does not
    /// exist, or [`TuristaError::Validation`] if invariants fail.
    #[tracing::instrument(skip(self, host), fields(codice_host = %host.codice_host))]
    pub async fn update_host(&self, id: HostId, mut host: Host) -> Result<Host, TuristaError> {
        host.id = Some(id);
        host.validate()?;
        if let Some(existing) = self.repo.get_by_codice(host.codice_host.trim()).await? {
            if existing.id != Some(id) {
                return Err(ConflictError::CodiceHostEsistente.into());
            }
        }
        self.get_host(id).await?;
        self.repo.update(host).await
    }

    /// Delete a host by id.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_host(&self, id: HostId) -> Result<(), TuristaError> {
        self.get_host(id).await?;
        self.repo.delete(id).await
    }

    /// Hosts ranked by booking count in the last month.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn top_prenotazioni_ultimo_mese(&self) -> Result<Vec<Host>, TuristaError> {
        self.repo.top_prenotazioni_ultimo_mese().await
    }

    /// Hosts with at least 100 total prenotazioni.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn super_host(&self) -> Result<Vec<Host>, TuristaError> {
        self.repo.super_host().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryHostRepo {
        store: Mutex<BTreeMap<i64, Host>>,
    }

    impl HostRepository for InMemoryHostRepo {
        async fn create(&self, mut host: Host) -> Result<Host, TuristaError> {
            let mut store = self.store.lock().unwrap();
            let id = store.keys().next_back().copied().unwrap_or(0) + 1;
            host.id = Some(HostId::new(id));
            store.insert(id, host.clone());
            Ok(host)
        }

        async fn get_by_id(&self, id: HostId) -> Result<Option<Host>, TuristaError> {
            Ok(self.store.lock().unwrap().get(&id.value()).cloned())
        }

        async fn get_by_codice(&self, codice: &str) -> Result<Option<Host>, TuristaError> {
            let store = self.store.lock().unwrap();
            Ok(store.values().find(|h| h.codice_host == codice).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Host>, TuristaError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, host: Host) -> Result<Host, TuristaError> {
            let id = host.id.unwrap().value();
            self.store.lock().unwrap().insert(id, host.clone());
            Ok(host)
        }

        async fn delete(&self, id: HostId) -> Result<(), TuristaError> {
            self.store.lock().unwrap().remove(&id.value());
            Ok(())
        }

        async fn top_prenotazioni_ultimo_mese(&self) -> Result<Vec<Host>, TuristaError> {
            Ok(vec![])
        }

        async fn super_host(&self) -> Result<Vec<Host>, TuristaError> {
            Ok(vec![])
        }
    }

    fn make_service() -> HostService<InMemoryHostRepo> {
        HostService::new(InMemoryHostRepo::default())
    }

    fn host_with_codice(codice: &str) -> Host {
        Host {
            id: None,
            codice_host: codice.to_string(),
            nome: "Anna".to_string(),
            cognome: "Bianchi".to_string(),
            email: "anna@example.com".to_string(),
            indirizzo: None,
        }
    }

    #[tokio::test]
    async fn should_create_host_with_fresh_codice() {
        let svc = make_service();
        let created = svc.create_host(host_with_codice("HOST001")).await.unwrap();
        assert!(created.id.is_some());
    }

    #[tokio::test]
    async fn should_reject_duplicate_codice_on_create() {
        let svc = make_service();
        svc.create_host(host_with_codice("HOST001")).await.unwrap();

        let result = svc.create_host(host_with_codice("HOST001")).await;
        assert!(matches!(
            result,
            Err(TuristaError::Conflict(ConflictError::CodiceHostEsistente))
        ));
    }

    #[tokio::test]
    async fn should_allow_update_keeping_own_codice() {
        let svc = make_service();
        let created = svc.create_host(host_with_codice("HOST001")).await.unwrap();
        let id = created.id.unwrap();

        let mut updated = created;
        updated.nome = "Luisa".to_string();
        let saved = svc.update_host(id, updated).await.unwrap();
        assert_eq!(saved.nome, "Luisa");
    }

    #[tokio::test]
    async fn should_reject_update_stealing_another_codice() {
        let svc = make_service();
        svc.create_host(host_with_codice("HOST001")).await.unwrap();
        let second = svc.create_host(host_with_codice("HOST002")).await.unwrap();
        let id = second.id.unwrap();

        let result = svc.update_host(id, host_with_codice("HOST001")).await;
        assert!(matches!(
            result,
            Err(TuristaError::Conflict(ConflictError::CodiceHostEsistente))
        ));
    }

    #[tokio::test]
    async fn should_find_host_by_codice() {
        let svc = make_service();
        svc.create_host(host_with_codice("HOST007")).await.unwrap();

        let found = svc.get_host_by_codice("HOST007").await.unwrap();
        assert_eq!(found.codice_host, "HOST007");

        let missing = svc.get_host_by_codice("HOST999").await;
        assert!(matches!(missing, Err(TuristaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_refuse_delete_of_missing_host() {
        let svc = make_service();
        let result = svc.delete_host(HostId::new(42)).await;
        assert!(matches!(result, Err(TuristaError::NotFound(_))));
    }
}
