//! Feedback service — use-cases for managing reviews.
//!
//! Each prenotazione can carry at most one feedback; the service guards
//! the rule on create and on update-to-another-booking.

use turista_domain::error::{ConflictError, NotFoundError, TuristaError};
use turista_domain::feedback::Feedback;
use turista_domain::id::{FeedbackId, PrenotazioneId};

use crate::ports::FeedbackRepository;

/// Application service for feedback CRUD and the per-booking lookup.
pub struct FeedbackService<R> {
    repo: R,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new feedback after validating the punteggio and the
    /// one-per-prenotazione rule.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] for an out-of-scale punteggio
    /// or [`TuristaError::Conflict`] when the prenotazione already has a
    /// feedback.
    #[tracing::instrument(skip(self, feedback), fields(prenotazione_id = %feedback.prenotazione_id))]
    pub async fn create_feedback(&self, feedback: Feedback) -> Result<Feedback, TuristaError> {
        feedback.validate()?;
        if self
            .repo
            .get_by_prenotazione(feedback.prenotazione_id)
            .await?
            .is_some()
        {
            return Err(ConflictError::FeedbackEsistente.into());
        }
        self.repo.create(feedback).await
    }

    /// Look up a feedback by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when no feedback with `id`
    /// exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_feedback(&self, id: FeedbackId) -> Result<Feedback, TuristaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Feedback(id).into())
    }

    /// The feedback attached to a prenotazione.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the prenotazione has none.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_prenotazione(
        &self,
        prenotazione_id: PrenotazioneId,
    ) -> Result<Feedback, TuristaError> {
        self.repo
            .get_by_prenotazione(prenotazione_id)
            .await?
            .ok_or_else(|| NotFoundError::FeedbackPrenotazione(prenotazione_id).into())
    }

    /// List all feedback in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, TuristaError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing feedback.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Conflict`] when the target prenotazione
    /// already carries a different feedback, [`TuristaError::NotFound`]
    /// when the record does not exist, or [`TuristaError::Validation`] for
    /// an out-of-scale punteggio.
    #[tracing::instrument(skip(self, feedback))]
    pub async fn update_feedback(
        &self,
        id: FeedbackId,
        mut feedback: Feedback,
    ) -> Result<Feedback, TuristaError> {
        feedback.id = Some(id);
        feedback.validate()?;
        if let Some(existing) = self
            .repo
            .get_by_prenotazione(feedback.prenotazione_id)
            .await?
        {
            if existing.id != Some(id) {
                return Err(ConflictError::FeedbackEsistente.into());
            }
        }
        self.get_feedback(id).await?;
        self.repo.update(feedback).await
    }

    /// Delete a feedback by id.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::NotFound`] when the record does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_feedback(&self, id: FeedbackId) -> Result<(), TuristaError> {
        self.get_feedback(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use turista_domain::error::ValidationError;

    #[derive(Default)]
    struct InMemoryFeedbackRepo {
        store: Mutex<BTreeMap<i64, Feedback>>,
    }

    impl FeedbackRepository for InMemoryFeedbackRepo {
        async fn create(&self, mut feedback: Feedback) -> Result<Feedback, TuristaError> {
            let mut store = self.store.lock().unwrap();
            let id = store.keys().next_back().copied().unwrap_or(0) + 1;
            feedback.id = Some(FeedbackId::new(id));
            store.insert(id, feedback.clone());
            Ok(feedback)
        }

        async fn get_by_id(&self, id: FeedbackId) -> Result<Option<Feedback>, TuristaError> {
            Ok(self.store.lock().unwrap().get(&id.value()).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Feedback>, TuristaError> {
            Ok(self.store.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, feedback: Feedback) -> Result<Feedback, TuristaError> {
            let id = feedback.id.unwrap().value();
            self.store.lock().unwrap().insert(id, feedback.clone());
            Ok(feedback)
        }

        async fn delete(&self, id: FeedbackId) -> Result<(), TuristaError> {
            self.store.lock().unwrap().remove(&id.value());
            Ok(())
        }

        async fn get_by_prenotazione(
            &self,
            prenotazione_id: PrenotazioneId,
        ) -> Result<Option<Feedback>, TuristaError> {
            let store = self.store.lock().unwrap();
            Ok(store
                .values()
                .find(|f| f.prenotazione_id == prenotazione_id)
                .cloned())
        }
    }

    fn make_service() -> FeedbackService<InMemoryFeedbackRepo> {
        FeedbackService::new(InMemoryFeedbackRepo::default())
    }

    fn feedback_for(prenotazione: i64, punteggio: i32) -> Feedback {
        Feedback {
            id: None,
            titolo: None,
            testo: Some("Tutto bene".to_string()),
            punteggio,
            prenotazione_id: PrenotazioneId::new(prenotazione),
        }
    }

    #[tokio::test]
    async fn should_create_feedback_for_fresh_prenotazione() {
        let svc = make_service();
        let created = svc.create_feedback(feedback_for(1, 5)).await.unwrap();
        assert!(created.id.is_some());
    }

    #[tokio::test]
    async fn should_reject_second_feedback_for_same_prenotazione() {
        let svc = make_service();
        svc.create_feedback(feedback_for(1, 5)).await.unwrap();

        let result = svc.create_feedback(feedback_for(1, 3)).await;
        assert!(matches!(
            result,
            Err(TuristaError::Conflict(ConflictError::FeedbackEsistente))
        ));
    }

    #[tokio::test]
    async fn should_reject_out_of_scale_punteggio() {
        let svc = make_service();
        for punteggio in [0, 6] {
            let result = svc.create_feedback(feedback_for(1, punteggio)).await;
            assert!(matches!(
                result,
                Err(TuristaError::Validation(
                    ValidationError::PunteggioFuoriScala
                ))
            ));
        }
    }

    #[tokio::test]
    async fn should_allow_update_keeping_own_prenotazione() {
        let svc = make_service();
        let created = svc.create_feedback(feedback_for(1, 4)).await.unwrap();
        let id = created.id.unwrap();

        let mut updated = created;
        updated.punteggio = 5;
        let saved = svc.update_feedback(id, updated).await.unwrap();
        assert_eq!(saved.punteggio, 5);
    }

    #[tokio::test]
    async fn should_reject_update_moving_onto_reviewed_prenotazione() {
        let svc = make_service();
        svc.create_feedback(feedback_for(1, 4)).await.unwrap();
        let second = svc.create_feedback(feedback_for(2, 3)).await.unwrap();
        let id = second.id.unwrap();

        let result = svc.update_feedback(id, feedback_for(1, 3)).await;
        assert!(matches!(
            result,
            Err(TuristaError::Conflict(ConflictError::FeedbackEsistente))
        ));
    }

    #[tokio::test]
    async fn should_find_feedback_by_prenotazione() {
        let svc = make_service();
        svc.create_feedback(feedback_for(7, 2)).await.unwrap();

        let found = svc.get_by_prenotazione(PrenotazioneId::new(7)).await.unwrap();
        assert_eq!(found.punteggio, 2);

        let missing = svc.get_by_prenotazione(PrenotazioneId::new(8)).await;
        assert!(matches!(missing, Err(TuristaError::NotFound(_))));
    }
}
