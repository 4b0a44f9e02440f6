//! Shared application state for axum handlers.

use std::sync::Arc;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_app::services::abitazione_service::AbitazioneService;
use turista_app::services::dashboard_service::DashboardService;
use turista_app::services::feedback_service::FeedbackService;
use turista_app::services::host_service::HostService;
use turista_app::services::prenotazione_service::PrenotazioneService;
use turista_app::services::utente_service::UtenteService;

/// Application state shared across all axum handlers.
///
/// Generic over the five repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<UR, HR, AR, PR, FR> {
    /// Utente CRUD service.
    pub utente_service: Arc<UtenteService<UR>>,
    /// Host CRUD service.
    pub host_service: Arc<HostService<HR>>,
    /// Abitazione CRUD service.
    pub abitazione_service: Arc<AbitazioneService<AR>>,
    /// Prenotazione CRUD service with the availability check.
    pub prenotazione_service: Arc<PrenotazioneService<PR, AR>>,
    /// Feedback CRUD service.
    pub feedback_service: Arc<FeedbackService<FR>>,
    /// Dashboard aggregation and search service.
    pub dashboard_service: Arc<DashboardService<UR, HR, AR, PR, FR>>,
}

impl<UR, HR, AR, PR, FR> Clone for AppState<UR, HR, AR, PR, FR> {
    fn clone(&self) -> Self {
        Self {
            utente_service: Arc::clone(&self.utente_service),
            host_service: Arc::clone(&self.host_service),
            abitazione_service: Arc::clone(&self.abitazione_service),
            prenotazione_service: Arc::clone(&self.prenotazione_service),
            feedback_service: Arc::clone(&self.feedback_service),
            dashboard_service: Arc::clone(&self.dashboard_service),
        }
    }
}

impl<UR, HR, AR, PR, FR> AppState<UR, HR, AR, PR, FR>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        utente_service: UtenteService<UR>,
        host_service: HostService<HR>,
        abitazione_service: AbitazioneService<AR>,
        prenotazione_service: PrenotazioneService<PR, AR>,
        feedback_service: FeedbackService<FR>,
        dashboard_service: DashboardService<UR, HR, AR, PR, FR>,
    ) -> Self {
        Self {
            utente_service: Arc::new(utente_service),
            host_service: Arc::new(host_service),
            abitazione_service: Arc::new(abitazione_service),
            prenotazione_service: Arc::new(prenotazione_service),
            feedback_service: Arc::new(feedback_service),
            dashboard_service: Arc::new(dashboard_service),
        }
    }
}
