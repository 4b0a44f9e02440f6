//! JSON handlers for the dashboard views.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_app::services::dashboard_service::{
    AbitazioniQuery, FeedbackQuery, PrenotazioniQuery, Promemoria, Riepilogo,
};
use turista_domain::abitazione::Abitazione;
use turista_domain::feedback::Feedback;
use turista_domain::host::Host;
use turista_domain::id::{AbitazioneId, HostId, UtenteId};
use turista_domain::page::Paged;
use turista_domain::prenotazione::Prenotazione;

use crate::error::ApiError;
use crate::state::AppState;

fn default_page() -> usize {
    1
}

/// Query string for the prenotazioni view.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioniParams {
    pub q: Option<String>,
    pub utente_id: Option<i64>,
    pub abitazione_id: Option<i64>,
    #[serde(default = "default_page")]
    pub page: usize,
}

/// Query string for the feedback view.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackParams {
    pub q: Option<String>,
    pub punteggio: Option<i32>,
    pub utente_id: Option<i64>,
    #[serde(default = "default_page")]
    pub page: usize,
}

/// Query string for the abitazioni view.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbitazioniParams {
    pub q: Option<String>,
    pub host_id: Option<i64>,
    #[serde(default = "default_page")]
    pub page: usize,
}

/// `GET /api/dashboard/summary`
pub async fn summary<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<Json<Riepilogo>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let riepilogo = state.dashboard_service.riepilogo().await?;
    Ok(Json(riepilogo))
}

/// `GET /api/dashboard/prenotazioni`
pub async fn prenotazioni<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Query(params): Query<PrenotazioniParams>,
) -> Result<Json<Paged<Prenotazione>>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let query = PrenotazioniQuery {
        q: params.q,
        utente_id: params.utente_id.map(UtenteId::new),
        abitazione_id: params.abitazione_id.map(AbitazioneId::new),
        page: params.page,
    };
    let paged = state.dashboard_service.prenotazioni_view(&query).await?;
    Ok(Json(paged))
}

/// `GET /api/dashboard/feedback`
pub async fn feedback<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Query(params): Query<FeedbackParams>,
) -> Result<Json<Paged<Feedback>>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let query = FeedbackQuery {
        q: params.q,
        punteggio: params.punteggio,
        utente_id: params.utente_id.map(UtenteId::new),
        page: params.page,
    };
    let paged = state.dashboard_service.feedback_view(&query).await?;
    Ok(Json(paged))
}

/// `GET /api/dashboard/abitazioni`
pub async fn abitazioni<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Query(params): Query<AbitazioniParams>,
) -> Result<Json<Paged<Abitazione>>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let query = AbitazioniQuery {
        q: params.q,
        host_id: params.host_id.map(HostId::new),
        page: params.page,
    };
    let paged = state.dashboard_service.abitazioni_view(&query).await?;
    Ok(Json(paged))
}

/// `GET /api/dashboard/promemoria`
pub async fn promemoria<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<Json<Promemoria>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let promemoria = state.dashboard_service.promemoria().await?;
    Ok(Json(promemoria))
}

/// `GET /api/dashboard/host` — options for the host filter dropdown.
pub async fn host<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<Json<Vec<Host>>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let host = state.dashboard_service.list_host().await?;
    Ok(Json(host))
}
