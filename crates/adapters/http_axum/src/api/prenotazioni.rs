//! JSON REST handlers for prenotazioni.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Deserialize;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_domain::id::{AbitazioneId, PrenotazioneId, UtenteId};
use turista_domain::prenotazione::Prenotazione;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a prenotazione.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioneRequest {
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub utente_id: i64,
    pub abitazione_id: i64,
}

impl PrenotazioneRequest {
    fn into_prenotazione(self) -> Prenotazione {
        Prenotazione {
            id: None,
            data_inizio: self.data_inizio,
            data_fine: self.data_fine,
            utente_id: UtenteId::new(self.utente_id),
            abitazione_id: AbitazioneId::new(self.abitazione_id),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Prenotazione>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update, and ultima endpoints.
pub enum GetResponse {
    Ok(Json<Prenotazione>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Prenotazione>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/prenotazioni`
pub async fn list<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let prenotazioni = state.prenotazione_service.list_prenotazioni().await?;
    Ok(ListResponse::Ok(Json(prenotazioni)))
}

/// `GET /api/prenotazioni/:id`
pub async fn get<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let prenotazione = state
        .prenotazione_service
        .get_prenotazione(PrenotazioneId::new(id))
        .await?;
    Ok(GetResponse::Ok(Json(prenotazione)))
}

/// `GET /api/prenotazioni/ultima/:utente_id`
pub async fn ultima<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(utente_id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let prenotazione = state
        .prenotazione_service
        .ultima_by_utente(UtenteId::new(utente_id))
        .await?;
    Ok(GetResponse::Ok(Json(prenotazione)))
}

/// `POST /api/prenotazioni`
pub async fn create<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Json(req): Json<PrenotazioneRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let created = state
        .prenotazione_service
        .create_prenotazione(req.into_prenotazione())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/prenotazioni/:id`
pub async fn update<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
    Json(req): Json<PrenotazioneRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let updated = state
        .prenotazione_service
        .update_prenotazione(PrenotazioneId::new(id), req.into_prenotazione())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/prenotazioni/:id`
pub async fn delete<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    state
        .prenotazione_service
        .delete_prenotazione(PrenotazioneId::new(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}
