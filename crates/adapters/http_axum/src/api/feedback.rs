//! JSON REST handlers for feedback.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_domain::feedback::Feedback;
use turista_domain::id::{FeedbackId, PrenotazioneId};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a feedback.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub titolo: Option<String>,
    pub testo: Option<String>,
    pub punteggio: i32,
    pub prenotazione_id: i64,
}

impl FeedbackRequest {
    fn into_feedback(self) -> Feedback {
        Feedback {
            id: None,
            titolo: self.titolo,
            testo: self.testo,
            punteggio: self.punteggio,
            prenotazione_id: PrenotazioneId::new(self.prenotazione_id),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Feedback>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update, and per-prenotazione endpoints.
pub enum GetResponse {
    Ok(Json<Feedback>),
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
    Created(Json<Feedback>),
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

/// `GET /api/feedback`
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
    let feedback = state.feedback_service.list_feedback().await?;
    Ok(ListResponse::Ok(Json(feedback)))
}

/// `GET /api/feedback/:id`
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
    let feedback = state
        .feedback_service
        .get_feedback(FeedbackId::new(id))
        .await?;
    Ok(GetResponse::Ok(Json(feedback)))
}

/// `GET /api/feedback/prenotazione/:prenotazione_id`
pub async fn get_by_prenotazione<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(prenotazione_id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let feedback = state
        .feedback_service
        .get_by_prenotazione(PrenotazioneId::new(prenotazione_id))
        .await?;
    Ok(GetResponse::Ok(Json(feedback)))
}

/// `POST /api/feedback`
pub async fn create<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Json(req): Json<FeedbackRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let created = state
        .feedback_service
        .create_feedback(req.into_feedback())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/feedback/:id`
pub async fn update<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
    Json(req): Json<FeedbackRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let updated = state
        .feedback_service
        .update_feedback(FeedbackId::new(id), req.into_feedback())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/feedback/:id`
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
        .feedback_service
        .delete_feedback(FeedbackId::new(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}
