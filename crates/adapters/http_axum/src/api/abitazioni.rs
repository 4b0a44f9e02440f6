//! JSON REST handlers for abitazioni.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_domain::abitazione::Abitazione;
use turista_domain::id::{AbitazioneId, HostId};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating an abitazione.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbitazioneRequest {
    pub nome: String,
    pub indirizzo: String,
    pub locali: i32,
    pub posti_letto: i32,
    pub piano: Option<i32>,
    pub prezzo: f64,
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub host_id: i64,
}

impl AbitazioneRequest {
    fn into_abitazione(self) -> Abitazione {
        Abitazione {
            id: None,
            nome: self.nome,
            indirizzo: self.indirizzo,
            locali: self.locali,
            posti_letto: self.posti_letto,
            piano: self.piano,
            prezzo: self.prezzo,
            data_inizio: self.data_inizio,
            data_fine: self.data_fine,
            host_id: HostId::new(self.host_id),
        }
    }
}

/// Body returned by the media-posti-letto report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPostiLettoBody {
    pub media_posti_letto: f64,
}

/// Body returned by the piu-gettonata report when no booking happened in
/// the last month.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Abitazione>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Abitazione>),
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
    Created(Json<Abitazione>),
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

/// Possible responses from the piu-gettonata report.
pub enum PiuGettonataResponse {
    Ok(Json<Abitazione>),
    NessunaPrenotazione(Json<MessageBody>),
}

impl IntoResponse for PiuGettonataResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NessunaPrenotazione(json) => json.into_response(),
        }
    }
}

/// `GET /api/abitazioni`
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
    let abitazioni = state.abitazione_service.list_abitazioni().await?;
    Ok(ListResponse::Ok(Json(abitazioni)))
}

/// `GET /api/abitazioni/:id`
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
    let abitazione = state
        .abitazione_service
        .get_abitazione(AbitazioneId::new(id))
        .await?;
    Ok(GetResponse::Ok(Json(abitazione)))
}

/// `GET /api/abitazioni/host/:codice`
pub async fn list_by_host<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(codice): Path<String>,
) -> Result<ListResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let abitazioni = state
        .abitazione_service
        .list_by_codice_host(&codice)
        .await?;
    Ok(ListResponse::Ok(Json(abitazioni)))
}

/// `POST /api/abitazioni`
pub async fn create<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Json(req): Json<AbitazioneRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let created = state
        .abitazione_service
        .create_abitazione(req.into_abitazione())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/abitazioni/:id`
pub async fn update<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
    Json(req): Json<AbitazioneRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let updated = state
        .abitazione_service
        .update_abitazione(AbitazioneId::new(id), req.into_abitazione())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/abitazioni/:id`
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
        .abitazione_service
        .delete_abitazione(AbitazioneId::new(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/abitazioni/report/piu-gettonata`
pub async fn piu_gettonata<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<PiuGettonataResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    match state.abitazione_service.piu_gettonata_ultimo_mese().await? {
        Some(abitazione) => Ok(PiuGettonataResponse::Ok(Json(abitazione))),
        None => Ok(PiuGettonataResponse::NessunaPrenotazione(Json(
            MessageBody {
                message: "Nessuna prenotazione nell'ultimo mese".to_string(),
            },
        ))),
    }
}

/// `GET /api/abitazioni/report/media-posti-letto`
pub async fn media_posti_letto<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<Json<MediaPostiLettoBody>, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let media = state.abitazione_service.media_posti_letto().await?;
    Ok(Json(MediaPostiLettoBody {
        media_posti_letto: media,
    }))
}
