//! JSON REST handlers for host.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_domain::host::Host;
use turista_domain::id::HostId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a host.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRequest {
    pub codice_host: String,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub indirizzo: Option<String>,
}

impl HostRequest {
    fn into_host(self) -> Host {
        Host {
            id: None,
            codice_host: self.codice_host,
            nome: self.nome,
            cognome: self.cognome,
            email: self.email,
            indirizzo: self.indirizzo,
        }
    }
}

/// Possible responses from the list and report endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Host>>),
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
    Ok(Json<Host>),
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
    Created(Json<Host>),
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

/// `GET /api/host`
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
    let host = state.host_service.list_host().await?;
    Ok(ListResponse::Ok(Json(host)))
}

/// `GET /api/host/:id`
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
    let host = state.host_service.get_host(HostId::new(id)).await?;
    Ok(GetResponse::Ok(Json(host)))
}

/// `GET /api/host/codice/:codice`
pub async fn get_by_codice<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(codice): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let host = state.host_service.get_host_by_codice(&codice).await?;
    Ok(GetResponse::Ok(Json(host)))
}

/// `POST /api/host`
pub async fn create<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Json(req): Json<HostRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let created = state.host_service.create_host(req.into_host()).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/host/:id`
pub async fn update<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
    Json(req): Json<HostRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let updated = state
        .host_service
        .update_host(HostId::new(id), req.into_host())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/host/:id`
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
    state.host_service.delete_host(HostId::new(id)).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/host/report/top-prenotazioni`
pub async fn top_prenotazioni<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let host = state.host_service.top_prenotazioni_ultimo_mese().await?;
    Ok(ListResponse::Ok(Json(host)))
}

/// `GET /api/host/report/super-host`
pub async fn super_host<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let host = state.host_service.super_host().await?;
    Ok(ListResponse::Ok(Json(host)))
}
