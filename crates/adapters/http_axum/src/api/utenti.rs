//! JSON REST handlers for utenti.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};
use turista_domain::id::UtenteId;
use turista_domain::utente::Utente;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating an utente.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtenteRequest {
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub indirizzo: Option<String>,
}

impl UtenteRequest {
    fn into_utente(self) -> Utente {
        Utente {
            id: None,
            nome: self.nome,
            cognome: self.cognome,
            email: self.email,
            indirizzo: self.indirizzo,
        }
    }
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Utente>>),
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
    Ok(Json<Utente>),
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
    Created(Json<Utente>),
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

/// `GET /api/utenti`
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
    let utenti = state.utente_service.list_utenti().await?;
    Ok(ListResponse::Ok(Json(utenti)))
}

/// `GET /api/utenti/:id`
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
    let utente = state.utente_service.get_utente(UtenteId::new(id)).await?;
    Ok(GetResponse::Ok(Json(utente)))
}

/// `POST /api/utenti`
pub async fn create<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Json(req): Json<UtenteRequest>,
) -> Result<CreateResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let created = state.utente_service.create_utente(req.into_utente()).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/utenti/:id`
pub async fn update<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
    Path(id): Path<i64>,
    Json(req): Json<UtenteRequest>,
) -> Result<GetResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let updated = state
        .utente_service
        .update_utente(UtenteId::new(id), req.into_utente())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/utenti/:id`
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
    state.utente_service.delete_utente(UtenteId::new(id)).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/utenti/report/top-giorni`
pub async fn top_giorni<UR, HR, AR, PR, FR>(
    State(state): State<AppState<UR, HR, AR, PR, FR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    let utenti = state.utente_service.top_giorni_ultimo_mese().await?;
    Ok(ListResponse::Ok(Json(utenti)))
}
