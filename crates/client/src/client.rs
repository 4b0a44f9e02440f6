//! The API client and its per-entity views.

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use turista_domain::abitazione::Abitazione;
use turista_domain::feedback::Feedback;
use turista_domain::host::Host;
use turista_domain::id::{AbitazioneId, FeedbackId, HostId, PrenotazioneId, UtenteId};
use turista_domain::page::Paged;
use turista_domain::prenotazione::Prenotazione;
use turista_domain::utente::Utente;

use crate::error::ClientError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Body of the media-posti-letto report.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaPostiLettoBody {
    media_posti_letto: f64,
}

/// Result of the piu-gettonata report: either the winning abitazione or
/// the server's explanatory message when no booking happened last month.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum PiuGettonata {
    Abitazione(Abitazione),
    Messaggio { message: String },
}

/// Dashboard quick stats as served by `/api/dashboard/summary`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Riepilogo {
    pub prenotazioni: usize,
    pub abitazioni: usize,
    pub utenti: usize,
    pub feedback_medio: f64,
}

/// Recent-activity panel as served by `/api/dashboard/promemoria`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promemoria {
    pub prenotazioni_recenti: Vec<Prenotazione>,
    #[serde(default)]
    pub ultimo_feedback: Option<Feedback>,
}

/// Filters for the dashboard prenotazioni view.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrenotazioniFiltro {
    pub q: Option<String>,
    pub utente_id: Option<i64>,
    pub abitazione_id: Option<i64>,
    pub page: Option<usize>,
}

/// Filters for the dashboard feedback view.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFiltro {
    pub q: Option<String>,
    pub punteggio: Option<i32>,
    pub utente_id: Option<i64>,
    pub page: Option<usize>,
}

/// Filters for the dashboard abitazioni view.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbitazioniFiltro {
    pub q: Option<String>,
    pub host_id: Option<i64>,
    pub page: Option<usize>,
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.error.is_empty() {
            return parsed.error;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Errore sconosciuto")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

async fn fail_on_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = fail_on_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|_| ClientError::RispostaNonValida)
}

async fn read_unit(response: Response) -> Result<(), ClientError> {
    fail_on_status(response).await?;
    Ok(())
}

/// Typed client for the turista REST API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Create a client pointing at the given base URL (scheme, host, and
    /// port; no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        read_json(response).await
    }

    async fn get_json_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        read_json(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        read_json(response).await
    }

    async fn delete_path(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        read_unit(response).await
    }

    /// View over the utenti endpoints.
    #[must_use]
    pub fn utenti(&self) -> UtentiClient<'_> {
        UtentiClient { api: self }
    }

    /// View over the host endpoints.
    #[must_use]
    pub fn host(&self) -> HostClient<'_> {
        HostClient { api: self }
    }

    /// View over the abitazioni endpoints.
    #[must_use]
    pub fn abitazioni(&self) -> AbitazioniClient<'_> {
        AbitazioniClient { api: self }
    }

    /// View over the prenotazioni endpoints.
    #[must_use]
    pub fn prenotazioni(&self) -> PrenotazioniClient<'_> {
        PrenotazioniClient { api: self }
    }

    /// View over the feedback endpoints.
    #[must_use]
    pub fn feedback(&self) -> FeedbackClient<'_> {
        FeedbackClient { api: self }
    }

    /// View over the dashboard endpoints.
    #[must_use]
    pub fn dashboard(&self) -> DashboardClient<'_> {
        DashboardClient { api: self }
    }
}

/// Calls under `/api/utenti`.
pub struct UtentiClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl UtentiClient<'_> {
    pub async fn get_all(&self) -> Result<Vec<Utente>, ClientError> {
        self.api.get_json("/api/utenti").await
    }

    pub async fn get_by_id(&self, id: UtenteId) -> Result<Utente, ClientError> {
        self.api.get_json(&format!("/api/utenti/{id}")).await
    }

    pub async fn create(&self, utente: &Utente) -> Result<Utente, ClientError> {
        self.api.post_json("/api/utenti", utente).await
    }

    pub async fn update(&self, id: UtenteId, utente: &Utente) -> Result<Utente, ClientError> {
        self.api.put_json(&format!("/api/utenti/{id}"), utente).await
    }

    pub async fn delete(&self, id: UtenteId) -> Result<(), ClientError> {
        self.api.delete_path(&format!("/api/utenti/{id}")).await
    }

    /// Utenti ranked by days booked in the last month.
    pub async fn top_giorni(&self) -> Result<Vec<Utente>, ClientError> {
        self.api.get_json("/api/utenti/report/top-giorni").await
    }
}

/// Calls under `/api/host`.
pub struct HostClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl HostClient<'_> {
    pub async fn get_all(&self) -> Result<Vec<Host>, ClientError> {
        self.api.get_json("/api/host").await
    }

    pub async fn get_by_id(&self, id: HostId) -> Result<Host, ClientError> {
        self.api.get_json(&format!("/api/host/{id}")).await
    }

    pub async fn get_by_codice(&self, codice: &str) -> Result<Host, ClientError> {
        self.api.get_json(&format!("/api/host/codice/{codice}")).await
    }

    pub async fn create(&self, host: &Host) -> Result<Host, ClientError> {
        self.api.post_json("/api/host", host).await
    }

    pub async fn update(&self, id: HostId, host: &Host) -> Result<Host, ClientError> {
        self.api.put_json(&format!("/api/host/{id}"), host).await
    }

    pub async fn delete(&self, id: HostId) -> Result<(), ClientError> {
        self.api.delete_path(&format!("/api/host/{id}")).await
    }

    /// Hosts ranked by booking count in the last month.
    pub async fn top_prenotazioni(&self) -> Result<Vec<Host>, ClientError> {
        self.api.get_json("/api/host/report/top-prenotazioni").await
    }

    /// Hosts with at least 100 total prenotazioni.
    pub async fn super_host(&self) -> Result<Vec<Host>, ClientError> {
        self.api.get_json("/api/host/report/super-host").await
    }
}

/// Calls under `/api/abitazioni`.
pub struct AbitazioniClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl AbitazioniClient<'_> {
    pub async fn get_all(&self) -> Result<Vec<Abitazione>, ClientError> {
        self.api.get_json("/api/abitazioni").await
    }

    pub async fn get_by_id(&self, id: AbitazioneId) -> Result<Abitazione, ClientError> {
        self.api.get_json(&format!("/api/abitazioni/{id}")).await
    }

    /// The abitazioni owned by the host with the given codice.
    pub async fn get_by_codice_host(&self, codice: &str) -> Result<Vec<Abitazione>, ClientError> {
        self.api.get_json(&format!("/api/abitazioni/host/{codice}")).await
    }

    pub async fn create(&self, abitazione: &Abitazione) -> Result<Abitazione, ClientError> {
        self.api.post_json("/api/abitazioni", abitazione).await
    }

    pub async fn update(
        &self,
        id: AbitazioneId,
        abitazione: &Abitazione,
    ) -> Result<Abitazione, ClientError> {
        self.api
            .put_json(&format!("/api/abitazioni/{id}"), abitazione)
            .await
    }

    pub async fn delete(&self, id: AbitazioneId) -> Result<(), ClientError> {
        self.api.delete_path(&format!("/api/abitazioni/{id}")).await
    }

    /// The most-booked abitazione in the last month.
    pub async fn piu_gettonata(&self) -> Result<PiuGettonata, ClientError> {
        self.api.get_json("/api/abitazioni/report/piu-gettonata").await
    }

    /// Average beds per abitazione.
    pub async fn media_posti_letto(&self) -> Result<f64, ClientError> {
        let body: MediaPostiLettoBody = self
            .api
            .get_json("/api/abitazioni/report/media-posti-letto")
            .await?;
        Ok(body.media_posti_letto)
    }
}

/// Calls under `/api/prenotazioni`.
pub struct PrenotazioniClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl PrenotazioniClient<'_> {
    pub async fn get_all(&self) -> Result<Vec<Prenotazione>, ClientError> {
        self.api.get_json("/api/prenotazioni").await
    }

    pub async fn get_by_id(&self, id: PrenotazioneId) -> Result<Prenotazione, ClientError> {
        self.api.get_json(&format!("/api/prenotazioni/{id}")).await
    }

    /// The utente's most recent prenotazione by start date.
    pub async fn ultima(&self, utente_id: UtenteId) -> Result<Prenotazione, ClientError> {
        self.api
            .get_json(&format!("/api/prenotazioni/ultima/{utente_id}"))
            .await
    }

    pub async fn create(&self, prenotazione: &Prenotazione) -> Result<Prenotazione, ClientError> {
        self.api.post_json("/api/prenotazioni", prenotazione).await
    }

    pub async fn update(
        &self,
        id: PrenotazioneId,
        prenotazione: &Prenotazione,
    ) -> Result<Prenotazione, ClientError> {
        self.api
            .put_json(&format!("/api/prenotazioni/{id}"), prenotazione)
            .await
    }

    pub async fn delete(&self, id: PrenotazioneId) -> Result<(), ClientError> {
        self.api.delete_path(&format!("/api/prenotazioni/{id}")).await
    }
}

/// Calls under `/api/feedback`.
pub struct FeedbackClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl FeedbackClient<'_> {
    pub async fn get_all(&self) -> Result<Vec<Feedback>, ClientError> {
        self.api.get_json("/api/feedback").await
    }

    pub async fn get_by_id(&self, id: FeedbackId) -> Result<Feedback, ClientError> {
        self.api.get_json(&format!("/api/feedback/{id}")).await
    }

    /// The feedback attached to a prenotazione.
    pub async fn get_by_prenotazione(
        &self,
        prenotazione_id: PrenotazioneId,
    ) -> Result<Feedback, ClientError> {
        self.api
            .get_json(&format!("/api/feedback/prenotazione/{prenotazione_id}"))
            .await
    }

    pub async fn create(&self, feedback: &Feedback) -> Result<Feedback, ClientError> {
        self.api.post_json("/api/feedback", feedback).await
    }

    pub async fn update(&self, id: FeedbackId, feedback: &Feedback) -> Result<Feedback, ClientError> {
        self.api.put_json(&format!("/api/feedback/{id}"), feedback).await
    }

    pub async fn delete(&self, id: FeedbackId) -> Result<(), ClientError> {
        self.api.delete_path(&format!("/api/feedback/{id}")).await
    }
}

/// Calls under `/api/dashboard`.
pub struct DashboardClient<'a> {
    api: &'a ApiClient,
}

#[allow(clippy::missing_errors_doc)]
impl DashboardClient<'_> {
    pub async fn summary(&self) -> Result<Riepilogo, ClientError> {
        self.api.get_json("/api/dashboard/summary").await
    }

    pub async fn prenotazioni(
        &self,
        filtro: &PrenotazioniFiltro,
    ) -> Result<Paged<Prenotazione>, ClientError> {
        self.api
            .get_json_query("/api/dashboard/prenotazioni", filtro)
            .await
    }

    pub async fn feedback(&self, filtro: &FeedbackFiltro) -> Result<Paged<Feedback>, ClientError> {
        self.api.get_json_query("/api/dashboard/feedback", filtro).await
    }

    pub async fn abitazioni(
        &self,
        filtro: &AbitazioniFiltro,
    ) -> Result<Paged<Abitazione>, ClientError> {
        self.api
            .get_json_query("/api/dashboard/abitazioni", filtro)
            .await
    }

    pub async fn promemoria(&self) -> Result<Promemoria, ClientError> {
        self.api.get_json("/api/dashboard/promemoria").await
    }

    /// Options for the host filter dropdown.
    pub async fn host(&self) -> Result<Vec<Host>, ClientError> {
        self.api.get_json("/api/dashboard/host").await
    }
}
