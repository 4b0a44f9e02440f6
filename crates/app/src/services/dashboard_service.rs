//! Dashboard service — summary counts, the three searchable card views,
//! and the recent-activity reminders.
//!
//! Filtering is deliberately naive, matching the back office it serves:
//! case-insensitive substring search over a per-record haystack of joined
//! display fields, equality filters on related ids, then plain slicing
//! into pages of six. The filter logic is kept in pure functions so it can
//! be tested without repositories.

use serde::Serialize;

use turista_domain::abitazione::Abitazione;
use turista_domain::error::TuristaError;
use turista_domain::feedback::Feedback;
use turista_domain::id::{AbitazioneId, HostId, UtenteId};
use turista_domain::page::{self, PER_PAGE_DASHBOARD, Paged};
use turista_domain::prenotazione::Prenotazione;
use turista_domain::utente::Utente;

use crate::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};

/// Quick-stats block at the top of the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Riepilogo {
    pub prenotazioni: usize,
    pub abitazioni: usize,
    pub utenti: usize,
    /// Average punteggio rounded to one decimal, `0` when no feedback.
    pub feedback_medio: f64,
}

/// Recent-activity panel: the two most recent prenotazioni and the last
/// inserted feedback.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Promemoria {
    pub prenotazioni_recenti: Vec<Prenotazione>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimo_feedback: Option<Feedback>,
}

/// Search/filter parameters for the prenotazioni view.
#[derive(Debug, Clone, Default)]
pub struct PrenotazioniQuery {
    pub q: Option<String>,
    pub utente_id: Option<UtenteId>,
    pub abitazione_id: Option<AbitazioneId>,
    pub page: usize,
}

/// Search/filter parameters for the feedback view.
#[derive(Debug, Clone, Default)]
pub struct FeedbackQuery {
    pub q: Option<String>,
    pub punteggio: Option<i32>,
    pub utente_id: Option<UtenteId>,
    pub page: usize,
}

/// Search/filter parameters for the abitazioni view.
#[derive(Debug, Clone, Default)]
pub struct AbitazioniQuery {
    pub q: Option<String>,
    pub host_id: Option<HostId>,
    pub page: usize,
}

fn normalizza(q: Option<&String>) -> String {
    q.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

fn matches(haystack: &str, q: &str) -> bool {
    q.is_empty() || haystack.to_lowercase().contains(q)
}

/// Average punteggio rounded to one decimal, `0` when the list is empty.
#[must_use]
pub fn media_feedback(feedback: &[Feedback]) -> f64 {
    if feedback.is_empty() {
        return 0.0;
    }
    let somma: i32 = feedback.iter().map(|f| f.punteggio).sum();
    let media = f64::from(somma) / feedback.len() as f64;
    (media * 10.0).round() / 10.0
}

/// Filter prenotazioni, then sort by start date descending.
#[must_use]
pub fn filtra_prenotazioni(
    prenotazioni: &[Prenotazione],
    utenti: &[Utente],
    abitazioni: &[Abitazione],
    query: &PrenotazioniQuery,
) -> Vec<Prenotazione> {
    let q = normalizza(query.q.as_ref());
    let mut filtrate: Vec<Prenotazione> = prenotazioni
        .iter()
        .filter(|p| {
            if query.utente_id.is_some_and(|id| id != p.utente_id) {
                return false;
            }
            if query.abitazione_id.is_some_and(|id| id != p.abitazione_id) {
                return false;
            }
            let utente = utenti.iter().find(|u| u.id == Some(p.utente_id));
            let abitazione = abitazioni.iter().find(|a| a.id == Some(p.abitazione_id));
            let haystack = format!(
                "{} {} {} {}",
                utente.map(|u| u.nome.as_str()).unwrap_or_default(),
                utente.map(|u| u.cognome.as_str()).unwrap_or_default(),
                abitazione.map(|a| a.nome.as_str()).unwrap_or_default(),
                p.id.map(|id| id.to_string()).unwrap_or_default(),
            );
            matches(&haystack, &q)
        })
        .cloned()
        .collect();
    filtrate.sort_by(|a, b| b.data_inizio.cmp(&a.data_inizio));
    filtrate
}

/// Filter feedback, then present in reverse insertion order.
#[must_use]
pub fn filtra_feedback(
    feedback: &[Feedback],
    prenotazioni: &[Prenotazione],
    utenti: &[Utente],
    abitazioni: &[Abitazione],
    query: &FeedbackQuery,
) -> Vec<Feedback> {
    let q = normalizza(query.q.as_ref());
    let mut filtrati: Vec<Feedback> = feedback
        .iter()
        .filter(|f| {
            if query.punteggio.is_some_and(|p| p != f.punteggio) {
                return false;
            }
            let prenotazione = prenotazioni
                .iter()
                .find(|p| p.id == Some(f.prenotazione_id));
            if let Some(filtro) = query.utente_id {
                if prenotazione.is_none_or(|p| p.utente_id != filtro) {
                    return false;
                }
            }
            let utente = prenotazione
                .and_then(|p| utenti.iter().find(|u| u.id == Some(p.utente_id)));
            let abitazione = prenotazione
                .and_then(|p| abitazioni.iter().find(|a| a.id == Some(p.abitazione_id)));
            let haystack = format!(
                "{} {} {} {} {}",
                utente.map(|u| u.nome.as_str()).unwrap_or_default(),
                utente.map(|u| u.cognome.as_str()).unwrap_or_default(),
                f.titolo.as_deref().unwrap_or_default(),
                f.testo.as_deref().unwrap_or_default(),
                abitazione.map(|a| a.nome.as_str()).unwrap_or_default(),
            );
            matches(&haystack, &q)
        })
        .cloned()
        .collect();
    filtrati.reverse();
    filtrati
}

/// Filter abitazioni; order stays as fetched.
#[must_use]
pub fn filtra_abitazioni(abitazioni: &[Abitazione], query: &AbitazioniQuery) -> Vec<Abitazione> {
    let q = normalizza(query.q.as_ref());
    abitazioni
        .iter()
        .filter(|a| {
            if query.host_id.is_some_and(|id| id != a.host_id) {
                return false;
            }
            let haystack = format!("{} {}", a.nome, a.indirizzo);
            matches(&haystack, &q)
        })
        .cloned()
        .collect()
}

/// Application service backing the dashboard screen.
pub struct DashboardService<UR, HR, AR, PR, FR> {
    utenti: UR,
    host: HR,
    abitazioni: AR,
    prenotazioni: PR,
    feedback: FR,
}

impl<UR, HR, AR, PR, FR> DashboardService<UR, HR, AR, PR, FR>
where
    UR: UtenteRepository,
    HR: HostRepository,
    AR: AbitazioneRepository,
    PR: PrenotazioneRepository,
    FR: FeedbackRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(utenti: UR, host: HR, abitazioni: AR, prenotazioni: PR, feedback: FR) -> Self {
        Self {
            utenti,
            host,
            abitazioni,
            prenotazioni,
            feedback,
        }
    }

    /// Quick stats: record counts plus the average punteggio.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn riepilogo(&self) -> Result<Riepilogo, TuristaError> {
        let prenotazioni = self.prenotazioni.get_all().await?;
        let abitazioni = self.abitazioni.get_all().await?;
        let utenti = self.utenti.get_all().await?;
        let feedback = self.feedback.get_all().await?;

        Ok(Riepilogo {
            prenotazioni: prenotazioni.len(),
            abitazioni: abitazioni.len(),
            utenti: utenti.len(),
            feedback_medio: media_feedback(&feedback),
        })
    }

    /// Searchable, filterable prenotazioni view, newest first, six per
    /// page.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, query))]
    pub async fn prenotazioni_view(
        &self,
        query: &PrenotazioniQuery,
    ) -> Result<Paged<Prenotazione>, TuristaError> {
        let prenotazioni = self.prenotazioni.get_all().await?;
        let utenti = self.utenti.get_all().await?;
        let abitazioni = self.abitazioni.get_all().await?;

        let filtrate = filtra_prenotazioni(&prenotazioni, &utenti, &abitazioni, query);
        Ok(page::paginate(filtrate, query.page, PER_PAGE_DASHBOARD))
    }

    /// Searchable, filterable feedback view in reverse insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, query))]
    pub async fn feedback_view(
        &self,
        query: &FeedbackQuery,
    ) -> Result<Paged<Feedback>, TuristaError> {
        let feedback = self.feedback.get_all().await?;
        let prenotazioni = self.prenotazioni.get_all().await?;
        let utenti = self.utenti.get_all().await?;
        let abitazioni = self.abitazioni.get_all().await?;

        let filtrati = filtra_feedback(&feedback, &prenotazioni, &utenti, &abitazioni, query);
        Ok(page::paginate(filtrati, query.page, PER_PAGE_DASHBOARD))
    }

    /// Searchable, filterable abitazioni view.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self, query))]
    pub async fn abitazioni_view(
        &self,
        query: &AbitazioniQuery,
    ) -> Result<Paged<Abitazione>, TuristaError> {
        let abitazioni = self.abitazioni.get_all().await?;
        let filtrate = filtra_abitazioni(&abitazioni, query);
        Ok(page::paginate(filtrate, query.page, PER_PAGE_DASHBOARD))
    }

    /// The two most recent prenotazioni and the last inserted feedback.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn promemoria(&self) -> Result<Promemoria, TuristaError> {
        let mut prenotazioni = self.prenotazioni.get_all().await?;
        prenotazioni.sort_by(|a, b| b.data_inizio.cmp(&a.data_inizio));
        prenotazioni.truncate(2);

        let feedback = self.feedback.get_all().await?;

        Ok(Promemoria {
            prenotazioni_recenti: prenotazioni,
            ultimo_feedback: feedback.last().cloned(),
        })
    }

    /// All hosts, used to populate the host filter dropdown.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    pub async fn list_host(&self) -> Result<Vec<turista_domain::host::Host>, TuristaError> {
        self.host.get_all().await
    }
}
