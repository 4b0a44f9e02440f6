//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod abitazioni;
#[allow(clippy::missing_errors_doc)]
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod feedback;
#[allow(clippy::missing_errors_doc)]
pub mod host;
#[allow(clippy::missing_errors_doc)]
pub mod prenotazioni;
#[allow(clippy::missing_errors_doc)]
pub mod utenti;

use axum::Router;
use axum::routing::get;

use turista_app::ports::{
    AbitazioneRepository, FeedbackRepository, HostRepository, PrenotazioneRepository,
    UtenteRepository,
};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<UR, HR, AR, PR, FR>() -> Router<AppState<UR, HR, AR, PR, FR>>
where
    UR: UtenteRepository + Send + Sync + 'static,
    HR: HostRepository + Send + Sync + 'static,
    AR: AbitazioneRepository + Send + Sync + 'static,
    PR: PrenotazioneRepository + Send + Sync + 'static,
    FR: FeedbackRepository + Send + Sync + 'static,
{
    Router::new()
        // Utenti
        .route(
            "/utenti",
            get(utenti::list::<UR, HR, AR, PR, FR>).post(utenti::create::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/utenti/{id}",
            get(utenti::get::<UR, HR, AR, PR, FR>)
                .put(utenti::update::<UR, HR, AR, PR, FR>)
                .delete(utenti::delete::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/utenti/report/top-giorni",
            get(utenti::top_giorni::<UR, HR, AR, PR, FR>),
        )
        // Host
        .route(
            "/host",
            get(host::list::<UR, HR, AR, PR, FR>).post(host::create::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/host/{id}",
            get(host::get::<UR, HR, AR, PR, FR>)
                .put(host::update::<UR, HR, AR, PR, FR>)
                .delete(host::delete::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/host/codice/{codice}",
            get(host::get_by_codice::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/host/report/top-prenotazioni",
            get(host::top_prenotazioni::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/host/report/super-host",
            get(host::super_host::<UR, HR, AR, PR, FR>),
        )
        // Abitazioni
        .route(
            "/abitazioni",
            get(abitazioni::list::<UR, HR, AR, PR, FR>)
                .post(abitazioni::create::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/abitazioni/{id}",
            get(abitazioni::get::<UR, HR, AR, PR, FR>)
                .put(abitazioni::update::<UR, HR, AR, PR, FR>)
                .delete(abitazioni::delete::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/abitazioni/host/{codice}",
            get(abitazioni::list_by_host::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/abitazioni/report/piu-gettonata",
            get(abitazioni::piu_gettonata::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/abitazioni/report/media-posti-letto",
            get(abitazioni::media_posti_letto::<UR, HR, AR, PR, FR>),
        )
        // Prenotazioni
        .route(
            "/prenotazioni",
            get(prenotazioni::list::<UR, HR, AR, PR, FR>)
                .post(prenotazioni::create::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/prenotazioni/{id}",
            get(prenotazioni::get::<UR, HR, AR, PR, FR>)
                .put(prenotazioni::update::<UR, HR, AR, PR, FR>)
                .delete(prenotazioni::delete::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/prenotazioni/ultima/{utente_id}",
            get(prenotazioni::ultima::<UR, HR, AR, PR, FR>),
        )
        // Feedback
        .route(
            "/feedback",
            get(feedback::list::<UR, HR, AR, PR, FR>).post(feedback::create::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/feedback/{id}",
            get(feedback::get::<UR, HR, AR, PR, FR>)
                .put(feedback::update::<UR, HR, AR, PR, FR>)
                .delete(feedback::delete::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/feedback/prenotazione/{prenotazione_id}",
            get(feedback::get_by_prenotazione::<UR, HR, AR, PR, FR>),
        )
        // Dashboard
        .route(
            "/dashboard/summary",
            get(dashboard::summary::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/dashboard/prenotazioni",
            get(dashboard::prenotazioni::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/dashboard/feedback",
            get(dashboard::feedback::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/dashboard/abitazioni",
            get(dashboard::abitazioni::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/dashboard/promemoria",
            get(dashboard::promemoria::<UR, HR, AR, PR, FR>),
        )
        .route(
            "/dashboard/host",
            get(dashboard::host::<UR, HR, AR, PR, FR>),
        )
}
