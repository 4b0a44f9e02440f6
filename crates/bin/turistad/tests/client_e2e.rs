//! Client-to-server test: serves the full stack on an ephemeral TCP port
//! and drives it through `turista_client::ApiClient`.

use chrono::NaiveDate;

use turista_adapter_http_axum::state::AppState;
use turista_adapter_storage_sqlite_sqlx::abitazione_repo::SqliteAbitazioneRepository;
use turista_adapter_storage_sqlite_sqlx::feedback_repo::SqliteFeedbackRepository;
use turista_adapter_storage_sqlite_sqlx::host_repo::SqliteHostRepository;
use turista_adapter_storage_sqlite_sqlx::pool::Config;
use turista_adapter_storage_sqlite_sqlx::prenotazione_repo::SqlitePrenotazioneRepository;
use turista_adapter_storage_sqlite_sqlx::utente_repo::SqliteUtenteRepository;
use turista_app::services::abitazione_service::AbitazioneService;
use turista_app::services::dashboard_service::DashboardService;
use turista_app::services::feedback_service::FeedbackService;
use turista_app::services::host_service::HostService;
use turista_app::services::prenotazione_service::PrenotazioneService;
use turista_app::services::utente_service::UtenteService;
use turista_client::client::{ApiClient, PiuGettonata, PrenotazioniFiltro};
use turista_client::error::ClientError;
use turista_domain::abitazione::Abitazione;
use turista_domain::feedback::Feedback;
use turista_domain::host::Host;
use turista_domain::prenotazione::Prenotazione;
use turista_domain::utente::Utente;

/// Serve an in-memory instance on `127.0.0.1:0` and return a client for it.
async fn serve() -> ApiClient {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let utente_repo = SqliteUtenteRepository::new(pool.clone());
    let host_repo = SqliteHostRepository::new(pool.clone());
    let abitazione_repo = SqliteAbitazioneRepository::new(pool.clone());
    let prenotazione_repo = SqlitePrenotazioneRepository::new(pool.clone());
    let feedback_repo = SqliteFeedbackRepository::new(pool);

    let state = AppState::new(
        UtenteService::new(utente_repo.clone()),
        HostService::new(host_repo.clone()),
        AbitazioneService::new(abitazione_repo.clone()),
        PrenotazioneService::new(prenotazione_repo.clone(), abitazione_repo.clone()),
        FeedbackService::new(feedback_repo.clone()),
        DashboardService::new(
            utente_repo,
            host_repo,
            abitazione_repo,
            prenotazione_repo,
            feedback_repo,
        ),
    );

    let app = turista_adapter_http_axum::router::build(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should be available");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(format!("http://{addr}"))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_utente() -> Utente {
    Utente {
        id: None,
        nome: "Mario".to_string(),
        cognome: "Rossi".to_string(),
        email: "mario.rossi@example.com".to_string(),
        indirizzo: None,
    }
}

fn sample_host() -> Host {
    Host {
        id: None,
        codice_host: "HOST001".to_string(),
        nome: "Anna".to_string(),
        cognome: "Bianchi".to_string(),
        email: "anna.bianchi@example.com".to_string(),
        indirizzo: None,
    }
}

#[tokio::test]
async fn should_complete_a_booking_flow_through_the_client() {
    let api = serve().await;

    let utente = api.utenti().create(&sample_utente()).await.unwrap();
    let utente_id = utente.id.unwrap();

    let host = api.host().create(&sample_host()).await.unwrap();

    let abitazione = api
        .abitazioni()
        .create(&Abitazione {
            id: None,
            nome: "Mansarda".to_string(),
            indirizzo: "Via Dante 9, Firenze".to_string(),
            locali: 2,
            posti_letto: 4,
            piano: Some(3),
            prezzo: 80.0,
            data_inizio: date(2024, 1, 1),
            data_fine: date(2030, 12, 31),
            host_id: host.id.unwrap(),
        })
        .await
        .unwrap();

    let prenotazione = api
        .prenotazioni()
        .create(&Prenotazione {
            id: None,
            data_inizio: date(2024, 6, 1),
            data_fine: date(2024, 6, 8),
            utente_id,
            abitazione_id: abitazione.id.unwrap(),
        })
        .await
        .unwrap();
    let prenotazione_id = prenotazione.id.unwrap();

    api.feedback()
        .create(&Feedback {
            id: None,
            titolo: Some("Ottimo".to_string()),
            testo: None,
            punteggio: 5,
            prenotazione_id,
        })
        .await
        .unwrap();

    let ultima = api.prenotazioni().ultima(utente_id).await.unwrap();
    assert_eq!(ultima.id, Some(prenotazione_id));

    let found = api.feedback().get_by_prenotazione(prenotazione_id).await.unwrap();
    assert_eq!(found.punteggio, 5);

    let summary = api.dashboard().summary().await.unwrap();
    assert_eq!(summary.prenotazioni, 1);
    assert!((summary.feedback_medio - 5.0).abs() < f64::EPSILON);

    let view = api
        .dashboard()
        .prenotazioni(&PrenotazioniFiltro {
            q: Some("rossi".to_string()),
            ..PrenotazioniFiltro::default()
        })
        .await
        .unwrap();
    assert_eq!(view.items.len(), 1);
}

#[tokio::test]
async fn should_surface_server_messages_as_client_errors() {
    let api = serve().await;

    let mut invalid = sample_utente();
    invalid.email = "non-una-email".to_string();
    let err = api.utenti().create(&invalid).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Inserire un'email valida.");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = api
        .utenti()
        .get_by_id(turista_domain::id::UtenteId::new(999))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Utente non trovato");
}

#[tokio::test]
async fn should_report_message_variant_when_nothing_booked() {
    let api = serve().await;

    match api.abitazioni().piu_gettonata().await.unwrap() {
        PiuGettonata::Messaggio { message } => {
            assert_eq!(message, "Nessuna prenotazione nell'ultimo mese");
        }
        PiuGettonata::Abitazione(a) => panic!("unexpected winner: {a:?}"),
    }

    let media = api.abitazioni().media_posti_letto().await.unwrap();
    assert!((media - 0.0).abs() < f64::EPSILON);
}
