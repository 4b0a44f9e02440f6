//! # turistad — turista daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`turista.toml` + `TURISTA_*` env overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use turista_adapter_http_axum::state::AppState;
use turista_adapter_storage_sqlite_sqlx::abitazione_repo::SqliteAbitazioneRepository;
use turista_adapter_storage_sqlite_sqlx::feedback_repo::SqliteFeedbackRepository;
use turista_adapter_storage_sqlite_sqlx::host_repo::SqliteHostRepository;
use turista_adapter_storage_sqlite_sqlx::pool::Config as DbConfig;
use turista_adapter_storage_sqlite_sqlx::prenotazione_repo::SqlitePrenotazioneRepository;
use turista_adapter_storage_sqlite_sqlx::utente_repo::SqliteUtenteRepository;
use turista_app::services::abitazione_service::AbitazioneService;
use turista_app::services::dashboard_service::DashboardService;
use turista_app::services::feedback_service::FeedbackService;
use turista_app::services::host_service::HostService;
use turista_app::services::prenotazione_service::PrenotazioneService;
use turista_app::services::utente_service::UtenteService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let utente_repo = SqliteUtenteRepository::new(pool.clone());
    let host_repo = SqliteHostRepository::new(pool.clone());
    let abitazione_repo = SqliteAbitazioneRepository::new(pool.clone());
    let prenotazione_repo = SqlitePrenotazioneRepository::new(pool.clone());
    let feedback_repo = SqliteFeedbackRepository::new(pool);

    // Services
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

    // HTTP
    let app = turista_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("turistad listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
