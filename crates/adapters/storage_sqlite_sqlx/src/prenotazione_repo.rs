//! `SQLite` implementation of [`PrenotazioneRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use turista_app::ports::PrenotazioneRepository;
use turista_domain::error::TuristaError;
use turista_domain::id::{AbitazioneId, PrenotazioneId, UtenteId};
use turista_domain::prenotazione::Prenotazione;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Prenotazione`].
struct Wrapper(Prenotazione);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Prenotazione> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Prenotazione {
            id: Some(PrenotazioneId::new(row.try_get("id")?)),
            data_inizio: row.try_get("data_inizio")?,
            data_fine: row.try_get("data_fine")?,
            utente_id: UtenteId::new(row.try_get("utente_id")?),
            abitazione_id: AbitazioneId::new(row.try_get("abitazione_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO prenotazioni \
    (data_inizio, data_fine, utente_id, abitazione_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM prenotazioni WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM prenotazioni ORDER BY id";
const UPDATE: &str = "UPDATE prenotazioni SET \
    data_inizio = ?, data_fine = ?, utente_id = ?, abitazione_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM prenotazioni WHERE id = ?";
const ULTIMA_BY_UTENTE: &str =
    "SELECT * FROM prenotazioni WHERE utente_id = ? ORDER BY data_inizio DESC LIMIT 1";

/// `SQLite`-backed prenotazione repository.
#[derive(Clone)]
pub struct SqlitePrenotazioneRepository {
    pool: SqlitePool,
}

impl SqlitePrenotazioneRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PrenotazioneRepository for SqlitePrenotazioneRepository {
    fn create(
        &self,
        prenotazione: Prenotazione,
    ) -> impl Future<Output = Result<Prenotazione, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(prenotazione.data_inizio)
                .bind(prenotazione.data_fine)
                .bind(prenotazione.utente_id.value())
                .bind(prenotazione.abitazione_id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Prenotazione {
                id: Some(PrenotazioneId::new(result.last_insert_rowid())),
                ..prenotazione
            })
        }
    }

    fn get_by_id(
        &self,
        id: PrenotazioneId,
    ) -> impl Future<Output = Result<Option<Prenotazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Prenotazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        prenotazione: Prenotazione,
    ) -> impl Future<Output = Result<Prenotazione, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(prenotazione.data_inizio)
                .bind(prenotazione.data_fine)
                .bind(prenotazione.utente_id.value())
                .bind(prenotazione.abitazione_id.value())
                .bind(prenotazione.id.map(turista_domain::id::PrenotazioneId::value))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(prenotazione)
        }
    }

    fn delete(&self, id: PrenotazioneId) -> impl Future<Output = Result<(), TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn ultima_by_utente(
        &self,
        utente_id: UtenteId,
    ) -> impl Future<Output = Result<Option<Prenotazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(ULTIMA_BY_UTENTE)
                .bind(utente_id.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abitazione_repo::SqliteAbitazioneRepository;
    use crate::host_repo::SqliteHostRepository;
    use crate::pool::Config;
    use crate::utente_repo::SqliteUtenteRepository;
    use chrono::NaiveDate;
    use turista_app::ports::{AbitazioneRepository, HostRepository, UtenteRepository};
    use turista_domain::abitazione::Abitazione;
    use turista_domain::host::Host;
    use turista_domain::utente::Utente;

    struct Fixture {
        repo: SqlitePrenotazioneRepository,
        utente_id: UtenteId,
        abitazione_id: AbitazioneId,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn setup() -> Fixture {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();

        let utente = SqliteUtenteRepository::new(db.pool().clone())
            .create(Utente {
                id: None,
                nome: "Mario".to_string(),
                cognome: "Rossi".to_string(),
                email: "mario@example.com".to_string(),
                indirizzo: None,
            })
            .await
            .unwrap();

        let host = SqliteHostRepository::new(db.pool().clone())
            .create(Host {
                id: None,
                codice_host: "HOST001".to_string(),
                nome: "Anna".to_string(),
                cognome: "Bianchi".to_string(),
                email: "anna@example.com".to_string(),
                indirizzo: None,
            })
            .await
            .unwrap();

        let abitazione = SqliteAbitazioneRepository::new(db.pool().clone())
            .create(Abitazione {
                id: None,
                nome: "Bilocale".to_string(),
                indirizzo: "Via Garibaldi 3, Milano".to_string(),
                locali: 2,
                posti_letto: 3,
                piano: None,
                prezzo: 70.0,
                data_inizio: date(2024, 1, 1),
                data_fine: date(2024, 12, 31),
                host_id: host.id.unwrap(),
            })
            .await
            .unwrap();

        Fixture {
            repo: SqlitePrenotazioneRepository::new(db.pool().clone()),
            utente_id: utente.id.unwrap(),
            abitazione_id: abitazione.id.unwrap(),
        }
    }

    fn booking(fixture: &Fixture, from: NaiveDate, to: NaiveDate) -> Prenotazione {
        Prenotazione {
            id: None,
            data_inizio: from,
            data_fine: to,
            utente_id: fixture.utente_id,
            abitazione_id: fixture.abitazione_id,
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_prenotazione() {
        let fixture = setup().await;
        let created = fixture
            .repo
            .create(booking(&fixture, date(2024, 3, 1), date(2024, 3, 8)))
            .await
            .unwrap();
        let id = created.id.unwrap();

        let fetched = fixture.repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.data_inizio, date(2024, 3, 1));
        assert_eq!(fetched.utente_id, fixture.utente_id);
    }

    #[tokio::test]
    async fn should_return_latest_booking_per_utente() {
        let fixture = setup().await;
        fixture
            .repo
            .create(booking(&fixture, date(2024, 3, 1), date(2024, 3, 8)))
            .await
            .unwrap();
        fixture
            .repo
            .create(booking(&fixture, date(2024, 5, 1), date(2024, 5, 4)))
            .await
            .unwrap();

        let ultima = fixture
            .repo
            .ultima_by_utente(fixture.utente_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ultima.data_inizio, date(2024, 5, 1));

        let none = fixture.repo.ultima_by_utente(UtenteId::new(99)).await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn should_reject_booking_for_missing_utente() {
        let fixture = setup().await;
        let mut orphan = booking(&fixture, date(2024, 3, 1), date(2024, 3, 8));
        orphan.utente_id = UtenteId::new(99);

        let result = fixture.repo.create(orphan).await;
        assert!(matches!(result, Err(TuristaError::Storage(_))));
    }

    #[tokio::test]
    async fn should_update_and_delete_prenotazione() {
        let fixture = setup().await;
        let mut prenotazione = fixture
            .repo
            .create(booking(&fixture, date(2024, 3, 1), date(2024, 3, 8)))
            .await
            .unwrap();
        let id = prenotazione.id.unwrap();

        prenotazione.data_fine = date(2024, 3, 10);
        fixture.repo.update(prenotazione).await.unwrap();
        let fetched = fixture.repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.data_fine, date(2024, 3, 10));

        fixture.repo.delete(id).await.unwrap();
        assert!(fixture.repo.get_by_id(id).await.unwrap().is_none());
    }
}
