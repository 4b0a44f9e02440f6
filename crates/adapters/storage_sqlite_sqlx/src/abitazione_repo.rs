//! `SQLite` implementation of [`AbitazioneRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use turista_app::ports::AbitazioneRepository;
use turista_domain::abitazione::Abitazione;
use turista_domain::error::TuristaError;
use turista_domain::id::{AbitazioneId, HostId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Abitazione`].
struct Wrapper(Abitazione);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Abitazione> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Abitazione {
            id: Some(AbitazioneId::new(row.try_get("id")?)),
            nome: row.try_get("nome")?,
            indirizzo: row.try_get("indirizzo")?,
            locali: row.try_get("locali")?,
            posti_letto: row.try_get("posti_letto")?,
            piano: row.try_get("piano")?,
            prezzo: row.try_get("prezzo")?,
            data_inizio: row.try_get("data_inizio")?,
            data_fine: row.try_get("data_fine")?,
            host_id: HostId::new(row.try_get("host_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO abitazioni \
    (nome, indirizzo, locali, posti_letto, piano, prezzo, data_inizio, data_fine, host_id) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM abitazioni WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM abitazioni ORDER BY id";
const SELECT_BY_CODICE_HOST: &str = "SELECT a.* FROM abitazioni a \
    JOIN host h ON a.host_id = h.id \
    WHERE h.codice_host = ? \
    ORDER BY a.id";
const UPDATE: &str = "UPDATE abitazioni SET \
    nome = ?, indirizzo = ?, locali = ?, posti_letto = ?, piano = ?, prezzo = ?, \
    data_inizio = ?, data_fine = ?, host_id = ? \
    WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM abitazioni WHERE id = ?";
const PIU_GETTONATA: &str = "SELECT a.* FROM abitazioni a \
    JOIN prenotazioni p ON p.abitazione_id = a.id \
    WHERE p.data_inizio >= date('now', '-1 month') \
    GROUP BY a.id \
    ORDER BY COUNT(p.id) DESC \
    LIMIT 1";
const MEDIA_POSTI_LETTO: &str = "SELECT COALESCE(AVG(posti_letto), 0.0) FROM abitazioni";

/// `SQLite`-backed abitazione repository.
#[derive(Clone)]
pub struct SqliteAbitazioneRepository {
    pool: SqlitePool,
}

impl SqliteAbitazioneRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AbitazioneRepository for SqliteAbitazioneRepository {
    fn create(
        &self,
        abitazione: Abitazione,
    ) -> impl Future<Output = Result<Abitazione, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&abitazione.nome)
                .bind(&abitazione.indirizzo)
                .bind(abitazione.locali)
                .bind(abitazione.posti_letto)
                .bind(abitazione.piano)
                .bind(abitazione.prezzo)
                .bind(abitazione.data_inizio)
                .bind(abitazione.data_fine)
                .bind(abitazione.host_id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Abitazione {
                id: Some(AbitazioneId::new(result.last_insert_rowid())),
                ..abitazione
            })
        }
    }

    fn get_by_id(
        &self,
        id: AbitazioneId,
    ) -> impl Future<Output = Result<Option<Abitazione>, TuristaError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Abitazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_codice_host(
        &self,
        codice: &str,
    ) -> impl Future<Output = Result<Vec<Abitazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        let codice = codice.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CODICE_HOST)
                .bind(codice)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        abitazione: Abitazione,
    ) -> impl Future<Output = Result<Abitazione, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&abitazione.nome)
                .bind(&abitazione.indirizzo)
                .bind(abitazione.locali)
                .bind(abitazione.posti_letto)
                .bind(abitazione.piano)
                .bind(abitazione.prezzo)
                .bind(abitazione.data_inizio)
                .bind(abitazione.data_fine)
                .bind(abitazione.host_id.value())
                .bind(abitazione.id.map(turista_domain::id::AbitazioneId::value))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(abitazione)
        }
    }

    fn delete(&self, id: AbitazioneId) -> impl Future<Output = Result<(), TuristaError>> + Send {
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

    fn piu_gettonata_ultimo_mese(
        &self,
    ) -> impl Future<Output = Result<Option<Abitazione>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(PIU_GETTONATA)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn media_posti_letto(&self) -> impl Future<Output = Result<f64, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let media: f64 = sqlx::query_scalar(MEDIA_POSTI_LETTO)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(media)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host_repo::SqliteHostRepository;
    use crate::pool::Config;
    use chrono::NaiveDate;
    use turista_app::ports::HostRepository;
    use turista_domain::host::Host;

    async fn setup() -> (SqliteAbitazioneRepository, HostId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let host_repo = SqliteHostRepository::new(db.pool().clone());
        let host = host_repo
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

        (
            SqliteAbitazioneRepository::new(db.pool().clone()),
            host.id.unwrap(),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_abitazione(host_id: HostId) -> Abitazione {
        Abitazione {
            id: None,
            nome: "Mansarda".to_string(),
            indirizzo: "Via Dante 9, Firenze".to_string(),
            locali: 2,
            posti_letto: 4,
            piano: Some(3),
            prezzo: 80.0,
            data_inizio: date(2024, 1, 1),
            data_fine: date(2024, 12, 31),
            host_id,
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_abitazione_with_dates_intact() {
        let (repo, host_id) = setup().await;

        let created = repo.create(test_abitazione(host_id)).await.unwrap();
        let id = created.id.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.data_inizio, date(2024, 1, 1));
        assert_eq!(fetched.data_fine, date(2024, 12, 31));
        assert_eq!(fetched.piano, Some(3));
        assert_eq!(fetched.host_id, host_id);
    }

    #[tokio::test]
    async fn should_list_abitazioni_by_codice_host() {
        let (repo, host_id) = setup().await;
        repo.create(test_abitazione(host_id)).await.unwrap();
        repo.create(test_abitazione(host_id)).await.unwrap();

        let owned = repo.get_by_codice_host("HOST001").await.unwrap();
        assert_eq!(owned.len(), 2);

        let none = repo.get_by_codice_host("HOST999").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_compute_media_posti_letto() {
        let (repo, host_id) = setup().await;
        assert!((repo.media_posti_letto().await.unwrap() - 0.0).abs() < f64::EPSILON);

        repo.create(test_abitazione(host_id)).await.unwrap();
        let mut second = test_abitazione(host_id);
        second.posti_letto = 2;
        repo.create(second).await.unwrap();

        let media = repo.media_posti_letto().await.unwrap();
        assert!((media - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_report_no_gettonata_without_prenotazioni() {
        let (repo, host_id) = setup().await;
        repo.create(test_abitazione(host_id)).await.unwrap();

        assert!(repo.piu_gettonata_ultimo_mese().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_update_and_delete_abitazione() {
        let (repo, host_id) = setup().await;
        let mut abitazione = repo.create(test_abitazione(host_id)).await.unwrap();
        let id = abitazione.id.unwrap();

        abitazione.prezzo = 95.5;
        repo.update(abitazione).await.unwrap();
        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert!((fetched.prezzo - 95.5).abs() < f64::EPSILON);

        repo.delete(id).await.unwrap();
        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }
}
