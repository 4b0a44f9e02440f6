//! `SQLite` implementation of [`UtenteRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use turista_app::ports::UtenteRepository;
use turista_domain::error::TuristaError;
use turista_domain::id::UtenteId;
use turista_domain::utente::Utente;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Utente`].
struct Wrapper(Utente);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Utente> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Utente {
            id: Some(UtenteId::new(row.try_get("id")?)),
            nome: row.try_get("nome")?,
            cognome: row.try_get("cognome")?,
            email: row.try_get("email")?,
            indirizzo: row.try_get("indirizzo")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO utenti (nome, cognome, email, indirizzo) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM utenti WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM utenti ORDER BY id";
const UPDATE: &str = "UPDATE utenti SET nome = ?, cognome = ?, email = ?, indirizzo = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM utenti WHERE id = ?";
// Days booked in the last month, computed on ISO dates via julianday.
const TOP_GIORNI: &str = "SELECT u.* FROM utenti u \
    JOIN prenotazioni p ON p.utente_id = u.id \
    WHERE p.data_inizio >= date('now', '-1 month') \
    GROUP BY u.id \
    ORDER BY SUM(julianday(p.data_fine) - julianday(p.data_inizio)) DESC \
    LIMIT ?";

/// `SQLite`-backed utente repository.
#[derive(Clone)]
pub struct SqliteUtenteRepository {
    pool: SqlitePool,
}

impl SqliteUtenteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UtenteRepository for SqliteUtenteRepository {
    fn create(&self, utente: Utente) -> impl Future<Output = Result<Utente, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&utente.nome)
                .bind(&utente.cognome)
                .bind(&utente.email)
                .bind(&utente.indirizzo)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Utente {
                id: Some(UtenteId::new(result.last_insert_rowid())),
                ..utente
            })
        }
    }

    fn get_by_id(
        &self,
        id: UtenteId,
    ) -> impl Future<Output = Result<Option<Utente>, TuristaError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Utente>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, utente: Utente) -> impl Future<Output = Result<Utente, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&utente.nome)
                .bind(&utente.cognome)
                .bind(&utente.email)
                .bind(&utente.indirizzo)
                .bind(utente.id.map(turista_domain::id::UtenteId::value))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(utente)
        }
    }

    fn delete(&self, id: UtenteId) -> impl Future<Output = Result<(), TuristaError>> + Send {
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

    fn top_giorni_ultimo_mese(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Utente>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(TOP_GIORNI)
                .bind(i64::try_from(limit).unwrap_or(i64::MAX))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteUtenteRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUtenteRepository::new(db.pool().clone())
    }

    fn test_utente() -> Utente {
        Utente {
            id: None,
            nome: "Mario".to_string(),
            cognome: "Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            indirizzo: Some("Via Roma 1, Bologna".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_utente_when_valid() {
        let repo = setup().await;

        let created = repo.create(test_utente()).await.unwrap();
        let id = created.id.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.nome, "Mario");
        assert_eq!(fetched.indirizzo.as_deref(), Some("Via Roma 1, Bologna"));
    }

    #[tokio::test]
    async fn should_return_none_when_utente_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(UtenteId::new(99)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_create() {
        let repo = setup().await;
        let first = repo.create(test_utente()).await.unwrap();
        let second = repo.create(test_utente()).await.unwrap();
        assert!(second.id.unwrap().value() > first.id.unwrap().value());
    }

    #[tokio::test]
    async fn should_update_utente_when_exists() {
        let repo = setup().await;
        let mut utente = repo.create(test_utente()).await.unwrap();
        let id = utente.id.unwrap();

        utente.email = "nuova@example.com".to_string();
        repo.update(utente).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "nuova@example.com");
    }

    #[tokio::test]
    async fn should_delete_utente_when_exists() {
        let repo = setup().await;
        let created = repo.create(test_utente()).await.unwrap();
        let id = created.id.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_empty_report_without_prenotazioni() {
        let repo = setup().await;
        repo.create(test_utente()).await.unwrap();

        let top = repo.top_giorni_ultimo_mese(5).await.unwrap();
        assert!(top.is_empty());
    }
}
