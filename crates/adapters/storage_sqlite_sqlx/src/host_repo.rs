//! `SQLite` implementation of [`HostRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use turista_app::ports::HostRepository;
use turista_domain::error::TuristaError;
use turista_domain::host::Host;
use turista_domain::id::HostId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Host`].
struct Wrapper(Host);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Host> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Host {
            id: Some(HostId::new(row.try_get("id")?)),
            codice_host: row.try_get("codice_host")?,
            nome: row.try_get("nome")?,
            cognome: row.try_get("cognome")?,
            email: row.try_get("email")?,
            indirizzo: row.try_get("indirizzo")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO host (codice_host, nome, cognome, email, indirizzo) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM host WHERE id = ?";
const SELECT_BY_CODICE: &str = "SELECT * FROM host WHERE codice_host = ?";
const SELECT_ALL: &str = "SELECT * FROM host ORDER BY id";
const UPDATE: &str =
    "UPDATE host SET codice_host = ?, nome = ?, cognome = ?, email = ?, indirizzo = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM host WHERE id = ?";
const TOP_PRENOTAZIONI: &str = "SELECT h.* FROM host h \
    JOIN abitazioni a ON a.host_id = h.id \
    JOIN prenotazioni p ON p.abitazione_id = a.id \
    WHERE p.data_inizio >= date('now', '-1 month') \
    GROUP BY h.id \
    ORDER BY COUNT(p.id) DESC";
const SUPER_HOST: &str = "SELECT h.* FROM host h \
    JOIN abitazioni a ON a.host_id = h.id \
    JOIN prenotazioni p ON p.abitazione_id = a.id \
    GROUP BY h.id \
    HAVING COUNT(p.id) >= 100 \
    ORDER BY COUNT(p.id) DESC";

/// `SQLite`-backed host repository.
#[derive(Clone)]
pub struct SqliteHostRepository {
    pool: SqlitePool,
}

impl SqliteHostRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HostRepository for SqliteHostRepository {
    fn create(&self, host: Host) -> impl Future<Output = Result<Host, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&host.codice_host)
                .bind(&host.nome)
                .bind(&host.cognome)
                .bind(&host.email)
                .bind(&host.indirizzo)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Host {
                id: Some(HostId::new(result.last_insert_rowid())),
                ..host
            })
        }
    }

    fn get_by_id(
        &self,
        id: HostId,
    ) -> impl Future<Output = Result<Option<Host>, TuristaError>> + Send {
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

    fn get_by_codice(
        &self,
        codice: &str,
    ) -> impl Future<Output = Result<Option<Host>, TuristaError>> + Send {
        let pool = self.pool.clone();
        let codice = codice.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CODICE)
                .bind(codice)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, host: Host) -> impl Future<Output = Result<Host, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&host.codice_host)
                .bind(&host.nome)
                .bind(&host.cognome)
                .bind(&host.email)
                .bind(&host.indirizzo)
                .bind(host.id.map(turista_domain::id::HostId::value))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(host)
        }
    }

    fn delete(&self, id: HostId) -> impl Future<Output = Result<(), TuristaError>> + Send {
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

    fn top_prenotazioni_ultimo_mese(
        &self,
    ) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(TOP_PRENOTAZIONI)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn super_host(&self) -> impl Future<Output = Result<Vec<Host>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SUPER_HOST)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
