//! `SQLite` implementation of [`FeedbackRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use turista_app::ports::FeedbackRepository;
use turista_domain::error::TuristaError;
use turista_domain::feedback::Feedback;
use turista_domain::id::{FeedbackId, PrenotazioneId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Feedback`].
struct Wrapper(Feedback);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Feedback> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Feedback {
            id: Some(FeedbackId::new(row.try_get("id")?)),
            titolo: row.try_get("titolo")?,
            testo: row.try_get("testo")?,
            punteggio: row.try_get("punteggio")?,
            prenotazione_id: PrenotazioneId::new(row.try_get("prenotazione_id")?),
        }))
    }
}

const INSERT: &str =
    "INSERT INTO feedback (titolo, testo, punteggio, prenotazione_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM feedback WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM feedback ORDER BY id";
const SELECT_BY_PRENOTAZIONE: &str = "SELECT * FROM feedback WHERE prenotazione_id = ?";
const UPDATE: &str =
    "UPDATE feedback SET titolo = ?, testo = ?, punteggio = ?, prenotazione_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM feedback WHERE id = ?";

/// `SQLite`-backed feedback repository.
#[derive(Clone)]
pub struct SqliteFeedbackRepository {
    pool: SqlitePool,
}

impl SqliteFeedbackRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FeedbackRepository for SqliteFeedbackRepository {
    fn create(
        &self,
        feedback: Feedback,
    ) -> impl Future<Output = Result<Feedback, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&feedback.titolo)
                .bind(&feedback.testo)
                .bind(feedback.punteggio)
                .bind(feedback.prenotazione_id.value())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Feedback {
                id: Some(FeedbackId::new(result.last_insert_rowid())),
                ..feedback
            })
        }
    }

    fn get_by_id(
        &self,
        id: FeedbackId,
    ) -> impl Future<Output = Result<Option<Feedback>, TuristaError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Feedback>, TuristaError>> + Send {
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
        feedback: Feedback,
    ) -> impl Future<Output = Result<Feedback, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&feedback.titolo)
                .bind(&feedback.testo)
                .bind(feedback.punteggio)
                .bind(feedback.prenotazione_id.value())
                .bind(feedback.id.map(turista_domain::id::FeedbackId::value))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(feedback)
        }
    }

    fn delete(&self, id: FeedbackId) -> impl Future<Output = Result<(), TuristaError>> + Send {
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

    fn get_by_prenotazione(
        &self,
        prenotazione_id: PrenotazioneId,
    ) -> impl Future<Output = Result<Option<Feedback>, TuristaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_PRENOTAZIONE)
                .bind(prenotazione_id.value())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
