//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts into the umbrella
//! [`TuristaError`] via `#[from]`. User-facing messages are the Italian
//! strings shown verbatim by the back office.

use chrono::NaiveDate;

use crate::id::{AbitazioneId, FeedbackId, HostId, PrenotazioneId, UtenteId};

/// Umbrella error for the whole system.
#[derive(Debug, thiserror::Error)]
pub enum TuristaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A record failed one of the invariants in §3 of the data model.
///
/// The first failing rule wins; callers report a single message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Il campo {0} è obbligatorio.")]
    CampoObbligatorio(&'static str),

    #[error("Inserire un'email valida.")]
    EmailNonValida,

    #[error("Il codice host deve essere nel formato HOST + 3 cifre (es. HOST001, HOST002).")]
    CodiceHostNonValido,

    #[error("Locali deve essere un numero intero ≥ 1.")]
    LocaliNonValidi,

    #[error("Posti letto deve essere un numero intero ≥ 1.")]
    PostiLettoNonValidi,

    #[error("Il prezzo deve essere ≥ 0.")]
    PrezzoNonValido,

    #[error("La data fine deve essere successiva alla data inizio.")]
    PeriodoInvertito,

    #[error("Il punteggio deve essere tra 1 e 5.")]
    PunteggioFuoriScala,

    #[error(
        "Le date della prenotazione devono essere comprese nel periodo di disponibilità \
         dell'abitazione (dal {inizio} al {fine})."
    )]
    FuoriDisponibilita { inizio: NaiveDate, fine: NaiveDate },
}

/// A lookup targeted a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Utente non trovato")]
    Utente(UtenteId),

    #[error("Host non trovato")]
    Host(HostId),

    #[error("Host non trovato")]
    HostCodice(String),

    #[error("Abitazione non trovata")]
    Abitazione(AbitazioneId),

    #[error("Prenotazione non trovata")]
    Prenotazione(PrenotazioneId),

    #[error("Feedback non trovato")]
    Feedback(FeedbackId),

    #[error("Feedback non trovato")]
    FeedbackPrenotazione(PrenotazioneId),

    #[error("Nessuna prenotazione trovata per questo utente")]
    UltimaPrenotazione(UtenteId),
}

/// A mutation clashed with an existing record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Codice host già esistente. Scegli un altro codice (es. HOST002).")]
    CodiceHostEsistente,

    #[error(
        "Esiste già un feedback per questa prenotazione. \
         Ogni prenotazione può avere un solo feedback."
    )]
    FeedbackEsistente,
}

/// Opaque persistence failure surfaced by a storage adapter.
///
/// The domain stays free of driver types; adapters wrap their native
/// errors through [`StorageError::new`].
#[derive(Debug, thiserror::Error)]
#[error("errore di accesso ai dati: {source}")]
pub struct StorageError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StorageError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_surface_validation_message_verbatim() {
        let err = TuristaError::from(ValidationError::PeriodoInvertito);
        assert_eq!(
            err.to_string(),
            "La data fine deve essere successiva alla data inizio."
        );
    }

    #[test]
    fn should_name_the_valid_window_in_availability_message() {
        let err = ValidationError::FuoriDisponibilita {
            inizio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            fine: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dal 2024-01-01"));
        assert!(msg.contains("al 2024-01-15"));
    }

    #[test]
    fn should_keep_not_found_messages_per_entity() {
        assert_eq!(
            NotFoundError::Abitazione(AbitazioneId::new(7)).to_string(),
            "Abitazione non trovata"
        );
        assert_eq!(
            NotFoundError::Utente(UtenteId::new(1)).to_string(),
            "Utente non trovato"
        );
    }

    #[test]
    fn should_wrap_adapter_errors_without_leaking_driver_types() {
        let err = StorageError::new("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }
}
