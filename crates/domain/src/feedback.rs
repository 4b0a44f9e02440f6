//! Feedback — a 1–5 score plus optional title/text tied to one booking.

use serde::{Deserialize, Serialize};

use crate::error::{TuristaError, ValidationError};
use crate::id::{FeedbackId, PrenotazioneId};

/// A review left for a prenotazione.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<FeedbackId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titolo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testo: Option<String>,
    pub punteggio: i32,
    pub prenotazione_id: PrenotazioneId,
}

impl Feedback {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when the punteggio falls
    /// outside `1..=5`.
    pub fn validate(&self) -> Result<(), TuristaError> {
        if !(1..=5).contains(&self.punteggio) {
            return Err(ValidationError::PunteggioFuoriScala.into());
        }
        Ok(())
    }
}
