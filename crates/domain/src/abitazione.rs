//! Abitazione — a rental listing with an availability window, price, and
//! capacity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TuristaError, ValidationError};
use crate::id::{AbitazioneId, HostId};

/// A rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Abitazione {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AbitazioneId>,
    pub nome: String,
    pub indirizzo: String,
    pub locali: i32,
    pub posti_letto: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piano: Option<i32>,
    pub prezzo: f64,
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub host_id: HostId,
}

impl Abitazione {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] on the first failing rule:
    /// blank nome/indirizzo, `locali`/`posti_letto` below one, negative or
    /// non-finite `prezzo`, or an availability window that ends before it
    /// starts.
    pub fn validate(&self) -> Result<(), TuristaError> {
        if self.nome.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("nome").into());
        }
        if self.indirizzo.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("indirizzo").into());
        }
        if self.locali < 1 {
            return Err(ValidationError::LocaliNonValidi.into());
        }
        if self.posti_letto < 1 {
            return Err(ValidationError::PostiLettoNonValidi.into());
        }
        if !self.prezzo.is_finite() || self.prezzo < 0.0 {
            return Err(ValidationError::PrezzoNonValido.into());
        }
        if self.data_fine < self.data_inizio {
            return Err(ValidationError::PeriodoInvertito.into());
        }
        Ok(())
    }
}
