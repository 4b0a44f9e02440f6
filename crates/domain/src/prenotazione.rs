//! Prenotazione — a booking of an abitazione by an utente for a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::abitazione::Abitazione;
use crate::error::{TuristaError, ValidationError};
use crate::id::{AbitazioneId, PrenotazioneId, UtenteId};

/// A booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prenotazione {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PrenotazioneId>,
    pub data_inizio: NaiveDate,
    pub data_fine: NaiveDate,
    pub utente_id: UtenteId,
    pub abitazione_id: AbitazioneId,
}

impl Prenotazione {
    /// Check the invariants that do not need the referenced abitazione.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when the range ends before it
    /// starts.
    pub fn validate(&self) -> Result<(), TuristaError> {
        if self.data_fine < self.data_inizio {
            return Err(ValidationError::PeriodoInvertito.into());
        }
        Ok(())
    }

    /// Check that the booked range lies within the abitazione's
    /// availability window.
    ///
    /// Overlap with other prenotazioni on the same abitazione is not
    /// checked here; inside the window, double booking is currently
    /// allowed (product decision pending).
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] with a message naming the
    /// valid window when the range falls outside it.
    pub fn validate_in_disponibilita(&self, abitazione: &Abitazione) -> Result<(), TuristaError> {
        if self.data_inizio < abitazione.data_inizio || self.data_fine > abitazione.data_fine {
            return Err(ValidationError::FuoriDisponibilita {
                inizio: abitazione.data_inizio,
                fine: abitazione.data_fine,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::HostId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn listing_available_january_first_half() -> Abitazione {
        Abitazione {
            id: Some(AbitazioneId::new(1)),
            nome: "Bilocale".to_string(),
            indirizzo: "Via Garibaldi 3, Milano".to_string(),
            locali: 2,
            posti_letto: 3,
            piano: None,
            prezzo: 70.0,
            data_inizio: date(2024, 1, 1),
            data_fine: date(2024, 1, 15),
            host_id: HostId::new(1),
        }
    }

    fn booking(from: NaiveDate, to: NaiveDate) -> Prenotazione {
        Prenotazione {
            id: None,
            data_inizio: from,
            data_fine: to,
            utente_id: UtenteId::new(1),
            abitazione_id: AbitazioneId::new(1),
        }
    }

    #[test]
    fn should_reject_range_ending_before_it_starts() {
        let pren = booking(date(2024, 1, 10), date(2024, 1, 5));
        assert!(matches!(
            pren.validate(),
            Err(TuristaError::Validation(ValidationError::PeriodoInvertito))
        ));
    }

    #[test]
    fn should_accept_range_inside_availability_window() {
        let pren = booking(date(2024, 1, 5), date(2024, 1, 10));
        assert!(
            pren.validate_in_disponibilita(&listing_available_january_first_half())
                .is_ok()
        );
    }

    #[test]
    fn should_reject_range_overrunning_window_and_name_the_window() {
        let pren = booking(date(2024, 1, 10), date(2024, 1, 20));
        let err = pren
            .validate_in_disponibilita(&listing_available_january_first_half())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dal 2024-01-01"));
        assert!(msg.contains("al 2024-01-15"));
    }

    #[test]
    fn should_reject_range_starting_before_window() {
        let pren = booking(date(2023, 12, 28), date(2024, 1, 5));
        assert!(
            pren.validate_in_disponibilita(&listing_available_january_first_half())
                .is_err()
        );
    }

    #[test]
    fn should_accept_range_matching_window_exactly() {
        let pren = booking(date(2024, 1, 1), date(2024, 1, 15));
        assert!(
            pren.validate_in_disponibilita(&listing_available_january_first_half())
                .is_ok()
        );
    }
}
