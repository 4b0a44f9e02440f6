//! Utente — a registered guest who can book abitazioni.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{TuristaError, ValidationError};
use crate::id::UtenteId;

/// Deliberately loose: anything non-blank around a single `@` and a
/// dotted domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub(crate) fn email_valida(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A registered guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utente {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UtenteId>,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirizzo: Option<String>,
}

impl Utente {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when a required field is blank
    /// or the email is malformed.
    pub fn validate(&self) -> Result<(), TuristaError> {
        if self.nome.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("nome").into());
        }
        if self.cognome.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("cognome").into());
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("email").into());
        }
        if !email_valida(self.email.trim()) {
            return Err(ValidationError::EmailNonValida.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_utente() -> Utente {
        Utente {
            id: None,
            nome: "Mario".to_string(),
            cognome: "Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            indirizzo: Some("Via Roma 1, Torino".to_string()),
        }
    }

    #[test]
    fn should_validate_when_all_fields_present() {
        assert!(valid_utente().validate().is_ok());
    }

    #[test]
    fn should_reject_blank_nome() {
        let mut utente = valid_utente();
        utente.nome = "   ".to_string();
        assert!(matches!(
            utente.validate(),
            Err(TuristaError::Validation(
                ValidationError::CampoObbligatorio("nome")
            ))
        ));
    }

    #[test]
    fn should_reject_malformed_email() {
        for email in ["mario", "mario@rossi", "mario @example.com", "@example.com"] {
            let mut utente = valid_utente();
            utente.email = email.to_string();
            assert!(
                matches!(
                    utente.validate(),
                    Err(TuristaError::Validation(ValidationError::EmailNonValida))
                ),
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn should_allow_missing_indirizzo() {
        let mut utente = valid_utente();
        utente.indirizzo = None;
        assert!(utente.validate().is_ok());
    }

    #[test]
    fn should_serialize_camel_case_and_omit_missing_id() {
        let utente = valid_utente();
        let json = serde_json::to_value(&utente).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["nome"], "Mario");
        assert_eq!(json["cognome"], "Rossi");
    }
}
