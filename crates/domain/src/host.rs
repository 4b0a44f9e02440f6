//! Host — a listing owner, identified by a formatted code.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{TuristaError, ValidationError};
use crate::id::HostId;
use crate::utente::email_valida;

/// Codice host: `HOST` plus exactly three digits (es. HOST001).
static CODICE_HOST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^HOST\d{3}$").unwrap());

/// A listing owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<HostId>,
    pub codice_host: String,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indirizzo: Option<String>,
}

impl Host {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TuristaError::Validation`] when the codice does not match
    /// `HOST` + 3 digits, or a required field fails the [`Utente`]
    /// (crate::utente::Utente) rules.
    pub fn validate(&self) -> Result<(), TuristaError> {
        if self.codice_host.trim().is_empty() {
            return Err(ValidationError::CampoObbligatorio("codice host").into());
        }
        if !CODICE_HOST_RE.is_match(self.codice_host.trim()) {
            return Err(ValidationError::CodiceHostNonValido.into());
        }
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

    fn valid_host() -> Host {
        Host {
            id: None,
            codice_host: "HOST001".to_string(),
            nome: "Anna".to_string(),
            cognome: "Bianchi".to_string(),
            email: "anna.bianchi@example.com".to_string(),
            indirizzo: None,
        }
    }

    #[test]
    fn should_accept_well_formed_codice() {
        assert!(valid_host().validate().is_ok());
    }

    #[test]
    fn should_reject_malformed_codici() {
        for codice in ["host001", "HOST1", "HOST0001", "HOSTabc", "HOST 001"] {
            let mut host = valid_host();
            host.codice_host = codice.to_string();
            assert!(
                matches!(
                    host.validate(),
                    Err(TuristaError::Validation(
                        ValidationError::CodiceHostNonValido
                    ))
                ),
                "codice {codice:?} should be rejected"
            );
        }
    }

    #[test]
    fn should_reject_blank_codice_before_pattern_check() {
        let mut host = valid_host();
        host.codice_host = String::new();
        assert!(matches!(
            host.validate(),
            Err(TuristaError::Validation(
                ValidationError::CampoObbligatorio("codice host")
            ))
        ));
    }

    #[test]
    fn should_reject_malformed_email() {
        let mut host = valid_host();
        host.email = "anna@".to_string();
        assert!(matches!(
            host.validate(),
            Err(TuristaError::Validation(ValidationError::EmailNonValida))
        ));
    }

    #[test]
    fn should_serialize_codice_as_camel_case() {
        let json = serde_json::to_value(valid_host()).unwrap();
        assert_eq!(json["codiceHost"], "HOST001");
    }
}
