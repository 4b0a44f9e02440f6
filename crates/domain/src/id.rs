//! Typed identifier newtypes backed by database-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for an [`Utente`](crate::utente::Utente).
    UtenteId
);

define_id!(
    /// Unique identifier for a [`Host`](crate::host::Host).
    HostId
);

define_id!(
    /// Unique identifier for an [`Abitazione`](crate::abitazione::Abitazione).
    AbitazioneId
);

define_id!(
    /// Unique identifier for a [`Prenotazione`](crate::prenotazione::Prenotazione).
    PrenotazioneId
);

define_id!(
    /// Unique identifier for a [`Feedback`](crate::feedback::Feedback).
    FeedbackId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = UtenteId::new(42);
        let text = id.to_string();
        let parsed: UtenteId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = AbitazioneId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: AbitazioneId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_return_error_when_parsing_garbage() {
        let result = PrenotazioneId::from_str("not-a-number");
        assert!(result.is_err());
    }
}
