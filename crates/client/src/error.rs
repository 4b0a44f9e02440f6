//! Client-side error type.

/// Errors surfaced by [`crate::ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status. The message is the
    /// server's own `error` field when present, otherwise the raw body,
    /// otherwise the canonical status reason.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The server answered with a success status but an unparsable body.
    #[error("Risposta non valida dal server")]
    RispostaNonValida,

    /// The request never produced a response (connection refused, DNS,
    /// timeout, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
