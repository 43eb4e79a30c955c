//! Error types for the string service.
//!
//! # Design
//! The taxonomy is closed: the endpoint constant can be invalid, the server
//! can answer with something other than 200, or the transport itself can
//! fail. Transport failures keep the transport's own error type so callers
//! get back exactly what the transport produced.

use thiserror::Error;

/// Errors returned by `StringService::send_string`.
///
/// `E` is the error type of the injected `Transport`.
#[derive(Debug, Error)]
pub enum StringServiceError<E> {
    /// The fixed endpoint is not a valid absolute http(s) URL. Raised before
    /// any network activity.
    #[error("invalid endpoint URL")]
    InvalidUrl,

    /// The server answered with a status other than 200.
    #[error("invalid response: HTTP {status}")]
    InvalidResponse { status: u16 },

    /// The transport failed; the error is passed through untouched.
    #[error(transparent)]
    Transport(E),
}

impl<E> StringServiceError<E> {
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, StringServiceError::InvalidUrl)
    }

    pub fn is_invalid_response(&self) -> bool {
        matches!(self, StringServiceError::InvalidResponse { .. })
    }

    /// Hand back the transport's own error, if that is what failed.
    pub fn into_transport(self) -> Option<E> {
        match self {
            StringServiceError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
