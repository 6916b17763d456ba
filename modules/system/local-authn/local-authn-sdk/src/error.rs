//! Error types for the local-authn module.

use thiserror::Error;

/// Errors that can occur while validating a credential.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthnError {
    /// The credential was rejected.
    ///
    /// Deliberately carries no detail: callers must not learn whether the
    /// identifier or the secret was wrong.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// The authentication service could not be reached.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The authentication service failed while processing the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthnError {
    /// `true` for failures of the service itself, as opposed to a rejected credential.
    #[must_use]
    pub fn is_service_error(&self) -> bool {
        !matches!(self, Self::AuthenticationFailure)
    }
}
