use std::sync::Arc;

use local_authn_sdk::{AuthenticationService, AuthnError, Credential, UserIdentity};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

/// Progress of a single validation. Both outcomes are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    Pending,
    Validated(UserIdentity),
    Rejected,
}

impl ValidationState {
    /// Settle a pending validation with the service's answer.
    ///
    /// A nil-id identity counts as no identity. Terminal states ignore further input.
    #[must_use]
    pub fn resolve(self, outcome: Option<UserIdentity>) -> Self {
        if self.is_terminal() {
            return self;
        }
        match outcome {
            Some(identity) if !identity.is_anonymous() => Self::Validated(identity),
            _ => Self::Rejected,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// # Errors
    /// `AuthenticationFailure` for a rejected credential.
    pub fn into_result(self) -> Result<UserIdentity, AuthnError> {
        match self {
            Self::Validated(identity) => Ok(identity),
            Self::Rejected => Err(AuthnError::AuthenticationFailure),
            Self::Pending => Err(AuthnError::Internal(
                "credential validation did not complete".to_owned(),
            )),
        }
    }
}

/// Checks login credentials against an [`AuthenticationService`].
///
/// Each call runs exactly once; there are no retries. A rejected credential
/// yields [`AuthnError::AuthenticationFailure`] while failures of the
/// service itself are passed through unchanged.
pub struct CredentialValidator {
    service: Arc<dyn AuthenticationService>,
}

impl CredentialValidator {
    #[must_use]
    pub fn new(service: Arc<dyn AuthenticationService>) -> Self {
        Self { service }
    }

    /// # Errors
    /// `AuthenticationFailure` for a rejected credential; service failures unchanged.
    pub async fn validate(&self, credential: Credential) -> Result<UserIdentity, AuthnError> {
        self.run(credential).await?.into_result()
    }

    /// Drive one validation to a terminal state.
    ///
    /// # Errors
    /// Only failures of the authentication service itself.
    pub async fn run(&self, credential: Credential) -> Result<ValidationState, AuthnError> {
        let state = ValidationState::Pending;

        if credential.identifier.trim().is_empty() || credential.secret.expose_secret().is_empty()
        {
            debug!("Rejecting credential with empty identifier or secret");
            return Ok(state.resolve(None));
        }

        let outcome = self
            .service
            .validate_credential(&credential.identifier, &credential.secret)
            .await
            .inspect_err(|e| warn!(error = %e, "Authentication service failed"))?;

        let state = state.resolve(outcome);
        match &state {
            ValidationState::Validated(identity) => {
                debug!(user_id = %identity.user_id, "Credential validated");
            }
            _ => debug!(identifier = %credential.identifier, "Credential rejected"),
        }
        Ok(state)
    }
}
