//! Authentication service contract consumed by the credential validator.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::AuthnError;
use crate::models::UserIdentity;

/// Looks up the identity owning a credential.
///
/// Implementations return `Ok(None)` for an unknown identifier or a wrong
/// secret, and reserve `Err` for failures of the service itself
/// ([`AuthnError::ServiceUnavailable`] or [`AuthnError::Internal`]).
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    async fn validate_credential(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<Option<UserIdentity>, AuthnError>;
}
