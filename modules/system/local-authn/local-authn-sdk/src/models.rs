//! Credential and identity models.

use secrecy::SecretString;
use uuid::Uuid;

/// Login credential: an identifier (email) and a secret.
///
/// Consumed by a single validation call. The secret is redacted from `Debug`
/// output and zeroized on drop.
#[derive(Debug)]
pub struct Credential {
    pub identifier: String,
    pub secret: SecretString,
}

impl Credential {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }
}

/// Identity of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

impl UserIdentity {
    /// An identity without a real user behind it (nil id).
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_nil()
    }
}
