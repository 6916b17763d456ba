//! Authentication service backed by the accounts listed in module config.

use std::collections::HashMap;

use async_trait::async_trait;
use local_authn_sdk::{AuthenticationService, AuthnError, UserIdentity};
use secrecy::{ExposeSecret, SecretString};

use crate::config::LocalAuthnConfig;

struct StaticAccount {
    identity: UserIdentity,
    secret: SecretString,
}

/// In-memory account table keyed by lower-cased email.
pub struct StaticAuthenticationService {
    accounts: HashMap<String, StaticAccount>,
}

impl StaticAuthenticationService {
    /// Build the account table.
    ///
    /// # Errors
    /// Returns an error on a duplicate or empty email.
    pub fn from_config(cfg: &LocalAuthnConfig) -> anyhow::Result<Self> {
        let mut accounts = HashMap::with_capacity(cfg.users.len());

        for user in &cfg.users {
            let key = normalize(&user.email);
            if key.is_empty() {
                anyhow::bail!("local_authn user {} has an empty email", user.user_id);
            }
            let account = StaticAccount {
                identity: UserIdentity {
                    user_id: user.user_id,
                    email: user.email.clone(),
                    display_name: user.display_name.clone(),
                },
                secret: user.secret.clone(),
            };
            if accounts.insert(key, account).is_some() {
                anyhow::bail!("duplicate local_authn user email: {}", user.email);
            }
        }

        tracing::info!(accounts = accounts.len(), "Static authentication service ready");
        Ok(Self { accounts })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AuthenticationService for StaticAuthenticationService {
    async fn validate_credential(
        &self,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<Option<UserIdentity>, AuthnError> {
        let Some(account) = self.accounts.get(&normalize(identifier)) else {
            return Ok(None);
        };

        let matches = constant_time_eq(
            account.secret.expose_secret().as_bytes(),
            secret.expose_secret().as_bytes(),
        );
        Ok(matches.then(|| account.identity.clone()))
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

// Runtime depends only on the lengths, not on where the inputs differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
