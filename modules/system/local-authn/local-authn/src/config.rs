//! Configuration for the local-authn module.

use secrecy::SecretString;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalAuthnConfig {
    /// Accounts served by the built-in static authentication service.
    pub users: Vec<StaticUserConfig>,
}

/// Configuration for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticUserConfig {
    pub user_id: Uuid,

    /// Login identifier, matched case-insensitively.
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(serialize_with = "redact")]
    pub secret: SecretString,
}

fn redact<S>(_secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str("***")
}
