use local_authn_sdk::{Credential, UserIdentity};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    pub email: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
}

impl From<LoginRequest> for Credential {
    fn from(req: LoginRequest) -> Self {
        Self {
            identifier: req.email,
            secret: req.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct UserIdentityDto {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

impl From<UserIdentity> for UserIdentityDto {
    fn from(identity: UserIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
            display_name: identity.display_name,
        }
    }
}
