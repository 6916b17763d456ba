use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use user_settings_sdk::models::{UserSettings, UserSettingsPatch};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct UserSettingsDto {
    pub user_id: Uuid,
    pub preferred_categories: Vec<String>,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub notifications_enabled: Option<bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<UserSettings> for UserSettingsDto {
    fn from(settings: UserSettings) -> Self {
        Self {
            user_id: settings.user_id,
            preferred_categories: settings.preferred_categories,
            theme: settings.theme,
            language: settings.language,
            notifications_enabled: settings.notifications_enabled,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        }
    }
}

/// Body of create and merge-update requests.
///
/// An omitted field is not supplied; an explicit `null` clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
#[allow(clippy::option_option)] // distinguish set-to-null from not-set
pub struct SettingsPayloadRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Vec<String>>)]
    pub preferred_categories: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub theme: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub language: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub notifications_enabled: Option<Option<bool>>,
}

/// Wraps any present value, `null` included, so it reads as supplied.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl From<SettingsPayloadRequest> for UserSettingsPatch {
    fn from(req: SettingsPayloadRequest) -> Self {
        Self {
            preferred_categories: req.preferred_categories.map(Option::unwrap_or_default),
            theme: req.theme,
            language: req.language,
            notifications_enabled: req.notifications_enabled,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct FilterCategoriesRequest {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct FilterCategoriesResponse {
    pub categories: Vec<String>,
}
