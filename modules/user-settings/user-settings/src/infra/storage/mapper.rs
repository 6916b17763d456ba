use user_settings_sdk::models::UserSettings;

use super::entity;

impl From<entity::Model> for UserSettings {
    fn from(entity: entity::Model) -> Self {
        Self {
            user_id: entity.user_id,
            preferred_categories: entity.preferred_categories.0,
            theme: entity.theme,
            language: entity.language,
            notifications_enabled: entity.notifications_enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
