#[cfg(test)]
mod tests {
    use super::super::dto::*;
    use time::OffsetDateTime;
    use user_settings_sdk::models::{UserSettings, UserSettingsPatch};
    use uuid::Uuid;

    #[test]
    fn missing_fields_are_not_supplied() {
        let req: SettingsPayloadRequest = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        let patch: UserSettingsPatch = req.into();

        assert_eq!(patch.theme, Some(Some("dark".to_owned())));
        assert!(patch.preferred_categories.is_none());
        assert!(patch.language.is_none());
        assert!(patch.notifications_enabled.is_none());
    }

    #[test]
    fn empty_body_is_an_empty_patch() {
        let req: SettingsPayloadRequest = serde_json::from_str("{}").unwrap();
        let patch: UserSettingsPatch = req.into();

        assert_eq!(patch, UserSettingsPatch::default());
    }

    #[test]
    fn explicit_nulls_clear_fields() {
        let req: SettingsPayloadRequest = serde_json::from_str(
            r#"{"theme":null,"language":null,"notifications_enabled":null,"preferred_categories":null}"#,
        )
        .unwrap();
        let patch: UserSettingsPatch = req.into();

        assert_eq!(patch.theme, Some(None));
        assert_eq!(patch.language, Some(None));
        assert_eq!(patch.notifications_enabled, Some(None));
        assert_eq!(patch.preferred_categories, Some(Vec::new()));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<SettingsPayloadRequest>(r#"{"updated_at":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn settings_dto_renders_rfc3339_timestamps() {
        let user_id = Uuid::new_v4();
        let mut settings = UserSettings::empty(user_id, OffsetDateTime::UNIX_EPOCH);
        settings.preferred_categories = vec!["news".to_owned()];

        let json = serde_json::to_value(UserSettingsDto::from(settings)).unwrap();

        assert_eq!(json["user_id"], user_id.to_string());
        assert_eq!(json["preferred_categories"][0], "news");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
        assert!(json["theme"].is_null());
    }
}
