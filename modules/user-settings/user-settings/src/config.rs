use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettingsConfig {
    /// Upper bound for `theme`, `language` and each category name.
    pub max_field_length: usize,
    pub max_preferred_categories: usize,
}

impl Default for UserSettingsConfig {
    fn default() -> Self {
        Self {
            max_field_length: 100,
            max_preferred_categories: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: UserSettingsConfig = serde_json::from_str(r#"{"max_field_length": 16}"#).unwrap();
        assert_eq!(cfg.max_field_length, 16);
        assert_eq!(cfg.max_preferred_categories, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<UserSettingsConfig>(r#"{"max_len": 16}"#);
        assert!(result.is_err());
    }
}
