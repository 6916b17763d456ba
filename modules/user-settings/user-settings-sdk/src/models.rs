//! Public models for the user-settings module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the settings module and its consumers.

use time::OffsetDateTime;
use uuid::Uuid;

/// Settings record of a single user.
///
/// At most one record exists per `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub user_id: Uuid,
    /// Empty means "no preference": category filtering is not applied.
    pub preferred_categories: Vec<String>,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl UserSettings {
    /// A record with no preferences set.
    #[must_use]
    pub fn empty(user_id: Uuid, now: OffsetDateTime) -> Self {
        Self {
            user_id,
            preferred_categories: Vec::new(),
            theme: None,
            language: None,
            notifications_enabled: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every field present in `patch`, keeping the rest.
    ///
    /// Lists are replaced as a whole, never merged element-wise.
    pub fn apply_patch(&mut self, patch: UserSettingsPatch) {
        if let Some(categories) = patch.preferred_categories {
            self.preferred_categories = categories;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(enabled) = patch.notifications_enabled {
            self.notifications_enabled = enabled;
        }
    }
}

/// Partial settings payload used by create and update.
///
/// Every field is independently optional; `None` means "not supplied".
/// For nullable fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(clippy::option_option)] // distinguish set-to-null from not-set
pub struct UserSettingsPatch {
    /// An empty list clears the preferences.
    pub preferred_categories: Option<Vec<String>>,
    pub theme: Option<Option<String>>,
    pub language: Option<Option<String>>,
    pub notifications_enabled: Option<Option<bool>>,
}
