//! `UserSettingsClientV1` trait definition.
//!
//! This trait defines the public API for the user-settings module (Version 1).
//! Every method is keyed by the id of an already authenticated user.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::SettingsError;
use crate::models::{UserSettings, UserSettingsPatch};

/// Public API trait for the user-settings module (Version 1).
#[async_trait]
pub trait UserSettingsClientV1: Send + Sync {
    /// Get the settings record of a user.
    /// Returns `SettingsError::NotFound` if no record exists.
    async fn get_settings(&self, user_id: Uuid) -> Result<UserSettings, SettingsError>;

    /// Create settings from `payload` over an empty baseline.
    /// An existing record is replaced (upsert), so this never conflicts.
    async fn create_settings(
        &self,
        user_id: Uuid,
        payload: UserSettingsPatch,
    ) -> Result<UserSettings, SettingsError>;

    /// Merge `patch` into the user's record. Creates the record if none exists.
    async fn update_settings(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
    ) -> Result<UserSettings, SettingsError>;

    /// Return the user's record, creating a default one if none exists.
    async fn get_or_create_settings(&self, user_id: Uuid) -> Result<UserSettings, SettingsError>;

    /// Remove the user's record. Removing a missing record is not an error.
    async fn delete_settings(&self, user_id: Uuid) -> Result<(), SettingsError>;

    /// Keep the categories the user prefers, preserving input order and duplicates.
    /// Returns the input unchanged when the user has no category preferences.
    async fn filter_categories(
        &self,
        user_id: Uuid,
        all_categories: Vec<String>,
    ) -> Result<Vec<String>, SettingsError>;
}
