use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};
use user_settings_sdk::models::{UserSettings, UserSettingsPatch};
use uuid::Uuid;

use super::error::DomainError;
use super::fields::SettingsFields;
use super::filter::filter_by_preferences;
use super::repo::SettingsRepository;
use crate::config::UserSettingsConfig;

// ============================================================================
// Service Configuration
// ============================================================================

pub struct ServiceConfig {
    pub max_field_length: usize,
    pub max_preferred_categories: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        UserSettingsConfig::default().into()
    }
}

impl From<UserSettingsConfig> for ServiceConfig {
    fn from(cfg: UserSettingsConfig) -> Self {
        Self {
            max_field_length: cfg.max_field_length,
            max_preferred_categories: cfg.max_preferred_categories,
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct Service<R: SettingsRepository> {
    repo: Arc<R>,
    config: ServiceConfig,
}

impl<R: SettingsRepository> Service<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// # Errors
    /// `NotFound` when the user has no record, `StoreUnavailable` on store failure.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<UserSettings, DomainError> {
        debug!(%user_id, "Loading settings");
        self.repo
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Upserts: an existing record is replaced by `payload` over an empty baseline.
    ///
    /// # Errors
    /// `Validation` for oversized payloads, `StoreUnavailable` on store failure.
    pub async fn create(
        &self,
        user_id: Uuid,
        payload: UserSettingsPatch,
    ) -> Result<UserSettings, DomainError> {
        self.validate_patch(&payload)?;

        let settings = self
            .repo
            .upsert_replace(user_id, payload, OffsetDateTime::now_utc())
            .await?;
        info!(%user_id, "Settings created");
        Ok(settings)
    }

    /// Merges `patch` into the stored record, creating it when absent.
    ///
    /// # Errors
    /// `Validation` for oversized payloads, `StoreUnavailable` on store failure.
    pub async fn update(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
    ) -> Result<UserSettings, DomainError> {
        self.validate_patch(&patch)?;

        let settings = self
            .repo
            .upsert_merge(user_id, patch, OffsetDateTime::now_utc())
            .await?;
        debug!(%user_id, "Settings updated");
        Ok(settings)
    }

    /// # Errors
    /// `StoreUnavailable` on store failure.
    pub async fn get_or_create(&self, user_id: Uuid) -> Result<UserSettings, DomainError> {
        if let Some(settings) = self.repo.find_by_user(user_id).await? {
            return Ok(settings);
        }

        // A concurrent caller may win the insert; either way the row exists afterwards.
        if self
            .repo
            .insert_if_absent(user_id, OffsetDateTime::now_utc())
            .await?
        {
            info!(%user_id, "Default settings created");
        }

        self.repo.find_by_user(user_id).await?.ok_or_else(|| {
            DomainError::StoreUnavailable(anyhow::anyhow!(
                "settings for user {user_id} missing right after insert"
            ))
        })
    }

    /// Idempotent: removing a missing record succeeds.
    ///
    /// # Errors
    /// `StoreUnavailable` on store failure.
    pub async fn delete(&self, user_id: Uuid) -> Result<(), DomainError> {
        let removed = self.repo.delete_by_user(user_id).await?;
        if removed == 0 {
            debug!(%user_id, "No settings to delete");
        } else {
            info!(%user_id, "Settings deleted");
        }
        Ok(())
    }

    /// # Errors
    /// `StoreUnavailable` on store failure.
    pub async fn filter_categories(
        &self,
        user_id: Uuid,
        all_categories: Vec<String>,
    ) -> Result<Vec<String>, DomainError> {
        let settings = self.get_or_create(user_id).await?;
        Ok(filter_by_preferences(
            &settings.preferred_categories,
            all_categories,
        ))
    }

    fn validate_patch(&self, patch: &UserSettingsPatch) -> Result<(), DomainError> {
        if let Some(Some(ref theme)) = patch.theme {
            self.validate_field(SettingsFields::THEME, theme)?;
        }
        if let Some(Some(ref language)) = patch.language {
            self.validate_field(SettingsFields::LANGUAGE, language)?;
        }
        if let Some(ref categories) = patch.preferred_categories {
            self.validate_categories(categories)?;
        }
        Ok(())
    }

    fn validate_categories(&self, categories: &[String]) -> Result<(), DomainError> {
        if categories.len() > self.config.max_preferred_categories {
            return Err(DomainError::validation(
                SettingsFields::PREFERRED_CATEGORIES,
                format!(
                    "exceeds maximum of {} entries",
                    self.config.max_preferred_categories
                ),
            ));
        }
        for category in categories {
            if category.trim().is_empty() {
                return Err(DomainError::validation(
                    SettingsFields::PREFERRED_CATEGORIES,
                    "category names must not be blank",
                ));
            }
            self.validate_field(SettingsFields::PREFERRED_CATEGORIES, category)?;
        }
        Ok(())
    }

    /// The limit counts characters, not UTF-8 bytes.
    fn validate_field(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.chars().count() > self.config.max_field_length {
            return Err(DomainError::validation(
                field,
                format!("exceeds maximum length of {}", self.config.max_field_length),
            ));
        }
        Ok(())
    }
}
