use async_trait::async_trait;
use std::sync::Arc;
use user_settings_sdk::{SettingsError, UserSettings, UserSettingsClientV1, UserSettingsPatch};
use uuid::Uuid;

use crate::domain::repo::SettingsRepository;
use crate::domain::service::Service;

pub struct LocalClient<R: SettingsRepository + 'static> {
    service: Arc<Service<R>>,
}

impl<R: SettingsRepository + 'static> LocalClient<R> {
    #[must_use]
    pub fn new(service: Arc<Service<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: SettingsRepository + 'static> UserSettingsClientV1 for LocalClient<R> {
    async fn get_settings(&self, user_id: Uuid) -> Result<UserSettings, SettingsError> {
        self.service.get_by_user(user_id).await.map_err(Into::into)
    }

    async fn create_settings(
        &self,
        user_id: Uuid,
        payload: UserSettingsPatch,
    ) -> Result<UserSettings, SettingsError> {
        self.service
            .create(user_id, payload)
            .await
            .map_err(Into::into)
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
    ) -> Result<UserSettings, SettingsError> {
        self.service
            .update(user_id, patch)
            .await
            .map_err(Into::into)
    }

    async fn get_or_create_settings(&self, user_id: Uuid) -> Result<UserSettings, SettingsError> {
        self.service.get_or_create(user_id).await.map_err(Into::into)
    }

    async fn delete_settings(&self, user_id: Uuid) -> Result<(), SettingsError> {
        self.service.delete(user_id).await.map_err(Into::into)
    }

    async fn filter_categories(
        &self,
        user_id: Uuid,
        all_categories: Vec<String>,
    ) -> Result<Vec<String>, SettingsError> {
        self.service
            .filter_categories(user_id, all_categories)
            .await
            .map_err(Into::into)
    }
}
