use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use time::OffsetDateTime;
use user_settings_sdk::models::{UserSettings, UserSettingsPatch};
use uuid::Uuid;

use crate::domain::repo::SettingsRepository;

use super::entity::{self, CategoryList, Column, Entity as SettingsEntity};

/// Columns a full replacement overwrites; `created_at` is never among them.
const MUTABLE_COLUMNS: [Column; 5] = [
    Column::PreferredCategories,
    Column::Theme,
    Column::Language,
    Column::NotificationsEnabled,
    Column::UpdatedAt,
];

#[derive(Clone)]
pub struct SeaOrmSettingsRepository {
    db: DatabaseConnection,
}

impl SeaOrmSettingsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: Uuid) -> anyhow::Result<UserSettings> {
        let model = SettingsEntity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Record should exist after upsert"))?;
        Ok(model.into())
    }

    async fn upsert(
        &self,
        active_model: entity::ActiveModel,
        columns: Vec<Column>,
    ) -> anyhow::Result<()> {
        SettingsEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns(columns)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }
}

/// Active model for a fresh row: `patch` over an empty record.
///
/// Cleared fields and unsupplied fields both start out empty.
fn new_row(user_id: Uuid, patch: UserSettingsPatch, now: OffsetDateTime) -> entity::ActiveModel {
    entity::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        preferred_categories: ActiveValue::Set(CategoryList(
            patch.preferred_categories.unwrap_or_default(),
        )),
        theme: ActiveValue::Set(patch.theme.flatten()),
        language: ActiveValue::Set(patch.language.flatten()),
        notifications_enabled: ActiveValue::Set(patch.notifications_enabled.flatten()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<UserSettings>> {
        let result = SettingsEntity::find_by_id(user_id).one(&self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn upsert_replace(
        &self,
        user_id: Uuid,
        fields: UserSettingsPatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<UserSettings> {
        self.upsert(new_row(user_id, fields, now), MUTABLE_COLUMNS.to_vec())
            .await?;
        self.load(user_id).await
    }

    async fn upsert_merge(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<UserSettings> {
        // A supplied field is written even when it clears the column.
        let mut columns_to_update = Vec::with_capacity(MUTABLE_COLUMNS.len());
        if patch.preferred_categories.is_some() {
            columns_to_update.push(Column::PreferredCategories);
        }
        if patch.theme.is_some() {
            columns_to_update.push(Column::Theme);
        }
        if patch.language.is_some() {
            columns_to_update.push(Column::Language);
        }
        if patch.notifications_enabled.is_some() {
            columns_to_update.push(Column::NotificationsEnabled);
        }
        columns_to_update.push(Column::UpdatedAt);

        self.upsert(new_row(user_id, patch, now), columns_to_update)
            .await?;
        self.load(user_id).await
    }

    async fn insert_if_absent(&self, user_id: Uuid, now: OffsetDateTime) -> anyhow::Result<bool> {
        let inserted = SettingsEntity::insert(new_row(user_id, UserSettingsPatch::default(), now))
            .on_conflict(OnConflict::column(Column::UserId).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        Ok(inserted > 0)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> anyhow::Result<u64> {
        let result = SettingsEntity::delete_by_id(user_id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
