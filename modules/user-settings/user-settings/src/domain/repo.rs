use async_trait::async_trait;
use time::OffsetDateTime;
use user_settings_sdk::models::{UserSettings, UserSettingsPatch};
use uuid::Uuid;

/// Persistence port for settings records, keyed uniquely by `user_id`.
///
/// The upsert methods must resolve insert/update conflicts inside the store
/// in a single statement, so concurrent writers for the same user never
/// produce a second record.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<UserSettings>>;

    /// Insert `fields` over an empty record, or overwrite every mutable
    /// column of the existing one. `created_at` of an existing row is kept.
    async fn upsert_replace(
        &self,
        user_id: Uuid,
        fields: UserSettingsPatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<UserSettings>;

    /// Insert `patch` over an empty record, or overwrite only the columns
    /// supplied in `patch` (plus `updated_at`) of the existing one.
    async fn upsert_merge(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<UserSettings>;

    /// Insert an empty record unless one exists. Returns whether a row was written.
    async fn insert_if_absent(&self, user_id: Uuid, now: OffsetDateTime) -> anyhow::Result<bool>;

    /// Returns the number of removed rows (0 or 1).
    async fn delete_by_user(&self, user_id: Uuid) -> anyhow::Result<u64>;
}
