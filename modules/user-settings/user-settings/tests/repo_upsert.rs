#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use std::time::Duration;

use time::OffsetDateTime;
use user_settings::domain::repo::SettingsRepository;
use user_settings_sdk::UserSettingsPatch;
use uuid::Uuid;

use support::{categories, test_repo};

fn fixed_time() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

#[tokio::test]
async fn find_returns_none_for_unknown_user() {
    let repo = test_repo().await;
    assert!(repo.find_by_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn replace_inserts_then_overwrites_every_column_but_created_at() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();
    let t0 = fixed_time();

    let first = repo
        .upsert_replace(
            user_id,
            UserSettingsPatch {
                preferred_categories: Some(categories(&["a", "b"])),
                theme: Some(Some("dark".to_owned())),
                ..Default::default()
            },
            t0,
        )
        .await
        .unwrap();
    assert_eq!(first.preferred_categories, categories(&["a", "b"]));
    assert_eq!(first.theme.as_deref(), Some("dark"));

    let t1 = t0 + Duration::from_secs(60);
    let second = repo
        .upsert_replace(
            user_id,
            UserSettingsPatch {
                language: Some(Some("de".to_owned())),
                ..Default::default()
            },
            t1,
        )
        .await
        .unwrap();

    assert!(second.preferred_categories.is_empty());
    assert_eq!(second.theme, None);
    assert_eq!(second.language.as_deref(), Some("de"));
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.updated_at, t1);
}

#[tokio::test]
async fn merge_touches_only_supplied_columns() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();
    let t0 = fixed_time();

    repo.upsert_replace(
        user_id,
        UserSettingsPatch {
            preferred_categories: Some(categories(&["a", "b"])),
            theme: Some(Some("dark".to_owned())),
            language: Some(Some("en".to_owned())),
            notifications_enabled: Some(Some(true)),
        },
        t0,
    )
    .await
    .unwrap();

    let t1 = t0 + Duration::from_secs(5);
    let merged = repo
        .upsert_merge(
            user_id,
            UserSettingsPatch {
                notifications_enabled: Some(Some(false)),
                ..Default::default()
            },
            t1,
        )
        .await
        .unwrap();

    assert_eq!(merged.preferred_categories, categories(&["a", "b"]));
    assert_eq!(merged.theme.as_deref(), Some("dark"));
    assert_eq!(merged.language.as_deref(), Some("en"));
    assert_eq!(merged.notifications_enabled, Some(false));
    assert_eq!(merged.created_at, t0);
    assert_eq!(merged.updated_at, t1);
}

#[tokio::test]
async fn merge_writes_cleared_columns() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();
    let t0 = fixed_time();

    repo.upsert_replace(
        user_id,
        UserSettingsPatch {
            preferred_categories: Some(categories(&["a"])),
            theme: Some(Some("dark".to_owned())),
            language: Some(Some("en".to_owned())),
            notifications_enabled: Some(Some(true)),
        },
        t0,
    )
    .await
    .unwrap();

    let merged = repo
        .upsert_merge(
            user_id,
            UserSettingsPatch {
                preferred_categories: Some(Vec::new()),
                theme: Some(None),
                notifications_enabled: Some(None),
                ..Default::default()
            },
            t0 + Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert!(merged.preferred_categories.is_empty());
    assert_eq!(merged.theme, None);
    assert_eq!(merged.notifications_enabled, None);
    assert_eq!(merged.language.as_deref(), Some("en"));
}

#[tokio::test]
async fn merge_on_missing_row_inserts_patch_over_empty_record() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();

    let created = repo
        .upsert_merge(
            user_id,
            UserSettingsPatch {
                theme: Some(Some("light".to_owned())),
                ..Default::default()
            },
            OffsetDateTime::now_utc(),
        )
        .await
        .unwrap();

    assert_eq!(created.user_id, user_id);
    assert_eq!(created.theme.as_deref(), Some("light"));
    assert!(created.preferred_categories.is_empty());
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn insert_if_absent_reports_whether_it_wrote() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();
    let now = OffsetDateTime::now_utc();

    assert!(repo.insert_if_absent(user_id, now).await.unwrap());
    assert!(!repo.insert_if_absent(user_id, now).await.unwrap());

    let row = repo.find_by_user(user_id).await.unwrap().unwrap();
    assert!(row.preferred_categories.is_empty());
    assert_eq!(row.theme, None);
}

#[tokio::test]
async fn delete_reports_affected_rows() {
    let repo = test_repo().await;
    let user_id = Uuid::new_v4();

    assert_eq!(repo.delete_by_user(user_id).await.unwrap(), 0);

    repo.insert_if_absent(user_id, OffsetDateTime::now_utc())
        .await
        .unwrap();
    assert_eq!(repo.delete_by_user(user_id).await.unwrap(), 1);
    assert!(repo.find_by_user(user_id).await.unwrap().is_none());
}
