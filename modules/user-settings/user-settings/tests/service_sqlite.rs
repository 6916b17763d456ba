#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use std::sync::Arc;

use sea_orm::EntityTrait;
use tokio::task::JoinSet;
use user_settings::config::UserSettingsConfig;
use user_settings::domain::error::DomainError;
use user_settings::domain::service::Service;
use user_settings::infra::storage::entity::Entity as SettingsEntity;
use user_settings::infra::storage::sea_orm_repo::SeaOrmSettingsRepository;
use user_settings_sdk::UserSettingsPatch;
use uuid::Uuid;

use support::{categories, file_db, test_service, test_service_with};

fn with_categories(names: &[&str]) -> UserSettingsPatch {
    UserSettingsPatch {
        preferred_categories: Some(categories(names)),
        ..Default::default()
    }
}

#[tokio::test]
async fn get_by_user_reports_absence() {
    let svc = test_service().await;
    let err = svc.get_by_user(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn get_or_create_twice_yields_the_same_record() {
    let svc = test_service().await;
    let user_id = Uuid::new_v4();

    let first = svc.get_or_create(user_id).await.unwrap();
    let second = svc.get_or_create(user_id).await.unwrap();

    assert_eq!(first, second);
    assert!(first.preferred_categories.is_empty());
}

#[tokio::test]
async fn empty_update_changes_only_updated_at() {
    let svc = test_service().await;
    let user_id = Uuid::new_v4();

    let before = svc
        .create(
            user_id,
            UserSettingsPatch {
                preferred_categories: Some(categories(&["a"])),
                theme: Some(Some("dark".to_owned())),
                language: Some(Some("en".to_owned())),
                notifications_enabled: Some(Some(true)),
            },
        )
        .await
        .unwrap();
    let after = svc
        .update(user_id, UserSettingsPatch::default())
        .await
        .unwrap();

    assert_eq!(after.preferred_categories, before.preferred_categories);
    assert_eq!(after.theme, before.theme);
    assert_eq!(after.language, before.language);
    assert_eq!(after.notifications_enabled, before.notifications_enabled);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
}

#[tokio::test]
async fn update_replaces_category_list_wholesale() {
    let svc = test_service().await;
    let user_id = Uuid::new_v4();

    svc.create(user_id, with_categories(&["a", "b"]))
        .await
        .unwrap();
    let updated = svc.update(user_id, with_categories(&["a"])).await.unwrap();

    assert_eq!(updated.preferred_categories, categories(&["a"]));
}

#[tokio::test]
async fn filter_categories_follows_preferences() {
    let svc = test_service().await;
    let all = categories(&["a", "b", "c"]);

    let fresh = Uuid::new_v4();
    assert_eq!(
        svc.filter_categories(fresh, all.clone()).await.unwrap(),
        all
    );
    // The read created a default record.
    assert!(svc.get_by_user(fresh).await.is_ok());

    let picky = Uuid::new_v4();
    svc.update(picky, with_categories(&["b"])).await.unwrap();
    assert_eq!(
        svc.filter_categories(picky, all).await.unwrap(),
        categories(&["b"])
    );
}

#[tokio::test]
async fn filter_categories_keeps_duplicates_from_the_input() {
    let svc = test_service().await;
    let user_id = Uuid::new_v4();
    svc.update(user_id, with_categories(&["a"])).await.unwrap();

    let filtered = svc
        .filter_categories(user_id, categories(&["a", "a", "b"]))
        .await
        .unwrap();

    assert_eq!(filtered, categories(&["a", "a"]));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let svc = test_service().await;
    let user_id = Uuid::new_v4();

    svc.delete(user_id).await.unwrap();
    svc.get_or_create(user_id).await.unwrap();
    svc.delete(user_id).await.unwrap();
    svc.delete(user_id).await.unwrap();

    assert!(matches!(
        svc.get_by_user(user_id).await.unwrap_err(),
        DomainError::NotFound
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_updates_on_a_new_user_leave_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let db = file_db(&dir, 8).await;
    let repo = Arc::new(SeaOrmSettingsRepository::new(db.clone()));
    let svc = Arc::new(Service::new(
        Arc::clone(&repo),
        UserSettingsConfig::default().into(),
    ));
    let user_id = Uuid::new_v4();

    let mut tasks = JoinSet::new();
    for i in 0..16 {
        let updater = Arc::clone(&svc);
        tasks.spawn(async move {
            updater
                .update(
                    user_id,
                    UserSettingsPatch {
                        theme: Some(Some(format!("theme-{i}"))),
                        ..Default::default()
                    },
                )
                .await
        });
        let reader = Arc::clone(&svc);
        tasks.spawn(async move { reader.get_or_create(user_id).await });
    }
    while let Some(res) = tasks.join_next().await {
        res.unwrap().unwrap();
    }

    let rows = SettingsEntity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, user_id);
    assert!(rows[0].theme.as_ref().is_some_and(|t| t.starts_with("theme-")));
}

#[tokio::test]
async fn oversized_payload_is_rejected_without_writing() {
    let svc = test_service_with(UserSettingsConfig {
        max_field_length: 4,
        max_preferred_categories: 2,
    })
    .await;
    let user_id = Uuid::new_v4();

    let err = svc
        .update(user_id, with_categories(&["a", "b", "c"]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "preferred_categories"));

    let err = svc
        .create(
            user_id,
            UserSettingsPatch {
                theme: Some(Some("solarized".to_owned())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "theme"));

    assert!(matches!(
        svc.get_by_user(user_id).await.unwrap_err(),
        DomainError::NotFound
    ));
}
