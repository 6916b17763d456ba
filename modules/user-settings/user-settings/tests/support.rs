#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use user_settings::config::UserSettingsConfig;
use user_settings::domain::service::Service;
use user_settings::infra::storage::migrations::Migrator;
use user_settings::infra::storage::sea_orm_repo::SeaOrmSettingsRepository;

/// Fresh in-memory SQLite database with the settings schema applied.
pub async fn test_db() -> DatabaseConnection {
    // Every pooled connection would get its own private in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

/// File-backed SQLite behind a pool of `max_connections`, so statements
/// from concurrent tasks really interleave.
pub async fn file_db(dir: &tempfile::TempDir, max_connections: u32) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("settings.db").display());
    let mut opts = ConnectOptions::new(url);
    opts.max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("file sqlite should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

pub async fn test_repo() -> SeaOrmSettingsRepository {
    SeaOrmSettingsRepository::new(test_db().await)
}

pub async fn test_service() -> Arc<Service<SeaOrmSettingsRepository>> {
    test_service_with(UserSettingsConfig::default()).await
}

pub async fn test_service_with(
    config: UserSettingsConfig,
) -> Arc<Service<SeaOrmSettingsRepository>> {
    Arc::new(Service::new(Arc::new(test_repo().await), config.into()))
}

pub fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}
