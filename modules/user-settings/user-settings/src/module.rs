use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use user_settings_sdk::UserSettingsClientV1;

use crate::api::rest::routes::{self, UserSettingsApiDoc};
use crate::config::UserSettingsConfig;
use crate::domain::local_client::LocalClient;
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmSettingsRepository;

/// Type alias for the concrete service type.
pub type ConcreteService = Service<SeaOrmSettingsRepository>;

/// Wires the settings service onto a database connection and exposes it
/// as REST routes and as an in-process [`UserSettingsClientV1`].
#[derive(Default)]
pub struct UserSettingsModule {
    service: ArcSwapOption<ConcreteService>,
}

impl UserSettingsModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running user_settings database migrations");
        Migrator::up(db, None).await?;
        info!("user_settings database migrations completed successfully");
        Ok(())
    }

    pub fn init(&self, db: DatabaseConnection, config: UserSettingsConfig) {
        info!("Initializing user_settings module");

        let repo = Arc::new(SeaOrmSettingsRepository::new(db));
        let service = Service::new(repo, config.into());
        self.service.store(Some(Arc::new(service)));

        info!("user_settings module initialized");
    }

    fn service(&self) -> anyhow::Result<Arc<ConcreteService>> {
        self.service
            .load()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// # Errors
    /// Returns an error if the module has not been initialized.
    pub fn client(&self) -> anyhow::Result<Arc<dyn UserSettingsClientV1>> {
        Ok(Arc::new(LocalClient::new(self.service()?)))
    }

    /// # Errors
    /// Returns an error if the module has not been initialized.
    pub fn register_rest(&self, router: Router) -> anyhow::Result<Router> {
        info!("Registering user_settings REST routes");
        let router = routes::register_routes(router, self.service()?);
        info!("user_settings REST routes registered successfully");
        Ok(router)
    }

    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi as _;
        UserSettingsApiDoc::openapi()
    }
}
