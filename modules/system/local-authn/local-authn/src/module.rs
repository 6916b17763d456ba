use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::Router;
use axum::middleware::from_fn_with_state;
use local_authn_sdk::AuthenticationService;
use tracing::info;

use crate::api::rest::middleware::basic_auth;
use crate::api::rest::routes::{self, LocalAuthnApiDoc};
use crate::config::LocalAuthnConfig;
use crate::domain::validator::CredentialValidator;
use crate::infra::static_service::StaticAuthenticationService;

/// Owns the credential validator and exposes it as the login route and as
/// a Basic-auth layer for other modules' routers.
#[derive(Default)]
pub struct LocalAuthnModule {
    validator: ArcSwapOption<CredentialValidator>,
}

impl LocalAuthnModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize with the config-backed static authentication service.
    ///
    /// # Errors
    /// Returns an error if the configured accounts are invalid.
    pub fn init(&self, config: &LocalAuthnConfig) -> anyhow::Result<()> {
        info!("Initializing local_authn module");

        let service = StaticAuthenticationService::from_config(config)?;
        if service.is_empty() {
            tracing::warn!("local_authn has no configured users; every login will be rejected");
        }
        self.init_with_service(Arc::new(service));

        info!("local_authn module initialized");
        Ok(())
    }

    /// Initialize with an externally provided authentication service.
    pub fn init_with_service(&self, service: Arc<dyn AuthenticationService>) {
        self.validator
            .store(Some(Arc::new(CredentialValidator::new(service))));
    }

    /// # Errors
    /// Returns an error if the module has not been initialized.
    pub fn validator(&self) -> anyhow::Result<Arc<CredentialValidator>> {
        self.validator
            .load()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Credential validator not initialized"))
    }

    /// # Errors
    /// Returns an error if the module has not been initialized.
    pub fn register_rest(&self, router: Router) -> anyhow::Result<Router> {
        info!("Registering local_authn REST routes");
        Ok(routes::register_routes(router, self.validator()?))
    }

    /// Require HTTP Basic credentials on every route already present in `router`.
    ///
    /// # Errors
    /// Returns an error if the module has not been initialized.
    pub fn protect(&self, router: Router) -> anyhow::Result<Router> {
        Ok(router.route_layer(from_fn_with_state(self.validator()?, basic_auth)))
    }

    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi as _;
        LocalAuthnApiDoc::openapi()
    }
}
