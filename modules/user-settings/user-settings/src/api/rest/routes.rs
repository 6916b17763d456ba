use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use problem_details::Problem;
use utoipa::OpenApi;

use super::dto::{
    FilterCategoriesRequest, FilterCategoriesResponse, SettingsPayloadRequest, UserSettingsDto,
};
use super::handlers::{self, FILTER_CATEGORIES_PATH, SETTINGS_PATH};
use crate::module::ConcreteService;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_settings,
        handlers::create_settings,
        handlers::update_settings,
        handlers::delete_settings,
        handlers::filter_categories,
    ),
    components(schemas(
        UserSettingsDto,
        SettingsPayloadRequest,
        FilterCategoriesRequest,
        FilterCategoriesResponse,
        Problem,
    )),
    tags((name = "user-settings", description = "Per-user settings"))
)]
pub struct UserSettingsApiDoc;

/// Settings routes. Every handler expects a `UserIdentity` request extension,
/// so the caller must layer authentication in front of this router.
pub fn register_routes(router: Router, service: Arc<ConcreteService>) -> Router {
    router
        .route(
            SETTINGS_PATH,
            get(handlers::get_settings)
                .post(handlers::create_settings)
                .patch(handlers::update_settings)
                .delete(handlers::delete_settings),
        )
        .route(FILTER_CATEGORIES_PATH, post(handlers::filter_categories))
        .layer(Extension(service))
}
