use std::sync::Arc;

use axum::extract::{Extension, Json};
use axum::http::{StatusCode, Uri};
use local_authn_sdk::UserIdentity;
use problem_details::Problem;

use super::dto::{
    FilterCategoriesRequest, FilterCategoriesResponse, SettingsPayloadRequest, UserSettingsDto,
};
use super::error::domain_error_to_problem;
use crate::module::ConcreteService;

pub const SETTINGS_PATH: &str = "/user-settings/v1/settings";
pub const FILTER_CATEGORIES_PATH: &str = "/user-settings/v1/settings/categories/filter";

type ApiResult<T> = Result<T, Problem>;

#[utoipa::path(
    get,
    path = "/user-settings/v1/settings",
    operation_id = "user_settings.get_settings",
    tag = "user-settings",
    responses(
        (status = 200, description = "Settings of the authenticated user", body = UserSettingsDto),
        (status = 404, description = "No settings stored yet", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Settings store unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn get_settings(
    Extension(identity): Extension<UserIdentity>,
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
) -> ApiResult<Json<UserSettingsDto>> {
    let settings = svc
        .get_by_user(identity.user_id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(settings.into()))
}

#[utoipa::path(
    post,
    path = "/user-settings/v1/settings",
    operation_id = "user_settings.create_settings",
    tag = "user-settings",
    request_body = SettingsPayloadRequest,
    responses(
        (status = 201, description = "Settings created or replaced", body = UserSettingsDto),
        (status = 422, description = "Payload exceeds configured limits", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Settings store unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn create_settings(
    Extension(identity): Extension<UserIdentity>,
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Json(req): Json<SettingsPayloadRequest>,
) -> ApiResult<(StatusCode, Json<UserSettingsDto>)> {
    let settings = svc
        .create(identity.user_id, req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok((StatusCode::CREATED, Json(settings.into())))
}

#[utoipa::path(
    patch,
    path = "/user-settings/v1/settings",
    operation_id = "user_settings.update_settings",
    tag = "user-settings",
    request_body = SettingsPayloadRequest,
    responses(
        (status = 200, description = "Merged settings", body = UserSettingsDto),
        (status = 422, description = "Payload exceeds configured limits", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Settings store unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn update_settings(
    Extension(identity): Extension<UserIdentity>,
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Json(req): Json<SettingsPayloadRequest>,
) -> ApiResult<Json<UserSettingsDto>> {
    let settings = svc
        .update(identity.user_id, req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(settings.into()))
}

#[utoipa::path(
    delete,
    path = "/user-settings/v1/settings",
    operation_id = "user_settings.delete_settings",
    tag = "user-settings",
    responses(
        (status = 204, description = "Settings removed, or there were none"),
        (status = 503, description = "Settings store unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn delete_settings(
    Extension(identity): Extension<UserIdentity>,
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
) -> ApiResult<StatusCode> {
    svc.delete(identity.user_id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/user-settings/v1/settings/categories/filter",
    operation_id = "user_settings.filter_categories",
    tag = "user-settings",
    request_body = FilterCategoriesRequest,
    responses(
        (status = 200, description = "Categories matching the user's preferences", body = FilterCategoriesResponse),
        (status = 503, description = "Settings store unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn filter_categories(
    Extension(identity): Extension<UserIdentity>,
    Extension(svc): Extension<Arc<ConcreteService>>,
    uri: Uri,
    Json(req): Json<FilterCategoriesRequest>,
) -> ApiResult<Json<FilterCategoriesResponse>> {
    let categories = svc
        .filter_categories(identity.user_id, req.categories)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(FilterCategoriesResponse { categories }))
}
