use std::sync::Arc;

use axum::extract::{Extension, Json};
use axum::http::Uri;
use problem_details::Problem;

use super::dto::{LoginRequest, UserIdentityDto};
use super::error::AuthnRejection;
use crate::domain::validator::CredentialValidator;

pub const LOGIN_PATH: &str = "/auth/v1/login";

#[utoipa::path(
    post,
    path = "/auth/v1/login",
    operation_id = "local_authn.login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credential accepted", body = UserIdentityDto),
        (status = 401, description = "Credential rejected", body = Problem, content_type = "application/problem+json"),
        (status = 503, description = "Authentication service unavailable", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn login(
    Extension(validator): Extension<Arc<CredentialValidator>>,
    uri: Uri,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserIdentityDto>, AuthnRejection> {
    let identity = validator
        .validate(req.into())
        .await
        .map_err(|e| AuthnRejection::new(e, uri.path()))?;
    Ok(Json(identity.into()))
}
