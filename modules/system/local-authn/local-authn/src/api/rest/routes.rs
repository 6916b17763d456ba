use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use problem_details::Problem;
use utoipa::OpenApi;

use super::dto::{LoginRequest, UserIdentityDto};
use super::handlers::{self, LOGIN_PATH};
use crate::domain::validator::CredentialValidator;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::login),
    components(schemas(LoginRequest, UserIdentityDto, Problem)),
    tags((name = "auth", description = "Local credential validation"))
)]
pub struct LocalAuthnApiDoc;

pub fn register_routes(router: Router, validator: Arc<CredentialValidator>) -> Router {
    router
        .route(LOGIN_PATH, post(handlers::login))
        .layer(Extension(validator))
}
