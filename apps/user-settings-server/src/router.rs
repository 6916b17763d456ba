use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use local_authn::LocalAuthnModule;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use user_settings::UserSettingsModule;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Merged OpenAPI document of every mounted module.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = UserSettingsModule::openapi();
    doc.merge(LocalAuthnModule::openapi());
    doc.info.title = "user-settings-server".to_owned();
    env!("CARGO_PKG_VERSION").clone_into(&mut doc.info.version);
    doc
}

/// Assemble the HTTP surface: protected settings routes, the login route,
/// `/openapi.json` and `/health`.
///
/// # Errors
/// Returns an error if either module has not been initialized.
pub fn build_router(
    settings: &UserSettingsModule,
    authn: &LocalAuthnModule,
    request_timeout: Duration,
) -> Result<Router> {
    let settings_routes = authn.protect(settings.register_rest(Router::new())?)?;
    let login_routes = authn.register_rest(Router::new())?;
    let doc = openapi();

    let router = Router::new()
        .merge(settings_routes)
        .merge(login_routes)
        .route("/openapi.json", get(move || async move { Json(doc) }))
        .route("/health", get(|| async { "ok" }))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ));

    Ok(apply_request_id_and_trace(router))
}

fn apply_request_id_and_trace(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}
