//! HTTP Basic authentication for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use local_authn_sdk::{AuthnError, Credential};

use super::error::AuthnRejection;
use crate::domain::validator::CredentialValidator;

/// Validates the `Authorization: Basic` header and stores the resulting
/// `UserIdentity` in request extensions.
pub async fn basic_auth(
    State(validator): State<Arc<CredentialValidator>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(credential) = extract_basic_credential(request.headers()) else {
        return AuthnRejection::new(AuthnError::AuthenticationFailure, request.uri().path())
            .into_response();
    };

    match validator.validate(credential).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => AuthnRejection::new(err, request.uri().path()).into_response(),
    }
}

/// Decode `Basic base64(identifier:secret)`. The secret may contain `:`.
///
/// The scheme name is matched case-insensitively.
pub fn extract_basic_credential(headers: &HeaderMap) -> Option<Credential> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;
    let (scheme, encoded) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let encoded = encoded.trim();

    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (identifier, secret) = decoded.split_once(':')?;

    Some(Credential::new(identifier, secret))
}
