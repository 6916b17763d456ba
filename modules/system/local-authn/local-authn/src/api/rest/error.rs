use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use local_authn_sdk::AuthnError;
use problem_details::{Problem, current_trace_id};

pub const BASIC_CHALLENGE: &str = r#"Basic realm="user-settings", charset="UTF-8""#;

/// Map an authentication error to RFC 9457 Problem.
///
/// Service error details stay in the logs.
pub fn authn_error_to_problem(e: &AuthnError, instance: &str) -> Problem {
    let problem = match e {
        AuthnError::AuthenticationFailure => Problem::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Authentication failed",
        )
        .with_code("local_authn.authentication_failed"),
        AuthnError::ServiceUnavailable(_) => {
            tracing::error!(error = %e, "Credential validation failed");
            Problem::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "The authentication service is currently unavailable",
            )
            .with_code("local_authn.service_unavailable")
        }
        AuthnError::Internal(_) => {
            tracing::error!(error = %e, "Credential validation failed");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
            .with_code("local_authn.internal")
        }
    };

    problem
        .with_instance(instance)
        .with_trace_id(current_trace_id())
}

/// HTTP rendering of [`AuthnError`] for the request at `instance`.
#[derive(Debug)]
pub struct AuthnRejection {
    pub error: AuthnError,
    pub instance: String,
}

impl AuthnRejection {
    pub fn new(error: AuthnError, instance: impl Into<String>) -> Self {
        Self {
            error,
            instance: instance.into(),
        }
    }
}

impl IntoResponse for AuthnRejection {
    fn into_response(self) -> Response {
        let mut resp = authn_error_to_problem(&self.error, &self.instance).into_response();
        if resp.status() == StatusCode::UNAUTHORIZED {
            resp.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_CHALLENGE),
            );
        }
        resp
    }
}
