use axum::http::StatusCode;
use problem_details::{Problem, current_trace_id};

use crate::domain::error::DomainError;

/// Map domain error to RFC 9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::NotFound => Problem::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            "Settings not found",
        )
        .with_code("user_settings.not_found"),
        DomainError::Validation { field, message } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Failed",
            format!("Validation error on '{field}': {message}"),
        )
        .with_code("user_settings.validation"),
        DomainError::StoreUnavailable(_) => {
            tracing::error!(error = ?e, "Settings store error occurred");
            Problem::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "The settings store is currently unavailable",
            )
            .with_code("user_settings.store_unavailable")
        }
    };

    problem
        .with_instance(instance)
        .with_trace_id(current_trace_id())
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
