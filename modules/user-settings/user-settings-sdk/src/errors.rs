//! Error types for the user-settings SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SettingsError {
    /// No settings record exists for the user. Only `get_settings` reports this.
    #[error("Settings not found")]
    NotFound,

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The persistence layer failed; the request may be retried by the caller.
    #[error("Settings store unavailable")]
    StoreUnavailable,
}

impl SettingsError {
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn store_unavailable() -> Self {
        Self::StoreUnavailable
    }
}
