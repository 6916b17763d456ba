//! User Settings SDK
//!
//! This crate provides the public API for the user-settings module:
//! - `UserSettingsClientV1` trait for inter-module communication
//! - Model types (`UserSettings`, `UserSettingsPatch`)
//! - Error type (`SettingsError`)
//!
//! Consumers receive the client from the module's composition root:
//! ```ignore
//! let client = settings_module.client()?;
//! let visible = client.filter_categories(user_id, categories).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::UserSettingsClientV1;
pub use errors::SettingsError;
pub use models::{UserSettings, UserSettingsPatch};
