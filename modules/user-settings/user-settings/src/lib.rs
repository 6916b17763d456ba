//! User Settings Module Implementation
//!
//! The public API is defined in `user-settings-sdk` and re-exported here.

pub use user_settings_sdk::{SettingsError, UserSettings, UserSettingsClientV1, UserSettingsPatch};

pub mod module;
pub use module::UserSettingsModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
