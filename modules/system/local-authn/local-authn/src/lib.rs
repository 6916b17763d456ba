//! Local Authn Module Implementation
//!
//! The public API is defined in `local-authn-sdk` and re-exported here.

pub use local_authn_sdk::{AuthenticationService, AuthnError, Credential, UserIdentity};

pub mod module;
pub use module::LocalAuthnModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
