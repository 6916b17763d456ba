//! Local Authn SDK
//!
//! Contracts for local credential validation: the credential and identity
//! models, the [`AuthenticationService`] trait the validator delegates to,
//! and the error type shared by both.

pub mod api;
pub mod error;
pub mod models;

pub use api::AuthenticationService;
pub use error::AuthnError;
pub use models::{Credential, UserIdentity};
