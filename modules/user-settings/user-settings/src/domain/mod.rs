pub mod error;
pub mod fields;
pub mod filter;
pub mod local_client;
pub mod repo;
pub mod service;
