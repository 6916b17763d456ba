pub mod static_service;
