pub mod analysis_service;
pub mod auth_service;
pub mod query_service;
