//! # API Shared
//!
//! Shared wire types and services for the Users API.
//!
//! Contains:
//! - Request/response DTOs (`dto` module) with serde and OpenAPI schema derives
//! - Shared services like `HealthService`
//!
//! Used by `users-core` (to render records) and `api-rest` (to parse and answer requests).

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
