//! # recipebox-api
//!
//! HTTP API layer for RecipeBox built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS,
//! compression, tracing, timeouts), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
