//! # seathub-api
//!
//! HTTP API layer for SeatHub built on Axum.
//!
//! Provides the workshop and registration endpoints, a health probe,
//! static file fallback, middleware (CORS, request logging), DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
