//! Request and response bodies.

pub mod request;
pub mod response;

pub use request::RegisterRequest;
pub use response::{ErrorResponse, HealthResponse, RegisterResponse, WorkshopResponse};
