//! Registration domain entities.

pub mod model;

pub use model::{NewSignup, Registration};
