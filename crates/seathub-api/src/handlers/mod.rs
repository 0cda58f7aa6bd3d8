//! Route handlers organized by domain.

pub mod health;
pub mod registration;
pub mod workshop;
