//! # seathub-entity
//!
//! Domain entity models for SeatHub. Database rows derive `sqlx::FromRow`;
//! the `workshop` module holds the pure capacity and pricing rules.

pub mod registration;
pub mod waitlist;
pub mod workshop;
