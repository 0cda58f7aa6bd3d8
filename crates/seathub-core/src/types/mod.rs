//! Core type definitions used across the SeatHub workspace.

pub mod id;

pub use id::*;
