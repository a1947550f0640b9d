//! Core utilities shared across the waypoint crates.

pub mod error;

pub use error::Result;
