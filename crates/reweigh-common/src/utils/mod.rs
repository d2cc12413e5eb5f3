//! Utility functions and helpers.
//!
//! - [`error`] - Error types shared by all Reweigh crates
//! - [`hash`] - Hash map aliases

pub mod error;
pub mod hash;
