//! # reweigh-common
//!
//! Foundation layer for Reweigh: vertex and weight types, the error
//! taxonomy, and hashing utilities.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Weight)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{VertexId, Weight};
pub use utils::error::{Error, QueueError, Result};
