//! CLI command implementations.

pub mod check;
pub mod demo;
pub mod solve;
