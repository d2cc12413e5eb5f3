//! Core type definitions for Reweigh.
//!
//! - Vertex identifiers ([`VertexId`])
//! - Edge weights ([`Weight`])

mod vertex;
mod weight;

pub use vertex::VertexId;
pub use weight::{Weight, ensure_finite};
