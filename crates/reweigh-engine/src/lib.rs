//! # reweigh-engine
//!
//! Johnson's all-pairs shortest paths for Reweigh: potentials, in-place
//! reweighting, the per-source Dijkstra phase, and the result tables.
//!
//! ## Modules
//!
//! - [`johnson`] - Orchestrator and its phase state machine
//! - [`potential`] - Vertex potentials and edge reweighting
//! - [`table`] - Distance and path tables
//! - [`observer`] - Progress callbacks
//! - [`config`] - Run options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod johnson;
pub mod observer;
pub mod potential;
pub mod table;

pub use config::JohnsonConfig;
pub use johnson::{Johnson, JohnsonOutput, JohnsonPhase, run_johnson};
pub use observer::{NoopObserver, ProgressObserver, TracingObserver};
pub use potential::{Potential, compute_potential, reweight, verify_non_negative};
pub use table::{DistanceTable, PathTable};
