//! Configuration for Johnson runs.

/// Default clamp for floating-point residue after reweighting.
pub const DEFAULT_REWEIGHT_TOLERANCE: f64 = 1e-9;

/// Johnson orchestrator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct JohnsonConfig {
    /// Reweighted edges in `[-reweight_tolerance, 0)` are clamped to zero.
    ///
    /// `w + h(u) - h(v)` is exactly non-negative in real arithmetic but can
    /// land a few ulps below zero in `f64`.
    pub reweight_tolerance: f64,

    /// Check that every reweighted edge between distinct vertices is
    /// non-negative before any Dijkstra run.
    ///
    /// Defaults to on in debug builds.
    pub verify_reweighting: bool,

    /// Whether to build the path table.
    ///
    /// When off, the path table is empty and observers get no
    /// `on_path_found` calls.
    pub record_paths: bool,
}

impl Default for JohnsonConfig {
    fn default() -> Self {
        Self {
            reweight_tolerance: DEFAULT_REWEIGHT_TOLERANCE,
            verify_reweighting: cfg!(debug_assertions),
            record_paths: true,
        }
    }
}

impl JohnsonConfig {
    /// Sets the reweighting residue tolerance.
    ///
    /// Negative values are treated as zero.
    #[must_use]
    pub fn with_reweight_tolerance(mut self, tolerance: f64) -> Self {
        self.reweight_tolerance = tolerance.max(0.0);
        self
    }

    /// Enables or disables verification of reweighted edges.
    #[must_use]
    pub fn with_verify_reweighting(mut self, verify: bool) -> Self {
        self.verify_reweighting = verify;
        self
    }

    /// Enables or disables the path table.
    #[must_use]
    pub fn with_record_paths(mut self, record: bool) -> Self {
        self.record_paths = record;
        self
    }

    /// Returns a configuration that only computes distances.
    #[must_use]
    pub fn distances_only() -> Self {
        Self::default().with_record_paths(false)
    }
}
