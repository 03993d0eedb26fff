//! Reconstruction options.

/// Options for table reconstruction.
#[derive(Debug, Clone)]
pub struct ReconstructOptions {
    /// Whether to reconstruct independent tables in parallel
    pub parallel: bool,
}

impl ReconstructOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}
