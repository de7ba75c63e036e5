use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_range, validate_url, Validate};
use std::ops::Range;
use std::time::Duration;

pub const STATUS_ENDPOINT: &str = "http://localhost:9192/DPM/STATUS";
pub const FIRST_ITERATION: u32 = 1;
/// Exclusive upper bound of the iteration counter.
pub const ITERATION_LIMIT: u32 = 100;
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// The binary always runs with `PollerConfig::default()`; the fields are public
/// so the library can be driven against a mock server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    pub endpoint: String,
    pub first_iteration: u32,
    pub iteration_limit: u32,
    pub interval: Duration,
}

impl PollerConfig {
    pub fn iterations(&self) -> Range<u32> {
        self.first_iteration..self.iteration_limit
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_limit.saturating_sub(self.first_iteration)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: STATUS_ENDPOINT.to_string(),
            first_iteration: FIRST_ITERATION,
            iteration_limit: ITERATION_LIMIT,
            interval: POLL_INTERVAL,
        }
    }
}

impl Validate for PollerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_range("iterations", self.first_iteration, self.iteration_limit)?;
        Ok(())
    }
}
