//! Configuration for bounded forward scans.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SCAN_MAX_YEAR;

/// Configuration for the Friday-the-13th search.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use datecalc::ScanConfig;
///
/// let config = ScanConfig::new().with_max_year(2100);
/// assert_eq!(config.max_year(), 2100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    max_year: i32,
}

impl ScanConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `max_year = 2200`.
    pub const fn new() -> Self {
        Self {
            max_year: DEFAULT_SCAN_MAX_YEAR,
        }
    }

    /// Sets the last year (inclusive) the scan may reach.
    pub const fn with_max_year(mut self, max_year: i32) -> Self {
        self.max_year = max_year;
        self
    }

    /// Last year (inclusive) the scan may reach.
    pub const fn max_year(&self) -> i32 {
        self.max_year
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
