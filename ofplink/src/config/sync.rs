//! Sync configuration.

use super::defaults::DEFAULT_PREFIX;

/// Configuration for [`FlightPlanSync`](crate::flight_plan::FlightPlanSync).
///
/// ```
/// use ofplink::config::SyncConfig;
///
/// let config = SyncConfig::default();
/// assert_eq!(config.prefix(), "sbh/");
///
/// let config = SyncConfig::new().with_prefix("hub/");
/// assert_eq!(config.prefix(), "hub/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Prepended to every registry entry name.
    prefix: String,
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the registry name prefix. Include the separator (`"sbh/"`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}
