//! Application Configuration
//!
//! Configuration for the contact application layer.

use platform::rate_limit::RateLimitConfig;
use std::time::Duration;

/// Contact application configuration
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Rate limit: max contact submissions per client per window
    pub rate_limit_max_requests: u32,
    /// Rate limit window
    pub rate_limit_window: Duration,
    /// Cap on the admin listing page size
    pub list_max_limit: i64,
    /// Cap on the legacy status-check listing
    pub status_list_limit: i64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: 5,
            rate_limit_window: Duration::from_secs(3600),
            list_max_limit: 100,
            status_list_limit: 1000,
        }
    }
}

impl ContactConfig {
    /// Rate limiter configuration derived from this config
    pub fn rate_limit_config(&self) -> RateLimitConfig {
        RateLimitConfig {
            max_requests: self.rate_limit_max_requests,
            window: self.rate_limit_window,
        }
    }
}
