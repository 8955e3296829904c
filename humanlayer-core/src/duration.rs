//! Stable duration type for configuration and error payloads.
//!
//! [`DurationMs`] serializes as a plain integer (milliseconds), not as
//! serde's `{"secs": N, "nanos": N}` shape, so poll intervals and
//! deadlines read naturally in JSON/TOML configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration in milliseconds with a stable serialization format.
///
/// # Examples
///
/// ```
/// use humanlayer_core::DurationMs;
///
/// let d = DurationMs::from_secs(3);
/// assert_eq!(d.as_millis(), 3000);
///
/// let json = serde_json::to_string(&d).unwrap();
/// assert_eq!(json, "3000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationMs(u64);

impl DurationMs {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Create from milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Create from seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the value in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// The `std::time::Duration` the poll loop sleeps and measures with.
    pub fn to_std(&self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DurationMs {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for DurationMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
