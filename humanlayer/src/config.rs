//! Polling and identity configuration for [`HumanLayer`](crate::HumanLayer).

use crate::error::ConfigError;
use humanlayer_core::DurationMs;
use serde::{Deserialize, Serialize};

/// Default wait between polls of a pending record.
pub const DEFAULT_POLL_INTERVAL: DurationMs = DurationMs::from_secs(3);

/// Environment variable for [`HumanLayerConfig::poll_interval`], in milliseconds.
pub const ENV_POLL_INTERVAL_MS: &str = "HUMANLAYER_POLL_INTERVAL_MS";
/// Environment variable for [`HumanLayerConfig::timeout`], in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "HUMANLAYER_TIMEOUT_MS";
/// Environment variable for [`HumanLayerConfig::run_id`].
pub const ENV_RUN_ID: &str = "HUMANLAYER_RUN_ID";

/// How a [`HumanLayer`](crate::HumanLayer) waits for answers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanLayerConfig {
    /// Wait between polls while a record is pending.
    pub poll_interval: DurationMs,

    /// Give up on a pending record after this long.
    /// None = poll until the backend resolves it.
    pub timeout: Option<DurationMs>,

    /// Pin the run id for every record this client creates.
    /// None = each record's run id equals its call id.
    pub run_id: Option<String>,
}

impl Default for HumanLayerConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
            run_id: None,
        }
    }
}

impl HumanLayerConfig {
    /// Override the poll interval.
    #[must_use]
    pub fn poll_interval(mut self, interval: DurationMs) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set a deadline for each contact request.
    #[must_use]
    pub fn timeout(mut self, timeout: DurationMs) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Pin the run id.
    #[must_use]
    pub fn run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    /// Read configuration from `HUMANLAYER_*` environment variables.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval = parse_millis(ENV_POLL_INTERVAL_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout = Some(parse_millis(ENV_TIMEOUT_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_RUN_ID) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.run_id = Some(trimmed.to_string());
            }
        }
        Ok(config)
    }
}

fn parse_millis(var: &str, raw: &str) -> Result<DurationMs, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(DurationMs::from_millis)
        .map_err(|_| ConfigError::Invalid {
            var: var.to_string(),
            value: raw.to_string(),
        })
}
