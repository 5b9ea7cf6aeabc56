// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every knob has the default the generated site ships with, so an empty JSON
//! object is a valid configuration. Hosts usually only set `base`, read from
//! the search container's `data-base` attribute.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default maximum number of rendered results.
pub const DEFAULT_LIMIT: usize = 10;

/// Records indexed per scheduling turn.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Pause between index batches, in milliseconds.
pub const DEFAULT_BATCH_DELAY_MS: u64 = 10;

/// How long loading may take before the "loading" affordance is shown.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 500;

/// Grace period before a lost focus is committed.
pub const DEFAULT_BLUR_DELAY_MS: u64 = 100;

/// Edit distance tolerated by the fuzzy fallback stage.
pub const DEFAULT_FUZZY_DISTANCE: u8 = 1;

/// Name field boost.
pub const NAME_BOOST: f64 = 10.0;

/// Parent field boost.
pub const PARENT_BOOST: f64 = 1.0;

/// Configuration of a search widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Url prefix joined with each record url. Normalized to end with `/`.
    pub base: String,
    /// Maximum number of results rendered (default: 10)
    pub limit: usize,
    /// Records indexed per batch (default: 100)
    pub batch_size: usize,
    /// Delay between index batches (default: 10 ms)
    pub batch_delay_ms: u64,
    /// Delay before the loading affordance appears (default: 500 ms)
    pub loading_delay_ms: u64,
    /// Delay before a focus loss is committed (default: 100 ms)
    pub blur_delay_ms: u64,
    /// Edit distance of the fuzzy fallback (default: 1)
    pub fuzzy_distance: u8,
    /// Field boosts
    pub boost: BoostOptions,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base: String::from("/"),
            limit: DEFAULT_LIMIT,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            blur_delay_ms: DEFAULT_BLUR_DELAY_MS,
            fuzzy_distance: DEFAULT_FUZZY_DISTANCE,
            boost: BoostOptions::default(),
        }
    }
}

/// Boost multipliers for the two indexed fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostOptions {
    /// Name field boost (default: 10.0)
    #[serde(default = "default_name_boost")]
    pub name: f64,
    /// Parent field boost (default: 1.0)
    #[serde(default = "default_parent_boost")]
    pub parent: f64,
}

impl Default for BoostOptions {
    fn default() -> Self {
        Self {
            name: NAME_BOOST,
            parent: PARENT_BOOST,
        }
    }
}

fn default_name_boost() -> f64 {
    NAME_BOOST
}
fn default_parent_boost() -> f64 {
    PARENT_BOOST
}

impl WidgetConfig {
    /// Configuration with the given base prefix and defaults for everything else.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Parse, validate and normalize a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::Zero { option: "limit" });
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Zero { option: "batchSize" });
        }
        for (field, value) in [("name", self.boost.name), ("parent", self.boost.parent)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBoost { field, value });
            }
        }
        Ok(())
    }

    /// The base prefix always ends with a slash, as record urls are relative.
    pub fn normalized(mut self) -> Self {
        if !self.base.ends_with('/') {
            self.base.push('/');
        }
        self
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn blur_delay(&self) -> Duration {
        Duration::from_millis(self.blur_delay_ms)
    }
}
