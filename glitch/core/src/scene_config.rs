// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Interval ranges in milliseconds, as `(min, max)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub movement_change_ms: (u64, u64),
    pub blink_ms: (u64, u64),
    pub blink_duration_ms: u64,
    pub style_change_ms: (u64, u64),
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            movement_change_ms: (5_000, 10_000),
            blink_ms: (100, 5_000),
            blink_duration_ms: 50,
            style_change_ms: (3_000, 10_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub num_glitches: usize,
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
    pub timing: TimingConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            num_glitches: 10,
            width: 500.0,
            height: 500.0,
            seed: None,
            timing: TimingConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(path = %path.display(), "loaded scene config");
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.timing.blink_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "blink_duration_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
