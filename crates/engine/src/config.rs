//! Run configuration.
//!
//! Defaults reproduce the classic behavior: a 10×10 grid advancing once per
//! second until the user quits. Every value can be overridden from the
//! environment.

use std::env;
use std::time::Duration;

use crate::types::{DEFAULT_GENERATION_MS, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

/// How the running loop waits between generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Advance after a fixed real-time interval
    Timed(Duration),
    /// Advance on every key press
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub grid_size: usize,
    pub pacing: Pacing,
    /// Stop once this generation has been displayed. `None` runs until quit.
    pub max_generations: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            pacing: Pacing::Timed(Duration::from_millis(DEFAULT_GENERATION_MS)),
            max_generations: None,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    ///
    /// - `LIFE_GRID_SIZE`: grid side, clamped to `1..=MAX_GRID_SIZE`
    /// - `LIFE_INTERVAL_MS`: pause between generations
    /// - `LIFE_STEP_MODE`: `timed` (default) or `manual`
    /// - `LIFE_MAX_GENERATIONS`: stop after this generation
    /// - `LIFE_LOG_PATH`: append logs to this file
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid_size = parsed("LIFE_GRID_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_GRID_SIZE)
            .clamp(1, MAX_GRID_SIZE);

        let interval_ms = parsed("LIFE_INTERVAL_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_GENERATION_MS);

        let pacing = match parsed("LIFE_STEP_MODE").map(|s| s.to_lowercase()) {
            Some(mode) if mode == "manual" => Pacing::Manual,
            _ => Pacing::Timed(Duration::from_millis(interval_ms)),
        };

        let max_generations = parsed("LIFE_MAX_GENERATIONS").and_then(|s| s.parse().ok());
        let log_path = parsed("LIFE_LOG_PATH");

        Self {
            grid_size,
            pacing,
            max_generations,
            log_path,
        }
    }
}
