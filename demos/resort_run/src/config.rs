//! Demo configuration, loaded from an optional JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use dc_mobility::{NavConfig, TimerConfig};

/// Every field may be omitted; missing fields take the defaults below.
///
/// ```json
/// { "seed": 7, "orders": 3, "nav": { "step": 5.0 } }
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Master seed for order sampling and pause injection.
    pub seed:       u64,
    /// Orders sampled from the manifest (capped at its length).
    pub orders:     usize,
    /// Probability that a run is paused once part-way.
    pub pause_rate: f64,
    /// Virtual time budget per run.
    pub limit_ms:   u64,
    pub output_dir: PathBuf,
    pub nav:        NavConfig,
    pub timer:      TimerConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed:       42,
            orders:     5,
            pause_rate: 0.4,
            limit_ms:   120_000,
            output_dir: PathBuf::from("output/resort_run"),
            nav:        NavConfig::default(),
            timer:      TimerConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
