//! Configuration for the chart viewer, loadable from YAML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ChartError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual chart features on or off.
///
/// All features default to `true` (enabled).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the grid while the pointer is outside the plot.
    pub grid: bool,
    /// Show the plot legend.
    pub legend: bool,
    /// Draw the hover highlight (nearest-sample markers and labels).
    pub highlight: bool,
    /// Draw the status timeline below the certification chart.
    pub status_timeline: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            legend: true,
            highlight: true,
            status_timeline: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Data sources
// ─────────────────────────────────────────────────────────────────────────────

/// Where chart data comes from.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Certificate id looked up in every fixture entry.
    pub certificate_id: String,
    /// Fixture with count/target records.
    pub certification_fixture: PathBuf,
    /// Fixture with an employee's validity-status records.
    pub status_fixture: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            certificate_id: "1".to_string(),
            certification_fixture: PathBuf::from("resources/2399.json"),
            status_fixture: PathBuf::from("resources/00009408.json"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field      | Purpose |
/// |------------|---------|
/// | `data`     | Fixture paths and certificate id |
/// | `features` | Toggle chart features on/off |
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Native window title.
    pub title: String,
    /// Height of the certification chart in points.
    pub certification_height: f32,
    /// Height of the status timeline in points.
    pub status_height: f32,
    pub data: DataSources,
    pub features: FeatureFlags,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Certifications".to_string(),
            certification_height: 260.0,
            status_height: 120.0,
            data: DataSources::default(),
            features: FeatureFlags::default(),
            native_options: None,
        }
    }
}

impl std::fmt::Debug for ChartConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartConfig")
            .field("title", &self.title)
            .field("certification_height", &self.certification_height)
            .field("status_height", &self.status_height)
            .field("data", &self.data)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

impl ChartConfig {
    /// Parse a YAML document; missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_yaml_str(&yaml)?;
        log::info!("loaded configuration {}", path.display());
        Ok(cfg)
    }

    /// Resolve relative fixture paths against `base` (typically the config file's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        for p in [
            &mut self.data.certification_fixture,
            &mut self.data.status_fixture,
        ] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}
