//! Configuration management for the roadmap generator
//!
//! Settings live in `.roadmap/config.toml` under the project root and cover the
//! estimation knobs and rendering defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::{Capacity, Result, RoadmapError};

/// Project-level roadmap configuration
///
/// Loaded from `.roadmap/config.toml` in the project root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// Estimation parameters
    #[serde(default)]
    pub estimation: EstimationConfig,

    /// Rendering defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Parameters for the hour-based and velocity-based estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Capacity used to turn epic and phase hours into weeks
    #[serde(default = "default_hours_per_week")]
    pub capacity_hours_per_week: f64,

    /// Team hours per week carried by the generator
    #[serde(default = "default_hours_per_week")]
    pub team_hours_per_week: f64,

    /// Schedule buffer applied by the duration estimator (0.25 = 25%)
    #[serde(default = "default_buffer_percentage")]
    pub buffer_percentage: f64,

    /// Story points one person completes per week
    #[serde(default = "default_velocity_per_person")]
    pub velocity_per_person: f64,
}

/// Rendering defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per indentation level in JSON output
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(RoadmapError::InvalidFormat(s.to_string())),
        }
    }
}

// Default value providers
fn default_hours_per_week() -> f64 {
    crate::DEFAULT_CAPACITY_HOURS_PER_WEEK
}

fn default_buffer_percentage() -> f64 {
    0.25
}

fn default_velocity_per_person() -> f64 {
    8.0
}

fn default_json_indent() -> usize {
    2
}

impl RoadmapConfig {
    /// Load configuration from `.roadmap/config.toml` or use defaults
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".roadmap/config.toml");

        if config_path.exists() {
            debug!("Loading config from {:?}", config_path);
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| RoadmapError::Config(format!("Failed to parse config file: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.roadmap/config.toml`
    pub fn write_default(project_root: &Path) -> Result<()> {
        let config_dir = project_root.join(".roadmap");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| RoadmapError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

impl EstimationConfig {
    /// Validated capacity for hour-to-week conversion
    pub fn capacity(&self) -> Result<Capacity> {
        Capacity::new(self.capacity_hours_per_week)
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            capacity_hours_per_week: default_hours_per_week(),
            team_hours_per_week: default_hours_per_week(),
            buffer_percentage: default_buffer_percentage(),
            velocity_per_person: default_velocity_per_person(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
            default_format: OutputFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RoadmapConfig::default();
        assert_eq!(config.estimation.capacity_hours_per_week, 30.0);
        assert_eq!(config.estimation.team_hours_per_week, 30.0);
        assert_eq!(config.estimation.buffer_percentage, 0.25);
        assert_eq!(config.estimation.velocity_per_person, 8.0);
        assert_eq!(config.output.json_indent, 2);
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RoadmapConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.output.json_indent, 2);
    }

    #[test]
    fn test_write_then_load() {
        let dir = TempDir::new().unwrap();
        RoadmapConfig::write_default(dir.path()).unwrap();
        assert!(dir.path().join(".roadmap/config.toml").exists());

        let config = RoadmapConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.estimation.buffer_percentage, 0.25);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".roadmap")).unwrap();
        std::fs::write(
            dir.path().join(".roadmap/config.toml"),
            "[estimation]\ncapacity_hours_per_week = 40.0\n\n[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();

        let config = RoadmapConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.estimation.capacity_hours_per_week, 40.0);
        assert_eq!(config.estimation.velocity_per_person, 8.0);
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert_eq!(config.output.json_indent, 2);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".roadmap")).unwrap();
        std::fs::write(dir.path().join(".roadmap/config.toml"), "estimation = 3").unwrap();

        assert!(matches!(
            RoadmapConfig::load_or_default(dir.path()),
            Err(RoadmapError::Config(_))
        ));
    }

    #[test]
    fn test_zero_capacity_is_degenerate() {
        let mut config = EstimationConfig::default();
        config.capacity_hours_per_week = 0.0;
        assert!(matches!(
            config.capacity(),
            Err(RoadmapError::DegenerateConfiguration(_))
        ));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
