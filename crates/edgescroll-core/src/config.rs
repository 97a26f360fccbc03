use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::direction::Direction;
use crate::edge::EdgeThresholds;
use crate::pointer::TrackingMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub autoscroll: AutoScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Poll interval in milliseconds while nothing is scrolling
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frames per second while a scroll loop is running
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Shade the edge zones in the demo view
    #[serde(default = "default_true")]
    pub show_zones: bool,
    /// Number of lines in the demo document
    #[serde(default = "default_content_lines")]
    pub content_lines: usize,
    /// Width in columns of the demo document
    #[serde(default = "default_content_width")]
    pub content_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            frame_rate: default_frame_rate(),
            show_zones: default_true(),
            content_lines: default_content_lines(),
            content_width: default_content_width(),
        }
    }
}

impl UiConfig {
    /// Time between frames while scrolling
    pub fn frame_interval(&self) -> Duration {
        if self.frame_rate == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.frame_rate as u64)
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Auto-scroll settings as they appear in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Offset change per frame; unset uses the host's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// "mousemove" or "drag"
    #[serde(default)]
    pub track_mouse_event: TrackingMode,
    /// Zone depth per side
    #[serde(default = "default_edge")]
    pub edge: EdgeThresholds,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            step: None,
            track_mouse_event: TrackingMode::default(),
            edge: default_edge(),
        }
    }
}

impl AutoScrollConfig {
    /// Check step and thresholds
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(step) = self.step {
            validate_step(step)?;
        }
        self.edge.validate()
    }
}

pub(crate) fn validate_step(step: f64) -> crate::Result<()> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(crate::Error::InvalidStep(step))
    }
}

fn default_edge() -> EdgeThresholds {
    EdgeThresholds::new()
        .with(Direction::Top, 2.0)
        .with(Direction::Bottom, 2.0)
        .with(Direction::Left, 4.0)
        .with(Direction::Right, 4.0)
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("edgescroll")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_frame_rate() -> u32 {
    30
}

fn default_content_lines() -> usize {
    200
}

fn default_content_width() -> usize {
    160
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.autoscroll.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/edgescroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("edgescroll")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("edgescroll.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.frame_rate, 30);
        assert_eq!(config.autoscroll.step, None);
        assert_eq!(config.autoscroll.track_mouse_event, TrackingMode::MouseMove);
        assert_eq!(config.autoscroll.edge.top, Some(2.0));
        assert_eq!(config.autoscroll.edge.right, Some(4.0));
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            [autoscroll]
            step = 3
            track_mouse_event = "drag"

            [autoscroll.edge]
            top = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.autoscroll.step, Some(3.0));
        assert_eq!(config.autoscroll.track_mouse_event, TrackingMode::Drag);
        assert_eq!(config.autoscroll.edge.top, Some(20.0));
        // an explicit edge table replaces the defaults entirely
        assert_eq!(config.autoscroll.edge.left, None);
        assert_eq!(config.ui.frame_rate, 30);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::from_toml("[autoscroll]\nstep = 0"),
            Err(crate::Error::InvalidStep(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("[autoscroll.edge]\nbottom = -1"),
            Err(crate::Error::InvalidThreshold { .. })
        ));
        assert!(matches!(
            AppConfig::from_toml("[autoscroll]\ntrack_mouse_event = \"hover\""),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = AppConfig::default();
        config.autoscroll.step = Some(2.5);
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.autoscroll.step, Some(2.5));
        assert_eq!(parsed.autoscroll.edge, config.autoscroll.edge);
    }

    #[test]
    fn test_frame_interval() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.frame_interval(), Duration::from_millis(33));
        ui.frame_rate = 0;
        assert_eq!(ui.frame_interval(), Duration::from_millis(16));
    }
}
