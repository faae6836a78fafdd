//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gesture resolution settings
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Derived visual settings
    #[serde(default)]
    pub visuals: VisualConfig,
}

/// Gesture resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Horizontal displacement beyond which a drag commits (pixels)
    pub commit_threshold_px: f64,
    /// Delay between the visual exit and the decision callback (ms)
    pub exit_delay_ms: u64,
}

/// Derived visual configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualConfig {
    /// Card rotation per pixel of horizontal drag (degrees)
    pub rotation_deg_per_px: f64,
    /// Horizontal displacement at which the apply/skip overlay appears (pixels)
    pub overlay_reveal_px: f64,
    /// Horizontal displacement at which the overlay reaches full opacity (pixels)
    pub overlay_full_px: f64,
    /// How far the card travels during the exit animation (pixels)
    pub exit_travel_px: f64,
    /// Card rotation at the end of the exit animation (degrees)
    pub exit_rotation_deg: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold_px: 100.0,
            exit_delay_ms: 300,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            rotation_deg_per_px: 0.1,
            overlay_reveal_px: 50.0,
            overlay_full_px: 100.0,
            exit_travel_px: 400.0,
            exit_rotation_deg: 20.0,
        }
    }
}

impl GestureConfig {
    /// Exit delay as a `Duration`
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.gesture.commit_threshold_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "commit_threshold_px must be > 0, got {}",
                self.gesture.commit_threshold_px
            )));
        }
        if self.gesture.exit_delay_ms > 10_000 {
            return Err(crate::Error::Config(format!(
                "exit_delay_ms must be <= 10000, got {}",
                self.gesture.exit_delay_ms
            )));
        }
        if self.visuals.overlay_reveal_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "overlay_reveal_px must be > 0, got {}",
                self.visuals.overlay_reveal_px
            )));
        }
        if self.visuals.overlay_full_px < self.visuals.overlay_reveal_px {
            return Err(crate::Error::Config(format!(
                "overlay_full_px must be >= overlay_reveal_px, got {} < {}",
                self.visuals.overlay_full_px, self.visuals.overlay_reveal_px
            )));
        }
        if !(0.0..=1.0).contains(&self.visuals.rotation_deg_per_px) {
            return Err(crate::Error::Config(format!(
                "rotation_deg_per_px must be in [0, 1], got {}",
                self.visuals.rotation_deg_per_px
            )));
        }
        if self.visuals.exit_travel_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "exit_travel_px must be > 0, got {}",
                self.visuals.exit_travel_px
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".swipehire").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
