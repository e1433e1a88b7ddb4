use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scroll::easing::EasingType;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Smooth-scroll controller settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable eased scrolling (false = every scroll is an instant jump)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Settle time for an eased glide, in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Easing function applied to glide progress
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Accept touch/drag deltas
    #[serde(default = "default_true")]
    pub allow_touch: bool,
    /// Multiplier applied to touch deltas
    #[serde(default = "default_touch_multiplier")]
    pub touch_multiplier: f64,
    /// Wrap past the document limit instead of clamping
    #[serde(default)]
    pub infinite: bool,
    /// Frame cadence the host drives the controller at (0 = host cannot
    /// schedule frames; controller initialization fails)
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_secs: default_duration_secs(),
            easing: default_easing(),
            allow_touch: default_true(),
            touch_multiplier: default_touch_multiplier(),
            infinite: false,
            animation_fps: default_animation_fps(),
        }
    }
}

/// Visibility-trigger settings shared by the page sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Intersection ratio required before a trigger fires
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Extra margin (px) below the viewport used to pre-trigger media and
    /// image loading before they scroll into view
    #[serde(default = "default_preload_margin")]
    pub preload_margin_px: f64,
    /// Bottom margin (px, negative shrinks the viewport) for lore section
    /// reveals, so a section fades in only once it is well inside the view
    #[serde(default = "default_lore_margin")]
    pub lore_margin_px: f64,
    /// Scroll offset past which the back-to-top affordance appears
    #[serde(default = "default_back_to_top")]
    pub back_to_top_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            preload_margin_px: default_preload_margin(),
            lore_margin_px: default_lore_margin(),
            back_to_top_px: default_back_to_top(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (input poll timeout)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_secs() -> f64 {
    1.2
}

fn default_easing() -> EasingType {
    EasingType::EaseOut
}

fn default_touch_multiplier() -> f64 {
    1.5
}

fn default_animation_fps() -> u16 {
    60
}

fn default_threshold() -> f64 {
    0.1
}

fn default_preload_margin() -> f64 {
    200.0
}

fn default_lore_margin() -> f64 {
    -100.0
}

fn default_back_to_top() -> f64 {
    300.0
}

fn default_tick_rate() -> u64 {
    16
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glidepage/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glidepage")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert!((config.duration_secs - 1.2).abs() < 1e-9);
        assert_eq!(config.easing, EasingType::EaseOut);
        assert!((config.touch_multiplier - 1.5).abs() < 1e-9);
        assert!(!config.infinite);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            duration_secs = 0.4

            [reveal]
            threshold = 0.25
            "#,
        )
        .unwrap();
        assert!((config.scroll.duration_secs - 0.4).abs() < 1e-9);
        assert!(config.scroll.smooth_enabled);
        assert!((config.reveal.threshold - 0.25).abs() < 1e-9);
        assert!((config.reveal.preload_margin_px - 200.0).abs() < 1e-9);
        assert!((config.reveal.lore_margin_px + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.scroll.easing, config.scroll.easing);
        assert_eq!(back.ui.tick_rate_ms, config.ui.tick_rate_ms);
    }
}
