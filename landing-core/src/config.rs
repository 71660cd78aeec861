//! Configuration for the landing page behaviors.
//!
//! The page ships with `landing.toml` compiled in. Every section and key is
//! optional; anything missing keeps its default.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../landing.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub particles: ParticleConfig,
    pub rotator: RotatorConfig,
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
}

/// Hero background particle field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles in the field; the whole collection is rebuilt on resize.
    pub count: usize,
    /// Upper bound for the device pixel ratio used for the backing buffer.
    pub max_pixel_ratio: f64,
    /// Padding around the surface before a particle is respawned.
    pub edge_margin: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Vertical velocity is drawn from `[-vertical_speed, vertical_speed)`.
    pub vertical_speed: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
    /// Candidate hues, picked uniformly per particle.
    pub hues: Vec<u16>,
    /// Disc radius relative to the particle radius.
    pub glow_scale: f64,
    /// Outer radius of the radial gradient.
    pub gradient_radius: f64,
    pub grid_spacing: f64,
    pub grid_alpha: f64,
    pub grid_color: String,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 70,
            max_pixel_ratio: 1.8,
            edge_margin: 20.0,
            speed_min: 0.2,
            speed_max: 0.7,
            vertical_speed: 0.25,
            radius_min: 0.6,
            radius_max: 1.8,
            opacity_min: 0.25,
            opacity_max: 0.8,
            hues: vec![188, 215],
            glow_scale: 2.4,
            gradient_radius: 24.0,
            grid_spacing: 48.0,
            grid_alpha: 0.07,
            grid_color: "#1b2640".to_string(),
            saturation: 100,
            lightness: 60,
        }
    }
}

/// Testimonial auto-advance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RotatorConfig {
    pub interval_ms: u64,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl RotatorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Scroll-triggered entrance animations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible intersection ratio at which an element is shown.
    pub threshold: f64,
    pub selector: String,
    pub shown_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.18,
            selector: ".reveal, .reveal-left, .reveal-right".to_string(),
            shown_class: "show".to_string(),
        }
    }
}

/// Header and mobile menu display states
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub visible_class: String,
    pub open_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            visible_class: "visible".to_string(),
            open_class: "open".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LandingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config compiled into the binary.
    /// Returns default config if it is invalid.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => {
                debug!(count = config.particles.count, "loaded embedded landing config");
                config
            }
            Err(e) => {
                warn!("falling back to default landing config: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        if p.count == 0 {
            return Err(ConfigError::invalid("particles.count", "must be at least 1"));
        }
        if p.max_pixel_ratio.is_nan() || p.max_pixel_ratio < 1.0 {
            return Err(ConfigError::invalid(
                "particles.max_pixel_ratio",
                format!("{} is below 1.0", p.max_pixel_ratio),
            ));
        }
        check_range("particles.speed", p.speed_min, p.speed_max)?;
        check_range("particles.radius", p.radius_min, p.radius_max)?;
        check_range("particles.opacity", p.opacity_min, p.opacity_max)?;
        if p.vertical_speed.is_nan() || p.vertical_speed < 0.0 {
            return Err(ConfigError::invalid(
                "particles.vertical_speed",
                "must not be negative",
            ));
        }
        if p.hues.is_empty() {
            return Err(ConfigError::invalid("particles.hues", "needs at least one hue"));
        }
        if p.grid_spacing.is_nan() || p.grid_spacing <= 0.0 {
            return Err(ConfigError::invalid("particles.grid_spacing", "must be positive"));
        }
        if self.rotator.interval_ms == 0 {
            return Err(ConfigError::invalid("rotator.interval_ms", "must be positive"));
        }
        let t = self.reveal.threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::invalid(
                "reveal.threshold",
                format!("{t} is outside (0, 1]"),
            ));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("min {min} must be below max {max}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = LandingConfig::default();
        assert_eq!(config.particles.count, 70);
        assert_eq!(config.particles.hues, vec![188, 215]);
        assert_eq!(config.rotator.interval(), Duration::from_millis(5000));
        assert_eq!(config.reveal.threshold, 0.18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let embedded = LandingConfig::from_toml_str(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(embedded, LandingConfig::default());
        assert_eq!(LandingConfig::load_embedded(), LandingConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LandingConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LandingConfig::from_toml_str(
            r#"
[particles]
count = 12

[rotator]
interval_ms = 800
"#,
        )
        .expect("partial config");
        assert_eq!(config.particles.count, 12);
        assert_eq!(config.particles.max_pixel_ratio, 1.8);
        assert_eq!(config.rotator.interval_ms, 800);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_rejects_zero_particles() {
        let err = LandingConfig::from_toml_str("[particles]\ncount = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "particles.count",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let err =
            LandingConfig::from_toml_str("[particles]\nradius_min = 2.0\nradius_max = 1.0\n")
                .unwrap_err();
        assert!(err.to_string().contains("particles.radius"));
    }

    #[test]
    fn test_rejects_threshold_outside_unit_interval() {
        let err = LandingConfig::from_toml_str("[reveal]\nthreshold = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("reveal.threshold"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = LandingConfig::from_toml_str("[particles\ncount = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
