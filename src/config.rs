/*
 * Fish Configuration Module
 *
 * This module defines the FishConfig struct holding the construction
 * parameters of a single fish, and validates them before the fish and its
 * segment chain are built. Malformed values are rejected here with a
 * ConfigError so no NaN can propagate through the chain geometry.
 */

use nannou::prelude::*;
use thiserror::Error;

// Errors produced when a fish is built from malformed parameters
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("segment count must be at least 1")]
    ZeroSegments,
    #[error("position must be finite, got ({x}, {y})")]
    NonFinitePosition { x: f32, y: f32 },
    #[error("wiggle factor must be finite and non-negative, got {0}")]
    InvalidWiggleFactor(f32),
}

// Construction parameters for a single fish
#[derive(Debug, Clone)]
pub struct FishConfig {
    pub position: Point2,
    pub length: f32,
    pub width: f32,
    pub num_segments: usize,
    pub max_movement_force: f32,
    pub max_movement_speed: f32,
    pub max_avoidance_force: f32,
    pub max_avoidance_speed: f32,
    pub wiggle_factor: f32,
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            position: pt2(0.0, 0.0),
            length: 100.0,
            width: 30.0,
            num_segments: 10,
            max_movement_force: 0.1,
            max_movement_speed: 4.0,
            max_avoidance_force: 0.1,
            max_avoidance_speed: 4.0,
            wiggle_factor: 1.0,
        }
    }
}

impl FishConfig {
    // Check every field before any geometry is derived from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.x.is_finite() || !self.position.y.is_finite() {
            return Err(ConfigError::NonFinitePosition {
                x: self.position.x,
                y: self.position.y,
            });
        }

        check_positive("length", self.length)?;
        check_positive("width", self.width)?;

        if self.num_segments == 0 {
            return Err(ConfigError::ZeroSegments);
        }

        check_positive("max movement force", self.max_movement_force)?;
        check_positive("max movement speed", self.max_movement_speed)?;
        check_positive("max avoidance force", self.max_avoidance_force)?;
        check_positive("max avoidance speed", self.max_avoidance_speed)?;

        if !self.wiggle_factor.is_finite() || self.wiggle_factor < 0.0 {
            return Err(ConfigError::InvalidWiggleFactor(self.wiggle_factor));
        }

        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FishConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_length() {
        let config = FishConfig {
            length: 0.0,
            ..FishConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "length",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_width() {
        let config = FishConfig {
            width: -3.0,
            ..FishConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_segments() {
        let config = FishConfig {
            num_segments: 0,
            ..FishConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSegments));
    }

    #[test]
    fn rejects_non_finite_position() {
        let config = FishConfig {
            position: pt2(f32::NAN, 0.0),
            ..FishConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_speed_limit() {
        let config = FishConfig {
            max_movement_speed: f32::INFINITY,
            ..FishConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_wiggle_factor() {
        let config = FishConfig {
            wiggle_factor: -0.5,
            ..FishConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWiggleFactor(-0.5)));
    }

    #[test]
    fn zero_wiggle_factor_is_allowed() {
        let config = FishConfig {
            wiggle_factor: 0.0,
            ..FishConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
