//! Game Configuration
//!
//! Human-readable tuning values, loadable from JSON.
//! The tick never reads floats: [`GameConfig::tuning`] converts everything
//! to fixed-point once, up front.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fixed::{to_fixed, Fixed};

/// Largest accepted arena half-extent.
///
/// Keeps every coordinate, and every difference between two coordinates,
/// far inside Q16.16 range.
pub const MAX_ARENA_BOUND: f64 = 1000.0;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config document is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the game loop cannot run with.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Session configuration.
///
/// Defaults: 24-unit arena, 8 obstacles and
/// 10 coins scattered over a 10-unit spawn square, 0.15 units per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Half-extent of the square the avatar is clamped to
    pub arena_bound: f64,
    /// Half-extent of the square obstacles and coins are placed in
    pub spawn_half_extent: f64,
    /// Number of obstacles placed at startup
    pub obstacle_count: u32,
    /// Number of coins placed at startup
    pub coin_count: u32,
    /// Displacement per tick per held direction
    pub avatar_speed: f64,
    /// Avatar is rejected from moving closer than this to an obstacle
    pub collision_radius: f64,
    /// Coins closer than this to the avatar are collected
    pub collection_radius: f64,
    /// Cosmetic coin spin per tick (radians)
    pub coin_spin_step: f64,
    /// Scale diagonal movement down to `avatar_speed`.
    ///
    /// Off by default: holding two directions moves ~1.41x faster,
    /// which is the default feel.
    pub normalize_diagonal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_bound: 24.0,
            spawn_half_extent: 10.0,
            obstacle_count: 8,
            coin_count: 10,
            avatar_speed: 0.15,
            collision_radius: 1.0,
            collection_radius: 1.0,
            coin_spin_step: 0.05,
            normalize_diagonal: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field is usable by the game loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_bound", self.arena_bound)?;
        positive("spawn_half_extent", self.spawn_half_extent)?;
        positive("avatar_speed", self.avatar_speed)?;
        positive("collision_radius", self.collision_radius)?;
        positive("collection_radius", self.collection_radius)?;

        if !self.coin_spin_step.is_finite() {
            return Err(invalid("coin_spin_step", "must be finite"));
        }
        if self.arena_bound > MAX_ARENA_BOUND {
            return Err(invalid(
                "arena_bound",
                format!("must not exceed {MAX_ARENA_BOUND}"),
            ));
        }
        if self.spawn_half_extent > self.arena_bound {
            return Err(invalid(
                "spawn_half_extent",
                format!("must not exceed arena_bound ({})", self.arena_bound),
            ));
        }
        if self.avatar_speed > self.arena_bound {
            return Err(invalid("avatar_speed", "must not exceed arena_bound"));
        }
        if self.collision_radius > MAX_ARENA_BOUND || self.collection_radius > MAX_ARENA_BOUND {
            return Err(invalid(
                "collision_radius",
                format!("radii must not exceed {MAX_ARENA_BOUND}"),
            ));
        }
        if self.coin_count == 0 {
            return Err(invalid("coin_count", "at least one coin is required to win"));
        }

        Ok(())
    }

    /// Convert to the fixed-point values the tick runs on.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            arena_bound: to_fixed(self.arena_bound),
            spawn_half_extent: to_fixed(self.spawn_half_extent),
            avatar_speed: to_fixed(self.avatar_speed),
            collision_radius: to_fixed(self.collision_radius),
            collection_radius: to_fixed(self.collection_radius),
            coin_spin_step: to_fixed(self.coin_spin_step),
            normalize_diagonal: self.normalize_diagonal,
        }
    }
}

/// Fixed-point view of a [`GameConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    /// Avatar clamp half-extent
    pub arena_bound: Fixed,
    /// Startup placement half-extent
    pub spawn_half_extent: Fixed,
    /// Per-tick displacement
    pub avatar_speed: Fixed,
    /// Obstacle rejection radius
    pub collision_radius: Fixed,
    /// Coin pickup radius
    pub collection_radius: Fixed,
    /// Per-tick coin spin
    pub coin_spin_step: Fixed,
    /// Normalize two-axis movement
    pub normalize_diagonal: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        GameConfig::default().tuning()
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{
        ARENA_BOUND, AVATAR_SPEED, COIN_SPIN_STEP, COLLECTION_RADIUS, COLLISION_RADIUS,
        SPAWN_HALF_EXTENT,
    };

    #[test]
    fn test_default_tuning_matches_constants() {
        let tuning = GameConfig::default().tuning();
        assert_eq!(tuning.arena_bound, ARENA_BOUND);
        assert_eq!(tuning.spawn_half_extent, SPAWN_HALF_EXTENT);
        assert_eq!(tuning.avatar_speed, AVATAR_SPEED);
        assert_eq!(tuning.collision_radius, COLLISION_RADIUS);
        assert_eq!(tuning.collection_radius, COLLECTION_RADIUS);
        assert_eq!(tuning.coin_spin_step, COIN_SPIN_STEP);
        assert!(!tuning.normalize_diagonal);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "coin_count": 3 }"#).unwrap();
        assert_eq!(config.coin_count, 3);
        assert_eq!(config.obstacle_count, 8);
        assert_eq!(config.arena_bound, 24.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            normalize_diagonal: true,
            ..GameConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_json_str(r#"{ "avatar_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "avatar_speed", .. }));

        let err = GameConfig::from_json_str(r#"{ "spawn_half_extent": 30.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "spawn_half_extent", .. }));

        let err = GameConfig::from_json_str(r#"{ "coin_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "coin_count", .. }));

        let err = GameConfig::from_json_str(r#"{ "arena_bound": 5000.0, "spawn_half_extent": 1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "arena_bound", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/coin-arena.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
