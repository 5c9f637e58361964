//! Game tuning parameters
//!
//! Every field defaults to the values in [`crate::consts`]; a JSON file only
//! needs to name the fields it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Fixed brick grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    /// Size of one brick
    pub width: f32,
    pub height: f32,
    /// Gap between neighbouring bricks
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl BrickLayout {
    /// Top-left corner of the brick at (row, column)
    pub fn cell_origin(&self, row: usize, column: usize) -> Vec2 {
        Vec2::new(
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }

    pub fn brick_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn brick_count(&self) -> usize {
        self.rows * self.columns
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels moved per tick
    pub paddle_speed: f32,
    /// Gap between the paddle top and the bottom edge
    pub paddle_bottom_gap: f32,
    /// dx returned per pixel of offset from the paddle center
    pub paddle_steering: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Velocity given to the ball on every reset
    pub ball_start_velocity: Vec2,

    // === Bricks and scoring ===
    pub bricks: BrickLayout,
    pub brick_reward: u64,
    pub starting_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_steering: PADDLE_STEERING,

            ball_radius: BALL_RADIUS,
            ball_start_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),

            bricks: BrickLayout::default(),
            brick_reward: BRICK_REWARD,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the geometric invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("bricks.width", self.bricks.width),
            ("bricks.height", self.bricks.height),
        ];
        for (field, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let offsets = [
            ("paddle_bottom_gap", self.paddle_bottom_gap),
            ("bricks.padding", self.bricks.padding),
            ("bricks.offset_top", self.bricks.offset_top),
            ("bricks.offset_left", self.bricks.offset_left),
        ];
        for (field, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.paddle_steering.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "paddle_steering",
                value: self.paddle_steering,
            });
        }

        let velocity = self.ball_start_velocity;
        if !velocity.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "ball_start_velocity",
                value: velocity.length(),
            });
        }
        // dy == 0 never reaches paddle, ceiling or floor
        if velocity.y == 0.0 {
            return Err(ConfigError::StalledBall { dx: velocity.x, dy: velocity.y });
        }

        if self.bricks.rows == 0 {
            return Err(ConfigError::Zero("bricks.rows"));
        }
        if self.bricks.columns == 0 {
            return Err(ConfigError::Zero("bricks.columns"));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Zero("starting_lives"));
        }

        if self.paddle_width > self.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                playfield: self.width,
            });
        }

        if self.paddle_bottom_gap >= self.height {
            return Err(ConfigError::PaddleOffField {
                gap: self.paddle_bottom_gap,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Playfield center, where the ball respawns
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Left edge of a centered paddle
    pub fn paddle_home_x(&self) -> f32 {
        (self.width - self.paddle_width) / 2.0
    }

    /// Fixed top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.height - self.paddle_bottom_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bricks.brick_count(), 40);
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert_eq!(config.paddle_home_x(), 340.0);
        assert_eq!(config.paddle_y(), 560.0);
    }

    #[test]
    fn test_cell_origin() {
        let layout = BrickLayout::default();
        assert_eq!(layout.cell_origin(0, 0), Vec2::new(35.0, 60.0));
        assert_eq!(layout.cell_origin(1, 2), Vec2::new(215.0, 90.0));
        assert_eq!(layout.cell_origin(4, 7), Vec2::new(665.0, 180.0));
    }

    #[test]
    fn test_partial_json_override() {
        let config = GameConfig::from_json(r#"{ "starting_lives": 5, "bricks": { "rows": 2 } }"#)
            .unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.bricks.rows, 2);
        assert_eq!(config.bricks.columns, BRICK_COLUMNS);
        assert_eq!(config.width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = GameConfig {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "ball_radius", .. })
        ));

        let config = GameConfig {
            height: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            starting_lives: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Zero("starting_lives"))));

        let config = GameConfig {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PaddleTooWide { .. })));

        let config = GameConfig {
            ball_start_velocity: Vec2::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::StalledBall { .. })));

        let config = GameConfig {
            ball_start_velocity: Vec2::new(4.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::StalledBall { .. })));

        let config = GameConfig {
            ball_start_velocity: Vec2::new(f32::INFINITY, -4.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "ball_start_velocity", .. })
        ));

        let config = GameConfig {
            paddle_steering: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "paddle_steering", .. })
        ));

        let config = GameConfig {
            paddle_bottom_gap: -100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "paddle_bottom_gap", .. })
        ));

        let config = GameConfig {
            paddle_bottom_gap: 600.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PaddleOffField { .. })));

        let mut config = GameConfig::default();
        config.bricks.padding = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "bricks.padding", .. })
        ));

        let mut config = GameConfig::default();
        config.bricks.offset_top = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "bricks.offset_top", .. })
        ));

        let mut config = GameConfig::default();
        config.bricks.offset_left = -35.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "bricks.offset_left", .. })
        ));
    }

    #[test]
    fn test_zero_dx_and_negative_steering_are_allowed() {
        let config = GameConfig {
            ball_start_velocity: Vec2::new(0.0, -4.0),
            paddle_steering: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/brickout.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
