//! Brickout - a fixed-tick Breakout simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, entity state, game rules)
//! - `config`: Tunable game parameters with JSON loading
//! - `input`: Key press/release tracking for paddle intent
//!
//! Rendering and frame scheduling live outside the crate; they read
//! [`sim::FrameSnapshot`] and call [`sim::tick`] once per frame.

pub mod config;
pub mod error;
pub mod input;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use input::{Key, KeyState};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Horizontal movement per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from paddle top to the bottom of the playfield
    pub const PADDLE_BOTTOM_GAP: f32 = 40.0;
    /// Multiplier from paddle-center offset to returned dx
    pub const PADDLE_STEERING: f32 = 0.1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_DX: f32 = 4.0;
    pub const BALL_START_DY: f32 = -4.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;

    /// Score awarded per destroyed brick
    pub const BRICK_REWARD: u64 = 10;
    pub const STARTING_LIVES: u8 = 3;
}
