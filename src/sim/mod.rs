//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick deltas only (no elapsed-time scaling)
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{ImpactAxis, Rect, circle_intersects_rect, side_of_impact};
pub use snapshot::{BrickView, FrameSnapshot};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GameState, Paddle, PaddleIntent};
pub use tick::{TickInput, autopilot_intent, tick};
