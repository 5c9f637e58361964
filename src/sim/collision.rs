//! Collision detection for the ball against walls, paddle and bricks
//!
//! Every test here is a linear comparison on bounding extents: the ball is
//! treated as its bounding box, which is also what the paddle and brick
//! checks expect. No function mutates anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

/// Which velocity component a brick impact reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactAxis {
    /// Side hit: negate dx
    Horizontal,
    /// Top/bottom hit (and the default for corners): negate dy
    Vertical,
}

/// True if the circle's bounding extent overlaps the rectangle on both axes
///
/// Touching edges do not count as overlap.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let max = rect.max();
    center.x + radius > rect.min.x
        && center.x - radius < max.x
        && center.y + radius > rect.min.y
        && center.y - radius < max.y
}

/// Classify an impact from the ball position before this tick's move
///
/// A side hit requires the previous circle to lie entirely left or right of
/// the rectangle; anything else, including diagonal corner approaches, is
/// vertical.
pub fn side_of_impact(prev_center: Vec2, radius: f32, rect: &Rect) -> ImpactAxis {
    let was_left = prev_center.x + radius <= rect.min.x;
    let was_right = prev_center.x - radius >= rect.max().x;
    if was_left || was_right {
        ImpactAxis::Horizontal
    } else {
        ImpactAxis::Vertical
    }
}

/// Ball extends past the left or right wall
#[inline]
pub fn hits_side_wall(center: Vec2, radius: f32, width: f32) -> bool {
    center.x + radius > width || center.x - radius < 0.0
}

/// Ball extends past the ceiling
#[inline]
pub fn hits_ceiling(center: Vec2, radius: f32) -> bool {
    center.y - radius < 0.0
}

/// Ball has fallen completely past the bottom edge
#[inline]
pub fn below_floor(center: Vec2, radius: f32, height: f32) -> bool {
    center.y - radius > height
}

/// Ball is descending onto the paddle's top edge within its horizontal span
pub fn paddle_contact(center: Vec2, radius: f32, velocity: Vec2, paddle: &Rect) -> bool {
    center.y + radius >= paddle.min.y
        && center.x >= paddle.min.x
        && center.x <= paddle.max().x
        && velocity.y > 0.0
}

/// Returned dx after a paddle hit: proportional to the offset from the center
#[inline]
pub fn paddle_steering(ball_x: f32, paddle_center_x: f32, factor: f32) -> f32 {
    (ball_x - paddle_center_x) * factor
}
