//! Read-only view of a frame for renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::GameState;

/// A visible brick as a renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    pub paddle: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    /// Only bricks still standing, row-major
    pub bricks: Vec<BrickView>,
    pub score: u64,
    pub lives: u8,
    pub tick: u64,
}

impl GameState {
    /// Capture the drawable parts of the current state
    pub fn snapshot(&self) -> FrameSnapshot {
        let bricks = self
            .bricks
            .visible()
            .map(|brick| BrickView {
                row: brick.row,
                column: brick.column,
                rect: self.bricks.rect(brick),
            })
            .collect();

        FrameSnapshot {
            width: self.config.width,
            height: self.config.height,
            paddle: self.paddle.rect(),
            ball_center: self.ball.pos,
            ball_radius: self.ball.radius,
            bricks,
            score: self.score,
            lives: self.lives,
            tick: self.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_skips_hidden_bricks() {
        let mut state = GameState::default();
        state.bricks.get_mut(0, 1).unwrap().visible = false;
        state.score = 30;

        let snap = state.snapshot();
        assert_eq!(snap.bricks.len(), 39);
        assert!(!snap.bricks.iter().any(|b| b.row == 0 && b.column == 1));
        assert_eq!(snap.bricks[0].rect.min, Vec2::new(35.0, 60.0));
        assert_eq!(snap.paddle.size, Vec2::new(120.0, 15.0));
        assert_eq!(snap.ball_center, Vec2::new(400.0, 300.0));
        assert_eq!(snap.score, 30);
        assert_eq!(snap.lives, 3);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameState::default().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
