//! Fixed-tick simulation step
//!
//! One call to [`tick`] advances the world by exactly one frame. Ball and
//! paddle move a fixed distance per call, so game speed follows the rate at
//! which the caller ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    ImpactAxis, below_floor, circle_intersects_rect, hits_ceiling, hits_side_wall, paddle_contact,
    paddle_steering, side_of_impact,
};
use super::rules;
use super::state::{GameEvent, GameState, PaddleIntent};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Paddle movement requested by the player
    pub intent: PaddleIntent,
    /// Idle/demo mode - the paddle follows the ball and `intent` is ignored
    pub autopilot: bool,
}

impl TickInput {
    pub fn new(intent: PaddleIntent) -> Self {
        Self {
            intent,
            autopilot: false,
        }
    }
}

/// Advance the game state by one tick
///
/// Order is fixed: paddle, ball integration, walls, paddle bounce, bricks,
/// floor. Events raised along the way are left in `state.events`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let intent = if input.autopilot {
        autopilot_intent(state)
    } else {
        input.intent
    };

    // Paddle
    state.paddle.apply_intent(intent, state.config.width);

    // Ball integration
    let prev_pos = state.ball.pos;
    state.ball.pos += state.ball.vel;

    // Walls (no floor bounce)
    let radius = state.ball.radius;
    if hits_side_wall(state.ball.pos, radius, state.config.width) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }
    if hits_ceiling(state.ball.pos, radius) {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::CeilingBounce);
    }

    // Paddle bounce; dy > 0 guard keeps this to one hit per approach
    if paddle_contact(state.ball.pos, radius, state.ball.vel, &state.paddle.rect()) {
        let center_x = state.paddle.center_x();
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.vel.x = paddle_steering(state.ball.pos.x, center_x, state.config.paddle_steering);
        let offset = state.ball.pos.x - center_x;
        state.events.push(GameEvent::PaddleHit { offset });
        log::debug!("Paddle hit at offset {:.1}, dx now {:.2}", offset, state.ball.vel.x);
    }

    resolve_brick_collisions(state, prev_pos);

    if below_floor(state.ball.pos, state.ball.radius, state.config.height) {
        rules::lose_life(state);
    }
}

/// Destroy every visible brick the ball overlaps
///
/// Each overlap reflects the ball on its own, so touching two bricks in one
/// tick flips the same component twice.
fn resolve_brick_collisions(state: &mut GameState, prev_pos: Vec2) {
    state.bricks.refresh_positions();

    let layout = state.bricks.layout();
    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let rect = match state.bricks.get(row, column) {
                Some(brick) if brick.visible => state.bricks.rect(brick),
                _ => continue,
            };
            if !circle_intersects_rect(state.ball.pos, state.ball.radius, &rect) {
                continue;
            }

            match side_of_impact(prev_pos, state.ball.radius, &rect) {
                ImpactAxis::Horizontal => state.ball.vel.x = -state.ball.vel.x,
                ImpactAxis::Vertical => state.ball.vel.y = -state.ball.vel.y,
            }

            if let Some(brick) = state.bricks.get_mut(row, column) {
                brick.visible = false;
            }
            state.score = state.score.saturating_add(state.config.brick_reward);
            state.events.push(GameEvent::BrickDestroyed { row, column });
            log::debug!("Brick ({}, {}) destroyed, score {}", row, column, state.score);

            rules::check_level_clear(state);
        }
    }
}

/// Demo-mode paddle control: follow the ball with a slowly drifting aim point
pub fn autopilot_intent(state: &GameState) -> PaddleIntent {
    // Drift the aim point so the ball does not settle into a vertical loop
    let time_factor = state.time_ticks as f32 * 0.01;
    let aim = time_factor.sin() * state.paddle.size.x * 0.3;

    let target = state.ball.pos.x - aim;
    let center = state.paddle.center_x();
    let dead_zone = state.paddle.speed;

    if target > center + dead_zone {
        PaddleIntent::Right
    } else if target < center - dead_zone {
        PaddleIntent::Left
    } else {
        PaddleIntent::None
    }
}
