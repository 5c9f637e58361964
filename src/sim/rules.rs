//! Level clear, life loss and game over
//!
//! These are transient effects applied while playing. None of them stops
//! the simulation; the next tick continues from the reset state.

use super::state::{GameEvent, GameState};

/// Put the ball back at the center with its launch velocity and recenter the paddle
pub fn reset_ball(state: &mut GameState) {
    state.ball.reset(&state.config);
    state.paddle.recenter(state.config.width);
}

/// True when no brick is left standing
pub fn all_bricks_cleared(state: &GameState) -> bool {
    state.bricks.all_cleared()
}

/// Restore the grid and serve again; score and lives carry over
pub fn clear_level(state: &mut GameState) {
    state.bricks.reset();
    reset_ball(state);
    state.levels_cleared += 1;
    state.events.push(GameEvent::LevelCleared);
    log::info!(
        "Level cleared (#{}) - score {}, lives {}",
        state.levels_cleared,
        state.score,
        state.lives
    );
}

/// Clear the level if the last brick just fell. Returns true if it did.
pub fn check_level_clear(state: &mut GameState) -> bool {
    if all_bricks_cleared(state) {
        clear_level(state);
        true
    } else {
        false
    }
}

/// The ball fell past the floor
///
/// Running out of lives restarts the game in place: lives, score and the
/// grid are restored before the ball is served again.
pub fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });
    log::debug!("Life lost, {} left", state.lives);

    if state.lives == 0 {
        let final_score = state.score;
        state.lives = state.config.starting_lives;
        state.score = 0;
        state.levels_cleared = 0;
        state.games_played += 1;
        state.bricks.reset();
        state.events.push(GameEvent::GameOver { final_score });
        log::info!("Game over - final score {}", final_score);
    }

    reset_ball(state);
}

/// Start over from a fresh game with the same config
///
/// An abandoned game counts as played; the counter itself survives the reset.
pub fn new_game(state: &mut GameState) {
    let games_played = state.games_played + 1;
    *state = GameState::new(state.config.clone());
    state.games_played = games_played;
    log::info!("New game started");
}
