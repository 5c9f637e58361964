//! Brickout headless driver
//!
//! Runs the simulation in demo mode for a fixed number of ticks and prints
//! the final frame snapshot as JSON.
//!
//! Usage: `brickout [config.json] [ticks]`

use std::process::ExitCode;

use brickout::GameConfig;
use brickout::sim::{GameEvent, GameState, TickInput, tick};

/// Ticks to run when none are given (one minute at 60 Hz)
const DEFAULT_TICKS: u64 = 60 * 60;

/// Running totals over a session
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    bricks: u64,
    paddle_hits: u64,
    lives_lost: u64,
    levels: u64,
}

impl Tally {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BrickDestroyed { .. } => self.bricks += 1,
                GameEvent::PaddleHit { .. } => self.paddle_hits += 1,
                GameEvent::LifeLost { .. } => self.lives_lost += 1,
                GameEvent::LevelCleared => self.levels += 1,
                GameEvent::GameOver { .. } | GameEvent::WallBounce | GameEvent::CeilingBounce => {}
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Brickout (headless) starting...");

    let mut config_path = None;
    let mut ticks = DEFAULT_TICKS;
    for arg in std::env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(n) => ticks = n,
            Err(_) => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut state = GameState::new(config);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    let mut tally = Tally::default();

    for _ in 0..ticks {
        tick(&mut state, &input);
        tally.record(&state.events);
    }

    log::info!(
        "Ran {} ticks, {} games played: {:?}",
        state.time_ticks,
        state.games_played,
        tally
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_events() {
        let mut tally = Tally::default();
        tally.record(&[
            GameEvent::WallBounce,
            GameEvent::BrickDestroyed { row: 0, column: 0 },
            GameEvent::BrickDestroyed { row: 0, column: 1 },
            GameEvent::LevelCleared,
        ]);
        tally.record(&[
            GameEvent::PaddleHit { offset: 3.0 },
            GameEvent::LifeLost { lives_left: 0 },
            GameEvent::GameOver { final_score: 20 },
        ]);
        assert_eq!(
            tally,
            Tally {
                bricks: 2,
                paddle_hits: 1,
                lives_lost: 1,
                levels: 1,
            }
        );
    }
}
