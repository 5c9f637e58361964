//! Game state and core simulation types
//!
//! A single [`GameState`] owns everything a running game needs. It is
//! mutated in place by [`super::tick`] and the rules in [`super::rules`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::{BrickLayout, GameConfig};
use crate::error::ConfigError;

/// Requested paddle movement for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Left,
    #[default]
    None,
    Right,
}

impl PaddleIntent {
    /// Movement direction as -1, 0 or +1
    pub fn direction(self) -> i8 {
        match self {
            PaddleIntent::Left => -1,
            PaddleIntent::None => 0,
            PaddleIntent::Right => 1,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub speed: f32,
    /// Direction applied on the last tick
    pub dir: PaddleIntent,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.paddle_home_x(), config.paddle_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            dir: PaddleIntent::None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Move one step in the given direction, staying inside [0, width - paddle width]
    ///
    /// The edge check runs before the move, as in the classic game; the
    /// final clamp only matters when `speed` does not evenly divide the
    /// distance to a wall.
    pub fn apply_intent(&mut self, intent: PaddleIntent, playfield_width: f32) {
        self.dir = intent;
        let max_x = playfield_width - self.size.x;
        match intent {
            PaddleIntent::Right if self.pos.x + self.size.x < playfield_width => {
                self.pos.x = (self.pos.x + self.speed).min(max_x);
            }
            PaddleIntent::Left if self.pos.x > 0.0 => {
                self.pos.x = (self.pos.x - self.speed).max(0.0);
            }
            _ => {}
        }
    }

    /// Return to the horizontal center of the playfield
    pub fn recenter(&mut self, playfield_width: f32) {
        self.pos.x = (playfield_width - self.size.x) / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.center(),
            vel: config.ball_start_velocity,
            radius: config.ball_radius,
        }
    }

    /// Respawn at the playfield center with the configured launch velocity
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = config.center();
        self.vel = config.ball_start_velocity;
    }
}

/// A single brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub column: usize,
    /// Cached top-left corner; stale while the brick is hidden
    pub pos: Vec2,
    pub visible: bool,
}

/// Fixed-shape grid of bricks, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    layout: BrickLayout,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: BrickLayout) -> Self {
        let bricks = (0..layout.rows)
            .flat_map(|row| (0..layout.columns).map(move |column| (row, column)))
            .map(|(row, column)| Brick {
                row,
                column,
                pos: layout.cell_origin(row, column),
                visible: true,
            })
            .collect();
        Self { layout, bricks }
    }

    /// Layout the grid was built from; fixed for the grid's lifetime
    pub fn layout(&self) -> BrickLayout {
        self.layout
    }

    /// Recompute cached positions of visible bricks from the layout
    pub fn refresh_positions(&mut self) {
        let layout = self.layout;
        for brick in self.bricks.iter_mut().filter(|b| b.visible) {
            brick.pos = layout.cell_origin(brick.row, brick.column);
        }
    }

    /// Collision rectangle of a brick (only meaningful while it is visible)
    pub fn rect(&self, brick: &Brick) -> Rect {
        Rect::new(brick.pos, self.layout.brick_size())
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row >= self.layout.rows || column >= self.layout.columns {
            return None;
        }
        self.bricks.get(row * self.layout.columns + column)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Brick> {
        if row >= self.layout.rows || column >= self.layout.columns {
            return None;
        }
        self.bricks.get_mut(row * self.layout.columns + column)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// True once every brick has been destroyed
    pub fn all_cleared(&self) -> bool {
        !self.bricks.iter().any(|b| b.visible)
    }

    /// Make every brick visible again
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    CeilingBounce,
    /// `offset` is the ball's distance from the paddle center
    PaddleHit { offset: f32 },
    BrickDestroyed { row: usize, column: usize },
    LevelCleared,
    LifeLost { lives_left: u8 },
    GameOver { final_score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Level clears since the last game over
    pub levels_cleared: u32,
    /// Games ended (lost or restarted) since the session started
    pub games_played: u32,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game from a config that is already known to be valid
    pub fn new(config: GameConfig) -> Self {
        Self {
            paddle: Paddle::new(&config),
            ball: Ball::new(&config),
            bricks: BrickGrid::new(config.bricks),
            score: 0,
            lives: config.starting_lives,
            time_ticks: 0,
            levels_cleared: 0,
            games_played: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Validate `config` and create a new game from it
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::default();
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.bricks.visible_count(), 40);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, -4.0));
        assert_eq!(state.paddle.pos, Vec2::new(340.0, 560.0));
        assert!(state.ball.radius > 0.0);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = GameConfig {
            width: -1.0,
            ..Default::default()
        };
        assert!(GameState::with_config(config).is_err());
    }

    #[test]
    fn test_grid_layout_comes_from_config() {
        let mut config = GameConfig::default();
        config.bricks.rows = 2;
        config.bricks.columns = 3;
        let state = GameState::new(config);
        assert_eq!(state.bricks.layout(), state.config.bricks);
        assert_eq!(state.bricks.len(), 6);
        assert!(state.bricks.get(1, 2).is_some());
        assert!(state.bricks.get(2, 0).is_none());
    }

    #[test]
    fn test_grid_is_row_major() {
        let grid = BrickGrid::new(BrickLayout::default());
        let brick = grid.get(2, 3).unwrap();
        assert_eq!((brick.row, brick.column), (2, 3));
        assert_eq!(brick.pos, Vec2::new(305.0, 120.0));
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 8).is_none());
    }

    #[test]
    fn test_hidden_bricks_keep_stale_positions() {
        let mut grid = BrickGrid::new(BrickLayout::default());
        let brick = grid.get_mut(0, 0).unwrap();
        brick.visible = false;
        brick.pos = Vec2::new(-1.0, -1.0);

        grid.refresh_positions();
        assert_eq!(grid.get(0, 0).unwrap().pos, Vec2::new(-1.0, -1.0));

        grid.reset();
        grid.refresh_positions();
        assert_eq!(grid.get(0, 0).unwrap().pos, Vec2::new(35.0, 60.0));
    }

    #[test]
    fn test_all_cleared() {
        let mut grid = BrickGrid::new(BrickLayout::default());
        assert!(!grid.all_cleared());
        for brick in grid.iter_mut() {
            brick.visible = false;
        }
        assert!(grid.all_cleared());
        assert_eq!(grid.visible_count(), 0);
        grid.reset();
        assert_eq!(grid.visible_count(), 40);
    }

    #[test]
    fn test_paddle_moves_and_stops_at_walls() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);

        paddle.apply_intent(PaddleIntent::Right, config.width);
        assert_eq!(paddle.pos.x, 348.0);
        assert_eq!(paddle.dir.direction(), 1);

        paddle.apply_intent(PaddleIntent::None, config.width);
        assert_eq!(paddle.pos.x, 348.0);

        // 340 is not a multiple of 8: the left wall clamps the last step
        paddle.recenter(config.width);
        for _ in 0..100 {
            paddle.apply_intent(PaddleIntent::Left, config.width);
        }
        assert_eq!(paddle.pos.x, 0.0);

        for _ in 0..100 {
            paddle.apply_intent(PaddleIntent::Right, config.width);
        }
        assert_eq!(paddle.pos.x, config.width - config.paddle_width);
    }

    #[test]
    fn test_ball_reset() {
        let config = GameConfig::default();
        let mut ball = Ball::new(&config);
        ball.pos = Vec2::new(10.0, 700.0);
        ball.vel = Vec2::new(-3.0, 4.0);
        ball.reset(&config);
        assert_eq!(ball.pos, config.center());
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }
}
