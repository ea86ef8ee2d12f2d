//! Match state and core simulation types
//!
//! Everything the loop mutates lives in one `MatchState` - no process-wide
//! globals. All of it is serializable for snapshots and debugging.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::score::Scoreboard;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which player a paddle, point, or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opponent(&self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    /// Index into `MatchState::paddles`
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            PlayerSide::Left => 0,
            PlayerSide::Right => 1,
        }
    }
}

/// Current phase of the match loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Start prompt, waiting for the first serve
    Title,
    /// Active rally
    Playing,
    /// Brief pause after a point, entities already reset
    PointScored,
    /// A player took the game; waiting for restart confirmation
    GameOver,
    /// Quit requested - the loop exits at this phase
    Terminated,
}

/// Playfield dimensions, fixed for the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball - a square hit-box moving by its velocity once per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Scalar speed at spawn and after any wall bounce. Post-deflection the
    /// components are rescaled independently, so `vel.length()` is only
    /// approximately `speed`.
    pub speed: f32,
    /// Side length of the square hit-box
    pub size: f32,
    /// Where the ball respawns after every point
    pub spawn_pos: Vec2,
}

impl Ball {
    pub fn new(spawn_pos: Vec2, speed: f32, size: f32) -> Self {
        Self {
            pos: spawn_pos,
            vel: Vec2::new(speed, 0.0),
            speed,
            size,
            spawn_pos,
        }
    }

    /// Advance by the current velocity. Pure translation, no bounds checks.
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Mirror the vertical component (top/bottom wall bounce)
    pub fn bounce_off_wall(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Recompute both velocity components from where the paddle was struck.
    ///
    /// `factor` is the normalized deflection in [-1, 1]: negative above the
    /// paddle center, positive below. The horizontal direction always flips;
    /// the vertical component takes the factor's own sign, not the inverse
    /// of the current one.
    pub fn deflect_off_paddle(&mut self, factor: f32) {
        let out_dir = if self.vel.x > 0.0 { -1.0 } else { 1.0 };
        self.vel.x = out_dir * self.speed * (1.0 - factor.abs());
        self.vel.y = self.speed * factor;
    }

    /// Restore spawn position and the horizontal serve velocity
    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
        self.vel = Vec2::new(self.speed, 0.0);
    }

    /// Derived bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(self.size))
    }
}

/// A player's paddle - moves vertically only, clamped to the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub height: f32,
    pub width: f32,
    /// Vertical travel per tick while an input is held
    pub speed: f32,
    pub spawn_pos: Vec2,
}

impl Paddle {
    pub fn new(spawn_pos: Vec2, height: f32, speed: f32) -> Self {
        Self {
            pos: spawn_pos,
            height,
            width: height * PADDLE_WIDTH_RATIO,
            speed,
            spawn_pos,
        }
    }

    /// Apply a vertical move only if the paddle's box stays inside the
    /// playfield; out-of-bounds requests are rejected as no-ops. Returns
    /// whether the move applied.
    pub fn try_move(&mut self, delta: f32, field_height: f32) -> bool {
        let new_y = self.pos.y + delta;
        let half = self.height / 2.0;
        if new_y - half >= 0.0 && new_y + half <= field_height {
            self.pos.y = new_y;
            true
        } else {
            false
        }
    }

    /// Restore the spawn position
    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
    }

    /// Derived bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Complete match state, owned exclusively by the loop thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub playfield: Playfield,
    pub phase: MatchPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    /// Left paddle first, then right
    pub paddles: [Paddle; 2],
    pub score: Scoreboard,
    /// Sim-time of the last resolved paddle bounce; global to the match,
    /// not per-paddle
    pub last_paddle_hit_ms: Option<u64>,
    /// Ticks remaining in the `PointScored` pause
    pub pause_ticks: u32,
    /// Set once a player takes the game
    pub winner: Option<PlayerSide>,
    /// Lockout window between paddle bounces (from tuning)
    pub lockout_ms: u64,
    /// Full duration of the post-point pause (from tuning)
    pub point_pause_ticks: u32,
}

impl MatchState {
    pub fn new(playfield: Playfield, tuning: &Tuning) -> Self {
        let mid_y = playfield.height / 2.0;
        let left_spawn = Vec2::new(tuning.paddle_wall_offset, mid_y);
        let right_spawn = Vec2::new(playfield.width - tuning.paddle_wall_offset, mid_y);

        Self {
            playfield,
            phase: MatchPhase::Title,
            time_ticks: 0,
            ball: Ball::new(playfield.center(), tuning.ball_speed, tuning.ball_size),
            paddles: [
                Paddle::new(left_spawn, tuning.paddle_height, tuning.paddle_speed),
                Paddle::new(right_spawn, tuning.paddle_height, tuning.paddle_speed),
            ],
            score: Scoreboard::new(),
            last_paddle_hit_ms: None,
            pause_ticks: 0,
            winner: None,
            lockout_ms: tuning.collision_lockout_ms,
            point_pause_ticks: (tuning.point_pause_ms / TICK_INTERVAL_MS) as u32,
        }
    }

    /// Elapsed sim-time in milliseconds, derived from the tick counter
    #[inline]
    pub fn sim_time_ms(&self) -> u64 {
        self.time_ticks * TICK_INTERVAL_MS
    }

    pub fn paddle(&self, side: PlayerSide) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: PlayerSide) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Point-level reset: ball and paddles back to spawn, score untouched
    pub fn reset_positions(&mut self) {
        self.ball.reset();
        for paddle in &mut self.paddles {
            paddle.reset();
        }
    }

    /// Full-match restart back to the title prompt
    pub fn restart(&mut self) {
        self.score.reset();
        self.reset_positions();
        self.last_paddle_hit_ms = None;
        self.pause_ticks = 0;
        self.winner = None;
        self.phase = MatchPhase::Title;
    }
}
