//! Rally Pong - a two-player Pong with tennis scoring
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, match state)
//! - `platform`: Input and clock seams the windowing shell plugs into
//! - `render`: Draw-command composition and the renderer seam
//! - `runner`: Fixed-interval loop wiring input -> tick -> render
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod render;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use runner::MatchRunner;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 100;
    /// Pacing interval between ticks
    pub const TICK_INTERVAL_MS: u64 = 10;

    /// Playfield dimensions (pixels, supplied once at startup)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults - square hit-box, velocity in pixels per tick
    pub const BALL_SIZE: f32 = 12.0;
    pub const BALL_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Paddle width as a fraction of its height
    pub const PADDLE_WIDTH_RATIO: f32 = 0.15;
    /// Vertical travel per tick while a key is held
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Distance from each side wall to its paddle's center
    pub const PADDLE_WALL_OFFSET: f32 = 30.0;

    /// Minimum sim-time between two resolved paddle bounces
    pub const COLLISION_LOCKOUT_MS: u64 = 100;
    /// Pause after a point before play resumes
    pub const POINT_PAUSE_MS: u64 = 1000;

    /// Denominator scale for the deflection factor: the ball-to-paddle
    /// offset normalizes against 1.5x the paddle half-height, so an edge
    /// hit lands near +-0.67 instead of +-1, leaving headroom before the
    /// extreme angle.
    pub const DEFLECT_HEADROOM: f32 = 1.5;
}
