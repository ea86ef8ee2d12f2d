//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Sim-time derived from the tick counter, never the wall clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{check_paddle_collision, check_wall_collision, deflect_factor};
pub use rect::Rect;
pub use score::{GamePoint, ScoreOutcome, Scoreboard, check_for_score};
pub use state::{Ball, MatchPhase, MatchState, Paddle, Playfield, PlayerSide};
pub use tick::{TickInput, tick};
