//! Tennis scoring engine
//!
//! Points are plain integers internally; the `GamePoint` enum is the pure
//! display mapping handed to the renderer, so presentation strings never
//! leak into simulation state.

use serde::{Deserialize, Serialize};

use super::state::{Ball, PlayerSide};

/// Display call for one player's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePoint {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    Game,
}

impl GamePoint {
    pub fn label(&self) -> &'static str {
        match self {
            GamePoint::Love => "0",
            GamePoint::Fifteen => "15",
            GamePoint::Thirty => "30",
            GamePoint::Forty => "40",
            GamePoint::Advantage => "Ad",
            GamePoint::Game => "Game",
        }
    }
}

/// What a scored point did to the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Play on
    Rally,
    /// Both at 40, level again
    Deuce,
    /// One point from the game
    Advantage(PlayerSide),
    /// Match over
    GameWon(PlayerSide),
}

/// Both players' point counters. Mutated only by `award`, reset only at
/// full-match restart - never at point-level resets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::Left => self.left,
            PlayerSide::Right => self.right,
        }
    }

    /// Award one point and report the tennis progression:
    /// a player wins when leading by >=2 once both have reached 40, or on
    /// reaching the fourth point while the opponent is still short of 40.
    pub fn award(&mut self, side: PlayerSide) -> ScoreOutcome {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }

        let scored = self.points(side);
        let other = self.points(side.opponent());

        if scored >= 4 && other < 3 {
            return ScoreOutcome::GameWon(side);
        }
        if scored >= 3 && other >= 3 {
            if scored == other {
                return ScoreOutcome::Deuce;
            }
            if scored >= other + 2 {
                return ScoreOutcome::GameWon(side);
            }
            return ScoreOutcome::Advantage(side);
        }
        ScoreOutcome::Rally
    }

    /// Display call for one side
    pub fn call(&self, side: PlayerSide) -> GamePoint {
        let own = self.points(side);
        let other = self.points(side.opponent());

        if own >= 3 && other >= 3 {
            // Deuce territory: level shows 40, a one-point lead shows
            // advantage, a two-point lead took the game
            return if own >= other + 2 {
                GamePoint::Game
            } else if own == other + 1 {
                GamePoint::Advantage
            } else {
                GamePoint::Forty
            };
        }
        match own {
            0 => GamePoint::Love,
            1 => GamePoint::Fifteen,
            2 => GamePoint::Thirty,
            3 => GamePoint::Forty,
            _ => GamePoint::Game,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Check whether the ball left the playfield horizontally.
/// Exiting past the left bound scores for the right player and vice versa.
pub fn check_for_score(ball: &Ball, field_width: f32) -> Option<PlayerSide> {
    if ball.pos.x <= 0.0 {
        Some(PlayerSide::Right)
    } else if ball.pos.x >= field_width {
        Some(PlayerSide::Left)
    } else {
        None
    }
}
