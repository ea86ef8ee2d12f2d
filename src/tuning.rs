//! Data-driven game balance
//!
//! Gameplay numbers the sim is built from, loadable from a JSON file so
//! balance changes never require a recompile. Missing or malformed files
//! degrade to the compiled-in defaults with a logged warning - the core
//! never fails over configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay constants. `Default` mirrors `crate::consts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball scalar speed, pixels per tick
    pub ball_speed: f32,
    /// Side length of the ball's square hit-box
    pub ball_size: f32,
    pub paddle_height: f32,
    /// Paddle travel per tick while a key is held
    pub paddle_speed: f32,
    /// Distance from each side wall to its paddle's center
    pub paddle_wall_offset: f32,
    /// Minimum sim-time between two resolved paddle bounces
    pub collision_lockout_ms: u64,
    /// Pause after a point before play resumes
    pub point_pause_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            ball_size: BALL_SIZE,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_wall_offset: PADDLE_WALL_OFFSET,
            collision_lockout_ms: COLLISION_LOCKOUT_MS,
            point_pause_ms: POINT_PAUSE_MS,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any
    /// read or parse failure
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring malformed tuning file {}: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the current tuning out as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save tuning to {}: {}", path.display(), err);
                } else {
                    log::info!("Tuning saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Failed to serialize tuning: {}", err),
        }
    }
}
