//! Rally Pong entry point
//!
//! There is no windowing shell in this crate - display and raw input are
//! external collaborators behind the platform/render seams. The native
//! binary runs a headless demo match on the autopilot so the full loop can
//! be exercised and observed through the log.

use std::path::Path;

use rally_pong::consts::*;
use rally_pong::platform::{InputSource, StdClock};
use rally_pong::render::{Frame, Renderer};
use rally_pong::sim::{GamePoint, MatchPhase, MatchState, Playfield, TickInput};
use rally_pong::{MatchRunner, Tuning};

/// Cap on the demo match length (two perfect autopilots can rally forever)
const DEMO_TICK_BUDGET: u64 = 6_000;

/// Autopilot input: both paddles on the idle steering, never quits
struct DemoPilot;

impl InputSource for DemoPilot {
    fn poll(&mut self) -> TickInput {
        TickInput {
            idle: true,
            ..Default::default()
        }
    }
}

/// Headless renderer that logs score-call changes
#[derive(Default)]
struct LogRenderer {
    last_score: Option<[GamePoint; 2]>,
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Frame) {
        if self.last_score != Some(frame.score) {
            log::info!(
                "score: {} - {}",
                frame.score[0].label(),
                frame.score[1].label()
            );
            self.last_score = Some(frame.score);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Rally Pong demo match starting");

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let state = MatchState::new(Playfield::new(FIELD_WIDTH, FIELD_HEIGHT), &tuning);
    let mut runner = MatchRunner::new(state, DemoPilot, LogRenderer::default(), StdClock::new());

    for _ in 0..DEMO_TICK_BUDGET {
        match runner.step() {
            MatchPhase::GameOver => {
                log::info!(
                    "demo match over, winner: {:?}, measured tick rate: {} Hz",
                    runner.state().winner,
                    runner.measured_tick_rate()
                );
                return;
            }
            MatchPhase::Terminated => return,
            _ => {}
        }
    }

    log::info!(
        "demo budget exhausted at {} - {}, measured tick rate: {} Hz",
        runner.state().score.left,
        runner.state().score.right,
        runner.measured_tick_rate()
    );
}
