//! Fixed-interval match runner
//!
//! The blocking loop that paces the simulation: sleep one tick interval,
//! poll input, advance the sim, render. Single-threaded and cooperative -
//! the loop observes `Terminated` and exits cleanly; the post-score pause
//! is tick-counted inside the sim, so a quit arriving during it is honored
//! at the next tick rather than after a blocking wait.

use crate::consts::TICK_INTERVAL_MS;
use crate::platform::{Clock, InputSource};
use crate::render::{Renderer, compose_frame};
use crate::sim::{MatchPhase, MatchState, tick};

/// Sliding window size for the measured tick rate
const RATE_WINDOW: usize = 50;

/// Drives a match over the input/render/clock seams
pub struct MatchRunner<I, R, C> {
    state: MatchState,
    input: I,
    renderer: R,
    clock: C,
    tick_times: [u64; RATE_WINDOW],
    tick_index: usize,
    ticks_seen: u64,
}

impl<I: InputSource, R: Renderer, C: Clock> MatchRunner<I, R, C> {
    pub fn new(state: MatchState, input: I, renderer: R, clock: C) -> Self {
        Self {
            state,
            input,
            renderer,
            clock,
            tick_times: [0; RATE_WINDOW],
            tick_index: 0,
            ticks_seen: 0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Achieved ticks per second over the sliding window, once it has
    /// filled; 0 before that
    pub fn measured_tick_rate(&self) -> u32 {
        if self.ticks_seen < RATE_WINDOW as u64 {
            return 0;
        }
        let newest = self.tick_times[(self.tick_index + RATE_WINDOW - 1) % RATE_WINDOW];
        let oldest = self.tick_times[self.tick_index];
        let elapsed = newest.saturating_sub(oldest);
        if elapsed == 0 {
            return 0;
        }
        ((RATE_WINDOW as u64 - 1) * 1000 / elapsed) as u32
    }

    /// One full tick: pace, poll, advance, render. Returns the phase after
    /// the tick so callers can drive their own loop.
    pub fn step(&mut self) -> MatchPhase {
        self.clock.sleep_ms(TICK_INTERVAL_MS);

        let input = self.input.poll();
        let phase_before = self.state.phase;
        tick(&mut self.state, &input);
        self.log_transition(phase_before);

        self.tick_times[self.tick_index] = self.clock.now_ms();
        self.tick_index = (self.tick_index + 1) % RATE_WINDOW;
        self.ticks_seen += 1;

        if self.state.phase != MatchPhase::Terminated {
            self.renderer.present(&compose_frame(&self.state));
        }
        self.state.phase
    }

    /// Run until a quit signal terminates the match
    pub fn run(&mut self) {
        while self.step() != MatchPhase::Terminated {}
    }

    fn log_transition(&self, before: MatchPhase) {
        let after = self.state.phase;
        if before == after {
            return;
        }
        match after {
            MatchPhase::PointScored => {
                let score = &self.state.score;
                log::info!(
                    "point scored: {} - {}",
                    score.call(crate::sim::PlayerSide::Left).label(),
                    score.call(crate::sim::PlayerSide::Right).label(),
                );
            }
            MatchPhase::GameOver => {
                log::info!("game over, winner: {:?}", self.state.winner);
            }
            _ => log::debug!("phase {:?} -> {:?}", before, after),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::render::Frame;
    use crate::sim::{Playfield, TickInput};
    use crate::tuning::Tuning;
    use std::cell::Cell;

    /// Clock that advances a counter instead of sleeping
    struct TestClock {
        now: Cell<u64>,
    }

    impl TestClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }
    }

    impl Clock for TestClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        fn sleep_ms(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    /// Replays a fixed input script, then holds the last entry
    struct ScriptedInput {
        script: Vec<TickInput>,
        cursor: usize,
    }

    impl ScriptedInput {
        fn new(script: Vec<TickInput>) -> Self {
            Self { script, cursor: 0 }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> TickInput {
            let input = self.script[self.cursor.min(self.script.len() - 1)].clone();
            self.cursor += 1;
            input
        }
    }

    /// Counts presented frames
    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last: Option<Frame>,
    }

    impl Renderer for CountingRenderer {
        fn present(&mut self, frame: &Frame) {
            self.frames += 1;
            self.last = Some(frame.clone());
        }
    }

    fn new_runner<I: InputSource>(
        input: I,
    ) -> MatchRunner<I, CountingRenderer, TestClock> {
        let state = MatchState::new(
            Playfield::new(FIELD_WIDTH, FIELD_HEIGHT),
            &Tuning::default(),
        );
        MatchRunner::new(state, input, CountingRenderer::default(), TestClock::new())
    }

    #[test]
    fn test_step_renders_every_tick() {
        let mut runner = new_runner(ScriptedInput::new(vec![TickInput::default()]));
        for _ in 0..5 {
            runner.step();
        }
        assert_eq!(runner.renderer.frames, 5);
        // No start pressed: the last frame still shows the title phase
        let last = runner.renderer.last.as_ref().unwrap();
        assert_eq!(last.phase, MatchPhase::Title);
    }

    #[test]
    fn test_run_exits_on_quit() {
        let script = vec![
            TickInput::default(),
            TickInput::default(),
            TickInput {
                quit: true,
                ..Default::default()
            },
        ];
        let mut runner = new_runner(ScriptedInput::new(script));
        runner.run();
        assert_eq!(runner.state().phase, MatchPhase::Terminated);
        // No frame is presented for the terminated state
        assert_eq!(runner.renderer.frames, 2);
    }

    #[test]
    fn test_quit_during_point_pause_is_prompt() {
        // Serve, score immediately, then quit mid-pause: the loop must
        // terminate on the very next tick, not wait the pause out
        let mut script = vec![TickInput {
            start: true,
            ..Default::default()
        }];
        script.extend(std::iter::repeat_n(TickInput::default(), 4));
        script.push(TickInput {
            quit: true,
            ..Default::default()
        });

        let mut runner = new_runner(ScriptedInput::new(script));
        // Park the ball about to exit on the serve tick
        runner.state.ball.pos.x = 2.0;
        runner.state.ball.vel.x = -BALL_SPEED;

        runner.step(); // Title -> Playing
        runner.step(); // ball exits, PointScored
        assert_eq!(runner.state().phase, MatchPhase::PointScored);

        let mut steps = 0;
        while runner.step() != MatchPhase::Terminated {
            steps += 1;
            assert!(steps < 10, "quit was not honored during the pause");
        }
        assert_eq!(runner.state().phase, MatchPhase::Terminated);
    }

    #[test]
    fn test_measured_rate_tracks_test_clock() {
        let mut runner = new_runner(ScriptedInput::new(vec![TickInput::default()]));
        for _ in 0..60 {
            runner.step();
        }
        // The test clock advances exactly one interval per tick
        assert_eq!(
            runner.measured_tick_rate(),
            (1000 / TICK_INTERVAL_MS) as u32
        );
    }
}
