//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick through the phase
//! machine: input -> paddle movement -> ball step -> collisions -> score ->
//! phase transition. Pacing and rendering live outside, in the runner.

use super::collision::{check_paddle_collision, check_wall_collision};
use super::score::{ScoreOutcome, check_for_score};
use super::state::{MatchPhase, MatchState, PlayerSide};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held-key state for the four paddle actions
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Serve from the title screen / restart from game over
    pub start: bool,
    /// Quit request - overrides everything at the next poll point
    pub quit: bool,
    /// Demo autopilot: both paddles track the ball, start is implied
    pub idle: bool,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if input.quit {
        state.phase = MatchPhase::Terminated;
        return;
    }
    if state.phase == MatchPhase::Terminated {
        return;
    }

    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle {
        steer_idle(state, &mut input);
    }
    let input = &input;

    match state.phase {
        MatchPhase::Title => {
            if input.start {
                state.phase = MatchPhase::Playing;
            }
        }

        MatchPhase::Playing => playing_tick(state, input),

        MatchPhase::PointScored => {
            // Entities were reset when the point landed; hold play until
            // the pause runs out, then resume or end the match
            state.pause_ticks = state.pause_ticks.saturating_sub(1);
            if state.pause_ticks == 0 {
                state.phase = match state.winner {
                    Some(_) => MatchPhase::GameOver,
                    None => MatchPhase::Playing,
                };
            }
        }

        MatchPhase::GameOver => {
            if input.start {
                state.restart();
            }
        }

        MatchPhase::Terminated => {}
    }
}

/// One tick of active play
fn playing_tick(state: &mut MatchState, input: &TickInput) {
    let field_height = state.playfield.height;
    let field_width = state.playfield.width;

    // Paddle movement from held keys, clamped to the playfield
    for (side, up, down) in [
        (PlayerSide::Left, input.left_up, input.left_down),
        (PlayerSide::Right, input.right_up, input.right_down),
    ] {
        let paddle = state.paddle_mut(side);
        let mut delta = 0.0;
        if up {
            delta -= paddle.speed;
        }
        if down {
            delta += paddle.speed;
        }
        if delta != 0.0 {
            paddle.try_move(delta, field_height);
        }
    }

    // Ball kinematics, then collision resolution
    state.ball.step();
    check_wall_collision(&mut state.ball, field_height);

    let now_ms = state.sim_time_ms();
    let MatchState {
        ball,
        paddles,
        last_paddle_hit_ms,
        lockout_ms,
        ..
    } = state;
    for paddle in paddles.iter() {
        if check_paddle_collision(ball, paddle, now_ms, *last_paddle_hit_ms, *lockout_ms) {
            *last_paddle_hit_ms = Some(now_ms);
        }
    }

    // Scoring: reset the table and pause, whether or not the game ended
    if let Some(side) = check_for_score(&state.ball, field_width) {
        let outcome = state.score.award(side);
        if let ScoreOutcome::GameWon(winner) = outcome {
            state.winner = Some(winner);
        }
        state.reset_positions();
        state.pause_ticks = state.point_pause_ticks;
        state.phase = MatchPhase::PointScored;
    }
}

/// Demo autopilot: steer both paddles toward the ball with a deadband so
/// they do not jitter around its center, and serve automatically.
fn steer_idle(state: &MatchState, input: &mut TickInput) {
    input.start = true;

    let target = state.ball.pos.y;
    let deadband = state.ball.size;

    let left = state.paddle(PlayerSide::Left).pos.y;
    input.left_up = target < left - deadband;
    input.left_down = target > left + deadband;

    let right = state.paddle(PlayerSide::Right).pos.y;
    input.right_up = target < right - deadband;
    input.right_down = target > right + deadband;
}
