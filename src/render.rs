//! Draw-command composition and the renderer seam
//!
//! The core hands the renderer rectangles, colors, and the two score calls;
//! glyph lookup and pixel blitting stay on the far side of the trait.
//! Everything here is still in playfield coordinates - integer pixel
//! conversion is the renderer's job.

use glam::Vec2;

use crate::sim::{GamePoint, MatchPhase, MatchState, Rect};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const NET_GRAY: Color = Color::rgb(128, 128, 128);
}

/// One draw command: a filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ball, paddles, and net segments
    pub rects: Vec<DrawRect>,
    /// Score calls, left player first
    pub score: [GamePoint; 2],
    pub phase: MatchPhase,
}

/// Net segment sizing for the dashed center line
const NET_SEGMENT_HEIGHT: f32 = 12.0;
const NET_SEGMENT_GAP: f32 = 10.0;
const NET_WIDTH: f32 = 4.0;

/// Build the frame's draw commands from the current match state
pub fn compose_frame(state: &MatchState) -> Frame {
    let mut rects = Vec::new();

    // Dashed net down the middle
    let net_x = state.playfield.width / 2.0;
    let mut y = NET_SEGMENT_HEIGHT / 2.0;
    while y + NET_SEGMENT_HEIGHT / 2.0 <= state.playfield.height {
        rects.push(DrawRect {
            rect: Rect::from_center_size(
                Vec2::new(net_x, y),
                Vec2::new(NET_WIDTH, NET_SEGMENT_HEIGHT),
            ),
            color: Color::NET_GRAY,
        });
        y += NET_SEGMENT_HEIGHT + NET_SEGMENT_GAP;
    }

    for paddle in &state.paddles {
        rects.push(DrawRect {
            rect: paddle.rect(),
            color: Color::WHITE,
        });
    }
    rects.push(DrawRect {
        rect: state.ball.rect(),
        color: Color::WHITE,
    });

    Frame {
        rects,
        score: [
            state.score.call(crate::sim::PlayerSide::Left),
            state.score.call(crate::sim::PlayerSide::Right),
        ],
        phase: state.phase,
    }
}

/// Sink for composed frames. Implementations own the window surface; the
/// core never learns whether a glyph was missing or a surface was lost.
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}

/// Renderer that discards frames - headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &Frame) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{MatchState, Playfield};
    use crate::tuning::Tuning;

    fn test_state() -> MatchState {
        MatchState::new(
            Playfield::new(FIELD_WIDTH, FIELD_HEIGHT),
            &Tuning::default(),
        )
    }

    #[test]
    fn test_frame_contains_ball_and_paddles() {
        let state = test_state();
        let frame = compose_frame(&state);

        let white: Vec<_> = frame
            .rects
            .iter()
            .filter(|d| d.color == Color::WHITE)
            .collect();
        assert_eq!(white.len(), 3);

        // The last command is the ball at the playfield center
        let ball = frame.rects.last().unwrap();
        assert_eq!(ball.rect.center(), state.playfield.center());
    }

    #[test]
    fn test_net_segments_stay_in_bounds() {
        let state = test_state();
        let frame = compose_frame(&state);
        for d in frame.rects.iter().filter(|d| d.color == Color::NET_GRAY) {
            assert!(d.rect.top() >= 0.0);
            assert!(d.rect.bottom() <= state.playfield.height);
            assert_eq!(d.rect.center().x, state.playfield.width / 2.0);
        }
    }

    #[test]
    fn test_fresh_match_calls_love_all() {
        let frame = compose_frame(&test_state());
        assert_eq!(frame.score, [GamePoint::Love, GamePoint::Love]);
    }
}
