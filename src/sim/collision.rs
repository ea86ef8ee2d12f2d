//! Collision detection and deflection response
//!
//! The bug-prone part of Pong: a ball whose box overlaps a paddle for
//! several consecutive ticks must produce exactly one bounce, and where on
//! the paddle the ball struck decides how the serve speed is split between
//! the axes on the way out.

use crate::consts::DEFLECT_HEADROOM;

use super::state::{Ball, Paddle};

/// Normalized deflection for a ball overlapping a paddle: the vertical
/// offset between the two centers, scaled against 1.5x the paddle's
/// half-height. An edge hit lands near +-0.67; the clamp only engages for
/// deep overlaps past the paddle's end.
pub fn deflect_factor(ball: &Ball, paddle: &Paddle) -> f32 {
    let offset = ball.pos.y - paddle.pos.y;
    (offset / ((paddle.height / 2.0) * DEFLECT_HEADROOM)).clamp(-1.0, 1.0)
}

/// Resolve a ball-paddle contact.
///
/// Bounces at most once per lockout window: while the ball's box stays
/// overlapped across ticks, only the first intersecting check inside the
/// window deflects. Returns true when a bounce was resolved, in which case
/// the caller records `now_ms` as the new lockout timestamp.
pub fn check_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    now_ms: u64,
    last_hit_ms: Option<u64>,
    lockout_ms: u64,
) -> bool {
    if !ball.rect().intersects(&paddle.rect()) {
        return false;
    }
    if let Some(last) = last_hit_ms {
        if now_ms.saturating_sub(last) <= lockout_ms {
            return false;
        }
    }
    let factor = deflect_factor(ball, paddle);
    ball.deflect_off_paddle(factor);
    true
}

/// Bounce off the top/bottom bounds. Checked every tick with no lockout:
/// the ball always moves away after one bounce, so wall geometry cannot
/// re-trigger the way a wide paddle can.
pub fn check_wall_collision(ball: &mut Ball, field_height: f32) -> bool {
    let rect = ball.rect();
    if rect.top() < 0.0 || rect.bottom() > field_height {
        ball.bounce_off_wall();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLISION_LOCKOUT_MS;
    use glam::Vec2;

    fn ball_at(pos: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), 4.0, 12.0);
        ball.pos = pos;
        ball
    }

    fn paddle_at(pos: Vec2) -> Paddle {
        Paddle::new(pos, 80.0, 5.0)
    }

    #[test]
    fn test_center_hit_goes_flat() {
        // Dead-center hit: no vertical offset, full horizontal reversal
        let mut ball = ball_at(Vec2::new(765.0, 300.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));
        assert!(check_paddle_collision(&mut ball, &paddle, 0, None, COLLISION_LOCKOUT_MS));
        assert_eq!(ball.vel, Vec2::new(-4.0, 0.0));
    }

    #[test]
    fn test_edge_hit_deflects_steeply() {
        // Ball at the paddle's lower edge: offset 40, factor 40/60 = 0.667
        let mut ball = ball_at(Vec2::new(765.0, 340.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));
        assert!(check_paddle_collision(&mut ball, &paddle, 0, None, COLLISION_LOCKOUT_MS));
        let factor = 40.0 / 60.0;
        assert!((ball.vel.y - 4.0 * factor).abs() < 1e-4);
        assert!((ball.vel.x - (-4.0 * (1.0 - factor))).abs() < 1e-4);
    }

    #[test]
    fn test_upper_half_hit_deflects_upward() {
        // Above the paddle center means a negative offset, so the ball
        // leaves moving up (negative y in screen coordinates)
        let mut ball = ball_at(Vec2::new(765.0, 270.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));
        assert!(check_paddle_collision(&mut ball, &paddle, 0, None, COLLISION_LOCKOUT_MS));
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_miss_is_noop() {
        let mut ball = ball_at(Vec2::new(400.0, 300.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));
        let before = ball.vel;
        assert!(!check_paddle_collision(&mut ball, &paddle, 0, None, COLLISION_LOCKOUT_MS));
        assert_eq!(ball.vel, before);
    }

    #[test]
    fn test_lockout_suppresses_second_bounce() {
        let mut ball = ball_at(Vec2::new(765.0, 310.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));

        assert!(check_paddle_collision(&mut ball, &paddle, 0, None, COLLISION_LOCKOUT_MS));
        let after_first = ball.vel;

        // Still overlapping 10ms later - inside the window, no new bounce
        assert!(!check_paddle_collision(
            &mut ball,
            &paddle,
            10,
            Some(0),
            COLLISION_LOCKOUT_MS
        ));
        assert_eq!(ball.vel, after_first);

        // 99ms: still locked out
        assert!(!check_paddle_collision(
            &mut ball,
            &paddle,
            99,
            Some(0),
            COLLISION_LOCKOUT_MS
        ));

        // Past the window the same contact may resolve again
        assert!(check_paddle_collision(
            &mut ball,
            &paddle,
            101,
            Some(0),
            COLLISION_LOCKOUT_MS
        ));
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut ball = ball_at(Vec2::new(400.0, 4.0));
        ball.vel = Vec2::new(2.0, -3.0);
        assert!(check_wall_collision(&mut ball, 600.0));
        assert_eq!(ball.vel, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut ball = ball_at(Vec2::new(400.0, 596.0));
        ball.vel = Vec2::new(2.0, 3.0);
        assert!(check_wall_collision(&mut ball, 600.0));
        assert_eq!(ball.vel, Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_wall_miss_is_noop() {
        let mut ball = ball_at(Vec2::new(400.0, 300.0));
        let before = ball.vel;
        assert!(!check_wall_collision(&mut ball, 600.0));
        assert_eq!(ball.vel, before);
    }

    #[test]
    fn test_deflect_factor_clamps_deep_overlap() {
        // Ball center well past the paddle end still caps at +-1
        let ball = ball_at(Vec2::new(765.0, 420.0));
        let paddle = paddle_at(Vec2::new(770.0, 300.0));
        assert_eq!(deflect_factor(&ball, &paddle), 1.0);
    }
}
