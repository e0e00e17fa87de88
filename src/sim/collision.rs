//! Collision detection and response
//!
//! Walls, goal lines and paddles are all axis-aligned, so every check is a
//! pair of comparisons against the ball's top-left corner.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{MatchState, Side};
use crate::sign;
use crate::tuning::Tuning;

/// Whether the ball has left the field vertically
///
/// Position is never clamped; the ball can overshoot until the flipped
/// velocity brings it back.
pub fn outside_vertical(pos: Vec2, tuning: &Tuning) -> bool {
    pos.y > tuning.field_height || pos.y < 0.0
}

/// Side that wins the point, if the ball is past a goal line
///
/// Past paddle two's outer edge scores for player one; more than a paddle
/// width left of paddle one scores for player two.
pub fn scoring_side(pos: Vec2, tuning: &Tuning) -> Option<Side> {
    if pos.x > tuning.paddle_two_x() + tuning.paddle_width {
        Some(Side::One)
    } else if pos.x < tuning.paddle_one_x() - tuning.paddle_width {
        Some(Side::Two)
    } else {
        None
    }
}

/// Paddle the ball is touching, if any (paddle two is checked first)
pub fn paddle_contact(state: &MatchState, tuning: &Tuning) -> Option<Side> {
    let pos = state.ball.pos;
    let height = tuning.paddle_height;

    if pos.x + tuning.ball_size > tuning.paddle_two_x() && state.paddle_two.spans(pos.y, height) {
        Some(Side::Two)
    } else if pos.x < tuning.paddle_one_x() + tuning.paddle_width
        && state.paddle_one.spans(pos.y, height)
    {
        Some(Side::One)
    } else {
        None
    }
}

/// Roll the vertical redirection for a paddle hit
///
/// Positive only when `roll - redirect_roll_offset == 0`. With the default
/// bound of 4 and offset of 5 that never happens.
pub fn redirection(rng: &mut impl RandomSource, tuning: &Tuning) -> f32 {
    let roll = i64::from(rng.next_below(tuning.redirect_roll_bound));
    if roll - i64::from(tuning.redirect_roll_offset) == 0 {
        tuning.redirect_magnitude
    } else {
        -tuning.redirect_magnitude
    }
}

/// Paddle bounce: speed up on both axes, then reflect both
pub fn bounce(vel: Vec2, redirection: f32) -> Vec2 {
    let vx = vel.x + sign(vel.x);
    let vy = vel.y + sign(vel.y) * redirection;
    Vec2::new(-vx, -vy)
}
