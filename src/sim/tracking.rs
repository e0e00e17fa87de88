//! Computer paddle tracking and difficulty tiers
//!
//! The computer snaps to the ball while it is far away and steps toward it
//! once it crosses the tier threshold. The tier is chosen from the score.

use serde::{Deserialize, Serialize};

use super::state::MatchState;
use crate::tuning::{TrackingTier, Tuning};

/// Difficulty tier, from player one's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Tied,
    /// Player one leads: faster computer
    Ahead,
    /// Player one trails: slower computer
    Behind,
}

impl Difficulty {
    pub fn select(score_one: u32, score_two: u32) -> Self {
        use std::cmp::Ordering;
        match score_one.cmp(&score_two) {
            Ordering::Equal => Difficulty::Tied,
            Ordering::Greater => Difficulty::Ahead,
            Ordering::Less => Difficulty::Behind,
        }
    }

    pub fn of(state: &MatchState) -> Self {
        Self::select(state.score_one, state.score_two)
    }

    pub fn tier(self, tuning: &Tuning) -> &TrackingTier {
        match self {
            Difficulty::Tied => &tuning.tied,
            Difficulty::Ahead => &tuning.ahead,
            Difficulty::Behind => &tuning.behind,
        }
    }
}

/// Move paddle two one tick toward the ball using `tier`
pub fn track_ball(state: &mut MatchState, tier: &TrackingTier, tuning: &Tuning) {
    let ball = state.ball.pos;
    let paddle = &mut state.paddle_two;

    if ball.x < tuning.field_width * tier.threshold {
        paddle.y = ball.y - tuning.paddle_height * tier.snap_offset;
    } else if ball.y > paddle.y + tuning.paddle_height / 2.0 {
        paddle.y += tier.step;
    } else {
        paddle.y -= tier.step;
    }
}
