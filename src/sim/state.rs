//! Match state and core simulation types
//!
//! Everything the frame update reads and writes lives in `MatchState`.
//! Geometry is fixed configuration and stays in `Tuning`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which player a paddle, point or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    One,
    /// Right paddle, driven by the computer
    Two,
}

/// The ball; `pos` is the top-left corner of its bounding square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Distance moved per tick
    pub vel: Vec2,
}

/// A paddle; x is fixed by its side, only y moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge
    pub y: f32,
}

impl Paddle {
    /// Whether `y` lies within this paddle's vertical span (inclusive)
    pub fn spans(&self, y: f32, height: f32) -> bool {
        y >= self.y && y <= self.y + height
    }
}

/// Complete match state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub ball: Ball,
    pub paddle_one: Paddle,
    pub paddle_two: Paddle,
    pub score_one: u32,
    pub score_two: u32,
    /// false = waiting for a click, true = ball in play
    pub running: bool,
}

impl MatchState {
    /// Fresh match: scores at zero, waiting for the first click
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            ball: Ball {
                pos: Vec2::new(tuning.center_x(), tuning.center_y()),
                vel: Vec2::ONE,
            },
            paddle_one: Paddle {
                y: tuning.center_y(),
            },
            paddle_two: Paddle {
                y: tuning.center_y(),
            },
            score_one: 0,
            score_two: 0,
            running: false,
        }
    }

    /// Pointer moved: paddle one follows it directly, unclamped
    pub fn set_pointer_y(&mut self, y: f32) {
        self.paddle_one.y = y;
    }

    /// Click: start (or continue) the rally
    pub fn click(&mut self) {
        self.running = true;
    }

    /// Award a point and stop the rally
    pub fn award(&mut self, side: Side) {
        match side {
            Side::One => self.score_one += 1,
            Side::Two => self.score_two += 1,
        }
        self.running = false;
    }

    /// Whether nobody has scored yet
    pub fn is_fresh(&self) -> bool {
        self.score_one == 0 && self.score_two == 0
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::One => &self.paddle_one,
            Side::Two => &self.paddle_two,
        }
    }
}
