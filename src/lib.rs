//! POnG - single-player Pong against an adaptive computer paddle
//!
//! Core modules:
//! - `sim`: Deterministic frame update (ball, paddles, scoring, difficulty)
//! - `renderer`: Replays per-frame draw commands onto a display surface
//! - `platform`: Fixed-step clock and pointer coordinate mapping
//! - `session`: Owns a running match and its input port
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Window / page title
    pub const WINDOW_TITLE: &str = "POnG";

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 20.0;

    /// Fixed simulation timestep in milliseconds (100 Hz)
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Score text baseline
    pub const SCORE_Y: f32 = 100.0;
    /// Font size for prompt and score text
    pub const FONT_SIZE: f32 = 35.0;

    /// Serve: velocity component is +1 when a roll in [0, 3) lands on 0
    pub const SERVE_ROLL_BOUND: u32 = 3;

    /// Paddle contact: roll in [0, 4), magnitude is positive when roll - 5 == 0
    pub const REDIRECT_ROLL_BOUND: u32 = 4;
    pub const REDIRECT_ROLL_OFFSET: i32 = 5;
    pub const REDIRECT_MAGNITUDE: f32 = 4.0;
}

/// Sign of a value; unlike `f32::signum`, zero maps to zero
#[inline]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
