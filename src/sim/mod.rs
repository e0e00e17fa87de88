//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - State in, state out
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod rng;
pub mod state;
pub mod tick;
pub mod tracking;

pub use collision::{bounce, outside_vertical, paddle_contact, redirection, scoring_side};
pub use draw::{Color, DrawCommand};
pub use rng::{RandomSource, RngState, ScriptedRolls};
pub use state::{Ball, MatchState, Paddle, Side};
pub use tick::{Frame, MatchEvent, TickInput, advance};
pub use tracking::{Difficulty, track_ball};
