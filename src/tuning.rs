//! Data-driven game balance
//!
//! Every literal the frame update depends on lives here so it can be loaded
//! from JSON (LocalStorage on web, a file on native) and validated once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be at least 1")]
    ZeroBound { name: &'static str },

    #[error("{tier} tier threshold must be in (0, 1], got {value}")]
    Threshold { tier: &'static str, value: f32 },

    #[error("{tier} tier {name} must be finite and non-negative, got {value}")]
    TierValue {
        tier: &'static str,
        name: &'static str,
        value: f32,
    },

    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
}

/// Computer paddle tracking parameters for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingTier {
    /// Fraction of the field width left of which the paddle snaps to the ball
    pub threshold: f32,
    /// Snap offset above the ball, as a fraction of paddle height
    pub snap_offset: f32,
    /// Per-tick step once the ball is past the threshold
    pub step: f32,
}

impl TrackingTier {
    /// Scores tied: the starting difficulty
    pub const TIED: Self = Self {
        threshold: 0.75,
        snap_offset: 0.5,
        step: 1.525,
    };

    /// Player one ahead: the computer gets faster
    pub const AHEAD: Self = Self {
        threshold: 0.75,
        snap_offset: 0.5,
        step: 2.2,
    };

    /// Player one behind: later snap, lower aim, slower steps
    pub const BEHIND: Self = Self {
        threshold: 0.875,
        snap_offset: 1.0,
        step: 1.15,
    };

    fn validate(&self, tier: &'static str) -> Result<(), TuningError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(TuningError::Threshold {
                tier,
                value: self.threshold,
            });
        }
        for (name, value) in [("snap_offset", self.snap_offset), ("step", self.step)] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::TierValue { tier, name, value });
            }
        }
        Ok(())
    }
}

/// Game balance and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Geometry ===
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    /// Baseline of the score text
    pub score_y: f32,

    // === Timing ===
    pub tick_interval_ms: u32,

    // === Randomness ===
    /// Serve roll range; a roll of 0 gives +1, anything else -1
    pub serve_roll_bound: u32,
    /// Paddle contact roll range
    pub redirect_roll_bound: u32,
    /// Redirection is positive only when roll - offset == 0
    pub redirect_roll_offset: i32,
    pub redirect_magnitude: f32,

    // === Difficulty ===
    pub tied: TrackingTier,
    pub ahead: TrackingTier,
    pub behind: TrackingTier,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,
            score_y: SCORE_Y,

            tick_interval_ms: TICK_INTERVAL_MS,

            serve_roll_bound: SERVE_ROLL_BOUND,
            redirect_roll_bound: REDIRECT_ROLL_BOUND,
            redirect_roll_offset: REDIRECT_ROLL_OFFSET,
            redirect_magnitude: REDIRECT_MAGNITUDE,

            tied: TrackingTier::TIED,
            ahead: TrackingTier::AHEAD,
            behind: TrackingTier::BEHIND,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pong_tuning";

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("redirect_magnitude", self.redirect_magnitude),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        for (name, bound) in [
            ("tick_interval_ms", self.tick_interval_ms),
            ("serve_roll_bound", self.serve_roll_bound),
            ("redirect_roll_bound", self.redirect_roll_bound),
        ] {
            if bound == 0 {
                return Err(TuningError::ZeroBound { name });
            }
        }
        self.tied.validate("tied")?;
        self.ahead.validate("ahead")?;
        self.behind.validate("behind")?;
        Ok(())
    }

    /// Paddle one hugs the left edge
    pub fn paddle_one_x(&self) -> f32 {
        0.0
    }

    /// Paddle two hugs the right edge
    pub fn paddle_two_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    pub fn center_x(&self) -> f32 {
        self.field_width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
