//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (fixed-step accumulator)
//! - Input coordinates (client space to field space)

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};

/// Converts variable frame deltas into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FixedStep {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            tick_ms: f64::from(tick_interval_ms),
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed an absolute timestamp (ms); returns how many ticks to run
    ///
    /// The first call only primes the clock.
    pub fn advance_to(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time.replace(now_ms) {
            Some(last) => now_ms - last,
            None => return 0,
        };
        self.advance_by(dt)
    }

    /// Feed a frame delta (ms); returns how many ticks to run
    pub fn advance_by(&mut self, dt_ms: f64) -> u32 {
        self.accumulator += dt_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator >= self.tick_ms && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_ms;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_ms);
        }
        substeps
    }
}

/// Map a client-space pointer y onto the field when the canvas is scaled
///
/// `top` and `client_height` are the canvas' on-screen rect.
pub fn canvas_y(client_y: f32, top: f32, client_height: f32, field_height: f32) -> f32 {
    if client_height <= 0.0 {
        return client_y - top;
    }
    (client_y - top) * field_height / client_height
}
