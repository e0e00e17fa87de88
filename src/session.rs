//! A running match
//!
//! `Session` owns the match state, its RNG and tuning, and latches pointer
//! input between ticks. Front ends feed it events and ask it for frames.

use rand_pcg::Pcg32;

use crate::platform::FixedStep;
use crate::sim::{DrawCommand, MatchEvent, MatchState, RngState, Side, TickInput, advance};
use crate::tuning::Tuning;

pub struct Session {
    state: MatchState,
    tuning: Tuning,
    rng: Pcg32,
    clock: FixedStep,
    input: TickInput,
    ticks: u64,
    last_frame: Vec<DrawCommand>,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            state: MatchState::new(&tuning),
            rng: RngState::new(seed).to_rng(),
            clock: FixedStep::new(tuning.tick_interval_ms),
            input: TickInput::default(),
            ticks: 0,
            last_frame: Vec::new(),
            tuning,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Draw commands from the most recent tick
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Pointer moved (field coordinates)
    pub fn on_pointer_move(&mut self, y: f32) {
        self.input.pointer_y = Some(y);
    }

    pub fn on_click(&mut self) {
        self.input.click = true;
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.input.autoplay = autoplay;
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> &[DrawCommand] {
        let frame = advance(self.state, &self.input, &self.tuning, &mut self.rng);

        // Clear one-shot inputs after processing
        self.input.click = false;

        for event in &frame.events {
            log_event(event);
        }

        self.state = frame.state;
        self.last_frame = frame.commands;
        self.ticks += 1;
        &self.last_frame
    }

    /// Run as many ticks as the wall clock allows; returns ticks run
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let due = self.clock.advance_to(now_ms);
        for _ in 0..due {
            self.step();
        }
        due
    }
}

fn log_event(event: &MatchEvent) {
    match event {
        MatchEvent::Launched { vel } => {
            log::debug!("Rally started, velocity ({}, {})", vel.x, vel.y)
        }
        MatchEvent::WallBounce { y } => log::trace!("Wall bounce at y = {}", y),
        MatchEvent::Scored {
            side,
            score_one,
            score_two,
        } => {
            let who = match side {
                Side::One => "Player",
                Side::Two => "Computer",
            };
            log::info!("{} scores ({} - {})", who, score_one, score_two);
        }
        MatchEvent::PaddleHit { side, vel } => {
            log::debug!("{:?} paddle hit, velocity now ({}, {})", side, vel.x, vel.y)
        }
    }
}
