//! Fixed timestep frame update
//!
//! `advance` takes the current match state and this tick's input and returns
//! the next state together with the frame's draw commands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{bounce, outside_vertical, paddle_contact, redirection, scoring_side};
use super::draw::{Color, DrawCommand, prompt_text, score_text};
use super::rng::RandomSource;
use super::state::{MatchState, Side};
use super::tracking::{Difficulty, track_ball};
use crate::consts::FONT_SIZE;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer y in field coordinates
    pub pointer_y: Option<f32>,
    /// Click since the previous tick
    pub click: bool,
    /// Demo mode - paddle one follows the ball and serves itself
    pub autoplay: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A click started a rally
    Launched { vel: Vec2 },
    /// Ball was outside the field vertically; vertical speed flipped
    WallBounce { y: f32 },
    /// Point awarded
    Scored {
        side: Side,
        score_one: u32,
        score_two: u32,
    },
    /// Ball bounced off a paddle with the resulting velocity
    PaddleHit { side: Side, vel: Vec2 },
}

/// Result of one tick
#[derive(Debug, Clone)]
pub struct Frame {
    pub state: MatchState,
    pub commands: Vec<DrawCommand>,
    pub events: Vec<MatchEvent>,
}

/// Serve velocity component: +1 when the roll lands on 0, otherwise -1
fn serve_component(rng: &mut impl RandomSource, tuning: &Tuning) -> f32 {
    if rng.next_below(tuning.serve_roll_bound) == 0 {
        1.0
    } else {
        -1.0
    }
}

fn launch(state: &mut MatchState, events: &mut Vec<MatchEvent>) {
    state.click();
    events.push(MatchEvent::Launched {
        vel: state.ball.vel,
    });
}

/// Advance the match by one fixed timestep
pub fn advance(
    mut state: MatchState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut impl RandomSource,
) -> Frame {
    let mut commands = Vec::with_capacity(8);
    let mut events = Vec::new();

    // Input port
    if input.autoplay {
        state.set_pointer_y(state.ball.pos.y - tuning.paddle_height / 2.0);
    } else if let Some(y) = input.pointer_y {
        state.set_pointer_y(y);
    }
    if input.click && !state.running {
        launch(&mut state, &mut events);
    }

    commands.push(DrawCommand::Clear {
        color: Color::Black,
        width: tuning.field_width,
        height: tuning.field_height,
    });

    if state.running {
        state.ball.pos += state.ball.vel;

        if Difficulty::of(&state) == Difficulty::Tied {
            track_ball(&mut state, &tuning.tied, tuning);
        }

        commands.push(DrawCommand::FillOval {
            x: state.ball.pos.x,
            y: state.ball.pos.y,
            diameter: tuning.ball_size,
        });
    } else {
        commands.push(DrawCommand::StrokeText {
            text: prompt_text(state.is_fresh()).to_string(),
            x: tuning.center_x(),
            y: tuning.center_y(),
            size: FONT_SIZE,
        });

        state.ball.pos = Vec2::new(tuning.center_x(), tuning.center_y());
        let vx = serve_component(rng, tuning);
        let vy = serve_component(rng, tuning);
        state.ball.vel = Vec2::new(vx, vy);

        // Autoplay launches the ball it just served
        if input.autoplay {
            launch(&mut state, &mut events);
        }
    }

    if outside_vertical(state.ball.pos, tuning) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(MatchEvent::WallBounce {
            y: state.ball.pos.y,
        });
    }

    if let Some(side) = scoring_side(state.ball.pos, tuning) {
        state.award(side);
        events.push(MatchEvent::Scored {
            side,
            score_one: state.score_one,
            score_two: state.score_two,
        });
    }

    if let Some(side) = paddle_contact(&state, tuning) {
        let magnitude = redirection(rng, tuning);
        state.ball.vel = bounce(state.ball.vel, magnitude);
        events.push(MatchEvent::PaddleHit {
            side,
            vel: state.ball.vel,
        });
    }

    commands.push(DrawCommand::FillText {
        text: score_text(state.score_one, state.score_two),
        x: tuning.center_x(),
        y: tuning.score_y,
        size: FONT_SIZE,
    });
    for side in [Side::Two, Side::One] {
        let x = match side {
            Side::One => tuning.paddle_one_x(),
            Side::Two => tuning.paddle_two_x(),
        };
        commands.push(DrawCommand::FillRect {
            x,
            y: state.paddle(side).y,
            w: tuning.paddle_width,
            h: tuning.paddle_height,
        });
    }
    commands.push(DrawCommand::StrokeLine {
        x1: tuning.center_x(),
        y1: tuning.field_height,
        x2: tuning.center_x(),
        y2: -tuning.field_height,
    });

    // Dynamic difficulty: the tied tier already ran with the ball movement
    match Difficulty::of(&state) {
        Difficulty::Tied => {}
        uneven => track_ball(&mut state, uneven.tier(tuning), tuning),
    }

    Frame {
        state,
        commands,
        events,
    }
}
