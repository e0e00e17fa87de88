//! Draw primitives emitted by the frame update
//!
//! The simulation never touches a display. It describes each frame as an
//! ordered list of commands that a `renderer::Surface` replays.

use serde::{Deserialize, Serialize};

/// Paint colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// A single drawing operation, in field coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole field
    Clear {
        color: Color,
        width: f32,
        height: f32,
    },
    /// Outlined text centred on `(x, y)`
    StrokeText {
        text: String,
        x: f32,
        y: f32,
        size: f32,
    },
    /// Filled text centred on `(x, y)`
    FillText {
        text: String,
        x: f32,
        y: f32,
        size: f32,
    },
    /// Filled circle inside the square at `(x, y)` with side `diameter`
    FillOval { x: f32, y: f32, diameter: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeLine { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl DrawCommand {
    /// Text carried by the command, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::StrokeText { text, .. } | DrawCommand::FillText { text, .. } => {
                Some(text)
            }
            _ => None,
        }
    }
}

/// Prompt shown while waiting for a click
pub fn prompt_text(fresh: bool) -> &'static str {
    if fresh {
        "Click to Start"
    } else {
        "Click to Start the Next Round"
    }
}

/// Score line, player one first
pub fn score_text(score_one: u32, score_two: u32) -> String {
    format!("{}\t{}", score_one, score_two)
}
