//! Rendering module
//!
//! `frame` composes the play field into a pixel buffer, `terminal` shows
//! that buffer and the text overlays on a terminal.

pub mod frame;
pub mod terminal;

pub use frame::{compose, new_frame};
pub use terminal::TerminalRenderer;

use image::Rgba;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GamePhase, GameState};

pub const TEXT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TEXT_YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);

/// A line of text anchored in field pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Left edge, ignored when centred
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub color: Rgba<u8>,
    pub centered: bool,
}

impl TextLine {
    pub fn at(text: impl Into<String>, x: f32, y: f32, color: Rgba<u8>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            centered: false,
        }
    }

    pub fn centered(text: impl Into<String>, y: f32, color: Rgba<u8>) -> Self {
        Self {
            text: text.into(),
            x: FIELD_WIDTH / 2.0,
            y,
            color,
            centered: true,
        }
    }
}

/// Text overlays for the current phase
pub fn hud_lines(state: &GameState) -> Vec<TextLine> {
    let mid = FIELD_HEIGHT / 2.0;
    let session = &state.session;
    let mut lines = Vec::new();

    match state.phase {
        GamePhase::Idle => {
            lines.push(TextLine::centered("Press Enter to Start", mid - 50.0, TEXT_WHITE));
            lines.push(TextLine::centered("Press P to Pause/Resume", mid, TEXT_WHITE));
            lines.push(TextLine::centered(
                format!("High Score: {}", state.high_score),
                mid + 50.0,
                TEXT_WHITE,
            ));
            if session.high_score_updated {
                lines.push(TextLine::centered("new High Score!", mid + 100.0, TEXT_YELLOW));
            }
        }
        GamePhase::Active | GamePhase::Paused => {
            lines.push(TextLine::at(
                format!("Score: {}", session.score),
                10.0,
                10.0,
                TEXT_WHITE,
            ));
            if state.phase == GamePhase::Paused {
                lines.push(TextLine::centered("Paused", mid - 50.0, TEXT_WHITE));
                lines.push(TextLine::centered("Press P to Resume", mid, TEXT_WHITE));
            } else if let Some(overlay) = &session.overlay {
                lines.push(TextLine::centered(overlay.text(), mid, TEXT_YELLOW));
            }
        }
    }
    lines
}
