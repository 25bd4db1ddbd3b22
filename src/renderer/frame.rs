//! Software frame composition
//!
//! The play field is drawn into an RGBA buffer at field resolution; the
//! presenter decides how to show it.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::assets::SpriteSet;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GamePhase, GameState};

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Empty frame buffer the size of the field
pub fn new_frame() -> RgbaImage {
    RgbaImage::from_pixel(FIELD_WIDTH as u32, FIELD_HEIGHT as u32, BACKGROUND)
}

/// Draw the current state into `frame`
pub fn compose(frame: &mut RgbaImage, state: &GameState, sprites: &SpriteSet) {
    for pixel in frame.pixels_mut() {
        *pixel = BACKGROUND;
    }

    // The title screen is text only
    if state.phase == GamePhase::Idle {
        return;
    }

    let session = &state.session;
    let player = &session.player;
    imageops::overlay(
        frame,
        &sprites.player.image,
        player.pos.x as i64,
        player.pos.y as i64,
    );
    for enemy in &session.enemies {
        imageops::overlay(
            frame,
            &sprites.enemy(enemy.kind).image,
            enemy.pos.x as i64,
            enemy.pos.y as i64,
        );
    }

    if session.slow_motion() {
        blur(frame);
    }
}

/// Cheap blur: shrink to half size and scale back up
pub fn blur(frame: &mut RgbaImage) {
    let (w, h) = frame.dimensions();
    if w < 2 || h < 2 {
        return;
    }
    let small = imageops::resize(frame, w / 2, h / 2, FilterType::Triangle);
    *frame = imageops::resize(&small, w, h, FilterType::Triangle);
}
