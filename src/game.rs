//! Frame loop owner
//!
//! `Game` ties the pure simulation to its side effects: the high score file,
//! sprites, and the frame buffer handed to the presenter.

use std::io::{self, Write};

use anyhow::Context;
use image::RgbaImage;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::assets::SpriteSet;
use crate::config::GameConfig;
use crate::highscores::HighScoreFile;
use crate::renderer::{TerminalRenderer, compose, hud_lines, new_frame};
use crate::sim::{GameEvent, GameState, Hitboxes, InputEvent, handle_input, tick};

/// What the loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

pub struct Game {
    state: GameState,
    store: HighScoreFile,
    sprites: SpriteSet,
    hitboxes: Hitboxes,
    rng: Pcg32,
    frame: RgbaImage,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let store = HighScoreFile::new(&config.high_score_path);
        let sprites = SpriteSet::load(&config.assets_dir);
        let seed: u64 = rand::random();
        log::info!("Game initialized with seed: {}", seed);
        Self::from_parts(store, sprites, Pcg32::seed_from_u64(seed))
    }

    /// Build a game from explicit parts (loads the stored high score)
    pub fn from_parts(store: HighScoreFile, sprites: SpriteSet, mut rng: Pcg32) -> Self {
        let high_score = store.load();
        let state = GameState::new(high_score, &mut rng);
        let hitboxes = sprites.hitboxes();
        Self {
            state,
            store,
            sprites,
            hitboxes,
            rng,
            frame: new_frame(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Apply this frame's input, then advance the simulation by `real_dt`
    pub fn update(&mut self, input: &[InputEvent], real_dt: f32) -> anyhow::Result<FrameOutcome> {
        let mut events = Vec::new();
        for &event in input {
            if event == InputEvent::Quit {
                log::info!("Quit requested");
                return Ok(FrameOutcome::Quit);
            }
            events.extend(handle_input(&mut self.state, event, &mut self.rng));
        }
        events.extend(tick(&mut self.state, real_dt, &self.hitboxes, &mut self.rng));

        for event in &events {
            if let GameEvent::HighScoreBeaten(score) = *event {
                self.store.save(score).with_context(|| {
                    format!("saving high score to {}", self.store.path().display())
                })?;
            }
        }
        Ok(FrameOutcome::Continue)
    }

    /// Compose the current state and show it
    pub fn render<W: Write>(&mut self, renderer: &mut TerminalRenderer<W>) -> io::Result<()> {
        compose(&mut self.frame, &self.state, &self.sprites);
        renderer.present(&self.frame, &hud_lines(&self.state))
    }

    /// One full frame: update then draw
    pub fn frame<W: Write>(
        &mut self,
        input: &[InputEvent],
        real_dt: f32,
        renderer: &mut TerminalRenderer<W>,
    ) -> anyhow::Result<FrameOutcome> {
        let outcome = self.update(input, real_dt)?;
        if outcome == FrameOutcome::Continue {
            self.render(renderer).context("drawing frame")?;
        }
        Ok(outcome)
    }
}
