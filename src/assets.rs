//! Sprite loading
//!
//! Sprites are PNG files scaled to their entity's size. A sprite that fails
//! to load is replaced by a solid square so the game keeps running.

use std::path::Path;

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

use crate::consts::{ENEMY_SIZE, PLAYER_SIZE};
use crate::sim::{CollisionMask, EnemyKind, Hitboxes};

/// Placeholder colours
pub const PLAYER_PLACEHOLDER: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const ENEMY_PLACEHOLDER: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Pixels at or above this alpha are solid for collisions
const ALPHA_THRESHOLD: u8 = 128;

/// An image plus its collision mask
#[derive(Debug, Clone)]
pub struct Sprite {
    pub image: RgbaImage,
    pub mask: CollisionMask,
}

impl Sprite {
    /// Solid square of `color`
    pub fn placeholder(size: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, color),
            mask: CollisionMask::filled(size, size),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        let mask = CollisionMask::from_fn(image.width(), image.height(), |x, y| {
            image.get_pixel(x, y)[3] >= ALPHA_THRESHOLD
        });
        Self { image, mask }
    }

    /// Load and scale `path` to `size`×`size`, or fall back to a placeholder
    pub fn load(path: &Path, size: u32, fallback: Rgba<u8>) -> Self {
        match image::open(path) {
            Ok(img) => {
                let scaled = img.resize_exact(size, size, FilterType::Nearest).to_rgba8();
                log::info!(
                    "Successfully loaded image {} and scaled to size: {}",
                    path.display(),
                    size
                );
                Self::from_image(scaled)
            }
            Err(e) => {
                log::error!("Failed to load image {}: {}", path.display(), e);
                log::info!("Using fallback rectangle with size: {}", size);
                Self::placeholder(size, fallback)
            }
        }
    }
}

/// Every sprite the game draws
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub player: Sprite,
    pub red: Sprite,
    pub yellow: Sprite,
    pub green: Sprite,
}

impl SpriteSet {
    pub fn load(dir: &Path) -> Self {
        let enemy = |file: &str| Sprite::load(&dir.join(file), ENEMY_SIZE as u32, ENEMY_PLACEHOLDER);
        Self {
            player: Sprite::load(
                &dir.join("spaceship.png"),
                PLAYER_SIZE as u32,
                PLAYER_PLACEHOLDER,
            ),
            red: enemy("RedEnemy.png"),
            yellow: enemy("YellowEnemy.png"),
            green: enemy("GreenEnemy.png"),
        }
    }

    /// All placeholders, no disk access
    pub fn placeholders() -> Self {
        let enemy = Sprite::placeholder(ENEMY_SIZE as u32, ENEMY_PLACEHOLDER);
        Self {
            player: Sprite::placeholder(PLAYER_SIZE as u32, PLAYER_PLACEHOLDER),
            red: enemy.clone(),
            yellow: enemy.clone(),
            green: enemy,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> &Sprite {
        match kind {
            EnemyKind::Red => &self.red,
            EnemyKind::Yellow => &self.yellow,
            EnemyKind::Green => &self.green,
        }
    }

    /// Collision masks for the simulation
    pub fn hitboxes(&self) -> Hitboxes {
        Hitboxes {
            player: self.player.mask.clone(),
            red: self.red.mask.clone(),
            yellow: self.yellow.mask.clone(),
            green: self.green.mask.clone(),
        }
    }
}
