//! Pixel-accurate collision detection
//!
//! Every entity carries a bitmask of its opaque pixels. Two entities collide
//! when any set pixel of one lands on a set pixel of the other at their
//! current relative offset.

use glam::Vec2;

use super::entity::EnemyKind;

/// Opaque-pixel mask of a sprite, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    /// Mask with every pixel set (solid placeholder shapes)
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Build a mask from a per-pixel predicate
    pub fn from_fn(width: u32, height: u32, mut solid: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(solid(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is solid; out of range is empty
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    /// Number of solid pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// First overlapping point (in this mask's coordinates) with `other`
    /// placed at `offset` relative to this mask's top-left corner.
    pub fn overlap(&self, other: &CollisionMask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = offset;

        // Intersection of the two rectangles in this mask's space
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

/// Collision masks for every entity type in play
#[derive(Debug, Clone)]
pub struct Hitboxes {
    pub player: CollisionMask,
    pub red: CollisionMask,
    pub yellow: CollisionMask,
    pub green: CollisionMask,
}

impl Hitboxes {
    /// Fully solid squares, the shape of the placeholder sprites
    pub fn solid(player_size: u32, enemy_size: u32) -> Self {
        let enemy = CollisionMask::filled(enemy_size, enemy_size);
        Self {
            player: CollisionMask::filled(player_size, player_size),
            red: enemy.clone(),
            yellow: enemy.clone(),
            green: enemy,
        }
    }

    pub fn enemy(&self, kind: EnemyKind) -> &CollisionMask {
        match kind {
            EnemyKind::Red => &self.red,
            EnemyKind::Yellow => &self.yellow,
            EnemyKind::Green => &self.green,
        }
    }
}

/// Integer offset of `b` relative to `a`, truncated toward zero
#[inline]
pub fn mask_offset(a: Vec2, b: Vec2) -> (i32, i32) {
    let d = b - a;
    (d.x as i32, d.y as i32)
}

/// Check whether two masks at the given top-left positions overlap
pub fn masks_collide(a_mask: &CollisionMask, a_pos: Vec2, b_mask: &CollisionMask, b_pos: Vec2) -> bool {
    a_mask.overlap(b_mask, mask_offset(a_pos, b_pos)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 mask with only a ring of border pixels set
    fn ring(size: u32) -> CollisionMask {
        CollisionMask::from_fn(size, size, |x, y| {
            x == 0 || y == 0 || x == size - 1 || y == size - 1
        })
    }

    #[test]
    fn test_filled_masks_overlap_when_rectangles_touch() {
        let a = CollisionMask::filled(50, 50);
        let b = CollisionMask::filled(50, 50);
        assert_eq!(a.overlap(&b, (49, 49)), Some((49, 49)));
        assert_eq!(a.overlap(&b, (50, 0)), None);
        assert_eq!(a.overlap(&b, (-49, 0)), Some((0, 0)));
        assert_eq!(a.overlap(&b, (0, -50)), None);
    }

    #[test]
    fn test_hollow_masks_can_nest_without_touching() {
        let outer = ring(10);
        let inner = CollisionMask::filled(4, 4);
        // Inner square sits entirely in the hollow centre
        assert_eq!(outer.overlap(&inner, (3, 3)), None);
        // Shift it onto the border
        assert!(outer.overlap(&inner, (0, 3)).is_some());
    }

    #[test]
    fn test_count_and_bounds() {
        let m = ring(10);
        assert_eq!(m.count(), 36);
        assert!(!m.get(-1, 0));
        assert!(!m.get(0, 10));
        assert!(m.get(9, 9));
    }

    #[test]
    fn test_offset_truncates_toward_zero() {
        let off = mask_offset(Vec2::new(100.0, 500.0), Vec2::new(99.4, 450.7));
        assert_eq!(off, (0, -49));
        let off = mask_offset(Vec2::new(0.0, 0.0), Vec2::new(49.9, 0.0));
        assert_eq!(off, (49, 0));
    }

    #[test]
    fn test_masks_collide_uses_positions() {
        let m = CollisionMask::filled(50, 50);
        assert!(masks_collide(&m, Vec2::new(150.0, 500.0), &m, Vec2::new(120.0, 460.0)));
        assert!(!masks_collide(&m, Vec2::new(150.0, 500.0), &m, Vec2::new(150.0, 440.0)));
    }
}
