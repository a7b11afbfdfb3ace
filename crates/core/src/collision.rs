//! Cell-exact sprite collision.
//!
//! Two sprites collide only where a non-space cell of one lands on a non-space
//! cell of the other. Overlapping bounding boxes with nothing but transparent
//! cells in the overlap are not a hit.

use crate::dino::Dino;
use crate::obstacle::Obstacle;
use crate::sprite::{AnimatedSprite, Sprite};
use crate::types::DINO_COLUMN;

/// Test two positioned sprites for a glyph-on-glyph overlap.
///
/// `(ax, ay)` and `(bx, by)` are the top-left grid cells of `a` and `b`.
/// Scans `a` row-major and stops at the first hit.
pub fn sprites_overlap(a: &Sprite, ax: i16, ay: i16, b: &Sprite, bx: i16, by: i16) -> bool {
    let (aw, ah) = (a.width() as i16, a.height() as i16);
    let (bw, bh) = (b.width() as i16, b.height() as i16);

    // Disjoint boxes cannot share a cell.
    if ax + aw <= bx || bx + bw <= ax || ay + ah <= by || by + bh <= ay {
        return false;
    }

    for dy in 0..ah {
        for dx in 0..aw {
            if !a.is_solid(dx, dy) {
                continue;
            }
            if b.is_solid(ax + dx - bx, ay + dy - by) {
                return true;
            }
        }
    }
    false
}

/// Does the dino's current frame touch the cactus?
pub fn check_collision(
    dino: &Dino,
    dino_sprite: &AnimatedSprite,
    obstacle: &Obstacle,
    obstacle_sprite: &Sprite,
) -> bool {
    sprites_overlap(
        dino_sprite.frame(dino.frame()),
        DINO_COLUMN,
        dino.y(),
        obstacle_sprite,
        obstacle.x(),
        obstacle.y(),
    )
}
