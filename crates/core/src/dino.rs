//! Player character state and jump physics.
//!
//! The dino stays in a fixed column; only its row changes. Jumps follow a
//! discrete parabola: each tick the row moves by the current velocity, then
//! gravity is added to the velocity.

use crate::types::{GRAVITY, GROUND_REST_Y, JUMP_IMPULSE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dino {
    /// Top row of the sprite.
    y: i16,
    /// Rows per tick, negative is up.
    vy: i16,
    jumping: bool,
    /// Index into the animation cycle.
    frame: usize,
}

impl Default for Dino {
    fn default() -> Self {
        Self::new()
    }
}

impl Dino {
    /// A dino standing on the ground, animation frame 0.
    pub fn new() -> Self {
        Self {
            y: GROUND_REST_Y,
            vy: 0,
            jumping: false,
            frame: 0,
        }
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn vy(&self) -> i16 {
        self.vy
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Start a jump.
    ///
    /// Returns false (and changes nothing) while already airborne.
    pub fn try_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.vy = JUMP_IMPULSE;
        true
    }

    pub fn advance_frame(&mut self, frame_count: usize) {
        self.frame = (self.frame + 1) % frame_count.max(1);
    }

    /// Apply one tick of vertical motion.
    ///
    /// Landing snaps exactly onto the rest row and ends the jump on the same tick.
    pub fn step(&mut self) {
        if !self.jumping {
            return;
        }

        self.y += self.vy;
        self.vy += GRAVITY;

        if self.y >= GROUND_REST_Y {
            self.y = GROUND_REST_Y;
            self.jumping = false;
            self.vy = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_dino_rests_on_ground() {
        let dino = Dino::new();
        assert_eq!(dino.y(), GROUND_REST_Y);
        assert_eq!(dino.vy(), 0);
        assert!(!dino.is_jumping());
        assert_eq!(dino.frame(), 0);
    }

    #[test]
    fn step_without_jump_keeps_position() {
        let mut dino = Dino::new();
        for _ in 0..50 {
            dino.step();
            assert_eq!(dino.y(), GROUND_REST_Y);
        }
    }

    #[test]
    fn jump_applies_impulse_once() {
        let mut dino = Dino::new();
        assert!(dino.try_jump());
        assert_eq!(dino.vy(), JUMP_IMPULSE);

        dino.step();
        let (y, vy) = (dino.y(), dino.vy());
        assert!(!dino.try_jump());
        assert_eq!((dino.y(), dino.vy()), (y, vy));
    }

    #[test]
    fn arc_rises_then_lands_exactly() {
        let mut dino = Dino::new();
        dino.try_jump();

        let expected = [10, 6, 3, 1, 0, 0, 1, 3, 6, 10];
        for y in expected {
            dino.step();
            assert_eq!(dino.y(), y);
            assert!(dino.is_jumping());
        }

        dino.step();
        assert_eq!(dino.y(), GROUND_REST_Y);
        assert!(!dino.is_jumping());
        assert_eq!(dino.vy(), 0);
    }

    #[test]
    fn frame_cycles() {
        let mut dino = Dino::new();
        dino.advance_frame(2);
        assert_eq!(dino.frame(), 1);
        dino.advance_frame(2);
        assert_eq!(dino.frame(), 0);
    }
}
