//! Game state - the dino, the cactus, and the running flag.
//!
//! `GameState` is owned by exactly one task (the update/render loop). Jump
//! requests from the keyboard are delivered to that task and applied through
//! [`GameState::request_jump`]; nothing else mutates the state.

use crate::collision;
use crate::dino::Dino;
use crate::obstacle::Obstacle;
use crate::snapshot::GameSnapshot;
use crate::sprite::{AnimatedSprite, Sprite, CACTUS, DINO};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    dino: Dino,
    obstacle: Obstacle,
    dino_sprite: AnimatedSprite,
    obstacle_sprite: Sprite,
    /// Cleared on collision (or by the session on shutdown); never set again.
    running: bool,
    /// Number of updates applied while running.
    ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a running game with the built-in sprites
    pub fn new() -> Self {
        Self::with_sprites(DINO, CACTUS)
    }

    pub fn with_sprites(dino_sprite: AnimatedSprite, obstacle_sprite: Sprite) -> Self {
        Self {
            dino: Dino::new(),
            obstacle: Obstacle::new(),
            dino_sprite,
            obstacle_sprite,
            running: true,
            ticks: 0,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// End the game. Idempotent; there is no way back.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn dino(&self) -> &Dino {
        &self.dino
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn dino_sprite(&self) -> &AnimatedSprite {
        &self.dino_sprite
    }

    pub fn obstacle_sprite(&self) -> &Sprite {
        &self.obstacle_sprite
    }

    /// Move the cactus to column `x`.
    ///
    /// Used to set up scenarios; normal play only moves it through [`update`](Self::update).
    pub fn place_obstacle(&mut self, x: i16) {
        self.obstacle = Obstacle::at(x);
    }

    /// Start a jump if the dino is on the ground.
    ///
    /// Returns whether the request took effect. Requests while airborne, or after
    /// the game ended, are ignored.
    pub fn request_jump(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.dino.try_jump()
    }

    /// Advance the game by one tick.
    ///
    /// Order: animation frame, jump physics, cactus scroll, collision check.
    /// A collision clears the running flag; later calls are no-ops.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        self.ticks += 1;
        self.dino.advance_frame(self.dino_sprite.frame_count());
        self.dino.step();
        self.obstacle.advance();

        if self.check_collision() {
            self.running = false;
        }
    }

    /// Pure overlap test between the dino's current frame and the cactus.
    pub fn check_collision(&self) -> bool {
        collision::check_collision(
            &self.dino,
            &self.dino_sprite,
            &self.obstacle,
            &self.obstacle_sprite,
        )
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.dino_y = self.dino.y();
        out.dino_frame = self.dino.frame();
        out.jumping = self.dino.is_jumping();
        out.obstacle_x = self.obstacle.x();
        out.obstacle_y = self.obstacle.y();
        out.running = self.running;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
