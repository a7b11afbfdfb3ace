use crate::types::{GROUND_REST_Y, OBSTACLE_ROW, OBSTACLE_SPAWN_X};

/// Plain copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub dino_y: i16,
    pub dino_frame: usize,
    pub jumping: bool,
    pub obstacle_x: i16,
    pub obstacle_y: i16,
    pub running: bool,
    pub ticks: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            dino_y: GROUND_REST_Y,
            dino_frame: 0,
            jumping: false,
            obstacle_x: OBSTACLE_SPAWN_X,
            obstacle_y: OBSTACLE_ROW,
            running: true,
            ticks: 0,
        }
    }
}
