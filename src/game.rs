use crate::clock::FrameClock;
use crate::motion::{self, Intents, MotionSettings};
use crate::player::Player;
use crate::scene::Scene;

/// Everything the frame loop mutates
#[derive(Debug, Clone)]
pub struct Game {
    pub player: Player,
    pub intents: Intents,
    pub motion: MotionSettings,
    clock: FrameClock,
}

impl Game {
    pub fn new(player: Player, motion: MotionSettings) -> Self {
        Game {
            player,
            intents: Intents::default(),
            motion,
            clock: FrameClock::new(),
        }
    }

    /// Sample elapsed time and apply the current intents; returns `dt` in seconds
    pub fn tick(&mut self, scene: &Scene, timestamp: f64) -> f64 {
        let dt = self.clock.tick(timestamp);
        motion::update(&mut self.player, scene, self.intents, dt, &self.motion);
        dt
    }
}
