use crate::player::Player;
use crate::scene::Scene;
use crate::vector::Vector2;

/// Movement intents sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Logical key behind an intent, independent of the physical binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl Intents {
    /// Key-down event; auto-repeat events are ignored
    pub fn press(&mut self, key: Key, repeat: bool) {
        if !repeat {
            *self.flag_mut(key) = true;
        }
    }

    /// Key-up event
    pub fn release(&mut self, key: Key, repeat: bool) {
        if !repeat {
            *self.flag_mut(key) = false;
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }

    fn flag_mut(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Forward => &mut self.forward,
            Key::Backward => &mut self.backward,
            Key::TurnLeft => &mut self.turn_left,
            Key::TurnRight => &mut self.turn_right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    /// Grid units per second
    pub speed: f64,
    /// Half extent of the player's square footprint
    pub size: f64,
    /// Radians turned per tick
    pub turn_step: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        MotionSettings {
            speed: 3.1,
            size: 0.3,
            turn_step: std::f64::consts::PI * 0.02,
        }
    }
}

/// Check if a square footprint of half extent `size` centered on `p`
/// overlaps no occupied cell
///
/// Only the four corners are tested, so `size` must stay below half a cell.
pub fn can_occupy(scene: &Scene, p: Vector2, size: f64) -> bool {
    let corners = [
        Vector2::new(p.x - size, p.y - size),
        Vector2::new(p.x + size, p.y - size),
        Vector2::new(p.x - size, p.y + size),
        Vector2::new(p.x + size, p.y + size),
    ];
    corners.iter().all(|&corner| !scene.is_wall(corner))
}

/// Apply `delta` one axis at a time, keeping each axis only if the candidate
/// position is free; this lets the player slide along walls
fn slide(player: &mut Player, scene: &Scene, delta: Vector2, size: f64) {
    let candidate = Vector2::new(player.position.x + delta.x, player.position.y);
    if can_occupy(scene, candidate, size) {
        player.position = candidate;
    }

    let candidate = Vector2::new(player.position.x, player.position.y + delta.y);
    if can_occupy(scene, candidate, size) {
        player.position = candidate;
    }
}

/// Advance `player` by one tick of `dt` seconds
pub fn update(
    player: &mut Player,
    scene: &Scene,
    intents: Intents,
    dt: f64,
    settings: &MotionSettings,
) {
    let velocity = player.heading() * (settings.speed * dt);

    if intents.forward {
        slide(player, scene, velocity, settings.size);
    }
    if intents.backward {
        slide(player, scene, -velocity, settings.size);
    }
    if intents.turn_left {
        player.direction -= settings.turn_step;
    }
    if intents.turn_right {
        player.direction += settings.turn_step;
    }
}
