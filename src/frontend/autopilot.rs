//! Headless autopilot frontend
//!
//! Plays the game without a window: it watches each presented frame and
//! picks the pointer position and key presses for the next one.

use crate::sim::{Entity, Key, World};

/// Frames between shots
const SHOT_COOLDOWN: u32 = 6;

/// Demo player that hunts bats and hops between platforms
#[derive(Debug, Clone)]
pub struct Autopilot {
    pointer: Option<f32>,
    pending: Vec<Key>,
    cooldown: u32,
    frames_seen: u64,
    frame_limit: Option<u64>,
}

impl Autopilot {
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            pointer: None,
            pending: Vec::new(),
            cooldown: 0,
            frames_seen: 0,
            frame_limit,
        }
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Decide the next frame's input from the world as it was just presented
    fn plan(&mut self, world: &World) {
        let cat = &world.player;
        let muzzle_x = cat.pos.x + cat.size.x / 2.0;

        // Nearest bat above the cat, measured from where a shot would leave
        let target = world
            .enemies
            .iter()
            .filter(|bat| bat.bottom() < cat.pos.y)
            .min_by(|a, b| {
                let da = (center_x(a) - muzzle_x).abs();
                let db = (center_x(b) - muzzle_x).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        self.cooldown = self.cooldown.saturating_sub(1);

        if let Some(bat) = target {
            // Line the muzzle up with the bat's centre
            self.pointer = Some(center_x(bat) - cat.size.x / 2.0);
            if (center_x(bat) - muzzle_x).abs() < bat.width() / 2.0 && self.cooldown == 0 {
                self.pending.push(Key::Shoot);
                self.cooldown = SHOT_COOLDOWN;
            }
        } else if let Some(platform) = world
            .platforms
            .iter()
            .filter(|p| p.pos.y > cat.bottom())
            .min_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        {
            // Drift over the closest platform below
            self.pointer = Some(center_x(platform) - cat.size.x / 2.0);
        }

        // Stuck on the floor: fire the jetpack
        if !world.is_jumping() && cat.pos.y >= world.floor_y() {
            self.pending.push(Key::ToggleJump);
        }
    }
}

fn center_x(entity: &Entity) -> f32 {
    entity.pos.x + entity.width() / 2.0
}

impl super::Frontend for Autopilot {
    fn pointer_x(&self) -> Option<f32> {
        self.pointer
    }

    fn poll_keys(&mut self) -> Vec<Key> {
        std::mem::take(&mut self.pending)
    }

    fn present(&mut self, world: &World) {
        self.frames_seen += 1;
        self.plan(world);
    }

    fn should_quit(&self) -> bool {
        self.frame_limit
            .is_some_and(|limit| self.frames_seen >= limit)
    }
}
