//! Presentation/input abstraction and the game loop
//!
//! A [`Frontend`] supplies the pointer position and key presses and shows the
//! world each frame. [`GameLoop`] owns the [`World`] and the stage
//! [`Schedule`] and drives them one frame at a time.

pub mod autopilot;

pub use autopilot::Autopilot;

use crate::sim::{GameEvent, Key, Schedule, SessionStats, TickInput, World, apply_key};

/// Windowing/input collaborator
pub trait Frontend {
    /// Current pointer x, if the pointer is over the window
    fn pointer_x(&self) -> Option<f32>;

    /// Keys pressed since the previous frame, in press order
    fn poll_keys(&mut self) -> Vec<Key>;

    /// Show the world after a tick
    fn present(&mut self, world: &World);

    /// The frontend wants the session to end (window closed, frame limit hit)
    fn should_quit(&self) -> bool {
        false
    }
}

/// Driver that owns the world and runs one tick per frame
pub struct GameLoop<F: Frontend> {
    world: World,
    frontend: F,
    schedule: Schedule,
    frames: u64,
}

impl<F: Frontend> GameLoop<F> {
    pub fn new(world: World, frontend: F) -> Self {
        Self::with_schedule(world, frontend, Schedule::standard())
    }

    pub fn with_schedule(world: World, frontend: F, schedule: Schedule) -> Self {
        Self {
            world,
            frontend,
            schedule,
            frames: 0,
        }
    }

    /// Sample input, apply key presses, tick, present
    pub fn run_frame(&mut self) {
        self.world.events.clear();

        // Keys take effect immediately, before the rest of the tick
        for key in self.frontend.poll_keys() {
            apply_key(&mut self.world, key);
        }

        let input = TickInput {
            pointer_x: self.frontend.pointer_x(),
            ..Default::default()
        };
        self.schedule.run(&mut self.world, &input);
        self.frames += 1;

        for event in &self.world.events {
            match event {
                GameEvent::EnemyDestroyed { x, y } => {
                    log::debug!("Frame {}: enemy destroyed at ({:.0}, {:.0})", self.frames, x, y)
                }
                other => log::trace!("Frame {}: {:?}", self.frames, other),
            }
        }

        self.frontend.present(&self.world);
    }

    /// Run frames until the frontend quits or `max_frames` is reached
    pub fn run(&mut self, max_frames: Option<u64>) -> SessionStats {
        while !self.frontend.should_quit() && max_frames.is_none_or(|max| self.frames < max) {
            self.run_frame();
        }

        let stats = &self.world.stats;
        log::info!(
            "Session over after {} frames ({} ticks): {} jumps, {} shots, {} projectiles expired, \
             {} enemies destroyed, {} enemies spawned, {} enemies alive",
            self.frames,
            stats.ticks,
            stats.jumps,
            stats.shots_fired,
            stats.projectiles_expired,
            stats.enemies_destroyed,
            stats.enemies_spawned,
            self.world.enemies.len()
        );
        stats.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_world(self) -> World {
        self.world
    }
}
