//! Ordered update stages
//!
//! The frame step is a fixed list of named stage functions. A driver owns a
//! [`Schedule`] and runs it once per frame instead of registering callbacks
//! with a presentation framework.

use super::state::World;
use super::tick::{
    TickInput, grow_enemies, recycle_platforms, resolve_platform_contact, run_stages,
    track_pointer, update_collectibles, update_enemies, update_projectiles, vertical_motion,
};

/// Signature shared by every stage
pub type StageFn = fn(&mut World, &TickInput);

/// A named update step
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub run: StageFn,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The game's stage order: tracking, vertical motion and platforms,
/// platform contact, enemies and collectibles, projectiles
pub const STANDARD_STAGES: &[Stage] = &[
    Stage {
        name: "track_pointer",
        run: track_pointer,
    },
    Stage {
        name: "vertical_motion",
        run: vertical_motion,
    },
    Stage {
        name: "recycle_platforms",
        run: recycle_platforms,
    },
    Stage {
        name: "resolve_platform_contact",
        run: resolve_platform_contact,
    },
    Stage {
        name: "update_enemies",
        run: update_enemies,
    },
    Stage {
        name: "grow_enemies",
        run: grow_enemies,
    },
    Stage {
        name: "update_collectibles",
        run: update_collectibles,
    },
    Stage {
        name: "update_projectiles",
        run: update_projectiles,
    },
];

/// An ordered list of stages run once per tick
#[derive(Debug, Clone)]
pub struct Schedule {
    stages: Vec<Stage>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl Schedule {
    /// The stage order the game ships with
    pub fn standard() -> Self {
        Self {
            stages: STANDARD_STAGES.to_vec(),
        }
    }

    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Drop a stage by name (returns whether one was removed)
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.stages.len();
        self.stages.retain(|stage| stage.name != name);
        self.stages.len() != before
    }

    pub fn push(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name).collect()
    }

    /// Run every stage in order and advance the tick counter
    pub fn run(&self, world: &mut World, input: &TickInput) {
        run_stages(world, input, &self.stages);
    }
}
