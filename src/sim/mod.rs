//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, colliding};
pub use schedule::{STANDARD_STAGES, Schedule, Stage, StageFn};
pub use snapshot::{PLAYER_SPRITE, Sprite, SpriteKind};
pub use state::{Entity, EntityKind, GameEvent, JumpState, Player, SessionStats, World};
pub use tick::{
    Key, TickInput, apply_key, grow_enemies, recycle_platforms, resolve_platform_contact, tick,
    track_pointer, update_collectibles, update_enemies, update_projectiles, vertical_motion,
};
