//! World state and core simulation types
//!
//! Everything the simulation mutates lives in [`World`], which is created once
//! and then threaded through every update stage by `&mut`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Tuning;

/// What an entity is (drives its default scale and sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Something for the cat to bounce off
    Platform,
    /// A bat; grows every tick
    Enemy,
    /// A yarn ball; purely decorative
    Collectible,
    /// A blast fired by the cat
    Projectile,
}

impl EntityKind {
    /// Symbolic sprite name handed to the presentation layer
    pub fn sprite_name(&self) -> &'static str {
        match self {
            EntityKind::Platform => "⬜",
            EntityKind::Enemy => "bat",
            EntityKind::Collectible => "🧶",
            EntityKind::Projectile => "💥",
        }
    }

    /// Scale applied when the entity is created
    pub fn initial_scale(&self) -> Vec2 {
        match self {
            EntityKind::Platform => Vec2::new(PLATFORM_SCALE_X, PLATFORM_SCALE_Y),
            EntityKind::Enemy => Vec2::splat(MONSTER_SCALE),
            EntityKind::Collectible => Vec2::splat(COIN_SCALE),
            EntityKind::Projectile => Vec2::ONE,
        }
    }
}

/// A moving box: platform, enemy, collectible or projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Unscaled glyph size
    pub base_size: Vec2,
    pub scale: Vec2,
    /// Vertical speed per tick (projectiles only)
    #[serde(default)]
    pub speed_y: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            base_size: Vec2::splat(SPRITE_SIZE),
            scale: kind.initial_scale(),
            speed_y: 0.0,
        }
    }

    /// Create an entity at a random position fully inside the window
    pub fn random(kind: EntityKind, rng: &mut Pcg32, tuning: &Tuning) -> Self {
        let mut entity = Self::new(kind, Vec2::ZERO);
        let size = entity.size();
        entity.pos = Vec2::new(
            spawn_coord(rng, tuning.window_width, size.x),
            spawn_coord(rng, tuning.window_height, size.y),
        );
        entity
    }

    pub fn projectile(pos: Vec2, speed_y: f32) -> Self {
        Self {
            speed_y,
            ..Self::new(EntityKind::Projectile, pos)
        }
    }

    /// Effective size (base size times scale)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.base_size * self.scale
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size())
    }

    /// Move back to the top edge at a random column
    pub fn recycle_to_top(&mut self, rng: &mut Pcg32, window_width: f32) {
        self.pos.x = spawn_coord(rng, window_width, self.width());
        self.pos.y = 0.0;
    }
}

/// Random integer coordinate in `[0, bound - extent]`, clamped so a sprite
/// larger than the window still spawns at 0
pub(crate) fn spawn_coord(rng: &mut Pcg32, bound: f32, extent: f32) -> f32 {
    let max = (bound - extent).max(0.0) as u32;
    rng.random_range(0..=max) as f32
}

/// The cat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed constant (the pointer drives x directly)
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.window_width / 2.0, tuning.window_height / 2.0),
            size: Vec2::splat(SPRITE_SIZE * CAT_SCALE),
            speed: tuning.player_speed,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Vertical motion state of the cat
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum JumpState {
    /// Gravity pulls the cat down until it reaches the floor
    #[default]
    Falling,
    /// Rising along the jump arc; `elapsed` is synthetic seconds into the jump
    Jumping { elapsed: f64 },
}

impl JumpState {
    pub fn is_jumping(&self) -> bool {
        matches!(self, JumpState::Jumping { .. })
    }

    /// Seconds into the current jump (0 while falling)
    pub fn elapsed(&self) -> f64 {
        match self {
            JumpState::Jumping { elapsed } => *elapsed,
            JumpState::Falling => 0.0,
        }
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A platform bounce or the jump key started a jump
    JumpStarted,
    /// The jump key was pressed mid-jump
    JumpCancelled,
    /// The jump arc ran its full length
    JumpEnded,
    ProjectileFired { x: f32, y: f32 },
    /// A projectile left through the top of the screen
    ProjectileExpired,
    EnemyDestroyed { x: f32, y: f32 },
    /// The top-up pass created a new enemy
    EnemySpawned,
}

/// Running counters for the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub ticks: u64,
    pub jumps: u32,
    pub shots_fired: u32,
    pub enemies_destroyed: u32,
    pub enemies_spawned: u32,
    pub projectiles_expired: u32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Constants this world runs with
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub jump: JumpState,
    pub platforms: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub collectibles: Vec<Entity>,
    pub projectiles: Vec<Entity>,
    /// Events raised since the start of the current frame
    pub events: Vec<GameEvent>,
    pub stats: SessionStats,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a fresh world: cat centred, entities scattered at random
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let platforms = (0..tuning.num_platforms)
            .map(|_| Entity::random(EntityKind::Platform, &mut rng, &tuning))
            .collect();
        let enemies = (0..tuning.initial_enemies())
            .map(|_| Entity::random(EntityKind::Enemy, &mut rng, &tuning))
            .collect();
        let collectibles = (0..tuning.num_collectibles)
            .map(|_| Entity::random(EntityKind::Collectible, &mut rng, &tuning))
            .collect();

        let world = Self {
            seed,
            time_ticks: 0,
            player: Player::new(&tuning),
            jump: JumpState::Falling,
            platforms,
            enemies,
            collectibles,
            projectiles: Vec::new(),
            events: Vec::new(),
            stats: SessionStats::default(),
            rng,
            tuning,
        };

        log::info!(
            "World created (seed {}): {} platforms, {} enemies, {} collectibles",
            seed,
            world.platforms.len(),
            world.enemies.len(),
            world.collectibles.len()
        );

        world
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping()
    }

    pub fn jump_elapsed(&self) -> f64 {
        self.jump.elapsed()
    }

    /// Start a jump from the beginning of the arc
    pub fn start_jump(&mut self) {
        self.jump = JumpState::Jumping { elapsed: 0.0 };
        self.stats.jumps += 1;
        self.events.push(GameEvent::JumpStarted);
    }

    /// Fire a projectile from just above the cat's horizontal centre
    pub fn fire_projectile(&mut self) {
        let pos = Vec2::new(
            self.player.pos.x + self.player.size.x / 2.0,
            self.player.pos.y - self.tuning.projectile_offset,
        );
        self.projectiles
            .push(Entity::projectile(pos, self.tuning.projectile_speed));
        self.stats.shots_fired += 1;
        self.events.push(GameEvent::ProjectileFired { x: pos.x, y: pos.y });
        log::debug!("Projectile fired at ({:.1}, {:.1})", pos.x, pos.y);
    }

    /// Floor the cat falls to (top edge of the cat when standing on it)
    pub fn floor_y(&self) -> f32 {
        self.tuning.window_height - self.player.size.y
    }
}
