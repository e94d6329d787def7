//! Flat sprite list for the presentation layer
//!
//! The simulation never draws; a frontend asks the world for sprites and
//! renders them however it likes.

use serde::Serialize;

use super::collision::Aabb;
use super::state::{EntityKind, World};

/// Sprite name used for the cat
pub const PLAYER_SPRITE: &str = "cat";

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Entity(EntityKind),
}

/// One drawable box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Symbolic name for the frontend's sprite lookup
    pub name: &'static str,
    pub bounds: Aabb,
}

impl World {
    /// Sprites back to front: platforms, collectibles, enemies, projectiles, then the cat
    pub fn sprites(&self) -> Vec<Sprite> {
        let entity_count = self.platforms.len()
            + self.collectibles.len()
            + self.enemies.len()
            + self.projectiles.len();
        let mut sprites = Vec::with_capacity(entity_count + 1);

        for entity in self
            .platforms
            .iter()
            .chain(&self.collectibles)
            .chain(&self.enemies)
            .chain(&self.projectiles)
        {
            sprites.push(Sprite {
                kind: SpriteKind::Entity(entity.kind),
                name: entity.kind.sprite_name(),
                bounds: entity.bounds(),
            });
        }

        sprites.push(Sprite {
            kind: SpriteKind::Player,
            name: PLAYER_SPRITE,
            bounds: self.player.bounds(),
        });

        sprites
    }
}
