//! Game tuning
//!
//! Every constant the simulation reads lives here so a session can be
//! reconfigured from a JSON file without rebuilding.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,

    // === Cat ===
    /// Horizontal speed constant carried on the player
    pub player_speed: f32,
    /// Lift on the first tick of a jump
    pub jump_height: f32,
    /// Jump arc length in synthetic seconds
    pub max_jump_time: f64,
    /// Synthetic seconds added per tick while jumping
    pub jump_time_step: f64,

    // === Scrolling & spawning ===
    /// Platform scroll speed and cat fall speed
    pub platform_fall_speed: f32,
    pub num_platforms: usize,
    pub enemy_fall_speed: f32,
    pub collectible_fall_speed: f32,
    pub num_collectibles: usize,
    /// Per-tick scale increase for enemies
    pub enemy_growth: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_offset: f32,

    /// Also scroll platforms downward while jumping (the old jump-gated pass)
    pub legacy_jump_scroll: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            player_speed: CAT_SPEED,
            jump_height: JUMP_HEIGHT,
            max_jump_time: MAX_JUMP_TIME,
            jump_time_step: JUMP_TIME_STEP,

            platform_fall_speed: PLATFORM_FALL_SPEED,
            num_platforms: NUM_PLATFORMS,
            enemy_fall_speed: MONSTER_FALL_SPEED,
            collectible_fall_speed: COIN_FALL_SPEED,
            num_collectibles: COINS,
            enemy_growth: MONSTER_GROWTH,

            projectile_speed: BULLET_SPEED,
            projectile_offset: BULLET_OFFSET,

            legacy_jump_scroll: false,
        }
    }
}

impl Tuning {
    /// Minimum number of enemies kept alive by the top-up pass
    pub fn enemy_floor(&self) -> usize {
        self.num_platforms / 3
    }

    /// Enemies created with the world
    pub fn initial_enemies(&self) -> usize {
        self.num_platforms / 2
    }

    /// Parse and validate tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.window_width > 0.0) || !(self.window_height > 0.0) {
            return Err(Error::Invalid {
                field: "window_width/window_height",
                reason: "must be positive",
            });
        }
        if self.num_platforms == 0 {
            return Err(Error::Invalid {
                field: "num_platforms",
                reason: "must be at least 1",
            });
        }
        if !(self.jump_height >= 0.0) {
            return Err(Error::Invalid {
                field: "jump_height",
                reason: "must not be negative",
            });
        }
        if !(self.max_jump_time > 0.0) {
            return Err(Error::Invalid {
                field: "max_jump_time",
                reason: "must be positive",
            });
        }
        if !(self.jump_time_step > 0.0) {
            return Err(Error::Invalid {
                field: "jump_time_step",
                reason: "must be positive",
            });
        }
        if !(self.projectile_speed < 0.0) {
            return Err(Error::Invalid {
                field: "projectile_speed",
                reason: "must be negative (projectiles travel up)",
            });
        }
        Ok(())
    }
}
