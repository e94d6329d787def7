//! Jetpack Cat - a single-screen platform hopper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, recycling, collisions, world state)
//! - `settings`: Tunable game constants, loadable from JSON
//! - `frontend`: Presentation/input abstraction and the driver-owned game loop
//! - `error`: Configuration errors

pub mod error;
pub mod frontend;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;

    /// Horizontal speed of the cat (kept for configuration; the pointer drives x)
    pub const CAT_SPEED: f32 = 9.0;
    /// Lift applied on the first tick of a jump
    pub const JUMP_HEIGHT: f32 = 16.0;
    /// Jump arc duration (synthetic seconds)
    pub const MAX_JUMP_TIME: f64 = 1.0;
    /// Synthetic time added to the jump arc per tick
    pub const JUMP_TIME_STEP: f64 = 0.1;

    /// How fast the world scrolls past the cat (also the cat's fall speed)
    pub const PLATFORM_FALL_SPEED: f32 = 8.5;
    /// Number of platforms on screen
    pub const NUM_PLATFORMS: usize = 16;
    pub const MONSTER_FALL_SPEED: f32 = 3.0;
    pub const COIN_FALL_SPEED: f32 = 2.0;
    pub const COINS: usize = 8;
    /// Per-tick scale increase for every bat
    pub const MONSTER_GROWTH: f32 = 0.001;

    /// Projectile vertical speed (negative is up)
    pub const BULLET_SPEED: f32 = -15.0;
    /// Projectiles spawn this far above the cat
    pub const BULLET_OFFSET: f32 = 20.0;

    /// Unscaled size of a sprite glyph
    pub const SPRITE_SIZE: f32 = 36.0;
    pub const CAT_SCALE: f32 = 1.2;
    pub const PLATFORM_SCALE_X: f32 = 2.2;
    pub const PLATFORM_SCALE_Y: f32 = 0.5;
    pub const MONSTER_SCALE: f32 = 0.5;
    pub const COIN_SCALE: f32 = 0.5;
}
