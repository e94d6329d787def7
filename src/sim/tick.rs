//! Per-frame simulation tick
//!
//! Each stage below is a plain function over `&mut World`; the order they run
//! in is owned by [`Schedule`](super::schedule::Schedule).

use super::schedule::{STANDARD_STAGES, Stage};
use super::state::{Entity, EntityKind, GameEvent, JumpState, World};

/// Input sampled at the start of a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x position (the cat follows it)
    pub pointer_x: Option<f32>,
    /// Jump key pressed this tick
    pub toggle_jump: bool,
    /// Shoot key pressed this tick
    pub shoot: bool,
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space: start or cancel a jetpack jump
    ToggleJump,
    /// S: fire a projectile
    Shoot,
}

impl Key {
    /// Map a symbolic key name from the input layer
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "space" => Some(Key::ToggleJump),
            "s" => Some(Key::Shoot),
            _ => None,
        }
    }
}

/// Apply one key press immediately
pub fn apply_key(world: &mut World, key: Key) {
    match key {
        Key::ToggleJump => {
            if world.is_jumping() {
                world.jump = JumpState::Falling;
                world.events.push(GameEvent::JumpCancelled);
                log::debug!("Jump cancelled");
            } else {
                world.start_jump();
                log::debug!("Jump started from key");
            }
        }
        Key::Shoot => world.fire_projectile(),
    }
}

/// Advance the world by one tick using the standard stage order
pub fn tick(world: &mut World, input: &TickInput) {
    world.events.clear();
    if input.toggle_jump {
        apply_key(world, Key::ToggleJump);
    }
    if input.shoot {
        apply_key(world, Key::Shoot);
    }
    run_stages(world, input, STANDARD_STAGES);
}

/// Run stages in order and count the tick (keys must already be applied)
pub(crate) fn run_stages(world: &mut World, input: &TickInput, stages: &[Stage]) {
    for stage in stages {
        (stage.run)(world, input);
    }
    world.time_ticks += 1;
    world.stats.ticks += 1;
}

/// (a) The cat's x follows the pointer
pub fn track_pointer(world: &mut World, input: &TickInput) {
    if let Some(x) = input.pointer_x {
        world.player.pos.x = x;
    }
}

/// (b) Jump arc while jumping, otherwise fall until the floor
pub fn vertical_motion(world: &mut World, _input: &TickInput) {
    let tuning = &world.tuning;
    let jump = world.jump;
    match jump {
        JumpState::Jumping { elapsed } if elapsed < tuning.max_jump_time => {
            let progress = (1.0 - elapsed / tuning.max_jump_time) as f32;
            let lift = (tuning.jump_height * progress).clamp(0.0, 2.0 * tuning.jump_height);
            world.player.pos.y -= lift;
            world.jump = JumpState::Jumping {
                elapsed: elapsed + tuning.jump_time_step,
            };

            if tuning.legacy_jump_scroll {
                scroll_platforms_down(world);
            }
        }
        JumpState::Jumping { .. } => {
            world.jump = JumpState::Falling;
            world.events.push(GameEvent::JumpEnded);
        }
        JumpState::Falling => {
            if world.player.pos.y < world.floor_y() {
                world.player.pos.y += tuning.platform_fall_speed;
            }
        }
    }
}

/// Jump-gated scroll: platforms sink while the cat rises and wrap to the top
fn scroll_platforms_down(world: &mut World) {
    let World {
        platforms,
        rng,
        tuning,
        ..
    } = world;
    for platform in platforms.iter_mut() {
        platform.pos.y += tuning.platform_fall_speed;
        if platform.bottom() > tuning.window_height {
            platform.recycle_to_top(rng, tuning.window_width);
        }
    }
}

/// (b) Platforms scroll up; any that leave the top are replaced by a fresh one
pub fn recycle_platforms(world: &mut World, _input: &TickInput) {
    let World {
        platforms,
        rng,
        tuning,
        ..
    } = world;
    for platform in platforms.iter_mut() {
        platform.pos.y -= tuning.platform_fall_speed;
        if platform.bottom() <= 0.0 {
            *platform = Entity::random(EntityKind::Platform, rng, tuning);
            log::trace!("Platform replaced at ({}, {})", platform.pos.x, platform.pos.y);
        }
    }
}

/// (c) Touching a platform while not jumping starts a jump
pub fn resolve_platform_contact(world: &mut World, _input: &TickInput) {
    if world.is_jumping() {
        return;
    }
    let cat = world.player.bounds();
    if let Some(index) = world
        .platforms
        .iter()
        .position(|platform| platform.bounds().overlaps(&cat))
    {
        world.start_jump();
        log::debug!("Bounced off platform {}", index);
    }
}

/// (d) Enemies fall and wrap to the top; the population is topped up to its floor
pub fn update_enemies(world: &mut World, _input: &TickInput) {
    let World {
        enemies,
        rng,
        tuning,
        events,
        stats,
        ..
    } = world;

    for enemy in enemies.iter_mut() {
        enemy.pos.y += tuning.enemy_fall_speed;
        if enemy.bottom() > tuning.window_height {
            enemy.recycle_to_top(rng, tuning.window_width);
        }
    }

    while enemies.len() < tuning.enemy_floor() {
        enemies.push(Entity::random(EntityKind::Enemy, rng, tuning));
        events.push(GameEvent::EnemySpawned);
        stats.enemies_spawned += 1;
        log::debug!("Enemy spawned ({} alive)", enemies.len());
    }
}

/// (d) Enemies grow a little every tick, forever
pub fn grow_enemies(world: &mut World, _input: &TickInput) {
    let growth = world.tuning.enemy_growth;
    for enemy in &mut world.enemies {
        enemy.scale += growth;
    }
}

/// (d) Collectibles fall and wrap to the top
pub fn update_collectibles(world: &mut World, _input: &TickInput) {
    let World {
        collectibles,
        rng,
        tuning,
        ..
    } = world;
    for collectible in collectibles.iter_mut() {
        collectible.pos.y += tuning.collectible_fall_speed;
        if collectible.bottom() > tuning.window_height {
            collectible.recycle_to_top(rng, tuning.window_width);
        }
    }
}

/// (e) Move projectiles, then remove those that left the screen or hit an enemy
///
/// Removal is mark-and-sweep so every projectile and enemy takes part in at
/// most one removal per tick and survivors keep their order.
pub fn update_projectiles(world: &mut World, _input: &TickInput) {
    if world.projectiles.is_empty() {
        return;
    }

    let mut spent = vec![false; world.projectiles.len()];
    let mut killed = vec![false; world.enemies.len()];

    for (i, projectile) in world.projectiles.iter_mut().enumerate() {
        projectile.pos.y += projectile.speed_y;

        if projectile.pos.y < 0.0 {
            spent[i] = true;
            world.events.push(GameEvent::ProjectileExpired);
            world.stats.projectiles_expired += 1;
            continue;
        }

        let bounds = projectile.bounds();
        let hit = (0..world.enemies.len())
            .find(|&j| !killed[j] && world.enemies[j].bounds().overlaps(&bounds));
        if let Some(j) = hit {
            spent[i] = true;
            killed[j] = true;
            let enemy = &world.enemies[j];
            world.events.push(GameEvent::EnemyDestroyed {
                x: enemy.pos.x,
                y: enemy.pos.y,
            });
            world.stats.enemies_destroyed += 1;
            log::debug!("Enemy destroyed at ({:.1}, {:.1})", enemy.pos.x, enemy.pos.y);
        }
    }

    sweep(&mut world.projectiles, &spent);
    sweep(&mut world.enemies, &killed);
}

/// Drop every entity whose flag is set, keeping the rest in order
fn sweep(entities: &mut Vec<Entity>, remove: &[bool]) {
    let mut index = 0;
    entities.retain(|_| {
        let keep = !remove[index];
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Tuning;
    use glam::Vec2;

    fn empty_world() -> World {
        let mut world = World::new(12345, Tuning::default());
        world.platforms.clear();
        world.enemies.clear();
        world.collectibles.clear();
        world
    }

    #[test]
    fn test_pointer_moves_cat() {
        let mut world = empty_world();
        let input = TickInput {
            pointer_x: Some(77.0),
            ..Default::default()
        };
        track_pointer(&mut world, &input);
        assert_eq!(world.player.pos.x, 77.0);

        // No pointer sample leaves x alone
        track_pointer(&mut world, &TickInput::default());
        assert_eq!(world.player.pos.x, 77.0);
    }

    #[test]
    fn test_gravity_until_floor() {
        let mut world = empty_world();
        let start = world.player.pos.y;
        vertical_motion(&mut world, &TickInput::default());
        assert_eq!(world.player.pos.y, start + PLATFORM_FALL_SPEED);

        world.player.pos.y = world.floor_y();
        vertical_motion(&mut world, &TickInput::default());
        assert_eq!(world.player.pos.y, world.floor_y());
    }

    #[test]
    fn test_jump_arc_lift_decreases() {
        let mut world = empty_world();
        world.start_jump();

        let y0 = world.player.pos.y;
        vertical_motion(&mut world, &TickInput::default());
        let first = y0 - world.player.pos.y;
        assert!((first - JUMP_HEIGHT).abs() < 1e-4);

        let y1 = world.player.pos.y;
        vertical_motion(&mut world, &TickInput::default());
        let second = y1 - world.player.pos.y;
        assert!(second < first);
        assert!((world.jump_elapsed() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_jump_arc_ends_and_resets() {
        let mut world = empty_world();
        world.start_jump();
        let mut ticks = 0;
        while world.is_jumping() {
            let before = world.jump_elapsed();
            vertical_motion(&mut world, &TickInput::default());
            if world.is_jumping() {
                assert!((world.jump_elapsed() - before - JUMP_TIME_STEP).abs() < 1e-5);
            } else {
                assert!(before >= MAX_JUMP_TIME);
            }
            ticks += 1;
            assert!(ticks < 20, "jump never ended");
        }
        assert_eq!(world.jump_elapsed(), 0.0);
        assert!(world.events.contains(&GameEvent::JumpEnded));
    }

    #[test]
    fn test_jump_arc_lifts_for_eleven_ticks() {
        let mut world = empty_world();
        world.start_jump();
        let mut lifting = 0;
        loop {
            let before = world.jump_elapsed();
            vertical_motion(&mut world, &TickInput::default());
            if !world.is_jumping() {
                assert!(before >= MAX_JUMP_TIME);
                break;
            }
            lifting += 1;
            assert!(lifting < 20, "jump never ended");
        }
        // Ten 0.1 steps sum to just under 1.0, so the arc gets one more lift
        assert_eq!(lifting, 11);
    }

    #[test]
    fn test_jump_key_toggles() {
        let mut world = empty_world();
        apply_key(&mut world, Key::ToggleJump);
        assert!(world.is_jumping());
        apply_key(&mut world, Key::ToggleJump);
        assert!(!world.is_jumping());
        assert_eq!(world.jump_elapsed(), 0.0);
        assert_eq!(
            world.events,
            vec![GameEvent::JumpStarted, GameEvent::JumpCancelled]
        );
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("space"), Some(Key::ToggleJump));
        assert_eq!(Key::from_name("s"), Some(Key::Shoot));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_platform_scrolls_up_and_is_replaced() {
        let mut world = empty_world();
        world
            .platforms
            .push(Entity::new(EntityKind::Platform, Vec2::new(10.0, 200.0)));
        // Bottom edge ends up exactly at the top of the screen
        let height = world.platforms[0].height();
        world
            .platforms
            .push(Entity::new(EntityKind::Platform, Vec2::new(10.0, PLATFORM_FALL_SPEED - height)));

        recycle_platforms(&mut world, &TickInput::default());

        assert_eq!(world.platforms.len(), 2);
        assert_eq!(world.platforms[0].pos.y, 200.0 - PLATFORM_FALL_SPEED);
        let fresh = &world.platforms[1];
        assert!(fresh.pos.y >= 0.0 && fresh.bottom() <= WINDOW_HEIGHT);
    }

    #[test]
    fn test_legacy_scroll_only_when_enabled() {
        let mut world = empty_world();
        world
            .platforms
            .push(Entity::new(EntityKind::Platform, Vec2::new(10.0, 100.0)));
        world.start_jump();
        vertical_motion(&mut world, &TickInput::default());
        assert_eq!(world.platforms[0].pos.y, 100.0);

        world.tuning.legacy_jump_scroll = true;
        vertical_motion(&mut world, &TickInput::default());
        assert_eq!(world.platforms[0].pos.y, 100.0 + PLATFORM_FALL_SPEED);

        // Sinking past the bottom wraps to the top
        world.platforms[0].pos.y = WINDOW_HEIGHT;
        vertical_motion(&mut world, &TickInput::default());
        assert_eq!(world.platforms[0].pos.y, 0.0);
    }

    #[test]
    fn test_platform_contact_starts_jump() {
        let mut world = empty_world();
        let below_cat = world.player.pos + Vec2::new(0.0, world.player.size.y - 5.0);
        world
            .platforms
            .push(Entity::new(EntityKind::Platform, below_cat));

        resolve_platform_contact(&mut world, &TickInput::default());
        assert!(world.is_jumping());
        assert_eq!(world.jump_elapsed(), 0.0);
        assert_eq!(world.stats.jumps, 1);

        // Already jumping: no restart
        world.jump = JumpState::Jumping { elapsed: 0.5 };
        resolve_platform_contact(&mut world, &TickInput::default());
        assert_eq!(world.jump_elapsed(), 0.5);
        assert_eq!(world.stats.jumps, 1);
    }

    #[test]
    fn test_enemies_fall_wrap_and_top_up() {
        let mut world = empty_world();
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(50.0, 100.0)));
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(50.0, WINDOW_HEIGHT - 10.0)));

        update_enemies(&mut world, &TickInput::default());

        assert_eq!(world.enemies[0].pos.y, 100.0 + MONSTER_FALL_SPEED);
        assert_eq!(world.enemies[1].pos.y, 0.0);
        assert_eq!(world.enemies.len(), NUM_PLATFORMS / 3);
        assert_eq!(world.stats.enemies_spawned as usize, NUM_PLATFORMS / 3 - 2);
    }

    #[test]
    fn test_top_up_never_removes_excess() {
        let mut world = empty_world();
        for i in 0..10 {
            world
                .enemies
                .push(Entity::new(EntityKind::Enemy, Vec2::new(i as f32 * 40.0, 0.0)));
        }
        update_enemies(&mut world, &TickInput::default());
        assert_eq!(world.enemies.len(), 10);
    }

    #[test]
    fn test_enemies_grow() {
        let mut world = empty_world();
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::ZERO));
        for _ in 0..10 {
            grow_enemies(&mut world, &TickInput::default());
        }
        let expected = MONSTER_SCALE + 10.0 * MONSTER_GROWTH;
        assert!((world.enemies[0].scale.x - expected).abs() < 1e-5);
        assert!((world.enemies[0].scale.y - expected).abs() < 1e-5);
    }

    #[test]
    fn test_collectibles_fall_and_wrap() {
        let mut world = empty_world();
        world
            .collectibles
            .push(Entity::new(EntityKind::Collectible, Vec2::new(5.0, 10.0)));
        world
            .collectibles
            .push(Entity::new(EntityKind::Collectible, Vec2::new(5.0, WINDOW_HEIGHT)));

        update_collectibles(&mut world, &TickInput::default());

        assert_eq!(world.collectibles.len(), 2);
        assert_eq!(world.collectibles[0].pos.y, 10.0 + COIN_FALL_SPEED);
        assert_eq!(world.collectibles[1].pos.y, 0.0);
    }

    #[test]
    fn test_projectile_moves_up() {
        let mut world = empty_world();
        world.projectiles.push(Entity::projectile(Vec2::new(10.0, 300.0), -15.0));
        update_projectiles(&mut world, &TickInput::default());
        assert_eq!(world.projectiles[0].pos.y, 285.0);
    }

    #[test]
    fn test_projectile_expires_off_top() {
        let mut world = empty_world();
        world.projectiles.push(Entity::projectile(Vec2::new(10.0, 5.0), -15.0));
        // Enemy right where the projectile ends up; expiry wins
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(0.0, -20.0)));

        update_projectiles(&mut world, &TickInput::default());

        assert!(world.projectiles.is_empty());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.stats.projectiles_expired, 1);
        assert_eq!(world.stats.enemies_destroyed, 0);
    }

    #[test]
    fn test_projectile_kills_first_enemy_only() {
        let mut world = empty_world();
        world.projectiles.push(Entity::projectile(Vec2::new(100.0, 415.0), -15.0));
        // Both overlap the projectile after it moves to y=400
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(95.0, 395.0)));
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(105.0, 405.0)));

        update_projectiles(&mut world, &TickInput::default());

        assert!(world.projectiles.is_empty());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].pos, Vec2::new(105.0, 405.0));
    }

    #[test]
    fn test_two_projectiles_cannot_share_a_kill() {
        let mut world = empty_world();
        world.projectiles.push(Entity::projectile(Vec2::new(100.0, 415.0), -15.0));
        world.projectiles.push(Entity::projectile(Vec2::new(102.0, 415.0), -15.0));
        world.projectiles.push(Entity::projectile(Vec2::new(700.0, 415.0), -15.0));
        world
            .enemies
            .push(Entity::new(EntityKind::Enemy, Vec2::new(95.0, 395.0)));

        update_projectiles(&mut world, &TickInput::default());

        assert!(world.enemies.is_empty());
        // Second projectile found nothing left to hit and keeps flying
        assert_eq!(world.projectiles.len(), 2);
        assert_eq!(world.projectiles[0].pos.x, 102.0);
        assert_eq!(world.projectiles[1].pos.x, 700.0);
        assert_eq!(world.stats.enemies_destroyed, 1);
    }
}
