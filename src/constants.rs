//! Tuning constants for the session simulation.
//!
//! Distances are virtual pixels, times are milliseconds of simulated clock.

pub const STARTING_TIME_SECS: u32 = 30;
pub const DEFAULT_TARGET_SCORE: u32 = 100;
pub const SCORE_PER_KILL: u32 = 10;
pub const ENEMIES_PER_LEVEL: u32 = 10;

pub const STARTING_ENEMY_SPEED: i32 = 3; // px per fall step
pub const ENEMY_SPEED_PER_LEVEL: i32 = 1;

pub const SPAWN_BASE_PERIOD_MS: u64 = 1000;
pub const SPAWN_PERIOD_STEP_MS: u64 = 100; // subtracted once per level gained
pub const SPAWN_MIN_PERIOD_MS: u64 = 350;

pub const COUNTDOWN_STEP_MS: u64 = 1000;
pub const ENEMY_FALL_STEP_MS: u64 = 30;
pub const PROJECTILE_STEP_MS: u64 = 25;

pub const SHOT_COOLDOWN_MS: u64 = 160;
pub const PROJECTILE_RISE_PX: i32 = 12;
pub const PROJECTILE_START_BOTTOM: i32 = 70;
pub const PROJECTILE_MUZZLE_OFFSET: i32 = 12; // fired from player.x + this

pub const PLAYER_MIN_X: i32 = 10;
pub const PLAYER_RIGHT_MARGIN: i32 = 30; // max x = viewport width - this
pub const PLAYER_STEP_PX: i32 = 30;

// Collision boxes.
pub const ENEMY_WIDTH: i32 = 50;
pub const ENEMY_HEIGHT: i32 = 50;
pub const PROJECTILE_WIDTH: i32 = 6;
pub const PROJECTILE_HEIGHT: i32 = 18;

/// An enemy whose y passes (viewport height - this) has reached the player.
pub const ENEMY_BOTTOM_MARGIN: i32 = 80;
