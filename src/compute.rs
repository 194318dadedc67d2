//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` (and, where needed, an RNG handle) and returns a brand-new
//! `GameSession`.  Side effects are limited to the injected RNG.
//!
//! Timing is modelled as one central scheduler: `tick` receives the
//! milliseconds elapsed since the previous call and each subsystem
//! (countdown, spawner, enemy fall, projectile motion) banks them in its own
//! accumulator, performing zero or more fixed-size steps per call.

use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Enemy, GameSession, GameStatus, LossReason, Player, Projectile, Viewport,
};
use crate::geometry::Rect;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Milliseconds between enemy spawns at the given level, floored at 350.
pub fn spawn_period_ms(level: u32) -> u64 {
    SPAWN_BASE_PERIOD_MS
        .saturating_sub((level as u64 - 1) * SPAWN_PERIOD_STEP_MS)
        .max(SPAWN_MIN_PERIOD_MS)
}

// ── Collision boxes ──────────────────────────────────────────────────────────

pub fn enemy_rect(enemy: &Enemy) -> Rect {
    Rect::new(enemy.x, enemy.y, ENEMY_WIDTH, ENEMY_HEIGHT)
}

/// Projectiles track their offset from the lower edge, so the box is
/// converted to top-based coordinates against the current viewport.
pub fn projectile_rect(projectile: &Projectile, viewport: Viewport) -> Rect {
    let top = viewport.height - projectile.bottom - PROJECTILE_HEIGHT;
    Rect::new(projectile.x, top, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// The session shown behind the start banner, before the first game.
pub fn idle_session(target_score: u32, viewport: Viewport) -> GameSession {
    GameSession {
        player: Player {
            x: viewport.width / 2,
        },
        enemies: Vec::new(),
        projectiles: Vec::new(),
        score: 0,
        level: 1,
        enemies_killed: 0,
        enemy_speed: STARTING_ENEMY_SPEED,
        time_left: STARTING_TIME_SECS,
        target_score,
        status: GameStatus::Idle,
        clock_ms: 0,
        last_shot_ms: None,
        countdown_acc_ms: 0,
        spawn_acc_ms: 0,
        fall_acc_ms: 0,
        projectile_acc_ms: 0,
    }
}

/// Begin a fresh game.  Valid from Idle, Won, and Lost; a session that is
/// already Running is returned unchanged.  The configured target score and
/// the ship position carry over; everything else resets to defaults.
pub fn start(state: &GameSession, viewport: Viewport) -> GameSession {
    if state.status == GameStatus::Running {
        return state.clone();
    }
    GameSession {
        status: GameStatus::Running,
        player: Player {
            x: state
                .player
                .x
                .clamp(PLAYER_MIN_X, viewport.width - PLAYER_RIGHT_MARGIN),
        },
        ..idle_session(state.target_score, viewport)
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameSession) -> GameSession {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let new_x = (state.player.x - PLAYER_STEP_PX).max(PLAYER_MIN_X);
    GameSession {
        player: Player { x: new_x },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameSession, viewport: Viewport) -> GameSession {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let new_x = (state.player.x + PLAYER_STEP_PX).min(viewport.width - PLAYER_RIGHT_MARGIN);
    GameSession {
        player: Player { x: new_x },
        ..state.clone()
    }
}

/// Fire a projectile from the player's muzzle.  A shot inside the 160 ms
/// cooldown window is rejected outright: no projectile, cooldown unchanged.
pub fn player_shoot(state: &GameSession) -> GameSession {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    if let Some(last) = state.last_shot_ms {
        if state.clock_ms.saturating_sub(last) < SHOT_COOLDOWN_MS {
            return state.clone();
        }
    }
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile {
        x: state.player.x + PROJECTILE_MUZZLE_OFFSET,
        bottom: PROJECTILE_START_BOTTOM,
    });
    GameSession {
        projectiles,
        last_shot_ms: Some(state.clock_ms),
        ..state.clone()
    }
}

// ── Central tick ─────────────────────────────────────────────────────────────

/// Advance the simulation by `dt_ms` milliseconds.  All randomness comes
/// through `rng` so callers control determinism (useful for tests with a
/// seeded RNG).  Outside Running this is a no-op.
pub fn tick(
    state: &GameSession,
    dt_ms: u64,
    viewport: Viewport,
    rng: &mut impl Rng,
) -> GameSession {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let mut next = state.clone();
    next.clock_ms += dt_ms;

    advance_countdown(&mut next, dt_ms);
    advance_spawner(&mut next, dt_ms, viewport, rng);
    advance_enemies(&mut next, dt_ms, viewport);
    advance_projectiles(&mut next, dt_ms, viewport);

    next
}

/// Terminal transition: record the outcome and sweep every live entity so
/// nothing stale survives into the end screen.
fn finish(state: &mut GameSession, status: GameStatus) {
    if state.status != GameStatus::Running {
        return;
    }
    state.status = status;
    state.enemies.clear();
    state.projectiles.clear();
}

// Each subsystem below checks the status on entry: a terminal transition in
// an earlier subsystem silences every later one within the same tick.

fn advance_countdown(state: &mut GameSession, dt_ms: u64) {
    if state.status != GameStatus::Running {
        return;
    }
    state.countdown_acc_ms += dt_ms;
    while state.countdown_acc_ms >= COUNTDOWN_STEP_MS {
        state.countdown_acc_ms -= COUNTDOWN_STEP_MS;
        state.time_left = state.time_left.saturating_sub(1);
        if state.time_left == 0 {
            finish(state, GameStatus::Lost(LossReason::TimeExpired));
            return;
        }
    }
}

fn advance_spawner(state: &mut GameSession, dt_ms: u64, viewport: Viewport, rng: &mut impl Rng) {
    if state.status != GameStatus::Running {
        return;
    }
    state.spawn_acc_ms += dt_ms;
    // The period follows the current level; a level-up resets the
    // accumulator, so only one cadence is ever in flight.
    while state.spawn_acc_ms >= spawn_period_ms(state.level) {
        state.spawn_acc_ms -= spawn_period_ms(state.level);
        let span = (viewport.width - ENEMY_WIDTH).max(1);
        state.enemies.push(Enemy {
            x: rng.gen_range(0..span),
            y: 0,
        });
    }
}

fn advance_enemies(state: &mut GameSession, dt_ms: u64, viewport: Viewport) {
    if state.status != GameStatus::Running {
        return;
    }
    state.fall_acc_ms += dt_ms;
    while state.fall_acc_ms >= ENEMY_FALL_STEP_MS {
        state.fall_acc_ms -= ENEMY_FALL_STEP_MS;
        // Speed is read per step, not captured at spawn: a level-up mid-fall
        // accelerates every enemy already on screen.
        let floor = viewport.height - ENEMY_BOTTOM_MARGIN;
        let mut breached = false;
        for enemy in &mut state.enemies {
            enemy.y += state.enemy_speed;
            if enemy.y > floor {
                breached = true;
            }
        }
        if breached {
            finish(state, GameStatus::Lost(LossReason::EnemyReachedBottom));
            return;
        }
    }
}

fn advance_projectiles(state: &mut GameSession, dt_ms: u64, viewport: Viewport) {
    if state.status != GameStatus::Running {
        return;
    }
    state.projectile_acc_ms += dt_ms;
    while state.projectile_acc_ms >= PROJECTILE_STEP_MS {
        state.projectile_acc_ms -= PROJECTILE_STEP_MS;
        projectile_step(state, viewport);
        if state.status != GameStatus::Running {
            return;
        }
    }
}

/// One 25 ms motion-and-collision step for every live projectile, in firing
/// order.  At most one enemy is resolved per projectile per step, and an
/// enemy removed by an earlier projectile is gone before later ones test.
fn projectile_step(state: &mut GameSession, viewport: Viewport) {
    let in_flight = std::mem::take(&mut state.projectiles);
    let mut surviving = Vec::with_capacity(in_flight.len());

    for mut projectile in in_flight {
        if state.status != GameStatus::Running {
            break;
        }
        projectile.bottom += PROJECTILE_RISE_PX;

        let hit_box = projectile_rect(&projectile, viewport);
        if let Some(i) = state
            .enemies
            .iter()
            .position(|e| hit_box.overlaps(&enemy_rect(e)))
        {
            state.enemies.remove(i);
            record_kill(state);
            continue; // projectile consumed by the hit
        }

        if projectile.bottom > viewport.height {
            continue; // off the top edge
        }
        surviving.push(projectile);
    }

    // A win mid-step already swept the board; don't resurrect projectiles.
    if state.status == GameStatus::Running {
        state.projectiles = surviving;
    }
}

/// Score a destroyed enemy and apply any resulting level-up or win.
fn record_kill(state: &mut GameSession) {
    state.score += SCORE_PER_KILL;
    state.enemies_killed += 1;

    if state.enemies_killed >= ENEMIES_PER_LEVEL {
        state.level += 1;
        state.enemies_killed = 0;
        state.enemy_speed += ENEMY_SPEED_PER_LEVEL;
        // Restart the spawner on the shorter period.
        state.spawn_acc_ms = 0;
    }

    if state.score >= state.target_score {
        finish(state, GameStatus::Won);
    }
}
