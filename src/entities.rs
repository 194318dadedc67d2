//! All game entity types: pure data, no logic.

/// Why a running session ended in defeat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LossReason {
    /// The countdown reached zero before the target score.
    TimeExpired,
    /// An enemy crossed the lower boundary of the play area.
    EnemyReachedBottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    /// Before the first start, and the state a restart leaves from.
    Idle,
    Running,
    Won,
    Lost(LossReason),
}

impl GameStatus {
    /// True for Won and Lost, the states that end a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost(_))
    }
}

/// Current play-area bounds in virtual pixels.
///
/// Deliberately not stored in the session: the terminal can resize at any
/// time, so callers query fresh bounds and pass them into each transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug)]
pub struct Player {
    /// Horizontal position, clamped to [PLAYER_MIN_X, width - PLAYER_RIGHT_MARGIN].
    pub x: i32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    /// Fixed at spawn time.
    pub x: i32,
    /// Distance from the top edge; grows every fall step.
    pub y: i32,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    /// Fixed at fire time (muzzle offset from the player).
    pub x: i32,
    /// Distance from the lower viewport edge; grows every motion step.
    pub bottom: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One game session.  Cloneable so pure update functions can return a new
/// copy without mutating the original; a restart discards the whole value.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub level: u32,
    /// Kills counted toward the next level-up; resets to 0 at each level.
    pub enemies_killed: u32,
    /// Pixels every enemy falls per step.  Session-global: a level-up
    /// speeds up enemies already in flight.
    pub enemy_speed: i32,
    /// Whole seconds remaining on the countdown.
    pub time_left: u32,
    pub target_score: u32,
    pub status: GameStatus,
    /// Simulated milliseconds since start; drives the shot cooldown.
    pub clock_ms: u64,
    /// Clock reading of the last accepted shot, if any.
    pub last_shot_ms: Option<u64>,
    // Fixed-step accumulators, one per timed subsystem.
    pub countdown_acc_ms: u64,
    pub spawn_acc_ms: u64,
    pub fall_acc_ms: u64,
    pub projectile_acc_ms: u64,
}
