//! # Player Physics
//!
//! Tick-based vertical motion for the runner: velocity and position advance
//! once per tick, with no wall-clock scaling. The ground is `y = 0` and `y`
//! never goes below it.
//!
//! Integration order matters and is preserved exactly: when grounded, the
//! downward velocity is zeroed *before* position is advanced, and a jump only
//! sets velocity when the player is exactly at rest — so an impulse granted
//! on the same tick as the grounded check is not consumed until the next
//! tick.

/// Tuning knobs for the player, resolved from config.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Per-tick downward acceleration, always <= 0.
    pub gravity: f32,
    /// Upward velocity granted by a jump, always >= 0.
    pub jump_impulse: f32,
    pub starting_lives: u8,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            gravity: -0.05,
            jump_impulse: 0.7,
            starting_lives: 3,
        }
    }
}

/// The runner. One instance per session; [`Player::reset`] restores starting
/// values in place rather than rebuilding the object.
#[derive(Debug, Clone)]
pub struct Player {
    pub lives: u8,
    pub score: u32,
    pub level: u32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            lives: tuning.starting_lives,
            score: 0,
            level: 0,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            tuning,
        }
    }

    /// Grant a jump impulse. Only takes effect when exactly at rest on the
    /// ground; requests while airborne are silently ignored.
    pub fn jump(&mut self) {
        if self.y == 0.0 {
            self.vy = self.tuning.jump_impulse;
        }
    }

    /// Advance one tick of vertical motion.
    pub fn update(&mut self) {
        if self.y <= 0.0 {
            // Grounded: snap to the floor and stop sinking before moving.
            self.y = 0.0;
            if self.vy < 0.0 {
                self.vy = 0.0;
            }
            self.y += self.vy;
        } else {
            self.vy += self.tuning.gravity;
            self.y += self.vy;
        }
        self.x += self.vx;
    }

    /// Lose one life, with a floor at zero.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Restore starting values (lives, score, level, position, velocities).
    /// Tuning is untouched.
    pub fn reset(&mut self) {
        self.lives = self.tuning.starting_lives;
        self.score = 0;
        self.level = 0;
        self.x = 0.0;
        self.y = 0.0;
        self.vx = 0.0;
        self.vy = 0.0;
    }
}
