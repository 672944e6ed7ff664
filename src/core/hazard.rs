//! # Hazard Field
//!
//! The live set of hazards scrolling toward the player. Each hazard sits in
//! one of two lanes (ground or elevated — the elevated lane is what makes
//! *not* jumping the right move sometimes) and slides left by
//! `0.1 × difficulty` cells per tick. Hazards are culled once their truncated
//! x goes negative.
//!
//! Collision uses integer truncation on both coordinates, not rounding: a
//! hazard at `x = 0.4` in the ground lane collides with a player at
//! `y = 0.9`, but not with one at `y = 1.1`.

use rand::Rng;

/// Distance a hazard travels per tick per point of difficulty.
pub const HAZARD_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hazard {
    pub x: f32,
    /// 0 = ground lane, 1 = elevated lane.
    pub lane: u8,
}

impl Hazard {
    fn advance(&mut self, difficulty: u32) {
        self.x -= HAZARD_STEP * difficulty as f32;
    }

    /// Collision iff truncated x is the player column (0) and the truncated
    /// player height matches the lane.
    pub fn collides(&self, player_y: f32) -> bool {
        self.x as i32 == 0 && player_y as i32 == self.lane as i32
    }
}

/// Growable hazard collection; membership changes only via spawn (append) and
/// cull (remove once off-screen). Iteration order is insertion order.
#[derive(Debug, Default)]
pub struct HazardField {
    hazards: Vec<Hazard>,
}

impl HazardField {
    /// Append a hazard at the right screen edge, lane chosen uniformly.
    pub fn spawn<R: Rng>(&mut self, screen_width: u16, rng: &mut R) {
        self.hazards.push(Hazard {
            x: screen_width.saturating_sub(1) as f32,
            lane: rng.random_range(0..=1),
        });
    }

    /// Move every hazard left, then drop the ones whose truncated x went
    /// negative.
    pub fn advance(&mut self, difficulty: u32) {
        for hazard in &mut self.hazards {
            hazard.advance(difficulty);
        }
        self.hazards.retain(|h| h.x as i32 >= 0);
    }

    /// Count of hazards flagging a collision this tick, each checked
    /// independently in iteration order.
    pub fn collisions(&self, player_y: f32) -> usize {
        self.hazards.iter().filter(|h| h.collides(player_y)).count()
    }

    pub fn clear(&mut self) {
        self.hazards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.iter()
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    #[cfg(test)]
    pub fn push(&mut self, hazard: Hazard) {
        self.hazards.push(hazard);
    }
}
