//! # Game State
//!
//! The arcade session's state and its per-tick transition. `tick()` is pure
//! apart from the injected RNG: same seed, same commands, same session — so
//! a whole run can be replayed and asserted in tests.
//!
//! The tick itself never blocks and never draws; it reports what happened as
//! [`TickEvents`] and leaves the quiz-interrupt handling to the caller. While
//! the caller is running a quiz, it simply stops calling `tick()`, which is
//! what suspends the world (hazards frozen, difficulty frozen).

use rand::Rng;

use crate::core::hazard::{HAZARD_STEP, HazardField};
use crate::core::player::{Player, PlayerTuning};

pub const DIFFICULTY_START: u32 = 2;
pub const DIFFICULTY_CAP: u32 = 10;
/// The difficulty ramps by one every this many ticks.
pub const DIFFICULTY_RAMP_TICKS: u64 = 2000;

/// One dispatched key command. At most one per tick: the loop reads a single
/// key per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Jump,
    Reset,
    AskQuestion,
}

/// What a tick produced, for the caller to act on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickEvents {
    /// `quit` was dispatched; the session should end.
    pub quit: bool,
    /// Collision-triggered quiz requests, one per flagged hazard, in hazard
    /// iteration order.
    pub collision_quizzes: usize,
    /// An on-demand quiz was requested (`ask`). The hazard field has already
    /// been cleared — the on-demand path does that, the collision path does
    /// not.
    pub on_demand_quiz: bool,
    /// Lives hit zero.
    pub game_over: bool,
}

#[derive(Debug)]
pub struct GameState {
    pub player: Player,
    pub hazards: HazardField,
    /// Ticks elapsed this session. Quiz time does not count.
    pub clock: u64,
    pub difficulty: u32,
    pub screen_width: u16,
}

impl GameState {
    pub fn new(screen_width: u16, tuning: PlayerTuning) -> Self {
        Self {
            player: Player::new(tuning),
            hazards: HazardField::default(),
            clock: 0,
            difficulty: DIFFICULTY_START,
            screen_width,
        }
    }

    /// Ceiling of the spawn draw: a hazard spawns when a uniform draw in
    /// `0..=cap` lands on 0. The cap shrinks as difficulty rises, so spawns
    /// get *more* frequent — the inverse relationship is deliberate.
    fn spawn_cap(&self) -> u32 {
        (10_000.0 / self.difficulty as f32 * HAZARD_STEP) as u32
    }

    /// Advance one tick: ramp, dispatch, spawn, integrate, advance, sweep.
    pub fn tick<R: Rng>(&mut self, cmd: Option<Command>, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();

        if self.clock > 0
            && self.clock % DIFFICULTY_RAMP_TICKS == 0
            && self.difficulty < DIFFICULTY_CAP
        {
            self.difficulty += 1;
            log::info!("difficulty ramped to {}", self.difficulty);
        }

        match cmd {
            Some(Command::Quit) => {
                events.quit = true;
                return events;
            }
            Some(Command::Jump) => self.player.jump(),
            Some(Command::Reset) => self.player.reset(),
            Some(Command::AskQuestion) => {
                // On-demand quizzes clear the display's hazards first.
                self.hazards.clear();
                events.on_demand_quiz = true;
            }
            None => {}
        }

        if rng.random_range(0..=self.spawn_cap()) == 0 {
            self.hazards.spawn(self.screen_width, rng);
        }

        self.player.update();
        self.hazards.advance(self.difficulty);

        events.collision_quizzes = self.hazards.collisions(self.player.y);
        events.game_over = self.player.lives == 0;

        self.clock += 1;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hazard::Hazard;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        GameState::new(100, PlayerTuning::default())
    }

    #[test]
    fn difficulty_starts_at_two_and_ramps_every_2000_ticks() {
        let mut s = state();
        let mut rng = Pcg32::seed_from_u64(11);
        for expected_tick in 0..6001u64 {
            assert_eq!(s.clock, expected_tick);
            let expected = (DIFFICULTY_START + (expected_tick / DIFFICULTY_RAMP_TICKS) as u32)
                .min(DIFFICULTY_CAP);
            s.tick(None, &mut rng);
            assert_eq!(s.difficulty, expected);
        }
    }

    #[test]
    fn difficulty_caps_at_ten() {
        let mut s = state();
        s.clock = DIFFICULTY_RAMP_TICKS * 50;
        s.difficulty = DIFFICULTY_CAP;
        let mut rng = Pcg32::seed_from_u64(11);
        s.tick(None, &mut rng);
        assert_eq!(s.difficulty, DIFFICULTY_CAP);
    }

    #[test]
    fn spawn_cap_shrinks_as_difficulty_rises() {
        let mut s = state();
        let low = s.spawn_cap();
        s.difficulty = DIFFICULTY_CAP;
        let high = s.spawn_cap();
        assert_eq!(low, 500);
        assert_eq!(high, 100);
        assert!(high < low);
    }

    #[test]
    fn quit_exits_before_the_world_advances() {
        let mut s = state();
        s.hazards.push(Hazard { x: 10.0, lane: 0 });
        let mut rng = Pcg32::seed_from_u64(2);
        let events = s.tick(Some(Command::Quit), &mut rng);
        assert!(events.quit);
        assert_eq!(s.clock, 0);
        assert_eq!(s.hazards.iter().next().unwrap().x, 10.0);
    }

    #[test]
    fn ask_clears_hazards_but_collision_path_does_not() {
        let mut s = state();
        s.hazards.push(Hazard { x: 50.0, lane: 0 });
        let mut rng = Pcg32::seed_from_u64(2);

        let events = s.tick(Some(Command::AskQuestion), &mut rng);
        assert!(events.on_demand_quiz);
        // Field was cleared before this tick's spawn draw.
        assert!(s.hazards.len() <= 1);

        // A hazard that slides into the player column flags a quiz without
        // being cleared.
        let mut s = state();
        s.hazards.push(Hazard { x: 0.5, lane: 0 });
        let events = s.tick(None, &mut rng);
        assert_eq!(events.collision_quizzes, 1);
        assert!(!s.hazards.is_empty());
    }

    #[test]
    fn jump_and_reset_commands_reach_the_player() {
        let mut s = state();
        let mut rng = Pcg32::seed_from_u64(5);
        s.tick(Some(Command::Jump), &mut rng);
        assert!(s.player.y > 0.0);

        s.player.lose_life();
        s.tick(Some(Command::Reset), &mut rng);
        assert_eq!(s.player.lives, 3);
        assert_eq!(s.player.y, 0.0);
    }

    #[test]
    fn jumping_player_clears_a_ground_hazard() {
        let mut s = state();
        // Hazard arrives at the player column in a few ticks.
        s.hazards.push(Hazard { x: 1.5, lane: 0 });
        let mut rng = Pcg32::seed_from_u64(9);
        let mut collided = 0;
        let events = s.tick(Some(Command::Jump), &mut rng);
        collided += events.collision_quizzes;
        for _ in 0..8 {
            let events = s.tick(None, &mut rng);
            collided += events.collision_quizzes;
            if s.hazards.is_empty() {
                break;
            }
            // Airborne the whole time the hazard crosses column 0.
            assert!(s.player.y >= 1.0 || (s.hazards.iter().next().unwrap().x as i32) != 0);
        }
        assert_eq!(collided, 0);
    }

    #[test]
    fn game_over_reported_when_lives_reach_zero() {
        let mut s = state();
        s.player.lives = 1;
        s.player.lose_life();
        let mut rng = Pcg32::seed_from_u64(1);
        let events = s.tick(None, &mut rng);
        assert!(events.game_over);
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = state();
        let mut b = state();
        let mut rng_a = Pcg32::seed_from_u64(99_999);
        let mut rng_b = Pcg32::seed_from_u64(99_999);

        let cmds = [
            Some(Command::Jump),
            None,
            None,
            Some(Command::Jump),
            None,
            Some(Command::Reset),
        ];
        for tick in 0..5000 {
            let cmd = cmds[tick % cmds.len()];
            let ea = a.tick(cmd, &mut rng_a);
            let eb = b.tick(cmd, &mut rng_b);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.clock, b.clock);
        assert_eq!(a.difficulty, b.difficulty);
        assert_eq!(a.hazards.len(), b.hazards.len());
        assert_eq!(a.player.y, b.player.y);
    }
}
