//! Property tests for the physics, hazard, and difficulty invariants.
//! These drive the core exactly as the game loop does, with a seeded RNG.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use dashcard::core::game::{
    Command, DIFFICULTY_CAP, DIFFICULTY_RAMP_TICKS, DIFFICULTY_START, GameState,
};
use dashcard::core::hazard::{HAZARD_STEP, Hazard, HazardField};
use dashcard::core::player::{Player, PlayerTuning};

fn arb_command() -> impl Strategy<Value = Option<Command>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(Command::Jump)),
        1 => Just(Some(Command::Reset)),
        1 => Just(Some(Command::AskQuestion)),
    ]
}

proptest! {
    #[test]
    fn jump_ignored_while_airborne(y in 0.001f32..10.0, vy in -1.0f32..1.0) {
        let mut p = Player::new(PlayerTuning::default());
        p.y = y;
        p.vy = vy;
        p.jump();
        prop_assert_eq!(p.vy, vy);
    }

    #[test]
    fn player_y_never_negative(jumps in proptest::collection::vec(any::<bool>(), 1..500)) {
        let mut p = Player::new(PlayerTuning::default());
        for jump in jumps {
            if jump {
                p.jump();
            }
            p.update();
            prop_assert!(p.y >= 0.0, "y went negative: {}", p.y);
        }
    }

    #[test]
    fn hazard_x_decreases_by_step_until_removed(
        width in 5u16..200,
        difficulty in DIFFICULTY_START..=DIFFICULTY_CAP,
        seed in any::<u64>(),
    ) {
        let mut field = HazardField::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        field.spawn(width, &mut rng);
        let mut last_x = field.iter().next().unwrap().x;

        for _ in 0..20_000 {
            field.advance(difficulty);
            match field.iter().next() {
                Some(h) => {
                    prop_assert!(h.x < last_x);
                    let step = HAZARD_STEP * difficulty as f32;
                    prop_assert!((last_x - h.x - step).abs() < 1e-3);
                    // Anything still in the field has non-negative truncated x.
                    prop_assert!(h.x as i32 >= 0);
                    last_x = h.x;
                }
                None => break,
            }
        }
        prop_assert!(field.is_empty(), "hazard never culled");
    }

    #[test]
    fn collision_iff_both_truncations_match(
        x in -0.999f32..100.0,
        lane in 0u8..=1,
        y in 0.0f32..5.0,
    ) {
        let hazard = Hazard { x, lane };
        let expected = x as i32 == 0 && y as i32 == lane as i32;
        prop_assert_eq!(hazard.collides(y), expected);
    }

    #[test]
    fn difficulty_follows_the_ramp_schedule(
        seed in any::<u64>(),
        cmds in proptest::collection::vec(arb_command(), 1..50),
    ) {
        let mut state = GameState::new(80, PlayerTuning::default());
        let mut rng = Pcg32::seed_from_u64(seed);

        let total = DIFFICULTY_RAMP_TICKS * 2 + 500;
        let mut previous = state.difficulty;
        for n in 1..=total {
            let cmd = cmds[(n as usize) % cmds.len()];
            state.tick(cmd, &mut rng);

            let expected =
                (DIFFICULTY_START + ((n - 1) / DIFFICULTY_RAMP_TICKS) as u32).min(DIFFICULTY_CAP);
            prop_assert_eq!(state.difficulty, expected);
            prop_assert!(state.difficulty >= previous);
            prop_assert!((DIFFICULTY_START..=DIFFICULTY_CAP).contains(&state.difficulty));
            prop_assert!(state.player.y >= 0.0);
            previous = state.difficulty;
        }
    }
}
