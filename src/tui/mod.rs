//! # TUI Adapter
//!
//! The crossterm-specific layer. Owns the terminal for the session, drives
//! the fixed-cadence game loop, and hosts the quiz interrupt as a suspended
//! mode.
//!
//! This is the only module that knows about crossterm. The terminal is
//! acquired exactly once per session through [`TerminalGuard`] and released
//! exactly once on every exit path — normal quit, game over, error
//! propagation, and panic unwind all go through the guard's `Drop`.
//!
//! ## Loop shape
//!
//! ```text
//! Running:  poll one key → tick(core) → maybe start quiz → draw → pace 10ms
//! Quiz:     poll (bounded) → edit buffer / dwell on ack → verdict → resume
//! ```
//!
//! While a quiz is active the core is simply not ticked: hazards do not
//! advance and the difficulty ramp is frozen until the verdict comes back.

mod event;
mod quiz;
mod screen;

pub use quiz::{Quiz, Verdict};

use std::io::{self, stdout};
use std::panic;
use std::sync::Once;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::game::{Command, GameState};
use crate::core::player::Player;
use crate::tui::event::KeyInput;
use crate::tui::screen::Screen;

/// Poll interval while the quiz waits for typing (bounded, non-busy wait).
const QUIZ_POLL: Duration = Duration::from_millis(100);

/// How a session ended. Both outcomes release the terminal first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Quit,
    GameOver,
}

/// Put the terminal back in cooked mode on the main screen. Safe to call
/// more than once.
fn release_terminal() {
    let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    let _ = terminal::disable_raw_mode();
}

/// Install a panic hook that releases the terminal before the default hook
/// prints the report. Without it the report lands on the alternate screen
/// and vanishes when the guard's `Drop` leaves it.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            release_terminal();
            default_hook(info);
        }));
    });
}

/// Scoped terminal acquisition: raw mode, alternate screen, hidden cursor.
/// Restoration happens in `Drop` so it runs on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal acquired (raw mode, alternate screen, cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        release_terminal();
        info!("Terminal released");
    }
}

/// Top-level session mode. `Quiz` suspends `Running` until resolved.
enum Mode {
    Running,
    Quiz(Quiz),
}

fn arcade_command(key: KeyInput) -> Option<Command> {
    match key {
        KeyInput::Char('q') | KeyInput::ForceQuit => Some(Command::Quit),
        KeyInput::Char(' ') => Some(Command::Jump),
        KeyInput::Char('r') => Some(Command::Reset),
        KeyInput::Char('a') => Some(Command::AskQuestion),
        _ => None,
    }
}

/// Run one arcade session to completion.
pub fn run(config: &ResolvedConfig, deck: &Deck) -> io::Result<RunOutcome> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);
    info!("Session starting (seed {seed}, {} questions)", deck.len());

    install_panic_hook();
    let _guard = TerminalGuard::new()?;
    let mut screen = Screen::new()?;
    let mut state = GameState::new(screen.width, config.tuning);
    let mut mode = Mode::Running;
    // A collision sweep can flag several hazards in one tick; each pending
    // entry becomes one sequential quiz, in sweep order.
    let mut pending_quizzes: usize = 0;

    loop {
        let frame_start = Instant::now();

        mode = match mode {
            Mode::Running => {
                let cmd = event::poll_key(Duration::ZERO)?.and_then(arcade_command);
                let events = state.tick(cmd, &mut rng);

                if events.quit {
                    info!("quit requested");
                    return Ok(RunOutcome::Quit);
                }
                if events.game_over {
                    info!("out of lives, game over");
                    return Ok(RunOutcome::GameOver);
                }
                pending_quizzes += events.collision_quizzes;
                if events.on_demand_quiz {
                    pending_quizzes += 1;
                }

                match start_pending_quiz(&mut pending_quizzes, deck, &mut rng) {
                    Some(quiz) => Mode::Quiz(quiz),
                    None => {
                        screen.draw_arcade(&state)?;
                        // Pace to the frame floor; a slow frame just proceeds,
                        // there is no catch-up.
                        let elapsed = frame_start.elapsed();
                        if elapsed < config.frame {
                            thread::sleep(config.frame - elapsed);
                        }
                        Mode::Running
                    }
                }
            }

            Mode::Quiz(mut quiz) => {
                let timeout = if quiz.is_editing() {
                    QUIZ_POLL
                } else {
                    Duration::ZERO
                };
                match event::poll_key(timeout)? {
                    Some(KeyInput::ForceQuit) => {
                        info!("quit requested during quiz");
                        return Ok(RunOutcome::Quit);
                    }
                    Some(key) => quiz.handle_key(key, config.ack_dwell),
                    None => {}
                }

                match quiz.ack_line() {
                    Some(line) => screen.draw_ack(&line)?,
                    None => screen.draw_quiz(quiz.prompt(), quiz.buffer())?,
                }

                match quiz.resolved() {
                    Some(verdict) => {
                        // The quiz reports; the loop applies the consequence.
                        apply_verdict(&mut state.player, verdict);
                        if state.player.lives == 0 {
                            info!("out of lives, game over");
                            return Ok(RunOutcome::GameOver);
                        }
                        match start_pending_quiz(&mut pending_quizzes, deck, &mut rng) {
                            Some(next) => Mode::Quiz(next),
                            None => Mode::Running,
                        }
                    }
                    None => {
                        if !quiz.is_editing() {
                            // Dwelling on the acknowledgment: idle at frame
                            // cadence until the deadline passes.
                            thread::sleep(config.frame);
                        }
                        Mode::Quiz(quiz)
                    }
                }
            }
        };
    }
}

/// An incorrect verdict costs exactly one life; a correct one costs nothing.
fn apply_verdict(player: &mut Player, verdict: Verdict) {
    if verdict == Verdict::Incorrect {
        player.lose_life();
    }
}

/// Take one pending quiz and draw a question for it. An empty deck drops all
/// pending quizzes — no question, no interrupt, never a crash.
fn start_pending_quiz(pending: &mut usize, deck: &Deck, rng: &mut Pcg32) -> Option<Quiz> {
    if *pending == 0 {
        return None;
    }
    match deck.random_question(rng) {
        Some(question) => {
            *pending -= 1;
            Some(Quiz::new(question.clone()))
        }
        None => {
            debug!("no questions available, dropping quiz interrupt");
            *pending = 0;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Question;
    use crate::core::player::PlayerTuning;

    #[test]
    fn empty_deck_drops_all_pending_quizzes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pending = 3;
        let quiz = start_pending_quiz(&mut pending, &Deck::default(), &mut rng);
        assert!(quiz.is_none());
        assert_eq!(pending, 0);
    }

    #[test]
    fn pending_quizzes_are_consumed_one_at_a_time() {
        let mut deck = Deck::default();
        deck.add(Question::new("p?", &["a"]).unwrap());
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pending = 2;
        let quiz = start_pending_quiz(&mut pending, &deck, &mut rng);
        assert!(quiz.is_some());
        assert_eq!(pending, 1);
    }

    #[test]
    fn panic_hook_still_reaches_the_default_reporter() {
        install_panic_hook();
        let caught = panic::catch_unwind(|| panic!("boom"));
        assert!(caught.is_err());
    }

    #[test]
    fn incorrect_verdict_costs_one_life() {
        let mut player = Player::new(PlayerTuning::default());
        let before = player.lives;
        apply_verdict(&mut player, Verdict::Incorrect);
        assert_eq!(player.lives, before - 1);
    }

    #[test]
    fn correct_verdict_costs_nothing() {
        let mut player = Player::new(PlayerTuning::default());
        let before = player.lives;
        apply_verdict(&mut player, Verdict::Correct);
        assert_eq!(player.lives, before);
    }

    #[test]
    fn key_bindings_map_to_commands() {
        assert_eq!(arcade_command(KeyInput::Char('q')), Some(Command::Quit));
        assert_eq!(arcade_command(KeyInput::ForceQuit), Some(Command::Quit));
        assert_eq!(arcade_command(KeyInput::Char(' ')), Some(Command::Jump));
        assert_eq!(arcade_command(KeyInput::Char('r')), Some(Command::Reset));
        assert_eq!(
            arcade_command(KeyInput::Char('a')),
            Some(Command::AskQuestion)
        );
        assert_eq!(arcade_command(KeyInput::Char('x')), None);
        assert_eq!(arcade_command(KeyInput::Enter), None);
    }
}
