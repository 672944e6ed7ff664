//! # Quiz Interrupt
//!
//! The flashcard challenge that suspends the arcade loop. Modeled as an
//! explicit state machine hosted by the top-level loop rather than a nested
//! blocking call: while a `Quiz` is active the loop routes keys here and
//! stops ticking the game, which is what freezes hazards and the difficulty
//! ramp.
//!
//! ```text
//! Editing ──Enter──▶ Acknowledge{verdict} ──dwell elapsed──▶ resolved
//!    │ ▲
//!    └─┘ printable ASCII appends, backspace pops, anything else ignored
//! ```
//!
//! The quiz itself never touches player state; it hands the verdict back and
//! the caller applies the life loss on [`Verdict::Incorrect`]. There is no
//! retry, no partial credit, and no timeout — Enter is the only way out of
//! editing.

use std::time::{Duration, Instant};

use log::info;

use crate::core::deck::Question;
use crate::tui::event::KeyInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Acknowledge { verdict: Verdict, deadline: Instant },
}

#[derive(Debug)]
pub struct Quiz {
    question: Question,
    buffer: String,
    phase: Phase,
}

impl Quiz {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            buffer: String::new(),
            phase: Phase::Editing,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.question.prompt
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Feed one key while editing. Enter resolves the buffer against the
    /// accepted answers and starts the acknowledgment dwell.
    pub fn handle_key(&mut self, key: KeyInput, dwell: Duration) {
        if !self.is_editing() {
            return;
        }
        match key {
            KeyInput::Backspace => {
                self.buffer.pop();
            }
            KeyInput::Enter => {
                let verdict = if self.question.accepts(&self.buffer) {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                };
                info!(
                    "quiz resolved {:?}: submitted {:?} for {:?}",
                    verdict,
                    self.buffer,
                    self.prompt()
                );
                self.phase = Phase::Acknowledge {
                    verdict,
                    deadline: Instant::now() + dwell,
                };
            }
            KeyInput::Char(c) if (' '..='~').contains(&c) => self.buffer.push(c),
            _ => {}
        }
    }

    /// The acknowledgment line to display after resolution. A failure shows
    /// the first accepted answer as the canonical correct one.
    pub fn ack_line(&self) -> Option<String> {
        match self.phase {
            Phase::Editing => None,
            Phase::Acknowledge { verdict, .. } => Some(match verdict {
                Verdict::Correct => "Correct!".to_string(),
                Verdict::Incorrect => format!(
                    "Incorrect! The correct answer was {}",
                    self.question.canonical_answer()
                ),
            }),
        }
    }

    /// Once the dwell has elapsed, yields the verdict; the quiz is done.
    pub fn resolved(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Acknowledge { verdict, deadline } if Instant::now() >= deadline => {
                Some(verdict)
            }
            _ => None,
        }
    }
}
