use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// Raw key input, before any mode decides what it means. The arcade loop
/// maps characters to commands; the quiz edits its answer buffer with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    /// Ctrl+C — in raw mode this arrives as a key event, not a signal.
    ForceQuit,
}

/// Poll for one key, blocking up to `timeout`. `Ok(None)` when nothing
/// relevant arrived — at most one event is consumed per call, which keeps
/// the loop at one command per tick.
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Ok(Some(KeyInput::ForceQuit)),
                (_, KeyCode::Char(c)) => Ok(Some(KeyInput::Char(c))),
                (_, KeyCode::Backspace) | (_, KeyCode::Delete) => Ok(Some(KeyInput::Backspace)),
                (_, KeyCode::Enter) => Ok(Some(KeyInput::Enter)),
                _ => Ok(None),
            }
        }
        _ => Ok(None),
    }
}
