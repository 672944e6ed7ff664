//! # Screen
//!
//! Cell-level drawing on the terminal: clear, put text at a cell, flush.
//! Commands are queued and flushed once per frame so a frame is a single
//! write burst.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use crate::core::game::GameState;

const PLAYER_GLYPH: char = 'O';
const HAZARD_GLYPH: char = 'X';

pub struct Screen {
    out: Stdout,
    /// Last drawable column.
    pub width: u16,
    /// Baseline row — the ground the player runs on.
    pub height: u16,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out: stdout(),
            width: cols.saturating_sub(1),
            height: rows.saturating_sub(1),
        })
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(text))
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Map a world height (0 = ground) to a screen row.
    fn row_for(&self, y: f32) -> u16 {
        self.height.saturating_sub(y as u16)
    }

    /// One arcade frame: HUD line, player on the baseline column, hazards.
    pub fn draw_arcade(&mut self, state: &GameState) -> io::Result<()> {
        self.clear()?;
        let hud = format!(
            "Lives: {}   Score: {}   Level: {}   Difficulty: {}",
            state.player.lives, state.player.score, state.player.level, state.difficulty
        );
        self.draw_text(0, 0, &hud)?;

        let player_row = self.row_for(state.player.y);
        self.draw_text(player_row, state.player.x as u16, &PLAYER_GLYPH.to_string())?;

        for hazard in state.hazards.iter() {
            let col = hazard.x as u16;
            if col <= self.width {
                let row = self.row_for(hazard.lane as f32);
                self.draw_text(row, col, &HAZARD_GLYPH.to_string())?;
            }
        }
        self.refresh()
    }

    /// The quiz prompt with the in-progress answer buffer.
    pub fn draw_quiz(&mut self, prompt: &str, buffer: &str) -> io::Result<()> {
        self.clear()?;
        self.draw_text(0, 0, prompt)?;
        self.draw_text(2, 0, &format!("Answer: {buffer}"))?;
        self.refresh()
    }

    /// Post-resolution acknowledgment, shown for the dwell period.
    pub fn draw_ack(&mut self, line: &str) -> io::Result<()> {
        self.clear()?;
        self.draw_text(0, 0, line)?;
        self.refresh()
    }
}
