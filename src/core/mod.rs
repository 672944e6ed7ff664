//! # Core Game Logic
//!
//! Everything the arcade session *is*, with no terminal I/O anywhere.
//! The `tui` module drives this and draws it; these types never block,
//! never sleep, and never touch the screen, so the whole session can be
//! simulated tick-by-tick in tests.
//!
//! ```text
//!               ┌──────────────────────────────┐
//!               │            CORE              │
//!               │                              │
//!               │  deck    questions/answers   │
//!               │  player  vertical physics    │
//!               │  hazard  field + collisions  │
//!               │  game    tick orchestration  │
//!               │  config  tunables            │
//!               │                              │
//!               │  No I/O. No terminal. Pure.  │
//!               └──────────────┬───────────────┘
//!                              │
//!                              ▼
//!                    ┌──────────────────┐
//!                    │       TUI        │
//!                    │   (crossterm)    │
//!                    └──────────────────┘
//! ```

pub mod config;
pub mod deck;
pub mod game;
pub mod hazard;
pub mod player;
