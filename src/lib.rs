//! Connect Four State Library
//!
//! This crate provides state management for Connect Four game logic.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board** - A fixed-size grid where pieces drop to the lowest free row
//!   of a column, with four-in-a-row detection in every direction.
//!
//! - **Session Phase Machine** - Tracks whether a session is inactive, active,
//!   or ended, with validated transitions.
//!
//! - **Game Sessions** - Two players, turn order, win/draw handling, and the
//!   events a front-end needs to redraw.
//!
//! - **Session Management** - Independent sessions side by side, indexed by ID.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - `start` and `restart` outside
//!    their phases are rejected with clear errors.
//!
//! 2. **Moves never fail loudly** - Clicks on a full column, out-of-range
//!    input, or moves after the game ended are ignored and produce no events.
//!
//! 3. **No rendering** - This crate is pure state; drawing is up to the caller.
//!
//! 4. **Serialization-ready** - Sessions, boards and events convert to JSON.
//!
//! # Example
//!
//! ```rust
//! use connect_four_state::{GameConfig, Outcome, SessionEvent, SessionManager};
//!
//! let mut sessions = SessionManager::new();
//! let id = sessions.create(&GameConfig::default()).unwrap();
//! sessions.get_mut(&id).unwrap().start("red", "gold").unwrap();
//!
//! // Player 1 stacks column 0 while player 2 answers in column 1
//! for column in [0, 1, 0, 1, 0, 1] {
//!     sessions.submit_column(&id, column);
//! }
//! let events = sessions.submit_column(&id, 0);
//!
//! assert_eq!(
//!     events.last(),
//!     Some(&SessionEvent::game_ended(Outcome::Winner(1)))
//! );
//! if let Some(SessionEvent::GameEnded { message, .. }) = events.last() {
//!     assert_eq!(message, "Player 1 won!");
//! }
//! ```

pub mod config;
pub mod state;

pub use config::{ConfigError, GameConfig};

// Re-export everything from state module at crate root
pub use state::*;
