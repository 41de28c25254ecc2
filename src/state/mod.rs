//! State management module for Connect Four.
//!
//! This module provides the core state types and managers:
//!
//! - `board` - Grid occupancy, column drops, line detection
//! - `phase` - Session lifecycle state machine
//! - `player` - Player identity (index and color)
//! - `session` - Turn sequencing, events, and the session manager
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          SessionManager                          │
//! │                                                                  │
//! │   session_id → GameSession                                       │
//! │                                                                  │
//! │   ┌──────────────────────────────────────────────────────────┐   │
//! │   │                      GameSession                         │   │
//! │   │                                                          │   │
//! │   │  Phase: Inactive ──▶ Active ──▶ Ended                    │   │
//! │   │                        ▲          │                      │   │
//! │   │                        └──────────┘ restart              │   │
//! │   │                                                          │   │
//! │   │  Players [1, 2] ── active ──▶ submit_column(column)      │   │
//! │   │                                   │                      │   │
//! │   │                                   ▼                      │   │
//! │   │  Board: landing_row → place → has_win_from → is_full     │   │
//! │   │                                   │                      │   │
//! │   │                                   ▼                      │   │
//! │   │            [PieceAdded, GameEnded?] events               │   │
//! │   └──────────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use connect_four_state::state::{GameSession, Phase, SessionEvent};
//!
//! let mut session = GameSession::standard();
//! session.start("red", "gold").unwrap();
//!
//! let events = session.submit_column(3);
//! assert!(matches!(events[0], SessionEvent::PieceAdded { row: 5, column: 3, .. }));
//! assert_eq!(session.phase(), Phase::Active);
//! ```

pub mod board;
pub mod phase;
pub mod player;
pub mod session;

// Re-export commonly used types
pub use board::{Board, BoardError, DEFAULT_HEIGHT, DEFAULT_WIDTH, DIRECTIONS, WIN_LENGTH};
pub use phase::{InvalidTransition, Phase, PhaseEvent};
pub use player::{Player, FIRST_PLAYER, SECOND_PLAYER};
pub use session::{GameSession, Outcome, SessionError, SessionEvent, SessionManager};
