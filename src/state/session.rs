//! Game session management.
//!
//! A session owns one board and two players, sequences turns, and reports
//! placement and end-of-game events for a front-end to render.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::state::board::{Board, BoardError};
use crate::state::phase::{InvalidTransition, Phase, PhaseEvent};
use crate::state::player::{Player, FIRST_PLAYER, SECOND_PLAYER};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player index that completed a line
    Winner(u8),
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winner(_) => "winner",
            Self::Draw => "draw",
        }
    }

    /// End-of-game message shown to players.
    pub fn message(&self) -> String {
        match self {
            Self::Winner(index) => format!("Player {} won!", index),
            Self::Draw => "Tie!".to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Winner(index) => serde_json::json!({"result": self.as_str(), "player": index}),
            Self::Draw => serde_json::json!({"result": self.as_str()}),
        }
    }
}

/// Notifications produced by a move, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A piece landed at (row, column)
    PieceAdded {
        row: usize,
        column: usize,
        color: String,
    },

    /// The session reached a win or draw
    GameEnded { outcome: Outcome, message: String },
}

impl SessionEvent {
    pub fn game_ended(outcome: Outcome) -> Self {
        Self::GameEnded {
            outcome,
            message: outcome.message(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::PieceAdded { row, column, color } => serde_json::json!({
                "type": "piece_added",
                "row": row,
                "column": column,
                "color": color
            }),
            Self::GameEnded { outcome, message } => serde_json::json!({
                "type": "game_ended",
                "outcome": outcome.to_json(),
                "message": message
            }),
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A single Connect Four game between two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Current phase
    phase: Phase,

    /// The grid
    board: Board,

    /// Player 1 and player 2, set on start
    players: Option<[Player; 2]>,

    /// Slot in `players` whose turn it is
    active: usize,

    /// Set once the session ends
    outcome: Option<Outcome>,

    /// Pieces placed since the last start or restart
    move_count: u32,

    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the current game started (start or restart)
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the current game ended
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl GameSession {
    /// Create an inactive session with the configured board size.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(config.height, config.width)?))
    }

    /// Create an inactive session on a 6x7 board.
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        Self {
            phase: Phase::Inactive,
            board,
            players: None,
            active: 0,
            outcome: None,
            move_count: 0,
            created_at: chrono::Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Start the first game. Only valid while inactive.
    pub fn start(&mut self, player1_color: &str, player2_color: &str) -> Result<(), SessionError> {
        let next = self.phase.transition(PhaseEvent::Start)?;
        self.begin(next, player1_color, player2_color)?;
        info!(player1_color, player2_color, "session started");
        Ok(())
    }

    /// Discard the current game and begin a fresh one.
    pub fn restart(&mut self, player1_color: &str, player2_color: &str) -> Result<(), SessionError> {
        let next = self.phase.transition(PhaseEvent::Restart)?;
        self.begin(next, player1_color, player2_color)?;
        info!(player1_color, player2_color, "session restarted");
        Ok(())
    }

    /// Reset board and players and enter `phase`.
    fn begin(&mut self, phase: Phase, player1_color: &str, player2_color: &str) -> Result<(), SessionError> {
        self.board = Board::new(self.board.height(), self.board.width())?;
        self.players = Some([
            Player::new(FIRST_PLAYER, player1_color),
            Player::new(SECOND_PLAYER, player2_color),
        ]);
        self.active = 0;
        self.outcome = None;
        self.move_count = 0;
        self.phase = phase;
        self.started_at = Some(chrono::Utc::now());
        self.ended_at = None;
        Ok(())
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Returns the resulting events. Input that cannot be played (inactive or
    /// ended session, bad column, full column) is ignored and yields no events.
    pub fn submit_column(&mut self, column: usize) -> Vec<SessionEvent> {
        if !self.phase.is_active() {
            debug!(column, phase = %self.phase, "ignoring move outside active play");
            return Vec::new();
        }

        let row = match self.board.landing_row(column) {
            Ok(Some(row)) => row,
            Ok(None) => {
                debug!(column, "ignoring move into full column");
                return Vec::new();
            }
            Err(err) => {
                debug!(%err, "ignoring move");
                return Vec::new();
            }
        };

        let Some(player) = self.active_player().cloned() else {
            return Vec::new();
        };

        self.board.place(row, column, player.index);
        self.move_count += 1;
        debug!(row, column, player = player.index, "piece placed");

        let mut events = vec![SessionEvent::PieceAdded {
            row,
            column,
            color: player.color.clone(),
        }];

        // Win takes precedence over a full board
        let outcome = if self.board.has_win_from(row, column, player.index) {
            Some(Outcome::Winner(player.index))
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.finish(outcome);
                events.push(SessionEvent::game_ended(outcome));
            }
            None => self.active = usize::from(player.opponent_index() - FIRST_PLAYER),
        }

        events
    }

    /// Submit a raw column identifier as delivered by a UI.
    ///
    /// Anything that does not parse as a column number is ignored.
    pub fn submit_input(&mut self, raw: &str) -> Vec<SessionEvent> {
        match raw.trim().parse::<usize>() {
            Ok(column) => self.submit_column(column),
            Err(_) => {
                debug!(raw, "ignoring non-numeric column input");
                Vec::new()
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = self
            .phase
            .transition(PhaseEvent::Finish)
            .unwrap_or(Phase::Ended);
        self.outcome = Some(outcome);
        self.ended_at = Some(chrono::Utc::now());
        info!(
            outcome = outcome.as_str(),
            moves = self.move_count,
            "{}",
            outcome.message()
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, `None` before the first start.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|p| &p[self.active])
    }

    /// Both players, `None` before the first start.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Convert full session state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let players: Vec<serde_json::Value> = self
            .players
            .iter()
            .flatten()
            .map(|p| p.to_json())
            .collect();

        serde_json::json!({
            "phase": self.phase.as_str(),
            "board": self.board.to_json(),
            "players": players,
            "active_player": self.active_player().map(|p| p.index),
            "outcome": self.outcome.map(|o| o.to_json()),
            "move_count": self.move_count,
            "created_at": self.created_at.to_rfc3339(),
            "started_at": self.started_at.map(|t| t.to_rfc3339()),
            "ended_at": self.ended_at.map(|t| t.to_rfc3339())
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}

/// Session manager - tracks independent sessions by ID.
///
/// Every session owns its board, and moves go through `&mut` access, so moves
/// within one session never interleave.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, GameSession>,
    next_id: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inactive session and return its ID.
    pub fn create(&mut self, config: &GameConfig) -> Result<String, BoardError> {
        let session = GameSession::new(config)?;
        self.next_id += 1;
        let id = format!("session-{}", self.next_id);
        self.sessions.insert(id.clone(), session);
        debug!(session_id = %id, "session created");
        Ok(id)
    }

    /// Get a session.
    pub fn get(&self, session_id: &str) -> Option<&GameSession> {
        self.sessions.get(session_id)
    }

    /// Get a mutable session.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(session_id)
    }

    /// Remove a session.
    pub fn remove(&mut self, session_id: &str) -> Option<GameSession> {
        self.sessions.remove(session_id)
    }

    /// Submit a move to a session. Unknown IDs yield no events.
    pub fn submit_column(&mut self, session_id: &str, column: usize) -> Vec<SessionEvent> {
        match self.sessions.get_mut(session_id) {
            Some(session) => session.submit_column(column),
            None => {
                debug!(session_id, "ignoring move for unknown session");
                Vec::new()
            }
        }
    }

    /// Clean up ended sessions.
    pub fn cleanup_ended(&mut self) -> Vec<String> {
        let ended: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.phase().is_ended())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &ended {
            self.remove(id);
        }

        ended
    }

    /// Count sessions accepting moves.
    pub fn active_count(&self) -> usize {
        self.sessions
            .values()
            .filter(|s| s.phase().is_active())
            .count()
    }

    /// Total session count.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}
