//! Player identity.

use std::fmt;

/// Index of the player who moves first.
pub const FIRST_PLAYER: u8 = 1;

/// Index of the player who moves second.
pub const SECOND_PLAYER: u8 = 2;

/// A player in a session.
///
/// Created at session start and never changed until restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 1 or 2; also the value stored in board cells
    pub index: u8,

    /// Display color chosen by the front-end
    pub color: String,
}

impl Player {
    pub fn new(index: u8, color: impl Into<String>) -> Self {
        Self {
            index,
            color: color.into(),
        }
    }

    /// Index of the opposing player.
    pub fn opponent_index(&self) -> u8 {
        if self.index == FIRST_PLAYER {
            SECOND_PLAYER
        } else {
            FIRST_PLAYER
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "index": self.index,
            "color": self.color
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index)
    }
}
