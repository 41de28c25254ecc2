//! Session phase state machine.
//!
//! Tracks where a session is in its lifecycle and validates transitions.
//!
//! # State Diagram
//!
//! ```text
//! ┌──────────┐   start   ┌──────────┐   finish   ┌──────────┐
//! │ Inactive │──────────▶│  Active  │───────────▶│  Ended   │
//! └──────────┘           └────┬─────┘            └────┬─────┘
//!                          ▲  │ restart               │
//!                          │  ▼                       │
//!                          └──┴───────────────────────┘
//!                                   restart
//! ```

use std::fmt;

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Created, not yet started
    #[default]
    Inactive,
    /// Accepting moves
    Active,
    /// Win or draw reached
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }

    /// Check if the session accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the session has reached a win or draw.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Label for the start/restart control a front-end shows in this phase.
    pub fn control_label(&self) -> &'static str {
        match self {
            Self::Inactive => "Start Game",
            Self::Active | Self::Ended => "Restart Game",
        }
    }

    /// Apply an event, returning the next phase or an error.
    pub fn transition(self, event: PhaseEvent) -> Result<Phase, InvalidTransition> {
        use Phase::*;
        use PhaseEvent::*;

        let invalid = |reason: &'static str| InvalidTransition {
            from: self,
            event,
            reason,
        };

        match (self, event) {
            // Start: Inactive -> Active
            (Inactive, Start) => Ok(Active),
            (_, Start) => Err(invalid("Session already started")),

            // Restart: Active/Ended -> Active
            (Inactive, Restart) => Err(invalid("Session has not been started")),
            (_, Restart) => Ok(Active),

            // Finish: Active -> Ended
            (Active, Finish) => Ok(Ended),
            (Ended, Finish) => Err(invalid("Session already ended")),
            (Inactive, Finish) => Err(invalid("Session has not been started")),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "Inactive"),
            Self::Active => write!(f, "Active"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

/// Phase transition events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Start,
    Restart,
    Finish,
}

/// Error when a phase transition is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid transition from {from} via {event:?}: {reason}")]
pub struct InvalidTransition {
    pub from: Phase,
    pub event: PhaseEvent,
    pub reason: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let phase = Phase::default();
        assert_eq!(phase, Phase::Inactive);
        assert!(!phase.is_active());
        assert!(!phase.is_ended());
    }

    #[test]
    fn test_session_flow() {
        let phase = Phase::Inactive.transition(PhaseEvent::Start).unwrap();
        assert!(phase.is_active());

        let phase = phase.transition(PhaseEvent::Finish).unwrap();
        assert!(phase.is_ended());

        let phase = phase.transition(PhaseEvent::Restart).unwrap();
        assert!(phase.is_active());

        // Restart mid-game
        let phase = phase.transition(PhaseEvent::Restart).unwrap();
        assert!(phase.is_active());
    }

    #[test]
    fn test_invalid_transitions() {
        // Can't restart before starting
        assert!(Phase::Inactive.transition(PhaseEvent::Restart).is_err());

        // Can't start twice
        assert!(Phase::Active.transition(PhaseEvent::Start).is_err());
        assert!(Phase::Ended.transition(PhaseEvent::Start).is_err());

        // Can't finish outside of play
        assert!(Phase::Inactive.transition(PhaseEvent::Finish).is_err());
        assert!(Phase::Ended.transition(PhaseEvent::Finish).is_err());
    }

    #[test]
    fn test_control_label() {
        assert_eq!(Phase::Inactive.control_label(), "Start Game");
        assert_eq!(Phase::Active.control_label(), "Restart Game");
        assert_eq!(Phase::Ended.control_label(), "Restart Game");
    }

    #[test]
    fn test_display() {
        let err = Phase::Active.transition(PhaseEvent::Start).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transition from Active via Start: Session already started"
        );
    }
}
