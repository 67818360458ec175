//! Conversation context management
//!
//! This module defines the dialogue state carried between turns: a single
//! pending-topic slot remembering which yes/no question the assistant is
//! waiting to have answered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::CampusBuddyError;

/// Topics the assistant can leave pending after asking a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Appointments,
    StudyTimer,
    Navigation,
}

impl Topic {
    /// Stable token used in serialized state and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Appointments => "appointments",
            Topic::StudyTimer => "study_timer",
            Topic::Navigation => "navigation",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = CampusBuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointments" => Ok(Topic::Appointments),
            "study_timer" => Ok(Topic::StudyTimer),
            "navigation" => Ok(Topic::Navigation),
            other => Err(CampusBuddyError::InvalidInput(
                format!("Unknown topic: {}", other)
            )),
        }
    }
}

/// Dialogue state for one conversation session
///
/// Holds at most one pending topic. The state is a plain value: the
/// responder takes it by reference and returns the successor state inside
/// the reply, so independent sessions never share anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueState {
    /// The topic awaiting a yes/no continuation, if any
    pub pending_topic: Option<Topic>,
}

impl DialogueState {
    /// Create a fresh state with no pending topic
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state awaiting a continuation for the given topic
    pub fn awaiting(topic: Topic) -> Self {
        Self { pending_topic: Some(topic) }
    }

    /// Check whether a continuation for the given topic is pending
    pub fn is_awaiting(&self, topic: Topic) -> bool {
        self.pending_topic == Some(topic)
    }

    /// Check whether any topic is pending
    pub fn has_pending(&self) -> bool {
        self.pending_topic.is_some()
    }

    /// Pending topic token for structured logging
    pub fn pending_label(&self) -> &'static str {
        self.pending_topic.map_or("none", |t| t.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_new_state_has_no_pending_topic() {
        let state = DialogueState::new();
        assert!(!state.has_pending());
        assert_eq!(state.pending_label(), "none");
    }

    #[test]
    fn test_awaiting_state() {
        let state = DialogueState::awaiting(Topic::StudyTimer);
        assert!(state.has_pending());
        assert!(state.is_awaiting(Topic::StudyTimer));
        assert!(!state.is_awaiting(Topic::Navigation));
        assert_eq!(state.pending_label(), "study_timer");
    }

    #[test]
    fn test_topic_round_trip() {
        for topic in [Topic::Appointments, Topic::StudyTimer, Topic::Navigation] {
            assert_eq!(topic.as_str().parse::<Topic>().unwrap(), topic);
        }
    }

    #[test]
    fn test_unknown_topic_rejected() {
        assert_matches!(
            "counseling".parse::<Topic>(),
            Err(CampusBuddyError::InvalidInput(_))
        );
    }

    #[test]
    fn test_state_serialization() {
        let state = DialogueState::awaiting(Topic::Appointments);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"pending_topic":"appointments"}"#);

        let restored: DialogueState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
