//! Conversation turn records.
//!
//! A turn is one role-tagged text entry in an agent's dialogue history.
//! Turns are ordered by occurrence; that order is what reconstructs the
//! conversation when a prompt is built.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
    System,
    Tool,
}

impl TurnRole {
    /// Label used when rendering a turn into prompt text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "User",
            TurnRole::Assistant => "Assistant",
            TurnRole::System => "System",
            TurnRole::Tool => "Tool",
        }
    }
}

/// A single entry in an agent's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Role of the speaker
    pub role: TurnRole,

    /// Turn content
    pub content: String,

    /// Timestamp (Unix millis)
    pub timestamp: u64,
}

impl ConversationTurn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Tool, content)
    }

    /// Render the turn as a single prompt line, e.g. `User: hello`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.role.as_str(), self.content)
    }
}

fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_constructors_tag_roles() {
        assert_eq!(ConversationTurn::user("hi").role, TurnRole::User);
        assert_eq!(ConversationTurn::assistant("hello").role, TurnRole::Assistant);
        assert_eq!(ConversationTurn::tool("ran").role, TurnRole::Tool);
    }

    #[test]
    fn render_prefixes_speaker_label() {
        let turn = ConversationTurn::user("Evaluate this resume");
        assert_eq!(turn.render(), "User: Evaluate this resume");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&TurnRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn turn_serialization_roundtrip() {
        let turn = ConversationTurn::assistant("Candidate scores 8/10");
        let json = serde_json::to_string(&turn).unwrap();
        let deserialized: ConversationTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, turn);
    }
}
