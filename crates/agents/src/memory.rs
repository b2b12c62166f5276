//! Per-agent conversation memory.
//!
//! An ordered, append-only sequence of turn records owned by exactly one
//! agent instance. It grows until explicitly cleared and is never shared
//! across agents.

use hireflow_common::ConversationTurn;
use serde::Serialize;

/// Append-only dialogue history for a single agent.
#[derive(Debug, Default)]
pub struct ConversationMemory {
    turns: Vec<ConversationTurn>,
}

/// Read-only copy of the memory state at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MemorySnapshot {
    pub turns: Vec<ConversationTurn>,
}

impl MemorySnapshot {
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Insertion order is the dialogue order.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Drop all history. Idempotent.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            turns: self.turns.clone(),
        }
    }

    /// Render the history as prompt text, one `Role: content` line per turn.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|t| t.render())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memory_is_empty() {
        let memory = ConversationMemory::new();
        assert!(memory.is_empty());
        assert!(memory.snapshot().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut memory = ConversationMemory::new();
        memory.append(ConversationTurn::user("first"));
        memory.append(ConversationTurn::assistant("second"));
        memory.append(ConversationTurn::user("third"));

        let contents: Vec<&str> = memory.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut memory = ConversationMemory::new();
        memory.append(ConversationTurn::user("hello"));
        memory.clear();
        assert!(memory.is_empty());
        memory.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn render_reconstructs_dialogue() {
        let mut memory = ConversationMemory::new();
        memory.append(ConversationTurn::user("Evaluate this resume"));
        memory.append(ConversationTurn::assistant("Candidate scores 8/10"));

        assert_eq!(
            memory.render(),
            "User: Evaluate this resume\nAssistant: Candidate scores 8/10"
        );
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut memory = ConversationMemory::new();
        memory.append(ConversationTurn::user("hello"));
        let snapshot = memory.snapshot();
        memory.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(memory.is_empty());
    }
}
