//! Chat message and conversation types for Super Receptionist.
//!
//! A conversation is a client-named partition of messages. Messages are
//! ordered within a conversation by a store-assigned sequence number, and
//! every bot reply carries an explicit reference to the user message that
//! triggered it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'bot'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "bot" => Ok(MessageRole::Bot),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single turn within a conversation.
///
/// Messages are ordered by `seq` within a conversation; `created_at` is
/// informational and is never used as an ordering key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: String,
    pub role: MessageRole,
    pub text: String,
    /// For bot messages, the id of the user message this reply answers.
    pub in_reply_to: Option<Uuid>,
    /// Per-conversation monotonic sequence number, store-assigned.
    pub seq: u32,
    pub created_at: DateTime<Utc>,
}

/// A message about to be persisted. The store assigns id, seq, and timestamp.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub conversation_id: String,
    pub role: MessageRole,
    pub text: String,
    pub in_reply_to: Option<Uuid>,
}

/// One row in the conversation listing, newest activity first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub message_count: u32,
    pub last_activity: DateTime<Utc>,
}

/// What became of the AI side of a chat turn.
///
/// A failed provider call is a recovered state, not an error: the user's
/// message is already committed and the conversation is merely left
/// unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TurnReply {
    Answered(ChatMessage),
    Unanswered { error: String },
}

impl TurnReply {
    pub fn is_answered(&self) -> bool {
        matches!(self, TurnReply::Answered(_))
    }
}

/// Result of sending a message: the committed user message plus whatever
/// the AI responder produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub conversation_id: String,
    pub user_message: ChatMessage,
    pub reply: TurnReply,
}

/// Result of editing a historical user message.
///
/// `messages` is the full post-edit history (truncated prefix plus the
/// edited message and, when the responder succeeded, its new reply).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOutcome {
    pub conversation_id: String,
    pub edited: ChatMessage,
    pub reply: TurnReply,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Bot] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let role = MessageRole::Bot;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"bot\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Bot);
    }

    #[test]
    fn test_message_role_rejects_unknown() {
        assert!("assistant".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_chat_message_serialize() {
        let msg = ChatMessage {
            id: Uuid::now_v7(),
            conversation_id: "conv-1".to_string(),
            role: MessageRole::User,
            text: "What cakes do you have?".to_string(),
            in_reply_to: None,
            seq: 0,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"seq\":0"));
    }

    #[test]
    fn test_turn_reply_serde_tags() {
        let unanswered = TurnReply::Unanswered {
            error: "rate limited".to_string(),
        };
        let json = serde_json::to_string(&unanswered).unwrap();
        assert!(json.contains("\"status\":\"unanswered\""));
        assert!(!unanswered.is_answered());
    }
}
