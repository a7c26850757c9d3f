//! ConversationRepository trait definition.
//!
//! The conversation store port: typed message persistence scoped to
//! conversations. Implementations live in receptionist-infra
//! (e.g., `SqliteConversationRepository`).

use receptionist_types::chat::{ChatMessage, ConversationSummary, NewMessage};
use receptionist_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for conversation and message persistence.
///
/// The store assigns message ids, timestamps, and per-conversation `seq`
/// numbers on insert. Uses native async fn in traits (RPITIT, Rust 2024
/// edition).
pub trait ConversationRepository: Send + Sync {
    /// Persist a new message at the end of its conversation.
    ///
    /// Assigns `seq` = highest existing seq in the conversation + 1
    /// (0 for the first message) and returns the stored message.
    fn insert_message(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// All messages for a conversation, ordered by `seq` ascending.
    fn messages_for_conversation(
        &self,
        conversation_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Look up a single message by id.
    fn find_message(
        &self,
        message_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ChatMessage>, RepositoryError>> + Send;

    /// Suffix truncation plus replacement, in one store transaction.
    ///
    /// Deletes every message in the conversation with `seq >= from_seq`
    /// and inserts a fresh user message with `text = new_text` in its
    /// place. A crash between the two steps cannot leave the conversation
    /// missing its edited message.
    fn truncate_and_replace(
        &self,
        conversation_id: &str,
        from_seq: u32,
        new_text: &str,
    ) -> impl std::future::Future<Output = Result<ChatMessage, RepositoryError>> + Send;

    /// Delete every message in the conversation with `seq >= from_seq`.
    /// Returns the number of messages removed.
    fn delete_messages_from(
        &self,
        conversation_id: &str,
        from_seq: u32,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Delete all messages for a conversation. Returns the number removed;
    /// deleting an unknown conversation is a no-op returning 0.
    fn delete_conversation(
        &self,
        conversation_id: &str,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Distinct conversations, newest activity first.
    fn list_conversations(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationSummary>, RepositoryError>> + Send;
}
