//! Chat session manager.
//!
//! `ChatService` orchestrates the lifecycle of a chat turn: persist the
//! user message, call the AI responder with the shop context and full
//! history, persist the reply. It also owns the edit-and-regenerate
//! workflow, which truncates everything at and after the edited message
//! before re-answering from the surviving prefix.
//!
//! Failure policy: a responder failure never rolls back the user's
//! message or edit. The turn is committed but left unanswered, and the
//! caller gets a distinguishable outcome so the UI can offer a retry.

use receptionist_types::chat::{
    ChatMessage, ChatTurn, ConversationSummary, EditOutcome, MessageRole, NewMessage, TurnReply,
};
use receptionist_types::error::ChatError;
use receptionist_types::llm::CompletionRequest;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::locks::ConversationLocks;
use crate::chat::prompt::{self, ShopContext};
use crate::chat::repository::ConversationRepository;
use crate::llm::provider::LlmProvider;

/// Client-supplied conversation ids are an untrusted partition key.
const MAX_CONVERSATION_ID_LEN: usize = 128;

/// Generation parameters applied to every AI call.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Orchestrates chat turns and the edit/regenerate workflow.
///
/// Generic over `ConversationRepository` and `LlmProvider` so the core
/// never depends on receptionist-infra. All writes to one conversation
/// are serialized through a per-conversation lock; reads are not.
pub struct ChatService<R: ConversationRepository, P: LlmProvider> {
    repo: R,
    provider: P,
    settings: LlmSettings,
    locks: ConversationLocks,
}

impl<R: ConversationRepository, P: LlmProvider> ChatService<R, P> {
    pub fn new(repo: R, provider: P, settings: LlmSettings) -> Self {
        Self {
            repo,
            provider,
            settings,
            locks: ConversationLocks::new(),
        }
    }

    /// Receive a user message, persist it, and answer it.
    ///
    /// When `conversation_id` is absent a fresh one is minted, creating
    /// the conversation implicitly. The user message is committed before
    /// the AI call, so a responder failure loses no input.
    pub async fn send_message(
        &self,
        conversation_id: Option<String>,
        text: &str,
        context: &ShopContext,
    ) -> Result<ChatTurn, ChatError> {
        validate_text(text)?;
        let conversation_id = match conversation_id {
            Some(id) => {
                validate_conversation_id(&id)?;
                id
            }
            None => Uuid::now_v7().to_string(),
        };

        let _guard = self.locks.acquire(&conversation_id).await;

        let user_message = self
            .repo
            .insert_message(&NewMessage {
                conversation_id: conversation_id.clone(),
                role: MessageRole::User,
                text: text.to_string(),
                in_reply_to: None,
            })
            .await?;

        let history = self.repo.messages_for_conversation(&conversation_id).await?;
        let reply = self
            .generate_reply(&conversation_id, &history, user_message.id, context)
            .await?;

        Ok(ChatTurn {
            conversation_id,
            user_message,
            reply,
        })
    }

    /// Rewrite a historical user message as if every later turn had never
    /// happened.
    ///
    /// Truncates the conversation at the target message (inclusive) and
    /// inserts the replacement in one store transaction, then regenerates
    /// the reply from the surviving prefix. Destructive and
    /// non-idempotent: a second identical call targets the regenerated
    /// message, not the original.
    pub async fn edit_message(
        &self,
        message_id: &Uuid,
        conversation_id: &str,
        new_text: &str,
        context: &ShopContext,
    ) -> Result<EditOutcome, ChatError> {
        validate_text(new_text)?;
        validate_conversation_id(conversation_id)?;

        let _guard = self.locks.acquire(conversation_id).await;

        let target = self
            .repo
            .find_message(message_id)
            .await?
            .ok_or(ChatError::NotFound)?;
        if target.conversation_id != conversation_id {
            return Err(ChatError::NotFound);
        }
        if target.role != MessageRole::User {
            return Err(ChatError::Validation(
                "only user messages can be edited".to_string(),
            ));
        }

        let edited = self
            .repo
            .truncate_and_replace(conversation_id, target.seq, new_text)
            .await?;
        info!(
            conversation_id = %conversation_id,
            from_seq = target.seq,
            "conversation truncated for edit"
        );

        let history = self.repo.messages_for_conversation(conversation_id).await?;
        let reply = self
            .generate_reply(conversation_id, &history, edited.id, context)
            .await?;

        let messages = self.repo.messages_for_conversation(conversation_id).await?;
        Ok(EditOutcome {
            conversation_id: conversation_id.to_string(),
            edited,
            reply,
            messages,
        })
    }

    /// All messages for a conversation in order. An unknown id yields an
    /// empty history, not an error.
    pub async fn history(&self, conversation_id: &str) -> Result<Vec<ChatMessage>, ChatError> {
        validate_conversation_id(conversation_id)?;
        Ok(self.repo.messages_for_conversation(conversation_id).await?)
    }

    /// Distinct conversations, newest activity first.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, ChatError> {
        Ok(self.repo.list_conversations().await?)
    }

    /// Delete a conversation and all its messages. Idempotent: deleting
    /// an unknown conversation succeeds with 0 removed.
    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<u64, ChatError> {
        validate_conversation_id(conversation_id)?;
        let _guard = self.locks.acquire(conversation_id).await;
        let removed = self.repo.delete_conversation(conversation_id).await?;
        info!(conversation_id = %conversation_id, removed, "conversation deleted");
        Ok(removed)
    }

    /// Call the responder with the current history and persist the reply.
    ///
    /// A provider failure is recovered locally: the turn stays committed
    /// and the outcome records the error instead of a reply.
    async fn generate_reply(
        &self,
        conversation_id: &str,
        history: &[ChatMessage],
        user_message_id: Uuid,
        context: &ShopContext,
    ) -> Result<TurnReply, ChatError> {
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: prompt::history_to_messages(history),
            system: Some(prompt::render_system_context(context)),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        };

        match self.provider.complete(&request).await {
            Ok(response) => {
                let bot_message = self
                    .repo
                    .insert_message(&NewMessage {
                        conversation_id: conversation_id.to_string(),
                        role: MessageRole::Bot,
                        text: response.content,
                        in_reply_to: Some(user_message_id),
                    })
                    .await?;
                info!(
                    conversation_id = %conversation_id,
                    provider = self.provider.name(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "reply generated"
                );
                Ok(TurnReply::Answered(bot_message))
            }
            Err(e) => {
                warn!(
                    conversation_id = %conversation_id,
                    provider = self.provider.name(),
                    error = %e,
                    "AI responder call failed; turn left unanswered"
                );
                Ok(TurnReply::Unanswered {
                    error: e.to_string(),
                })
            }
        }
    }
}

fn validate_text(text: &str) -> Result<(), ChatError> {
    if text.trim().is_empty() {
        return Err(ChatError::Validation(
            "message text must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_conversation_id(id: &str) -> Result<(), ChatError> {
    if id.is_empty() {
        return Err(ChatError::Validation(
            "conversation id must not be empty".to_string(),
        ));
    }
    if id.len() > MAX_CONVERSATION_ID_LEN {
        return Err(ChatError::Validation(format!(
            "conversation id exceeds {MAX_CONVERSATION_ID_LEN} characters"
        )));
    }
    if id.chars().any(char::is_control) {
        return Err(ChatError::Validation(
            "conversation id contains control characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use receptionist_types::llm::{CompletionResponse, LlmError, Usage};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// In-memory conversation store mirroring the SQLite seq semantics.
    #[derive(Default)]
    struct InMemoryRepository {
        messages: Mutex<Vec<ChatMessage>>,
    }

    impl InMemoryRepository {
        fn next_seq(messages: &[ChatMessage], conversation_id: &str) -> u32 {
            messages
                .iter()
                .filter(|m| m.conversation_id == conversation_id)
                .map(|m| m.seq + 1)
                .max()
                .unwrap_or(0)
        }
    }

    impl ConversationRepository for InMemoryRepository {
        async fn insert_message(
            &self,
            message: &NewMessage,
        ) -> Result<ChatMessage, receptionist_types::error::RepositoryError> {
            let mut messages = self.messages.lock().unwrap();
            let stored = ChatMessage {
                id: Uuid::now_v7(),
                conversation_id: message.conversation_id.clone(),
                role: message.role,
                text: message.text.clone(),
                in_reply_to: message.in_reply_to,
                seq: Self::next_seq(&messages, &message.conversation_id),
                created_at: Utc::now(),
            };
            messages.push(stored.clone());
            Ok(stored)
        }

        async fn messages_for_conversation(
            &self,
            conversation_id: &str,
        ) -> Result<Vec<ChatMessage>, receptionist_types::error::RepositoryError> {
            let mut result: Vec<ChatMessage> = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.conversation_id == conversation_id)
                .cloned()
                .collect();
            result.sort_by_key(|m| m.seq);
            Ok(result)
        }

        async fn find_message(
            &self,
            message_id: &Uuid,
        ) -> Result<Option<ChatMessage>, receptionist_types::error::RepositoryError> {
            Ok(self
                .messages
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == *message_id)
                .cloned())
        }

        async fn truncate_and_replace(
            &self,
            conversation_id: &str,
            from_seq: u32,
            new_text: &str,
        ) -> Result<ChatMessage, receptionist_types::error::RepositoryError> {
            let mut messages = self.messages.lock().unwrap();
            messages.retain(|m| m.conversation_id != conversation_id || m.seq < from_seq);
            let stored = ChatMessage {
                id: Uuid::now_v7(),
                conversation_id: conversation_id.to_string(),
                role: MessageRole::User,
                text: new_text.to_string(),
                in_reply_to: None,
                seq: Self::next_seq(&messages, conversation_id),
                created_at: Utc::now(),
            };
            messages.push(stored.clone());
            Ok(stored)
        }

        async fn delete_messages_from(
            &self,
            conversation_id: &str,
            from_seq: u32,
        ) -> Result<u64, receptionist_types::error::RepositoryError> {
            let mut messages = self.messages.lock().unwrap();
            let before = messages.len();
            messages.retain(|m| m.conversation_id != conversation_id || m.seq < from_seq);
            Ok((before - messages.len()) as u64)
        }

        async fn delete_conversation(
            &self,
            conversation_id: &str,
        ) -> Result<u64, receptionist_types::error::RepositoryError> {
            let mut messages = self.messages.lock().unwrap();
            let before = messages.len();
            messages.retain(|m| m.conversation_id != conversation_id);
            Ok((before - messages.len()) as u64)
        }

        async fn list_conversations(
            &self,
        ) -> Result<Vec<ConversationSummary>, receptionist_types::error::RepositoryError> {
            let messages = self.messages.lock().unwrap();
            let mut summaries: Vec<ConversationSummary> = Vec::new();
            for m in messages.iter() {
                match summaries
                    .iter_mut()
                    .find(|s| s.conversation_id == m.conversation_id)
                {
                    Some(s) => {
                        s.message_count += 1;
                        if m.created_at > s.last_activity {
                            s.last_activity = m.created_at;
                        }
                    }
                    None => summaries.push(ConversationSummary {
                        conversation_id: m.conversation_id.clone(),
                        message_count: 1,
                        last_activity: m.created_at,
                    }),
                }
            }
            summaries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
            Ok(summaries)
        }
    }

    /// Scripted responder: pops queued outcomes, records the last request.
    #[derive(Default)]
    struct FakeProvider {
        script: Mutex<VecDeque<Result<String, LlmError>>>,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl FakeProvider {
        fn replies(replies: &[&str]) -> Self {
            Self {
                script: Mutex::new(
                    replies.iter().map(|r| Ok(r.to_string())).collect(),
                ),
                last_request: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                script: Mutex::new(VecDeque::from([Err(LlmError::Provider {
                    message: message.to_string(),
                })])),
                last_request: Mutex::new(None),
            }
        }

        fn push_reply(&self, reply: &str) {
            self.script.lock().unwrap().push_back(Ok(reply.to_string()));
        }
    }

    impl LlmProvider for &FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            let scripted = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("ok".to_string()));
            scripted.map(|content| CompletionResponse {
                id: "resp-1".to_string(),
                content,
                model: request.model.clone(),
                usage: Usage::default(),
            })
        }
    }

    fn settings() -> LlmSettings {
        LlmSettings {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1_000,
            temperature: 0.7,
        }
    }

    fn service<'a>(
        provider: &'a FakeProvider,
    ) -> ChatService<InMemoryRepository, &'a FakeProvider> {
        ChatService::new(InMemoryRepository::default(), provider, settings())
    }

    #[tokio::test]
    async fn test_send_message_alternates_roles() {
        let provider = FakeProvider::replies(&["first", "second", "third"]);
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();
        assert!(turn.reply.is_answered());

        service
            .send_message(Some("c1".to_string()), "again", &ShopContext::default())
            .await
            .unwrap();

        let history = service.history("c1").await.unwrap();
        assert_eq!(history.len(), 4);
        let roles: Vec<MessageRole> = history.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::User,
                MessageRole::Bot,
                MessageRole::User,
                MessageRole::Bot
            ]
        );
        let seqs: Vec<u32> = history.iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_send_message_mints_conversation_id() {
        let provider = FakeProvider::replies(&["hi"]);
        let service = service(&provider);

        let turn = service
            .send_message(None, "hello", &ShopContext::default())
            .await
            .unwrap();
        assert!(!turn.conversation_id.is_empty());

        let history = service.history(&turn.conversation_id).await.unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_bot_reply_links_to_user_message() {
        let provider = FakeProvider::replies(&["hi"]);
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();

        let TurnReply::Answered(reply) = turn.reply else {
            panic!("expected an answered turn");
        };
        assert_eq!(reply.in_reply_to, Some(turn.user_message.id));
    }

    #[tokio::test]
    async fn test_empty_text_rejected_without_side_effects() {
        let provider = FakeProvider::replies(&[]);
        let service = service(&provider);

        let err = service
            .send_message(Some("c1".to_string()), "   ", &ShopContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
        assert!(service.history("c1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_conversation_id_rejected() {
        let provider = FakeProvider::replies(&[]);
        let service = service(&provider);

        let too_long = "x".repeat(200);
        for bad in ["", "has\ncontrol", too_long.as_str()] {
            let err = service
                .send_message(Some(bad.to_string()), "hello", &ShopContext::default())
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::Validation(_)), "id: {bad:?}");
        }
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_user_message() {
        let provider = FakeProvider::failing("quota exhausted");
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();
        let TurnReply::Unanswered { error } = &turn.reply else {
            panic!("expected an unanswered turn");
        };
        assert!(error.contains("quota exhausted"));

        let history = service.history("c1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, MessageRole::User);
        assert_eq!(history[0].text, "hello");
    }

    #[tokio::test]
    async fn test_conversation_recovers_after_unanswered_turn() {
        let provider = FakeProvider::failing("network down");
        let service = service(&provider);

        service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();
        provider.push_reply("back online");
        let turn = service
            .send_message(Some("c1".to_string()), "hello again", &ShopContext::default())
            .await
            .unwrap();
        assert!(turn.reply.is_answered());

        // The unanswered user message is still part of the history.
        let history = service.history("c1").await.unwrap();
        assert_eq!(history.len(), 3);
    }

    #[tokio::test]
    async fn test_edit_truncates_suffix_and_preserves_prefix() {
        let provider = FakeProvider::replies(&["r1", "r2", "r3", "edited reply"]);
        let service = service(&provider);

        for text in ["one", "two", "three"] {
            service
                .send_message(Some("c1".to_string()), text, &ShopContext::default())
                .await
                .unwrap();
        }
        let before = service.history("c1").await.unwrap();
        assert_eq!(before.len(), 6);

        // Edit the second user message (position 2, seq 2).
        let target = before[2].clone();
        let outcome = service
            .edit_message(&target.id, "c1", "two, revised", &ShopContext::default())
            .await
            .unwrap();

        let after = service.history("c1").await.unwrap();
        assert_eq!(after.len(), 4);

        // Prefix untouched, byte for byte.
        for (orig, kept) in before[..2].iter().zip(&after[..2]) {
            assert_eq!(orig.id, kept.id);
            assert_eq!(orig.text, kept.text);
            assert_eq!(orig.seq, kept.seq);
        }

        // Position k carries the new text; the original suffix is gone.
        assert_eq!(after[2].text, "two, revised");
        assert_ne!(after[2].id, target.id);
        assert_eq!(after[3].text, "edited reply");
        assert_eq!(after[3].in_reply_to, Some(outcome.edited.id));
        for old in &before[3..] {
            assert!(after.iter().all(|m| m.id != old.id));
        }

        // The responder saw the surviving prefix plus the edited text.
        let request = provider.last_request.lock().unwrap().clone().unwrap();
        let sent: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(sent, vec!["one", "r1", "two, revised"]);
    }

    #[tokio::test]
    async fn test_edit_first_message_regenerates_everything() {
        let provider = FakeProvider::replies(&[
            "We have chocolate and vanilla.",
            "$20-$50.",
        ]);
        let service = service(&provider);

        let turn = service
            .send_message(
                Some("c1".to_string()),
                "What cakes do you have?",
                &ShopContext::default(),
            )
            .await
            .unwrap();

        let outcome = service
            .edit_message(
                &turn.user_message.id,
                "c1",
                "What's your price range?",
                &ShopContext::default(),
            )
            .await
            .unwrap();

        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0].text, "What's your price range?");
        assert_eq!(outcome.messages[1].text, "$20-$50.");

        let history = service.history("c1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|m| m.id != turn.user_message.id));
    }

    #[tokio::test]
    async fn test_edit_commits_even_when_responder_fails() {
        let provider = FakeProvider::replies(&["r1"]);
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "original", &ShopContext::default())
            .await
            .unwrap();

        // Queue is now empty of failures; make the next call fail.
        *provider.script.lock().unwrap() = VecDeque::from([Err(LlmError::Overloaded(
            "overloaded".to_string(),
        ))]);

        let outcome = service
            .edit_message(&turn.user_message.id, "c1", "rewritten", &ShopContext::default())
            .await
            .unwrap();
        assert!(!outcome.reply.is_answered());

        // Truncation and the edited text are committed; no bot reply.
        let history = service.history("c1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "rewritten");
        assert_eq!(history[0].role, MessageRole::User);
    }

    #[tokio::test]
    async fn test_edit_unknown_message_is_not_found() {
        let provider = FakeProvider::replies(&[]);
        let service = service(&provider);

        let err = service
            .edit_message(&Uuid::now_v7(), "c1", "text", &ShopContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::NotFound));
    }

    #[tokio::test]
    async fn test_edit_message_from_other_conversation_is_not_found() {
        let provider = FakeProvider::replies(&["r1"]);
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();

        let err = service
            .edit_message(&turn.user_message.id, "c2", "text", &ShopContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::NotFound));

        // c1 is untouched.
        assert_eq!(service.history("c1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_bot_message_rejected() {
        let provider = FakeProvider::replies(&["r1"]);
        let service = service(&provider);

        let turn = service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();
        let TurnReply::Answered(reply) = turn.reply else {
            panic!("expected an answered turn");
        };

        let err = service
            .edit_message(&reply.id, "c1", "text", &ShopContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_conversation_is_idempotent() {
        let provider = FakeProvider::replies(&["r1"]);
        let service = service(&provider);

        service
            .send_message(Some("c1".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(service.delete_conversation("c1").await.unwrap(), 2);
        assert!(service.history("c1").await.unwrap().is_empty());
        assert_eq!(service.delete_conversation("c1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_conversations_newest_first() {
        let provider = FakeProvider::replies(&["r1", "r2"]);
        let service = service(&provider);

        service
            .send_message(Some("older".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service
            .send_message(Some("newer".to_string()), "hello", &ShopContext::default())
            .await
            .unwrap();

        let conversations = service.list_conversations().await.unwrap();
        assert_eq!(conversations.len(), 2);
        assert_eq!(conversations[0].conversation_id, "newer");
        assert_eq!(conversations[1].conversation_id, "older");
        assert_eq!(conversations[0].message_count, 2);
    }

    #[tokio::test]
    async fn test_system_context_reaches_provider() {
        let provider = FakeProvider::replies(&["r1"]);
        let service = service(&provider);

        let context = ShopContext {
            system_prompt: receptionist_types::shop::SystemPrompt {
                prompt: "Answer in rhyme.".to_string(),
            },
            ..ShopContext::default()
        };
        service
            .send_message(Some("c1".to_string()), "hello", &context)
            .await
            .unwrap();

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert!(request.system.unwrap().contains("Answer in rhyme."));
        assert_eq!(request.model, "claude-sonnet-4-20250514");
    }
}
