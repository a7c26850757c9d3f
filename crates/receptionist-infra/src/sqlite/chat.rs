//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `receptionist-core` using sqlx
//! with split read/write pools: raw queries, private Row structs, writes on
//! the single-connection writer pool.
//!
//! Sequence numbers are assigned inside a write transaction as
//! `MAX(seq) + 1` within the conversation; the single-connection writer
//! pool serializes assignment. Truncate-and-replace for the edit workflow
//! runs delete and insert in one transaction so a crash cannot leave the
//! conversation missing its edited message.

use receptionist_core::chat::repository::ConversationRepository;
use receptionist_types::chat::{ChatMessage, ConversationSummary, MessageRole, NewMessage};
use receptionist_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain ChatMessage.
struct MessageRow {
    id: String,
    conversation_id: String,
    role: String,
    text: String,
    in_reply_to: Option<String>,
    seq: i64,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            role: row.try_get("role")?,
            text: row.try_get("text")?,
            in_reply_to: row.try_get("in_reply_to")?,
            seq: row.try_get("seq")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let in_reply_to = self
            .in_reply_to
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| RepositoryError::Query(format!("invalid in_reply_to: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(ChatMessage {
            id,
            conversation_id: self.conversation_id,
            role,
            text: self.text,
            in_reply_to,
            seq: self.seq as u32,
            created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Insert one message inside an open transaction, assigning the next seq.
async fn insert_in_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    conversation_id: &str,
    role: MessageRole,
    text: &str,
    in_reply_to: Option<Uuid>,
) -> Result<ChatMessage, RepositoryError> {
    let row = sqlx::query("SELECT COALESCE(MAX(seq) + 1, 0) AS next_seq FROM messages WHERE conversation_id = ?")
        .bind(conversation_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let next_seq: i64 = row
        .try_get("next_seq")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

    let message = ChatMessage {
        id: Uuid::now_v7(),
        conversation_id: conversation_id.to_string(),
        role,
        text: text.to_string(),
        in_reply_to,
        seq: next_seq as u32,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"INSERT INTO messages (id, conversation_id, role, text, in_reply_to, seq, created_at)
           VALUES (?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(message.id.to_string())
    .bind(&message.conversation_id)
    .bind(message.role.to_string())
    .bind(&message.text)
    .bind(message.in_reply_to.map(|id| id.to_string()))
    .bind(message.seq as i64)
    .bind(format_datetime(&message.created_at))
    .execute(&mut **tx)
    .await
    .map_err(|e| RepositoryError::Query(e.to_string()))?;

    Ok(message)
}

// ---------------------------------------------------------------------------
// ConversationRepository implementation
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn insert_message(
        &self,
        message: &NewMessage,
    ) -> Result<ChatMessage, RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let stored = insert_in_tx(
            &mut tx,
            &message.conversation_id,
            message.role,
            &message.text,
            message.in_reply_to,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(stored)
    }

    async fn messages_for_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows =
            sqlx::query("SELECT * FROM messages WHERE conversation_id = ? ORDER BY seq ASC")
                .bind(conversation_id)
                .fetch_all(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn find_message(
        &self,
        message_id: &Uuid,
    ) -> Result<Option<ChatMessage>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM messages WHERE id = ?")
            .bind(message_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let msg_row =
                    MessageRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(msg_row.into_message()?))
            }
            None => Ok(None),
        }
    }

    async fn truncate_and_replace(
        &self,
        conversation_id: &str,
        from_seq: u32,
        new_text: &str,
    ) -> Result<ChatMessage, RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query("DELETE FROM messages WHERE conversation_id = ? AND seq >= ?")
            .bind(conversation_id)
            .bind(from_seq as i64)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let stored =
            insert_in_tx(&mut tx, conversation_id, MessageRole::User, new_text, None).await?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(stored)
    }

    async fn delete_messages_from(
        &self,
        conversation_id: &str,
        from_seq: u32,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE conversation_id = ? AND seq >= ?")
            .bind(conversation_id)
            .bind(from_seq as i64)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE conversation_id = ?")
            .bind(conversation_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT conversation_id, COUNT(*) AS message_count, MAX(created_at) AS last_activity
               FROM messages
               GROUP BY conversation_id
               ORDER BY MAX(created_at) DESC"#,
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in &rows {
            let conversation_id: String = row
                .try_get("conversation_id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let message_count: i64 = row
                .try_get("message_count")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let last_activity: String = row
                .try_get("last_activity")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            summaries.push(ConversationSummary {
                conversation_id,
                message_count: message_count as u32,
                last_activity: parse_datetime(&last_activity)?,
            });
        }

        Ok(summaries)
    }
}
