//! Per-conversation write serialization.
//!
//! Send and edit are read-modify-write sequences over a shared store with
//! no transaction spanning the AI call, so two writers on the same
//! conversation can interleave destructively (an edit's suffix truncation
//! can sweep up a concurrent send). A single async mutex per conversation
//! id makes each chat turn atomic with respect to other writers on the
//! same conversation while leaving different conversations fully parallel.

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use std::sync::Arc;

/// Registry of per-conversation write locks, keyed by conversation id.
///
/// Entries are created on first use and kept for the life of the process;
/// the registry grows with the number of distinct conversations, like the
/// message store itself.
#[derive(Default)]
pub struct ConversationLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ConversationLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the write lock for a conversation, waiting if another turn
    /// on the same conversation is in flight.
    pub async fn acquire(&self, conversation_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_conversation_serializes() {
        let locks = Arc::new(ConversationLocks::new());
        let active = Arc::new(AtomicU32::new(0));
        let max_active = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = locks.clone();
            let active = active.clone();
            let max_active = max_active.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire("c1").await;
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                max_active.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(2)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_active.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_conversations_run_in_parallel() {
        let locks = Arc::new(ConversationLocks::new());

        let guard_a = locks.acquire("a").await;
        // Must not deadlock: "b" is an independent lock.
        let guard_b = locks.acquire("b").await;

        drop(guard_a);
        drop(guard_b);
    }

    #[tokio::test]
    async fn test_reacquire_after_release() {
        let locks = ConversationLocks::new();
        drop(locks.acquire("c1").await);
        drop(locks.acquire("c1").await);
    }
}
