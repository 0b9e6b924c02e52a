//! The event store boundary.
//!
//! The aggregator consumes two operations from the store that holds the raw
//! notification rows: fetch every row whose new-event flag is set, and clear
//! that flag (for all rows or for a single view target). Everything else
//! about the store — schema, persistence, sync — belongs to the store.

use async_trait::async_trait;
use notifold_sdk::{EventKind, ViewTarget};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors signaled by an event store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to run the query or update.
    #[error("event store backend error: {0}")]
    Backend(String),
}

/// One raw notification row as stored by the event store.
///
/// All three fields are opaque integers from the store's point of view:
/// the kind id is resolved through [`EventKind::from_id`], the account id
/// through the account registry, and the timestamp stays epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub kind_id: i64,
    pub account_id: i64,
    pub updated_at_ms: i64,
}

/// Source of flagged event rows and sink for clear operations.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All rows whose new-event flag is currently set, in arbitrary order.
    async fn fetch_flagged(&self) -> Result<Vec<EventRow>, StoreError>;

    /// Clear the new-event flag on matching rows.
    ///
    /// `None` clears every row. Clearing an already-clear row is a no-op.
    async fn clear_flag(&self, scope: Option<&ViewTarget>) -> Result<(), StoreError>;
}

struct FlaggedRow {
    row: EventRow,
    flagged: bool,
}

/// In-process event store.
///
/// Used by tests and by embedders that keep rows in memory. Rows are pushed
/// with the flag set; `fetch_flagged` returns the flagged subset and
/// `clear_flag` unsets flags, optionally scoped to the rows whose kind and
/// account match the given view target.
#[derive(Default)]
pub struct MemoryEventStore {
    rows: Mutex<Vec<FlaggedRow>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row with the new-event flag set.
    pub async fn push(&self, row: EventRow) {
        self.rows.lock().await.push(FlaggedRow { row, flagged: true });
    }

    fn matches(row: &EventRow, scope: &ViewTarget) -> bool {
        if EventKind::from_id(row.kind_id).target_kind() != scope.kind {
            return false;
        }
        match scope.account {
            Some(account_id) => row.account_id == account_id,
            None => true,
        }
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn fetch_flagged(&self) -> Result<Vec<EventRow>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|entry| entry.flagged)
            .map(|entry| entry.row)
            .collect())
    }

    async fn clear_flag(&self, scope: Option<&ViewTarget>) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        for entry in rows.iter_mut() {
            let clear = match scope {
                None => true,
                Some(target) => Self::matches(&entry.row, target),
            };
            if clear {
                entry.flagged = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use notifold_sdk::TargetKind;

    fn row(kind: EventKind, account_id: i64, ts: i64) -> EventRow {
        EventRow {
            kind_id: kind.id(),
            account_id,
            updated_at_ms: ts,
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_only_flagged_rows() {
        let store = MemoryEventStore::new();
        store.push(row(EventKind::PrivateMessage, 1, 100)).await;
        store.push(row(EventKind::Liked, 1, 200)).await;
        assert_eq!(store.fetch_flagged().await.unwrap().len(), 2);

        store.clear_flag(None).await.unwrap();
        assert!(store.fetch_flagged().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryEventStore::new();
        store.push(row(EventKind::Followed, 1, 100)).await;
        store.clear_flag(None).await.unwrap();
        store.clear_flag(None).await.unwrap();
        assert!(store.fetch_flagged().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scoped_clear_leaves_other_rows_flagged() {
        let store = MemoryEventStore::new();
        store.push(row(EventKind::PrivateMessage, 1, 100)).await;
        store.push(row(EventKind::PrivateMessage, 2, 150)).await;
        store.push(row(EventKind::OutboxFailure, 1, 200)).await;

        let target = ViewTarget::for_account(TargetKind::PrivateMessages, 1);
        store.clear_flag(Some(&target)).await.unwrap();

        let left = store.fetch_flagged().await.unwrap();
        assert_eq!(left.len(), 2);
        assert!(left.iter().all(|r| {
            r.account_id == 2 || EventKind::from_id(r.kind_id) == EventKind::OutboxFailure
        }));
    }
}
