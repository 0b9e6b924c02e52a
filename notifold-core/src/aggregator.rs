//! The event aggregator.
//!
//! Folds the unordered stream of raw notification rows into one summary per
//! event kind, resolves owner conflicts, and answers the queries the
//! frontend needs: per-kind counts, emptiness, and which single kind to act
//! on when the user taps the generic notification.
//!
//! An aggregator value is a snapshot. `load()` and the `clear*` operations
//! always build and return a new snapshot; a snapshot that has been handed
//! out is never written to again.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use notifold_sdk::{EventKind, LaunchAction, ViewTarget};
use tracing::{debug, info};

use crate::accounts::Owner;
use crate::context::NotifierContext;
use crate::store::{EventRow, EventStore, StoreError};
use crate::summary::EventSummary;

/// One immutable aggregation snapshot.
pub struct EventAggregator {
    ctx: Arc<NotifierContext>,
    store: Arc<dyn EventStore>,
    /// Kinds the user wants to be told about. Rows for other kinds never
    /// produce a map entry.
    enabled: Arc<Vec<EventKind>>,
    map: DashMap<EventKind, EventSummary>,
}

impl EventAggregator {
    /// Create an unloaded aggregator over the given context and store.
    ///
    /// Call [`load`](Self::load) to produce the first populated snapshot.
    pub fn new(
        ctx: Arc<NotifierContext>,
        store: Arc<dyn EventStore>,
        enabled: Vec<EventKind>,
    ) -> Self {
        Self {
            ctx,
            store,
            enabled: Arc::new(enabled),
            map: DashMap::new(),
        }
    }

    /// The "no context available" sentinel: nothing enabled, nothing loaded.
    pub fn empty() -> Self {
        Self::new(
            Arc::new(NotifierContext::empty()),
            Arc::new(crate::store::MemoryEventStore::new()),
            Vec::new(),
        )
    }

    /// Build a fresh snapshot from the store's currently flagged rows.
    ///
    /// The previous snapshot (`self`) is left untouched.
    pub async fn load(&self) -> Result<EventAggregator, StoreError> {
        let rows = self.store.fetch_flagged().await?;
        let map = DashMap::new();
        for row in rows {
            Self::fold_row(&map, &self.enabled, &self.ctx, row);
        }
        info!(entries = map.len(), "loaded notification summaries");
        Ok(Self {
            ctx: Arc::clone(&self.ctx),
            store: Arc::clone(&self.store),
            enabled: Arc::clone(&self.enabled),
            map,
        })
    }

    /// Clear the new-event flag on every row, then reload.
    pub async fn clear_all(&self) -> Result<EventAggregator, StoreError> {
        self.store.clear_flag(None).await?;
        debug!("cleared all notification flags");
        self.load().await
    }

    /// Clear the new-event flag on rows scoped to one view target, then
    /// reload.
    pub async fn clear(&self, target: &ViewTarget) -> Result<EventAggregator, StoreError> {
        self.store.clear_flag(Some(target)).await?;
        debug!(target = ?target, "cleared notification flags for target");
        self.load().await
    }

    /// The accumulated count for a kind; 0 when nothing was observed.
    pub fn get_count(&self, kind: EventKind) -> u64 {
        self.map.get(&kind).map_or(0, |summary| summary.count())
    }

    /// True when no entry has a positive count.
    pub fn is_empty(&self) -> bool {
        !self.map.iter().any(|entry| entry.count() > 0)
    }

    /// The single kind the user should act on.
    ///
    /// Private messages win, then outbox failures, then the remaining kinds
    /// in the fixed order of [`EventKind::ACTION_PRIORITY`]. Returns
    /// [`EventKind::Empty`] when nothing is pending.
    pub fn dominant_kind(&self) -> EventKind {
        if self.is_empty() {
            return EventKind::Empty;
        }
        EventKind::ACTION_PRIORITY
            .into_iter()
            .find(|kind| self.get_count(*kind) > 0)
            .unwrap_or(EventKind::Empty)
    }

    /// The launch action for the dominant kind's summary.
    ///
    /// Falls back to the default (home) action when nothing is pending.
    pub fn launch_action(&self) -> LaunchAction {
        let dominant = self.dominant_kind();
        match self.map.get(&dominant) {
            Some(summary) => summary.launch_action(&self.ctx),
            None => EventSummary::EMPTY.launch_action(&self.ctx),
        }
    }

    /// Fold one raw row into the map under construction.
    ///
    /// Unknown kind ids drop the row; rows for kinds outside the enabled
    /// list never create an entry. When a second distinct owner shows up for
    /// a kind, the entry is replaced by an anonymous summary carrying the
    /// summed count and the latest timestamp, and stays anonymous for the
    /// rest of the snapshot.
    fn fold_row(
        map: &DashMap<EventKind, EventSummary>,
        enabled: &[EventKind],
        ctx: &NotifierContext,
        row: EventRow,
    ) {
        let kind = EventKind::from_id(row.kind_id);
        if kind == EventKind::Empty {
            debug!(kind_id = row.kind_id, "unknown event kind id, dropping row");
            return;
        }
        let owner = ctx.accounts().owner_from_id(row.account_id);

        match map.entry(kind) {
            Entry::Vacant(vacant) => {
                if enabled.contains(&kind) {
                    let mut summary = EventSummary::new(kind, owner);
                    summary.on_event_at(row.updated_at_ms);
                    vacant.insert(summary);
                }
            }
            Entry::Occupied(mut occupied) => {
                let summary = occupied.get_mut();
                if *summary.owner() == owner {
                    summary.on_event_at(row.updated_at_ms);
                } else {
                    let mut replacement = EventSummary::new(kind, Owner::Anonymous);
                    replacement.on_event_at(row.updated_at_ms);
                    replacement.on_events_at(summary.last_updated_ms(), summary.count());
                    occupied.insert(replacement);
                }
            }
        }
    }
}
