//! The per-kind accumulator.
//!
//! One `EventSummary` holds everything the frontend needs about a single
//! event kind: who triggered it (if a single account did), how many rows
//! accumulated, and the latest timestamp. Summaries are mutated only while
//! the aggregator builds a snapshot; once the snapshot is published, callers
//! only see the read accessors.

use notifold_sdk::{EventKind, LaunchAction, ViewTarget};

use crate::accounts::Owner;
use crate::context::NotifierContext;

/// Accumulated state for one event kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    kind: EventKind,
    owner: Owner,
    count: u64,
    last_updated_ms: i64,
}

impl EventSummary {
    /// The "no data" summary: reserved kind, anonymous, count 0.
    pub const EMPTY: EventSummary = EventSummary {
        kind: EventKind::Empty,
        owner: Owner::Anonymous,
        count: 0,
        last_updated_ms: 0,
    };

    pub(crate) fn new(kind: EventKind, owner: Owner) -> Self {
        Self {
            kind,
            owner,
            count: 0,
            last_updated_ms: 0,
        }
    }

    /// Fold in one event: bump the count, keep the latest timestamp.
    pub(crate) fn on_event_at(&mut self, updated_at_ms: i64) {
        self.on_events_at(updated_at_ms, 1);
    }

    /// Fold in `count` events at once.
    ///
    /// Used when an existing summary is merged into a fresh anonymous one
    /// after an owner conflict.
    pub(crate) fn on_events_at(&mut self, updated_at_ms: i64, count: u64) {
        self.count += count;
        self.last_updated_ms = self.last_updated_ms.max(updated_at_ms);
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn last_updated_ms(&self) -> i64 {
        self.last_updated_ms
    }

    /// The screen this summary should open.
    ///
    /// Bound to the owning account when there is exactly one; the aggregate
    /// screen for the kind's category otherwise.
    pub fn view_target(&self) -> ViewTarget {
        match self.owner.account_id() {
            Some(account_id) => ViewTarget::for_account(self.kind.target_kind(), account_id),
            None => ViewTarget::aggregate(self.kind.target_kind()),
        }
    }

    /// Resolve the launch action for this summary. Pure read.
    pub fn launch_action(&self, ctx: &NotifierContext) -> LaunchAction {
        ctx.launch_action(self.view_target())
    }
}
