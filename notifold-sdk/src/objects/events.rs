//! Notification event kinds.
//!
//! Each kind carries a stable numeric id that is persisted by the event
//! store. Ids must never be reassigned; an id that maps to no known kind is
//! read back as [`EventKind::Empty`] and dropped by the aggregator.

use serde::{Deserialize, Serialize};

use super::targets::TargetKind;

/// All notification event kinds known to Notifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Reserved "no event" value.
    Empty,
    /// Someone reposted one of the user's notes.
    AnnouncePosted,
    /// The user gained a follower.
    Followed,
    /// One of the user's notes was liked.
    Liked,
    /// The user was mentioned in a note.
    Mentioned,
    /// An outbound send failed and is stuck in the outbox.
    OutboxFailure,
    /// A new private message arrived.
    PrivateMessage,
    /// The home stream has new entries.
    HomeUpdated,
}

impl EventKind {
    /// Kinds in the order the aggregator picks one to act on: the two fixed
    /// categories first (private messages, then outbox failures), then the
    /// remaining kinds in a fixed documented order.
    pub const ACTION_PRIORITY: [EventKind; 7] = [
        EventKind::PrivateMessage,
        EventKind::OutboxFailure,
        EventKind::Mentioned,
        EventKind::AnnouncePosted,
        EventKind::Liked,
        EventKind::Followed,
        EventKind::HomeUpdated,
    ];

    /// The stable persisted id of this kind.
    pub const fn id(self) -> i64 {
        match self {
            EventKind::Empty => 0,
            EventKind::AnnouncePosted => 1,
            EventKind::Followed => 2,
            EventKind::Liked => 3,
            EventKind::Mentioned => 4,
            EventKind::OutboxFailure => 5,
            EventKind::PrivateMessage => 6,
            EventKind::HomeUpdated => 7,
        }
    }

    /// Look up a kind by its persisted id.
    ///
    /// Unknown ids map to [`EventKind::Empty`]; a row written by a newer
    /// schema must never make reads fail.
    pub const fn from_id(id: i64) -> EventKind {
        match id {
            1 => EventKind::AnnouncePosted,
            2 => EventKind::Followed,
            3 => EventKind::Liked,
            4 => EventKind::Mentioned,
            5 => EventKind::OutboxFailure,
            6 => EventKind::PrivateMessage,
            7 => EventKind::HomeUpdated,
            _ => EventKind::Empty,
        }
    }

    /// The category of screen this kind of event should open.
    pub const fn target_kind(self) -> TargetKind {
        match self {
            EventKind::Empty => TargetKind::Home,
            EventKind::HomeUpdated => TargetKind::Home,
            EventKind::PrivateMessage => TargetKind::PrivateMessages,
            EventKind::OutboxFailure => TargetKind::Outbox,
            EventKind::AnnouncePosted
            | EventKind::Followed
            | EventKind::Liked
            | EventKind::Mentioned => TargetKind::Notifications,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Empty => write!(f, "empty"),
            EventKind::AnnouncePosted => write!(f, "announce_posted"),
            EventKind::Followed => write!(f, "followed"),
            EventKind::Liked => write!(f, "liked"),
            EventKind::Mentioned => write!(f, "mentioned"),
            EventKind::OutboxFailure => write!(f, "outbox_failure"),
            EventKind::PrivateMessage => write!(f, "private_message"),
            EventKind::HomeUpdated => write!(f, "home_updated"),
        }
    }
}
