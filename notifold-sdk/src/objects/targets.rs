//! View targets and launch actions.
//!
//! A view target names the screen a notification should open. The launch
//! action is the opaque descriptor handed to the platform layer when the
//! user acts on a notification; the aggregation core never interprets it.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The category of screen a notification opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// The default home stream.
    Home,
    /// The combined notifications stream.
    Notifications,
    /// The private messages stream.
    PrivateMessages,
    /// The outbox with failed sends.
    Outbox,
}

/// A specific screen to open, optionally scoped to one account.
///
/// `account` is `None` for aggregate screens (owner unknown or conflicted)
/// and for the default home target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewTarget {
    pub kind: TargetKind,
    pub account: Option<i64>,
}

impl ViewTarget {
    /// The default target: the home stream, no account scope.
    pub const fn home() -> Self {
        Self {
            kind: TargetKind::Home,
            account: None,
        }
    }

    /// A target scoped to a single account.
    pub const fn for_account(kind: TargetKind, account_id: i64) -> Self {
        Self {
            kind,
            account: Some(account_id),
        }
    }

    /// An aggregate (account-less) target.
    pub const fn aggregate(kind: TargetKind) -> Self {
        Self {
            kind,
            account: None,
        }
    }
}

impl Default for ViewTarget {
    fn default() -> Self {
        Self::home()
    }
}

/// The platform-specific launch descriptor for a view target.
///
/// Produced by the action resolver of the enclosing application; carried
/// opaquely by the aggregation core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchAction {
    pub target: ViewTarget,
    /// Opaque launch URI (deep link, intent string, etc.).
    pub uri: CompactString,
}
