//! Notification configuration.
//!
//! The embedding application decides which event kinds the user is told
//! about. This section maps straight onto its config file; everything else
//! about config loading stays with the application.

use notifold_sdk::EventKind;
use serde::{Deserialize, Serialize};

/// The `[notifications]` section of the application config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Event kinds the user wants notifications for.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<EventKind>,
}

fn default_enabled() -> Vec<EventKind> {
    // Home-stream chatter is too noisy to notify about by default.
    vec![
        EventKind::AnnouncePosted,
        EventKind::Followed,
        EventKind::Liked,
        EventKind::Mentioned,
        EventKind::OutboxFailure,
        EventKind::PrivateMessage,
    ]
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl NotificationConfig {
    /// The enabled kinds, deduplicated and with the reserved `Empty` value
    /// filtered out, in the order they were listed.
    pub fn enabled_kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<EventKind> = Vec::with_capacity(self.enabled.len());
        for kind in &self.enabled {
            if *kind != EventKind::Empty && !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }
}
