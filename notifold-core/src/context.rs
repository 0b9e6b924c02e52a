//! The read-only context the aggregator runs against.
//!
//! The original design read a process-wide singleton; here the context is an
//! explicit value passed at construction. It owns nothing mutable: the
//! account registry is read-only and the action resolver is a pure function
//! from view target to launch descriptor.

use std::sync::Arc;

use notifold_sdk::{LaunchAction, ViewTarget};

use crate::accounts::AccountRegistry;

/// Produces the platform-specific launch descriptor for a view target.
///
/// Implemented by the enclosing application (deep links, intents, ...).
/// The aggregator only carries the result, it never interprets it.
pub trait ActionResolver: Send + Sync {
    fn launch_action(&self, target: ViewTarget) -> LaunchAction;
}

/// Resolver that maps every target to an empty launch URI.
///
/// Backs [`NotifierContext::empty`], where no platform is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl ActionResolver for NoopResolver {
    fn launch_action(&self, target: ViewTarget) -> LaunchAction {
        LaunchAction {
            target,
            uri: compact_str::CompactString::const_new(""),
        }
    }
}

/// Everything the aggregator reads from the enclosing application.
#[derive(Clone)]
pub struct NotifierContext {
    accounts: AccountRegistry,
    resolver: Arc<dyn ActionResolver>,
}

impl NotifierContext {
    pub fn new(accounts: AccountRegistry, resolver: Arc<dyn ActionResolver>) -> Self {
        Self { accounts, resolver }
    }

    /// The "no context available" sentinel: empty registry, no-op resolver.
    pub fn empty() -> Self {
        Self {
            accounts: AccountRegistry::default(),
            resolver: Arc::new(NoopResolver),
        }
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    /// Resolve a launch action for a view target.
    pub fn launch_action(&self, target: ViewTarget) -> LaunchAction {
        self.resolver.launch_action(target)
    }
}

impl std::fmt::Debug for NotifierContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierContext")
            .field("accounts", &self.accounts)
            .finish_non_exhaustive()
    }
}
