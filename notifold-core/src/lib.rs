#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod accounts;
pub mod aggregator;
pub mod config;
pub mod context;
pub mod store;
pub mod summary;

pub use accounts::{Account, AccountRegistry, Owner};
pub use aggregator::EventAggregator;
pub use config::NotificationConfig;
pub use context::{ActionResolver, NoopResolver, NotifierContext};
pub use store::{EventRow, EventStore, MemoryEventStore, StoreError};
pub use summary::EventSummary;
