//! Shared object types for Notifold.
//!
//! These types cross the boundary between the aggregation core and the
//! frontend that renders notifications: event kinds, view targets, and the
//! launch actions produced when the user acts on a notification.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod objects;

pub use objects::events::EventKind;
pub use objects::targets::{LaunchAction, TargetKind, ViewTarget};
