pub mod events;
pub mod targets;
