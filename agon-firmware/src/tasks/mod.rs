//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod messenger;
pub mod telemetry;

pub use messenger::{messenger_task, shutdown};
pub use telemetry::telemetry_task;
