//! Match state and telemetry
//!
//! Defines the closed status enumeration the messenger dispatches on
//! and the snapshot of player stats it renders from.

pub mod status;
pub mod telemetry;

pub use status::{MatchStatus, ScreenKind};
pub use telemetry::{Telemetry, TelemetryUpdate};
