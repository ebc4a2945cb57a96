//! Board-agnostic core logic for the Agon telemetry messenger
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Progress glyph encoding and stat bars
//! - Match status and screen dispatch
//! - Telemetry snapshot and atomic update messages
//! - Bomb countdown bookkeeping
//!
//! Timing-sensitive logic consumes elapsed time as data so everything
//! here runs under `cargo test` on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod progress;
pub mod state;
pub mod timer;
