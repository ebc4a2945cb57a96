//! Screen composition for the Agon telemetry messenger
//!
//! This crate provides:
//! - `Frame`, the two-line byte buffer one render cycle sends
//! - Builders for every screen the messenger shows
//!
//! # Architecture
//!
//! The display is a dumb 16x2 character LCD behind a write-only UART.
//! Six of its custom character slots hold progress glyphs and two hold
//! kill markers, so a rendered line is raw bytes, not text. A `Frame`
//! is built here from a telemetry snapshot; the firmware writes line
//! one, waits out the display's settle time, then writes line two.

#![no_std]

pub mod frame;
pub mod screens;

// Re-export key types
pub use frame::{Frame, LINE_CAP};
pub use screens::{HEADSHOT_MARKER, KILL_MARKER};
