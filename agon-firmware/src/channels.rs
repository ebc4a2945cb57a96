//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives so the messenger sleeps between
//! status changes instead of polling shared flags.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use agon_core::state::{Telemetry, TelemetryUpdate};

/// Channel capacity for decoded telemetry updates
const UPDATE_CHANNEL_SIZE: usize = 8;

/// Decoded updates from the telemetry listener
///
/// Whatever decodes the inbound feed (GSI bridge, host link) pushes
/// whole updates here; this is the producer-facing boundary.
pub static UPDATE_CHANNEL: Channel<CriticalSectionRawMutex, TelemetryUpdate, UPDATE_CHANNEL_SIZE> =
    Channel::new();

/// Latest telemetry snapshot
///
/// Written only by the ingest task, read only by the messenger.
pub static TELEMETRY: Mutex<CriticalSectionRawMutex, Telemetry> = Mutex::new(Telemetry::new());

/// Signal that the status changed and the screen must be redrawn
pub static REFRESH: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Signal requesting the messenger loop to exit
pub static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();
