//! Telemetry ingest task
//!
//! Applies decoded updates from the feed to the shared snapshot. The
//! listener that parses the wire payload pushes `TelemetryUpdate`
//! messages into `UPDATE_CHANNEL`; this task is the snapshot's only
//! writer, so every update lands whole.

use defmt::*;

use crate::channels::{REFRESH, TELEMETRY, UPDATE_CHANNEL};

/// Telemetry ingest task - applies feed updates and wakes the messenger
#[embassy_executor::task]
pub async fn telemetry_task() {
    info!("Telemetry task started");

    loop {
        let update = UPDATE_CHANNEL.receive().await;
        debug!("Update: {:?}", update);

        let needs_redraw = {
            let mut telemetry = TELEMETRY.lock().await;
            telemetry.apply(update)
        };

        // Only status changes redraw; kill and player updates ride
        // along with the next one
        if needs_redraw {
            REFRESH.signal(());
        }
    }
}
