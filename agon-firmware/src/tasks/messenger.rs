//! Messenger task
//!
//! Owns the serial link to the display. Sleeps until the ingest task
//! signals a status change, then redraws the screen for the current
//! status; the bomb countdown keeps its own once-per-second cadence
//! while the status stays `Bomb`. All writes to the link happen here,
//! so byte order on the wire is total.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Instant, Timer};
use embedded_io_async::Write;

use agon_core::state::{MatchStatus, ScreenKind};
use agon_core::timer::Countdown;
use agon_display::screens;
use agon_display::Frame;

use crate::channels::{REFRESH, SHUTDOWN, TELEMETRY};
use crate::config::MessengerConfig;

/// Request the messenger loop to exit
///
/// Observed promptly from the blocked wait and between line writes;
/// never interrupts a write in progress.
pub fn shutdown() {
    SHUTDOWN.signal(());
}

/// Messenger task - renders telemetry to the display
#[embassy_executor::task]
pub async fn messenger_task(mut tx: BufferedUartTx<'static, UART0>, config: MessengerConfig) {
    info!("Messenger task started");

    loop {
        match select(REFRESH.wait(), SHUTDOWN.wait()).await {
            Either::Second(()) => break,
            Either::First(()) => {
                let status = TELEMETRY.lock().await.status;
                match status.screen() {
                    ScreenKind::Idle => {
                        write_frame(&mut tx, &screens::idle(), &config).await;
                    }
                    ScreenKind::Stats => {
                        let snapshot = *TELEMETRY.lock().await;
                        write_frame(&mut tx, &screens::player_stats(&snapshot), &config).await;
                    }
                    ScreenKind::Bomb => {
                        bomb_sequence(&mut tx, &config).await;
                    }
                }
            }
        }
    }

    info!("Messenger stopped");
}

/// Run the bomb screen for the current status
///
/// Dispatched for `Bomb`, `Defused` and `Exploded`. A terminal status
/// renders its screen exactly once; the countdown path renders nothing
/// terminal itself - when the status moves away from `Bomb`, the
/// refresh that changed it re-enters here with the final status.
async fn bomb_sequence(tx: &mut BufferedUartTx<'static, UART0>, config: &MessengerConfig) {
    match TELEMETRY.lock().await.status {
        MatchStatus::Bomb => plant_countdown(tx, config).await,
        MatchStatus::Defused => write_frame(tx, &screens::bomb_defused(), config).await,
        MatchStatus::Exploded => write_frame(tx, &screens::bomb_exploded(), config).await,
        // Status moved on before we got here; the pending refresh
        // re-dispatches
        _ => {}
    }
}

/// Tick the plant countdown until it resolves
///
/// Redraws on whole-second boundaries. Exits when the status leaves
/// `Bomb`, the window runs out, or shutdown is requested. Expiry with
/// the status still `Bomb` just stops the cadence - the bomb's true
/// outcome always arrives as a status change from the feed.
async fn plant_countdown(tx: &mut BufferedUartTx<'static, UART0>, config: &MessengerConfig) {
    let planted = Instant::now();
    let mut countdown = Countdown::new(config.bomb_window_s);

    debug!("Bomb planted, countdown running");

    while !SHUTDOWN.signaled() {
        if !TELEMETRY.lock().await.status.is_planted() {
            break;
        }

        let elapsed_ms = planted.elapsed().as_millis() as u32;
        if countdown.expired(elapsed_ms) {
            debug!("Countdown window elapsed");
            break;
        }
        if let Some(remaining) = countdown.tick(elapsed_ms) {
            write_frame(tx, &screens::bomb_planted(remaining), config).await;
        }

        Timer::after(config.tick_interval).await;
    }
}

/// Write one frame, pausing between lines so the display can latch
///
/// A failed write aborts this render cycle only; the loop carries on
/// with the next refresh. Shutdown is honored between discrete writes.
async fn write_frame(
    tx: &mut BufferedUartTx<'static, UART0>,
    frame: &Frame,
    config: &MessengerConfig,
) {
    if SHUTDOWN.signaled() {
        return;
    }

    if let Err(e) = tx.write_all(frame.line1()).await {
        warn!("Display write failed: {:?}", e);
        return;
    }

    // Wait for second line
    Timer::after(config.settle).await;

    if !frame.has_second_line() || SHUTDOWN.signaled() {
        return;
    }

    if let Err(e) = tx.write_all(frame.line2()).await {
        warn!("Display write failed: {:?}", e);
        return;
    }

    Timer::after(config.settle).await;
}
