//! Agon - Match Telemetry Messenger Firmware
//!
//! Main firmware binary for RP2040 boards driving a two-line serial
//! character LCD.
//!
//! Named after the Greek "agon" meaning "contest" - the live matches
//! whose telemetry this firmware renders, one status change at a time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::config::{MessengerConfig, DISPLAY_BAUD};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Agon firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup UART for the display link. The LCD is write-only; the RX
    // half exists only because the buffered driver hands back both.
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = DISPLAY_BAUD;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("UART initialized for display link");

    // Spawn tasks. The feed decoder (GSI bridge, host link - out of
    // scope here) pushes TelemetryUpdate messages into UPDATE_CHANNEL.
    spawner.spawn(tasks::telemetry_task()).unwrap();
    spawner
        .spawn(tasks::messenger_task(tx, MessengerConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
