//! Messenger timing configuration
//!
//! The LCD needs a short pause after each line before it accepts the
//! next one; the countdown polls well under a second so boundaries are
//! not missed. Both are board/display properties, so they live here
//! rather than in the logic crates.

use embassy_time::Duration;

use agon_core::timer::BOMB_WINDOW_S;

/// Baud rate of the display link
pub const DISPLAY_BAUD: u32 = 9600;

/// Timing knobs for the messenger task
#[derive(Debug, Clone, Copy)]
pub struct MessengerConfig {
    /// Pause after each line write so the display can latch it
    pub settle: Duration,
    /// Poll interval while the bomb countdown is ticking
    pub tick_interval: Duration,
    /// Plant-to-detonation window in seconds
    pub bomb_window_s: u16,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(100),
            tick_interval: Duration::from_millis(100),
            bomb_window_s: BOMB_WINDOW_S,
        }
    }
}
