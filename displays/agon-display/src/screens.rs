//! Screen builders
//!
//! One function per screen the messenger shows. Each returns a
//! [`Frame`] with the exact bytes the display expects; the firmware
//! only decides which builder to call and when.

use core::fmt::Write as _;

use agon_core::progress::{stat_bar, ProgressCode};
use agon_core::state::{MatchStatus, Telemetry};

use crate::frame::Frame;

/// Byte the display renders as a plain kill marker
pub const KILL_MARKER: u8 = 0x00;

/// Byte the display renders as a headshot kill marker
pub const HEADSHOT_MARKER: u8 = 0x01;

/// Glyph cells in the bomb countdown bar
const BOMB_BAR_CELLS: i32 = 8;

/// Seconds covered by each countdown bar cell
const BOMB_BAR_STEP_S: i32 = 5;

/// Idle banner shown while no match is running
pub fn idle() -> Frame {
    let mut f = Frame::new();
    f.push1_str("Waiting for");
    f.push2_str("matches");
    f
}

/// Countdown screen for one whole-second boundary
///
/// The bar recedes in five-second cells: cell `i` renders
/// `remaining - 5*i` through the saturating glyph encoder, so each
/// cell drains over its own five seconds and sits empty afterwards.
/// The numeric readout follows the bar on the same line.
pub fn bomb_planted(remaining_s: u16) -> Frame {
    let mut f = Frame::new();
    f.push1_str("BOMB PLANTED");
    for cell in 0..BOMB_BAR_CELLS {
        let level = i32::from(remaining_s) - cell * BOMB_BAR_STEP_S;
        f.push2_byte(ProgressCode::from_level(level).as_byte());
    }
    let mut readout: heapless::String<8> = heapless::String::new();
    let _ = write!(readout, "{}", remaining_s);
    f.push2_str(&readout);
    f
}

/// Terminal screen after a successful defuse
pub fn bomb_defused() -> Frame {
    let mut f = Frame::new();
    f.push1_str("BOMB DEFUSED");
    f.push2_str(" ");
    f
}

/// Terminal screen after detonation
pub fn bomb_exploded() -> Frame {
    let mut f = Frame::new();
    f.push1_str("BOMB EXPLODED");
    f.push2_str(" ");
    f
}

/// Health/armor bars plus the kill tally or money line
///
/// Line two depends on the sub-status: the live round shows plain-kill
/// markers then headshot markers (plain first, never interleaved), the
/// buy phase shows money, anything else leaves the line unwritten.
pub fn player_stats(telemetry: &Telemetry) -> Frame {
    let mut f = Frame::new();

    f.push1_str("H: ");
    for code in stat_bar(i32::from(telemetry.health)) {
        f.push1_byte(code.as_byte());
    }
    f.push1_str(" A: ");
    for code in stat_bar(i32::from(telemetry.armor)) {
        f.push1_byte(code.as_byte());
    }

    match telemetry.status {
        MatchStatus::PreFreezetime => {
            f.push2_str("K: ");
            // Clamp rather than trust headshots <= kills
            let plain = telemetry.kills.saturating_sub(telemetry.headshots);
            for _ in 0..plain {
                f.push2_byte(KILL_MARKER);
            }
            for _ in 0..telemetry.headshots {
                f.push2_byte(HEADSHOT_MARKER);
            }
        }
        MatchStatus::Freezetime => {
            let mut money: heapless::String<16> = heapless::String::new();
            let _ = write!(money, "M: {}", telemetry.money);
            f.push2_str(&money);
        }
        _ => {}
    }

    f
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_round(kills: u16, headshots: u16) -> Telemetry {
        Telemetry {
            status: MatchStatus::PreFreezetime,
            health: 100,
            armor: 100,
            money: 0,
            kills,
            headshots,
        }
    }

    #[test]
    fn test_idle_banner() {
        let f = idle();
        assert_eq!(f.line1(), b"Waiting for");
        assert_eq!(f.line2(), b"matches");
    }

    #[test]
    fn test_defused_and_exploded() {
        let f = bomb_defused();
        assert_eq!(f.line1(), b"BOMB DEFUSED");
        assert_eq!(f.line2(), b" ");

        let f = bomb_exploded();
        assert_eq!(f.line1(), b"BOMB EXPLODED");
        assert_eq!(f.line2(), b" ");
    }

    #[test]
    fn test_countdown_fresh_plant() {
        // 39 s left: seven full cells, the eighth at four of five
        let f = bomb_planted(39);
        assert_eq!(f.line1(), b"BOMB PLANTED");
        assert_eq!(f.line2(), b"\x06\x06\x06\x06\x06\x06\x06\x0539");
    }

    #[test]
    fn test_countdown_last_seconds() {
        // 4 s left: only the first cell still shows anything
        let f = bomb_planted(4);
        assert_eq!(f.line2(), b"\x05\x07\x07\x07\x07\x07\x07\x074");
    }

    #[test]
    fn test_countdown_zero() {
        let f = bomb_planted(0);
        assert_eq!(f.line2(), b"\x07\x07\x07\x07\x07\x07\x07\x070");
    }

    #[test]
    fn test_stats_line_bars() {
        let f = player_stats(&live_round(0, 0));
        assert_eq!(f.line1(), b"H: \x06\x06\x06\x06 A: \x06\x06\x06\x06");
    }

    #[test]
    fn test_kill_tally_order() {
        // 10 kills, 3 of them headshots: 7 plain then 3 headshot bytes
        let f = player_stats(&live_round(10, 3));
        assert_eq!(
            f.line2(),
            b"K: \x00\x00\x00\x00\x00\x00\x00\x01\x01\x01"
        );
    }

    #[test]
    fn test_kill_tally_clamps_bad_feed() {
        // More headshots than kills must not underflow the plain count
        let f = player_stats(&live_round(2, 5));
        assert_eq!(f.line2(), b"K: \x01\x01\x01\x01\x01");
    }

    #[test]
    fn test_money_line() {
        let t = Telemetry {
            status: MatchStatus::Freezetime,
            health: 100,
            armor: 0,
            money: 16000,
            kills: 0,
            headshots: 0,
        };
        let f = player_stats(&t);
        assert_eq!(f.line2(), b"M: 16000");
    }

    #[test]
    fn test_no_second_line_outside_round_phases() {
        let mut t = live_round(5, 1);
        t.status = MatchStatus::Bomb;
        let f = player_stats(&t);
        assert!(!f.has_second_line());
    }

    #[test]
    fn test_full_countdown_sequence() {
        // A 40 s plant polled at 100 ms yields one frame per second,
        // counting 39 down to 0, and nothing after the window
        use agon_core::timer::Countdown;

        let mut countdown = Countdown::new(40);
        let mut frames = 0u32;
        let mut expected = 39i32;
        for elapsed in (0u32..45_000).step_by(100) {
            if let Some(remaining) = countdown.tick(elapsed) {
                assert_eq!(i32::from(remaining), expected);
                expected -= 1;
                let f = bomb_planted(remaining);
                assert_eq!(f.line1(), b"BOMB PLANTED");
                let digits = if remaining >= 10 { 2 } else { 1 };
                assert_eq!(f.line2().len(), 8 + digits);
                frames += 1;
            }
        }
        assert_eq!(frames, 40);
    }

    #[test]
    fn test_half_health_bar() {
        let t = Telemetry {
            status: MatchStatus::Freezetime,
            health: 37,
            armor: 0,
            money: 650,
            kills: 0,
            headshots: 0,
        };
        let f = player_stats(&t);
        // 37 -> full, two fifths, empty, empty; armor 0 -> all empty
        assert_eq!(f.line1(), b"H: \x06\x03\x07\x07 A: \x07\x07\x07\x07");
    }
}
