//! Player telemetry snapshot
//!
//! One `Telemetry` instance holds the stats the messenger renders. The
//! feed decoder never touches it directly: it sends [`TelemetryUpdate`]
//! messages, each applied under a single critical section, so the
//! messenger can never observe a half-written snapshot.

use super::status::MatchStatus;

/// Latest player stats as reported by the feed
///
/// Health and armor are domain-expected 0-100 but not validated here;
/// the bar encoder saturates. `headshots <= kills` is expected but the
/// renderer clamps rather than trusts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Telemetry {
    /// Current match phase
    pub status: MatchStatus,
    /// Player health
    pub health: i16,
    /// Player armor
    pub armor: i16,
    /// Player money, rendered as a bare decimal
    pub money: i32,
    /// Kills this round
    pub kills: u16,
    /// Headshot kills this round, a subset of `kills`
    pub headshots: u16,
}

impl Telemetry {
    /// Empty snapshot, no match in progress
    pub const fn new() -> Self {
        Self {
            status: MatchStatus::Idle,
            health: 0,
            armor: 0,
            money: 0,
            kills: 0,
            headshots: 0,
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Atomic update from the telemetry listener
///
/// Fields that must change together travel in one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelemetryUpdate {
    /// Match phase changed
    Status(MatchStatus),
    /// Kill tally changed
    Kills { kills: u16, headshots: u16 },
    /// Player stats changed
    Player { health: i16, armor: i16, money: i32 },
}

impl Telemetry {
    /// Apply one update, returning whether the screen must be redrawn
    ///
    /// Only a status change forces a redraw; kill and player updates
    /// become visible on the next one.
    pub fn apply(&mut self, update: TelemetryUpdate) -> bool {
        match update {
            TelemetryUpdate::Status(status) => {
                self.status = status;
                true
            }
            TelemetryUpdate::Kills { kills, headshots } => {
                self.kills = kills;
                self.headshots = headshots;
                false
            }
            TelemetryUpdate::Player {
                health,
                armor,
                money,
            } => {
                self.health = health;
                self.armor = armor;
                self.money = money;
                false
            }
        }
    }
}
