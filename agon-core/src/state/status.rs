//! Match status reported by the game-state feed
//!
//! The feed reduces each payload to one of six phases. Exactly one is
//! active at any instant; the messenger redraws on every change.

/// Current match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    /// No match in progress
    #[default]
    Idle,
    /// Bomb planted, countdown running
    Bomb,
    /// Round live, kill tally shown
    PreFreezetime,
    /// Buy phase, money shown
    Freezetime,
    /// Bomb defused this round
    Defused,
    /// Bomb detonated this round
    Exploded,
}

/// Which screen the messenger shows for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    /// "Waiting for matches" banner
    Idle,
    /// Health/armor bars plus kill or money line
    Stats,
    /// Countdown or terminal bomb screen
    Bomb,
}

impl MatchStatus {
    /// Screen selection for this status
    ///
    /// Exhaustive on purpose - there is no "any other status" fallthrough.
    pub fn screen(self) -> ScreenKind {
        match self {
            MatchStatus::Idle => ScreenKind::Idle,
            MatchStatus::Bomb | MatchStatus::Defused | MatchStatus::Exploded => ScreenKind::Bomb,
            MatchStatus::PreFreezetime | MatchStatus::Freezetime => ScreenKind::Stats,
        }
    }

    /// Check if the bomb countdown should be ticking
    pub fn is_planted(self) -> bool {
        self == MatchStatus::Bomb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_dispatch() {
        assert_eq!(MatchStatus::Idle.screen(), ScreenKind::Idle);
        assert_eq!(MatchStatus::Bomb.screen(), ScreenKind::Bomb);
        assert_eq!(MatchStatus::Defused.screen(), ScreenKind::Bomb);
        assert_eq!(MatchStatus::Exploded.screen(), ScreenKind::Bomb);
        assert_eq!(MatchStatus::PreFreezetime.screen(), ScreenKind::Stats);
        assert_eq!(MatchStatus::Freezetime.screen(), ScreenKind::Stats);
    }

    #[test]
    fn test_planted() {
        assert!(MatchStatus::Bomb.is_planted());
        assert!(!MatchStatus::Defused.is_planted());
        assert!(!MatchStatus::Idle.is_planted());
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(MatchStatus::default(), MatchStatus::Idle);
    }
}
