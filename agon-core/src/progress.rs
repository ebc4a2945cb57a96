//! Progress glyph encoding
//!
//! The display defines six custom 5-pixel-wide bar characters. A stat
//! maps onto them through two layers: [`ProgressCode::from_level`]
//! quantizes a 0-5 intensity level to one glyph, and [`stat_bar`]
//! spreads a 0-100 stat across four glyphs of 25 points each.

/// One of the six bar glyphs understood by the display
///
/// Ordered by magnitude: `Empty`, one to four lit columns, `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgressCode {
    /// No columns lit
    Empty,
    /// One column lit
    Bar1,
    /// Two columns lit
    Bar2,
    /// Three columns lit
    Bar3,
    /// Four columns lit
    Bar4,
    /// All five columns lit
    Full,
}

impl ProgressCode {
    /// Quantize an intensity level to a glyph
    ///
    /// Saturates at both ends: anything at or below zero is `Empty`,
    /// anything at or above five is `Full`. Total over `i32` - the bar
    /// arithmetic feeds negative levels through here on purpose.
    pub fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=0 => Self::Empty,
            1 => Self::Bar1,
            2 => Self::Bar2,
            3 => Self::Bar3,
            4 => Self::Bar4,
            _ => Self::Full,
        }
    }

    /// Byte code the display expects for this glyph
    ///
    /// The glyphs live in the display's custom character slots; `Empty`
    /// sits at 0x07 rather than continuing the 0x02..0x06 run.
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Empty => 0x07,
            Self::Bar1 => 0x02,
            Self::Bar2 => 0x03,
            Self::Bar3 => 0x04,
            Self::Bar4 => 0x05,
            Self::Full => 0x06,
        }
    }
}

/// Render a 0-100 stat as a four-glyph bar
///
/// Each glyph covers one 25-point span, subdivided into five steps.
/// Out-of-range values saturate through [`ProgressCode::from_level`];
/// the division truncates toward zero, which is indistinguishable from
/// flooring here because every negative intermediate lands on `Empty`.
pub fn stat_bar(value: i32) -> [ProgressCode; 4] {
    [
        ProgressCode::from_level(value / 5),
        ProgressCode::from_level(value.saturating_sub(25) / 5),
        ProgressCode::from_level(value.saturating_sub(50) / 5),
        ProgressCode::from_level(value.saturating_sub(75) / 5),
    ]
}
