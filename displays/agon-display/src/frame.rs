//! Frame buffer types
//!
//! Provides the two-line byte buffer one render cycle writes to the
//! display. Lines hold raw bytes rather than text because the progress
//! and kill glyphs live in the display's 0x00-0x07 custom slots.

use heapless::Vec;

/// Capacity of one line in bytes
///
/// The panel shows 16 columns; the tally line can run past that and
/// the display clips it, so the buffer leaves headroom before it
/// starts dropping bytes.
pub const LINE_CAP: usize = 40;

/// Two-line frame for the character display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    line1: Vec<u8, LINE_CAP>,
    line2: Vec<u8, LINE_CAP>,
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self {
            line1: Vec::new(),
            line2: Vec::new(),
        }
    }

    /// First line bytes
    pub fn line1(&self) -> &[u8] {
        &self.line1
    }

    /// Second line bytes
    pub fn line2(&self) -> &[u8] {
        &self.line2
    }

    /// Check whether the second line carries anything to write
    pub fn has_second_line(&self) -> bool {
        !self.line2.is_empty()
    }

    /// Append text to the first line, truncating at capacity
    pub fn push1_str(&mut self, text: &str) {
        let take = text.len().min(LINE_CAP - self.line1.len());
        let _ = self.line1.extend_from_slice(&text.as_bytes()[..take]);
    }

    /// Append one raw byte to the first line
    pub fn push1_byte(&mut self, byte: u8) {
        let _ = self.line1.push(byte);
    }

    /// Append text to the second line, truncating at capacity
    pub fn push2_str(&mut self, text: &str) {
        let take = text.len().min(LINE_CAP - self.line2.len());
        let _ = self.line2.extend_from_slice(&text.as_bytes()[..take]);
    }

    /// Append one raw byte to the second line
    pub fn push2_byte(&mut self, byte: u8) {
        let _ = self.line2.push(byte);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Frame[{=[u8]:x} | {=[u8]:x}]",
            self.line1.as_slice(),
            self.line2.as_slice()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame() {
        let f = Frame::new();
        assert!(f.line1().is_empty());
        assert!(!f.has_second_line());
    }

    #[test]
    fn test_push_text_and_bytes() {
        let mut f = Frame::new();
        f.push1_str("H: ");
        f.push1_byte(0x06);
        f.push2_str("M: 800");
        assert_eq!(f.line1(), b"H: \x06");
        assert_eq!(f.line2(), b"M: 800");
        assert!(f.has_second_line());
    }

    #[test]
    fn test_overflow_truncates() {
        let mut f = Frame::new();
        for _ in 0..LINE_CAP + 10 {
            f.push2_byte(0x00);
        }
        assert_eq!(f.line2().len(), LINE_CAP);
    }
}
