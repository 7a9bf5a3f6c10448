//! Line width / font size shared by both editor modes.
//!
//! The size field is free text. Input is read like an integer prefix
//! (`" 24px"` reads as 24); input without leading digits is rejected and the
//! previous size is kept, so drawing code only ever sees a value in
//! `MIN..=MAX`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeSize(u32);

impl StrokeSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 4096;
    pub const DEFAULT: StrokeSize = StrokeSize(16);

    /// Clamp an arbitrary integer into the valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    /// Parse size-field text. `None` means the input has no number in it.
    pub fn parse_input(input: &str) -> Option<Self> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }

        // Anything past i64 range is far beyond MAX anyway
        let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
        let value = if negative { -magnitude } else { magnitude };
        Some(Self::new(value))
    }

    /// Apply size-field text, keeping the current value on rejection.
    /// Returns true if the size changed.
    pub fn apply_input(&mut self, input: &str) -> bool {
        match Self::parse_input(input) {
            Some(size) if size != *self => {
                *self = size;
                true
            }
            _ => false,
        }
    }
}

impl Default for StrokeSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StrokeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
