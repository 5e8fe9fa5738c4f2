use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// A positive, pixel-equivalent font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FontSize(NonZeroU32);

impl FontSize {
    /// Size shown in the numeric field right after attachment.
    pub const DEFAULT: FontSize = match NonZeroU32::new(12) {
        Some(n) => FontSize(n),
        None => unreachable!(),
    };

    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.get()
    }
}

impl TryFrom<u32> for FontSize {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| AppError::InvalidInput(value.to_string()))
    }
}

impl TryFrom<i64> for FontSize {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| AppError::InvalidInput(value.to_string()))
    }
}

impl FromStr for FontSize {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_size_input(raw).ok_or_else(|| AppError::InvalidInput(raw.to_string()))
    }
}

/// Parse the text of the numeric field.
///
/// Accepts an optional `+`, at least one digit, and an optional fractional
/// part which is truncated (`"14.7"` is 14). Surrounding whitespace is ignored.
/// Anything else, zero, and values that overflow `u32` yield `None`.
pub fn parse_size_input(raw: &str) -> Option<FontSize> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction
        && !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    whole.parse::<u32>().ok().and_then(FontSize::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_size_input("24").map(FontSize::get), Some(24));
        assert_eq!(parse_size_input("1").map(FontSize::get), Some(1));
        assert_eq!(parse_size_input("  16 ").map(FontSize::get), Some(16));
        assert_eq!(parse_size_input("+18").map(FontSize::get), Some(18));
        assert_eq!(parse_size_input("007").map(FontSize::get), Some(7));
    }

    #[test]
    fn test_parse_truncates_fraction() {
        assert_eq!(parse_size_input("14.7").map(FontSize::get), Some(14));
        assert_eq!(parse_size_input("14.").map(FontSize::get), Some(14));
        assert_eq!(parse_size_input("9.999").map(FontSize::get), Some(9));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(parse_size_input("0"), None);
        assert_eq!(parse_size_input("0.9"), None);
        assert_eq!(parse_size_input("-5"), None);
        assert_eq!(parse_size_input("-0"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "12px", "1e3", ".5", "1.2.3", "+", "1 2", "١٢"] {
            assert_eq!(parse_size_input(raw), None, "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(parse_size_input("4294967296"), None);
        assert_eq!(parse_size_input("4294967295").map(FontSize::get), Some(u32::MAX));
    }

    #[test]
    fn test_display_has_no_unit() {
        let size = FontSize::new(18).unwrap();
        assert_eq!(size.to_string(), "18");
    }

    #[test]
    fn test_default_is_twelve() {
        assert_eq!(FontSize::DEFAULT.get(), 12);
    }

    #[test]
    fn test_try_from_command_argument() {
        assert_eq!(FontSize::try_from(20_i64).unwrap().get(), 20);
        assert!(matches!(FontSize::try_from(0_i64), Err(AppError::InvalidInput(_))));
        assert!(matches!(FontSize::try_from(-3_i64), Err(AppError::InvalidInput(_))));
        assert!(FontSize::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_serde_rejects_zero() {
        let size: FontSize = serde_json::from_str("16").unwrap();
        assert_eq!(size.get(), 16);
        assert!(serde_json::from_str::<FontSize>("0").is_err());
        assert_eq!(serde_json::to_string(&size).unwrap(), "16");
    }

    #[test]
    fn test_from_str_reports_raw_input() {
        let err = "big".parse::<FontSize>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid font size input: \"big\"");
    }
}
