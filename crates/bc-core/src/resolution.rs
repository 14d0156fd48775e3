//! Sample resolution and its text parser.
//!
//! The resolution arrives from a free-text field. It is read the way a
//! browser number prompt reads it: leading whitespace is skipped, an
//! optional sign and the longest digit run are taken, and anything after
//! the digits is ignored (`"12px"` is 12, `"3.9"` is 3). Anything that does
//! not yield an integer in `1..=`[`Resolution::MAX`] falls back to
//! [`Resolution::DEFAULT`]; oversized values are rejected, not clamped.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::one_of;

/// Number of intervals a curve is sampled at. Always in `1..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Resolution(NonZeroU32);

impl Resolution {
    pub const DEFAULT: Resolution = match Resolution::new(100) {
        Some(resolution) => resolution,
        None => panic!("default resolution out of range"),
    };

    /// Upper bound on samples per curve; keeps one curve's sample buffer
    /// well inside a wasm32 address space.
    pub const MAX: u32 = 10_000;

    /// Returns `None` for zero and for anything above [`Resolution::MAX`].
    pub const fn new(steps: u32) -> Option<Self> {
        if steps > Self::MAX {
            return None;
        }
        match NonZeroU32::new(steps) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Parse free text, falling back to [`Resolution::DEFAULT`] on any
    /// input that is not a positive integer. Never fails.
    pub fn parse_lossy(text: &str) -> Self {
        match parse_resolution(text) {
            Ok(resolution) => resolution,
            Err(e) => {
                log::debug!("resolution {text:?} rejected ({e}), using {}", Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resolution(s)
    }
}

/// Read the leading integer of `text` as a resolution.
///
/// Errors on text with no leading digits, on zero or negative values, and
/// on values above [`Resolution::MAX`].
pub fn parse_resolution(text: &str) -> Result<Resolution, String> {
    let mut rest = text;
    let (sign, digits) = leading_integer
        .parse_next(&mut rest)
        .map_err(|e| format!("Resolution parse error: {e}"))?;

    let value: u32 = digits
        .parse()
        .map_err(|_| format!("Resolution out of range: {digits}"))?;

    if sign == Some('-') && value != 0 {
        return Err(format!("Resolution must be positive: -{digits}"));
    }

    if value > Resolution::MAX {
        return Err(format!("Resolution above {}: {value}", Resolution::MAX));
    }

    Resolution::new(value).ok_or_else(|| "Resolution must be positive: 0".to_string())
}

fn leading_integer<'a>(input: &mut &'a str) -> ModalResult<(Option<char>, &'a str)> {
    preceded(multispace0, (opt(one_of(['+', '-'])), digit1)).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn steps(text: &str) -> u32 {
        Resolution::parse_lossy(text).get()
    }

    #[test]
    fn default_is_one_hundred() {
        assert_eq!(Resolution::default().get(), 100);
        assert_eq!(Resolution::DEFAULT, Resolution::new(100).unwrap());
    }

    #[test]
    fn zero_is_not_a_resolution() {
        assert_eq!(Resolution::new(0), None);
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(steps("1"), 1);
        assert_eq!(steps("42"), 42);
        assert_eq!(steps("+7"), 7);
        assert_eq!(steps("  250"), 250);
        assert_eq!(steps("\t\n8"), 8);
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(steps("12px"), 12);
        assert_eq!(steps("3.9"), 3);
        assert_eq!(steps("64 samples"), 64);
    }

    #[test]
    fn invalid_text_falls_back_to_default() {
        for text in ["", "   ", "abc", "px12", "-", "+", ".5", "0", "-0", "-5", "000"] {
            assert_eq!(steps(text), 100, "input {text:?}");
        }
    }

    #[test]
    fn overflow_falls_back_to_default() {
        assert!(parse_resolution("99999999999999").is_err());
        assert_eq!(steps("99999999999999"), 100);
    }

    #[test]
    fn oversized_values_fall_back_to_default() {
        assert_eq!(steps("10000"), Resolution::MAX);
        assert_eq!(Resolution::new(Resolution::MAX + 1), None);
        for text in ["10001", "4294967295"] {
            let err = parse_resolution(text).unwrap_err();
            assert!(err.contains("above"), "{err}");
            assert_eq!(steps(text), 100, "input {text:?}");
        }
    }

    #[test]
    fn strict_parser_reports_reason() {
        let err = parse_resolution("-5").unwrap_err();
        assert!(err.contains("positive"), "{err}");
        assert!(parse_resolution("nope").is_err());
        assert_eq!("17".parse::<Resolution>(), Ok(Resolution::new(17).unwrap()));
    }
}
