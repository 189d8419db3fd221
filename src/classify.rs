//! Value classification.
//!
//! Reduces a raw value to its digit-only or letter-only projection before a
//! pattern is applied, and provides the case folding used by
//! [`FormatOptions`](crate::format::FormatOptions).
//!
//! Every function takes a [`Mode`]. In [`Mode::Secret`] the mask character
//! `*` counts as both a digit and a letter, so a value that has already been
//! masked can be pushed through a field's template without losing its stars.
//!
//! # Example
//!
//! ```
//! use format_mask::classify::{numeric_only, letters_only, Mode};
//!
//! assert_eq!(numeric_only("123.456.789-09", Mode::Plain), "12345678909");
//! assert_eq!(numeric_only("***.456.789-**", Mode::Secret), "***456789**");
//! assert_eq!(letters_only("a1b2c3", Mode::Plain), "abc");
//! ```

use crate::mask::MASK_CHAR;

/// Whether a value is being formatted in the clear or re-formatted after masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Ordinary formatting. Mask characters are treated like any other symbol.
    #[default]
    Plain,
    /// Re-formatting of an already masked value. Mask characters survive classification.
    Secret,
}

impl Mode {
    /// Returns true for [`Mode::Secret`].
    #[inline]
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Secret)
    }

    #[inline]
    fn keeps(self, c: char) -> bool {
        self.is_secret() && c == MASK_CHAR
    }
}

/// Keeps only ASCII digits (and `*` in secret mode).
///
/// # Example
///
/// ```
/// use format_mask::classify::{numeric_only, Mode};
///
/// assert_eq!(numeric_only("a1b2c3", Mode::Plain), "123");
/// assert_eq!(numeric_only("1*2*3", Mode::Plain), "123");
/// assert_eq!(numeric_only("1*2*3", Mode::Secret), "1*2*3");
/// ```
#[inline]
pub fn numeric_only(value: &str, mode: Mode) -> String {
    value
        .chars()
        .filter(|&c| c.is_ascii_digit() || mode.keeps(c))
        .collect()
}

/// Keeps only ASCII letters (and `*` in secret mode).
#[inline]
pub fn letters_only(value: &str, mode: Mode) -> String {
    value
        .chars()
        .filter(|&c| c.is_ascii_alphabetic() || mode.keeps(c))
        .collect()
}

/// Upper-cases a value.
#[inline]
pub fn to_upper(value: &str) -> String {
    value.to_uppercase()
}

/// Lower-cases a value.
#[inline]
pub fn to_lower(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_only() {
        assert_eq!(numeric_only("a1b2c3", Mode::Plain), "123");
        assert_eq!(numeric_only("123.456.789-09", Mode::Plain), "12345678909");
        assert_eq!(numeric_only("", Mode::Plain), "");
        assert_eq!(numeric_only("abc", Mode::Plain), "");
    }

    #[test]
    fn test_numeric_only_secret_keeps_stars() {
        assert_eq!(numeric_only("***456789**", Mode::Secret), "***456789**");
        assert_eq!(numeric_only("(**) * ****-7890", Mode::Secret), "*******7890");
        assert_eq!(numeric_only("***456789**", Mode::Plain), "456789");
    }

    #[test]
    fn test_letters_only() {
        assert_eq!(letters_only("a1b2c3", Mode::Plain), "abc");
        assert_eq!(letters_only("AbC-dEf", Mode::Plain), "AbCdEf");
        assert_eq!(letters_only("a*b", Mode::Plain), "ab");
        assert_eq!(letters_only("a*b", Mode::Secret), "a*b");
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(letters_only("ção", Mode::Plain), "o");
        assert_eq!(numeric_only("١٢٣4", Mode::Plain), "4");
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(to_upper("abc-12"), "ABC-12");
        assert_eq!(to_lower("ABC-12"), "abc-12");
        assert_eq!(to_upper(""), "");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let once = numeric_only("12a-3*4", Mode::Secret);
        assert_eq!(numeric_only(&once, Mode::Secret), once);
    }

    #[test]
    fn test_mode_default_is_plain() {
        assert_eq!(Mode::default(), Mode::Plain);
        assert!(Mode::Secret.is_secret());
        assert!(!Mode::Plain.is_secret());
    }
}
