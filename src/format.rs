//! Pattern-based value formatting.
//!
//! A pattern is a string made of literal characters and separator symbols
//! (`#` by default). Each separator symbol is replaced by the next character
//! of the value; every other pattern character is copied through unchanged.
//!
//! # Rules
//!
//! - An empty value always formats to an empty string, whatever the pattern.
//! - Once the value runs out, separator positions emit nothing while literals
//!   still do.
//! - Value characters beyond the pattern's separator count are dropped.
//! - `only_numbers` / `only_letters` filter the value first. Setting both
//!   cancels them out, and the same holds for `uppercase` / `lowercase`.
//!
//! # Example
//!
//! ```
//! use format_mask::classify::Mode;
//! use format_mask::format::{apply_pattern, FormatOptions};
//!
//! let options = FormatOptions::new().only_numbers();
//! assert_eq!(
//!     apply_pattern("12345678909", "###.###.###-##", &options, Mode::Plain),
//!     "123.456.789-09"
//! );
//!
//! // Custom separator symbol
//! let options = FormatOptions::new().separator('@');
//! assert_eq!(apply_pattern("123", "@ @ @", &options, Mode::Plain), "1 2 3");
//! ```

use crate::classify::{letters_only, numeric_only, to_lower, to_upper, Mode};

/// Default separator symbol substituted by value characters.
pub const DEFAULT_SEPARATOR: char = '#';

/// Options controlling how a value is prepared before the pattern is applied.
///
/// Conflicting flags cancel each other: when both `only_numbers` and
/// `only_letters` are set the value is not filtered at all, and when both
/// `uppercase` and `lowercase` are set its case is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct FormatOptions {
    /// Keep only digits before applying the pattern.
    pub only_numbers: bool,
    /// Keep only letters before applying the pattern.
    pub only_letters: bool,
    /// Upper-case the value before applying the pattern.
    pub uppercase: bool,
    /// Lower-case the value before applying the pattern.
    pub lowercase: bool,
    /// Symbol in the pattern replaced by value characters. Defaults to `#`.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub pattern_separator: Option<char>,
}

impl FormatOptions {
    /// Creates options with every flag off and the default separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to keep only digits.
    pub fn only_numbers(mut self) -> Self {
        self.only_numbers = true;
        self
    }

    /// Builder method to keep only letters.
    pub fn only_letters(mut self) -> Self {
        self.only_letters = true;
        self
    }

    /// Builder method to upper-case the value.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Builder method to lower-case the value.
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// Builder method to set the separator symbol.
    pub fn separator(mut self, separator: char) -> Self {
        self.pattern_separator = Some(separator);
        self
    }

    /// Returns the effective separator symbol.
    #[inline]
    pub fn separator_char(&self) -> char {
        self.pattern_separator.unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Filters and case-folds a value according to these options.
    ///
    /// # Example
    ///
    /// ```
    /// use format_mask::classify::Mode;
    /// use format_mask::format::FormatOptions;
    ///
    /// let options = FormatOptions::new().only_letters().uppercase();
    /// assert_eq!(options.prepare("a1b2c3", Mode::Plain), "ABC");
    ///
    /// // Conflicting flags cancel
    /// let options = FormatOptions::new().only_letters().only_numbers();
    /// assert_eq!(options.prepare("a1b2c3", Mode::Plain), "a1b2c3");
    /// ```
    pub fn prepare(&self, value: &str, mode: Mode) -> String {
        let mut prepared = if self.only_numbers && !self.only_letters {
            numeric_only(value, mode)
        } else if self.only_letters && !self.only_numbers {
            letters_only(value, mode)
        } else {
            value.to_string()
        };

        if self.uppercase && !self.lowercase {
            prepared = to_upper(&prepared);
        } else if self.lowercase && !self.uppercase {
            prepared = to_lower(&prepared);
        }

        prepared
    }
}

/// Applies a pattern to a value.
///
/// Returns an empty string for an empty value. The value is prepared with
/// [`FormatOptions::prepare`] (honoring `mode`) and then substituted into the
/// pattern one character per separator symbol.
///
/// # Example
///
/// ```
/// use format_mask::classify::Mode;
/// use format_mask::format::{apply_pattern, FormatOptions};
///
/// let options = FormatOptions::new().only_numbers();
/// assert_eq!(apply_pattern("12345678", "#####-###", &options, Mode::Plain), "12345-678");
///
/// // Masked values keep their stars in secret mode
/// assert_eq!(
///     apply_pattern("***456789**", "###.###.###-##", &options, Mode::Secret),
///     "***.456.789-**"
/// );
/// ```
pub fn apply_pattern(value: &str, pattern: &str, options: &FormatOptions, mode: Mode) -> String {
    if value.is_empty() {
        return String::new();
    }

    let prepared = options.prepare(value, mode);
    let separator = options.separator_char();

    let mut result = String::with_capacity(pattern.len());
    let mut chars = prepared.chars();

    for p in pattern.chars() {
        if p == separator {
            if let Some(c) = chars.next() {
                result.push(c);
            }
        } else {
            result.push(p);
        }
    }

    result
}

/// Counts the separator symbols in a pattern.
///
/// This is the number of value characters the pattern can hold.
///
/// # Example
///
/// ```
/// use format_mask::format::{separator_count, FormatOptions};
///
/// assert_eq!(separator_count("###.###.###-##", &FormatOptions::new()), 11);
/// ```
#[inline]
pub fn separator_count(pattern: &str, options: &FormatOptions) -> usize {
    let separator = options.separator_char();
    pattern.chars().filter(|&c| c == separator).count()
}
