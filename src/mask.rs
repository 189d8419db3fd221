//! Partial masking of values.
//!
//! A [`SecretSpan`] describes how many characters stay visible at the start
//! and at the end of a value, and which side gets hidden:
//!
//! - [`Hidden::Middle`] (default): the first `start` and last `end`
//!   characters stay visible and everything between them becomes `*`, except
//!   for characters listed in `special_characters`.
//! - [`Hidden::Edges`]: the first `start` and last `end` characters become
//!   `*` and the middle stays visible.
//!
//! Escape margins (`escape_start`, `escape_end`) are added to `start` and
//! `end` before masking. They shift a boundary past a fixed literal such as a
//! currency symbol or a percent sign.
//!
//! # Overlapping spans
//!
//! Counts are in characters. When `start + end` (after escape margins)
//! reaches or exceeds the value length:
//!
//! - hidden middle returns the value unchanged,
//! - hidden edges masks every character.
//!
//! # Example
//!
//! ```
//! use format_mask::mask::{mask, SecretSpan};
//!
//! assert_eq!(mask("123456", &SecretSpan::new(2, 0)), "12****");
//! assert_eq!(mask("123456", &SecretSpan::new(2, 2).hide_edges()), "**34**");
//!
//! let span = SecretSpan::new(2, 0).escape_end(3).special(['-', '.']);
//! assert_eq!(mask("example-example.com", &span), "ex*****-*******.com");
//! ```

/// Character used to hide masked positions.
pub const MASK_CHAR: char = '*';

/// Which part of a value a [`SecretSpan`] hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Hidden {
    /// Keep the edges, hide the middle.
    #[default]
    Middle,
    /// Keep the middle, hide the edges.
    Edges,
}

/// Describes which characters of a value are masked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SecretSpan {
    /// Characters counted from the left edge.
    pub start: usize,
    /// Characters counted from the right edge.
    pub end: usize,
    /// Which side is hidden.
    #[cfg_attr(feature = "json", serde(default))]
    pub hidden: Hidden,
    /// Added to `start` before masking.
    #[cfg_attr(feature = "json", serde(default))]
    pub escape_start: Option<usize>,
    /// Added to `end` before masking.
    #[cfg_attr(feature = "json", serde(default))]
    pub escape_end: Option<usize>,
    /// Characters that stay visible anywhere in a hidden middle.
    #[cfg_attr(feature = "json", serde(default))]
    pub special_characters: Vec<char>,
}

impl SecretSpan {
    /// Creates a hidden-middle span keeping `start` and `end` characters visible.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Builder method to hide the edges instead of the middle.
    pub fn hide_edges(mut self) -> Self {
        self.hidden = Hidden::Edges;
        self
    }

    /// Builder method to set the start escape margin.
    pub fn escape_start(mut self, margin: usize) -> Self {
        self.escape_start = Some(margin);
        self
    }

    /// Builder method to set the end escape margin.
    pub fn escape_end(mut self, margin: usize) -> Self {
        self.escape_end = Some(margin);
        self
    }

    /// Builder method to set the characters kept visible in a hidden middle.
    pub fn special(mut self, characters: impl IntoIterator<Item = char>) -> Self {
        self.special_characters = characters.into_iter().collect();
        self
    }

    /// `start` plus its escape margin.
    #[inline]
    pub fn effective_start(&self) -> usize {
        self.start.saturating_add(self.escape_start.unwrap_or(0))
    }

    /// `end` plus its escape margin.
    #[inline]
    pub fn effective_end(&self) -> usize {
        self.end.saturating_add(self.escape_end.unwrap_or(0))
    }
}

/// Masks a value according to a span.
///
/// The output always has as many characters as the input.
///
/// # Example
///
/// ```
/// use format_mask::mask::{mask, SecretSpan};
///
/// // R$ stays, digits before the cents are hidden
/// let span = SecretSpan::new(1, 3).escape_start(2);
/// assert_eq!(mask("R$ 1.234,56", &span), "R$ *****,56");
/// ```
pub fn mask(value: &str, span: &SecretSpan) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    let start = span.effective_start();
    let end = span.effective_end();
    let overlaps = start.saturating_add(end) >= len;

    match span.hidden {
        Hidden::Middle => {
            if overlaps {
                return value.to_string();
            }

            let specials = special_indexes(value, &span.special_characters);
            let hidden_until = len - end;

            chars
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    if i < start || i >= hidden_until || specials.binary_search(&i).is_ok() {
                        c
                    } else {
                        MASK_CHAR
                    }
                })
                .collect()
        }
        Hidden::Edges => {
            if overlaps {
                return MASK_CHAR.to_string().repeat(len);
            }

            let mut result = String::with_capacity(value.len());
            for _ in 0..start {
                result.push(MASK_CHAR);
            }
            result.extend(&chars[start..len - end]);
            for _ in 0..end {
                result.push(MASK_CHAR);
            }
            result
        }
    }
}

/// Returns the sorted character indices of every occurrence of `specials` in `value`.
///
/// # Example
///
/// ```
/// use format_mask::mask::special_indexes;
///
/// assert_eq!(special_indexes("a.b@c.d", &['.', '@']), vec![1, 3, 5]);
/// ```
pub fn special_indexes(value: &str, specials: &[char]) -> Vec<usize> {
    if specials.is_empty() {
        return Vec::new();
    }

    value
        .chars()
        .enumerate()
        .filter(|(_, c)| specials.contains(c))
        .map(|(i, _)| i)
        .collect()
}
