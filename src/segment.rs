//! Segment-wise masking for multi-part identifiers such as emails.
//!
//! The value is split on a set of delimiter characters. Every segment except
//! the last one is masked on its own, keeping a per-segment number of
//! characters visible at each edge. The last segment (an email's top-level
//! domain, for instance) is always left as is.
//!
//! # Example
//!
//! ```
//! use format_mask::segment::{mask_segmented, Bounds, SegmentSpan};
//!
//! let span = SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.']);
//! assert_eq!(mask_segmented("example@example.com", &span), "ex*****@e******.com");
//! ```

use crate::mask::MASK_CHAR;

/// A visible-character count given once for all segments or once per segment.
///
/// For [`Bounds::Each`], segments past the end of the list reuse its last
/// entry. An empty list counts as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum Bounds {
    /// Same count for every segment.
    One(usize),
    /// One count per segment, in order.
    Each(Vec<usize>),
}

impl Bounds {
    /// Returns the count for the segment at `index`.
    ///
    /// # Example
    ///
    /// ```
    /// use format_mask::segment::Bounds;
    ///
    /// let bounds = Bounds::Each(vec![2, 1]);
    /// assert_eq!(bounds.at(0), 2);
    /// assert_eq!(bounds.at(1), 1);
    /// assert_eq!(bounds.at(7), 1);
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> usize {
        match self {
            Self::One(n) => *n,
            Self::Each(list) => list
                .get(index)
                .or_else(|| list.last())
                .copied()
                .unwrap_or(0),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::One(0)
    }
}

impl From<usize> for Bounds {
    fn from(n: usize) -> Self {
        Self::One(n)
    }
}

impl From<Vec<usize>> for Bounds {
    fn from(list: Vec<usize>) -> Self {
        Self::Each(list)
    }
}

/// How delimiters are put back between masked segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Rejoin {
    /// Use the delimiter list in the order given, cycling when there are more
    /// boundaries than delimiters.
    #[default]
    Cycle,
    /// Put back the delimiter that actually separated each pair of segments.
    Original,
}

/// Describes segment-wise masking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentSpan {
    /// Visible characters at the start of each segment.
    pub start: Bounds,
    /// Visible characters at the end of each segment.
    pub end: Bounds,
    /// Delimiters the value is split on.
    pub special_characters: Vec<char>,
    /// How delimiters are reinserted.
    #[cfg_attr(feature = "json", serde(default))]
    pub rejoin: Rejoin,
}

impl SegmentSpan {
    /// Creates a span from start/end bounds and a delimiter list.
    pub fn new(start: Bounds, end: Bounds, delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            start,
            end,
            special_characters: delimiters.into_iter().collect(),
            rejoin: Rejoin::Cycle,
        }
    }

    /// Builder method to reinsert the original delimiters.
    pub fn keep_original_delimiters(mut self) -> Self {
        self.rejoin = Rejoin::Original;
        self
    }
}

/// Masks every segment but the last, then rejoins them.
///
/// Without delimiters the whole value is a single (last) segment and is
/// returned unchanged.
pub fn mask_segmented(value: &str, span: &SegmentSpan) -> String {
    let delimiters = &span.special_characters;
    if delimiters.is_empty() {
        return value.to_string();
    }

    let found: Vec<char> = value.chars().filter(|c| delimiters.contains(c)).collect();
    let segments: Vec<&str> = value.split(|c: char| delimiters.contains(&c)).collect();
    let last = segments.len() - 1;

    let mut result = String::with_capacity(value.len());
    for (i, segment) in segments.iter().enumerate() {
        if i == last {
            result.push_str(segment);
            break;
        }

        result.push_str(&mask_segment(segment, span.start.at(i), span.end.at(i)));
        result.push(match span.rejoin {
            Rejoin::Cycle => delimiters[i % delimiters.len()],
            Rejoin::Original => found[i],
        });
    }

    result
}

/// Keeps `start` leading and `end` trailing characters, masking the rest.
///
/// Visible counts are clamped to the segment, so a short segment comes back
/// unchanged and never grows.
fn mask_segment(segment: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let len = chars.len();
    let start = start.min(len);
    let end = end.min(len - start);

    let mut masked = String::with_capacity(segment.len());
    masked.extend(&chars[..start]);
    for _ in 0..len - start - end {
        masked.push(MASK_CHAR);
    }
    masked.extend(&chars[len - end..]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_span() -> SegmentSpan {
        SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.'])
    }

    #[test]
    fn test_email() {
        assert_eq!(
            mask_segmented("example@example.com", &email_span()),
            "ex*****@e******.com"
        );
    }

    #[test]
    fn test_bounds_reuse_last_entry() {
        assert_eq!(mask_segmented("john@mail.co.uk", &email_span()), "jo**@m***.c*@uk");
    }

    #[test]
    fn test_original_delimiters() {
        let span = email_span().keep_original_delimiters();
        assert_eq!(mask_segmented("john@mail.co.uk", &span), "jo**@m***.c*.uk");
    }

    #[test]
    fn test_visible_end() {
        let span = SegmentSpan::new(Bounds::One(1), Bounds::One(1), ['@', '.']);
        assert_eq!(mask_segmented("alice@domain.org", &span), "a***e@d****n.org");
    }

    #[test]
    fn test_short_segments_unchanged() {
        assert_eq!(mask_segmented("ab@c.io", &email_span()), "ab@c.io");
        let span = SegmentSpan::new(Bounds::One(3), Bounds::One(3), ['@']);
        assert_eq!(mask_segmented("abcd@x", &span), "abcd@x");
    }

    #[test]
    fn test_no_delimiters_in_value() {
        assert_eq!(mask_segmented("plainvalue", &email_span()), "plainvalue");
    }

    #[test]
    fn test_no_delimiters_configured() {
        let span = SegmentSpan::new(Bounds::One(1), Bounds::One(0), Vec::new());
        assert_eq!(mask_segmented("a@b.c", &span), "a@b.c");
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(mask_segmented("@.com", &email_span()), "@.com");
        assert_eq!(mask_segmented("", &email_span()), "");
    }

    #[test]
    fn test_last_segment_untouched() {
        let span = SegmentSpan::new(Bounds::One(0), Bounds::One(0), ['@', '.']);
        let masked = mask_segmented("someone@example.museum", &span);
        assert!(masked.ends_with(".museum"));
        assert_eq!(masked, "*******@*******.museum");
    }

    #[test]
    fn test_bounds_at() {
        assert_eq!(Bounds::One(3).at(0), 3);
        assert_eq!(Bounds::One(3).at(9), 3);
        assert_eq!(Bounds::Each(vec![]).at(0), 0);
        assert_eq!(Bounds::Each(vec![4, 2]).at(5), 2);
    }
}
