//! Batch formatting and masking of many values.
//!
//! These helpers are pure: they apply one pattern or span to every value
//! and record nothing. Use [`Formatter::plain_all`](crate::Formatter::plain_all)
//! when the raw values should be remembered.
//!
//! # Performance
//!
//! - Output vectors are allocated once at the input's length
//! - Optional parallel processing with the `parallel` feature

use crate::classify::Mode;
use crate::format::{apply_pattern, FormatOptions};
use crate::mask::{mask, SecretSpan};
use crate::segment::{mask_segmented, SegmentSpan};

/// Applies one pattern to every value.
///
/// # Example
///
/// ```
/// use format_mask::batch::apply_pattern_all;
/// use format_mask::FormatOptions;
///
/// let ceps = ["12345678", "87654321"];
/// let formatted = apply_pattern_all(&ceps, "#####-###", &FormatOptions::new().only_numbers());
/// assert_eq!(formatted, vec!["12345-678", "87654-321"]);
/// ```
#[inline]
pub fn apply_pattern_all<S: AsRef<str>>(
    values: &[S],
    pattern: &str,
    options: &FormatOptions,
) -> Vec<String> {
    values
        .iter()
        .map(|v| apply_pattern(v.as_ref(), pattern, options, Mode::Plain))
        .collect()
}

/// Masks every value with one span.
///
/// # Example
///
/// ```
/// use format_mask::batch::mask_all;
/// use format_mask::SecretSpan;
///
/// let masked = mask_all(&["123456", "abcdef"], &SecretSpan::new(1, 1));
/// assert_eq!(masked, vec!["1****6", "a****f"]);
/// ```
#[inline]
pub fn mask_all<S: AsRef<str>>(values: &[S], span: &SecretSpan) -> Vec<String> {
    values.iter().map(|v| mask(v.as_ref(), span)).collect()
}

/// Masks every value segment by segment.
#[inline]
pub fn mask_segmented_all<S: AsRef<str>>(values: &[S], span: &SegmentSpan) -> Vec<String> {
    values.iter().map(|v| mask_segmented(v.as_ref(), span)).collect()
}

/// Applies one pattern to every value in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn apply_pattern_all_parallel<S: AsRef<str> + Sync>(
    values: &[S],
    pattern: &str,
    options: &FormatOptions,
) -> Vec<String> {
    use rayon::prelude::*;
    values
        .par_iter()
        .map(|v| apply_pattern(v.as_ref(), pattern, options, Mode::Plain))
        .collect()
}

/// Masks every value in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn mask_all_parallel<S: AsRef<str> + Sync>(values: &[S], span: &SecretSpan) -> Vec<String> {
    use rayon::prelude::*;
    values.par_iter().map(|v| mask(v.as_ref(), span)).collect()
}

/// Masks every value segment by segment in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn mask_segmented_all_parallel<S: AsRef<str> + Sync>(
    values: &[S],
    span: &SegmentSpan,
) -> Vec<String> {
    use rayon::prelude::*;
    values
        .par_iter()
        .map(|v| mask_segmented(v.as_ref(), span))
        .collect()
}
