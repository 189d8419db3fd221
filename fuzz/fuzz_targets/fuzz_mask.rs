//! Fuzz target for masking.
//!
//! Tests that masking never panics and preserves the value's length.

#![no_main]

use arbitrary::Arbitrary;
use format_mask::{mask, mask_segmented, Bounds, Formatter, SecretSpan, SegmentSpan};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    value: &'a str,
    start: usize,
    end: usize,
    escape_start: Option<usize>,
    escape_end: Option<usize>,
    edges: bool,
    specials: Vec<char>,
    segment_starts: Vec<usize>,
    segment_end: usize,
}

fuzz_target!(|input: Input<'_>| {
    let mut span = SecretSpan::new(input.start, input.end).special(input.specials.iter().copied());
    span.escape_start = input.escape_start;
    span.escape_end = input.escape_end;
    if input.edges {
        span = span.hide_edges();
    }

    let masked = mask(input.value, &span);
    assert_eq!(masked.chars().count(), input.value.chars().count());

    let segments = SegmentSpan::new(
        Bounds::Each(input.segment_starts.clone()),
        Bounds::One(input.segment_end),
        input.specials.iter().copied(),
    );
    let masked = mask_segmented(input.value, &segments);
    assert!(masked.chars().count() <= input.value.chars().count());

    let mut formatter = Formatter::new();
    let _ = formatter.secret_cpf(input.value);
    let _ = formatter.secret_phone(input.value);
    let _ = formatter.secret_real_currency(input.value);
    let _ = formatter.secret_email(input.value);
    assert_eq!(formatter.original_value("email"), input.value);
});
