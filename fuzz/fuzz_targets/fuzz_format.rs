//! Fuzz target for pattern formatting.
//!
//! Tests that formatting never panics and keeps pattern literals in place.

#![no_main]

use arbitrary::Arbitrary;
use format_mask::{apply_pattern, format::separator_count, FormatOptions, Formatter, Mode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    value: &'a str,
    pattern: &'a str,
    only_numbers: bool,
    only_letters: bool,
    uppercase: bool,
    lowercase: bool,
    separator: Option<char>,
    secret: bool,
}

fuzz_target!(|input: Input<'_>| {
    let options = FormatOptions {
        only_numbers: input.only_numbers,
        only_letters: input.only_letters,
        uppercase: input.uppercase,
        lowercase: input.lowercase,
        pattern_separator: input.separator,
    };
    let mode = if input.secret { Mode::Secret } else { Mode::Plain };

    // These should never panic
    let output = apply_pattern(input.value, input.pattern, &options, mode);

    // Output never exceeds the pattern, and unfiltered input long enough fills it
    let pattern_len = input.pattern.chars().count();
    if input.value.is_empty() {
        assert!(output.is_empty());
    } else if options == FormatOptions::new()
        && input.value.chars().count() >= separator_count(input.pattern, &options)
    {
        assert_eq!(output.chars().count(), pattern_len);
    }

    let mut formatter = Formatter::new();
    let _ = formatter.cpf(input.value);
    let _ = formatter.phone(input.value);
    let _ = formatter.real_currency(input.value);
    let _ = formatter.percent(input.value);
    assert_eq!(formatter.original_value("percent"), input.value);
});
