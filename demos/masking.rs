//! Pattern and masking primitives example.
//!
//! Run with: `cargo run --example masking`

use format_mask::{
    apply_pattern, mask, mask_segmented, Bounds, FormatOptions, Mode, SecretSpan, SegmentSpan,
};

fn main() {
    println!("=== Patterns ===\n");

    let digits = FormatOptions::new().only_numbers();
    let patterns = [
        ("12345678909", "###.###.###-##", digits.clone()),
        ("1234567812345678", "#### #### #### ####", digits.clone()),
        ("12345678", "#####-###", digits),
        ("abc1d23", "###-####", FormatOptions::new().uppercase()),
        ("123", "@ @ @", FormatOptions::new().separator('@')),
        ("123456789", "##-##", FormatOptions::new()),
    ];

    for (value, pattern, options) in &patterns {
        println!(
            "  {:18} {:22} -> {}",
            value,
            pattern,
            apply_pattern(value, pattern, options, Mode::Plain)
        );
    }
    println!();

    println!("=== Masking ===\n");

    let spans = [
        ("123456", SecretSpan::new(2, 0)),
        ("123456", SecretSpan::new(2, 2).hide_edges()),
        ("1234567812345678", SecretSpan::new(0, 4)),
        ("R$ 1.234,56", SecretSpan::new(1, 3).escape_start(2)),
        ("1,23%", SecretSpan::new(0, 3).escape_end(1)),
        (
            "example-example.com",
            SecretSpan::new(2, 0).escape_end(3).special(['-', '.']),
        ),
        ("abc", SecretSpan::new(2, 2)),
        ("abc", SecretSpan::new(2, 2).hide_edges()),
    ];

    for (value, span) in &spans {
        println!("  {:20} -> {}", value, mask(value, span));
    }
    println!();

    // Masked values keep their stars when re-run through a pattern in secret mode
    let masked = mask("12345678909", &SecretSpan::new(3, 2).hide_edges());
    let options = FormatOptions::new().only_numbers();
    println!("  Secret mode: {}", apply_pattern(&masked, "###.###.###-##", &options, Mode::Secret));
    println!("  Plain mode:  {}", apply_pattern(&masked, "###.###.###-##", &options, Mode::Plain));
    println!();

    println!("=== Segmented Masking ===\n");

    let email = SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.']);
    for value in ["example@example.com", "john@mail.co.uk", "no-delimiters"] {
        println!("  {:20} -> {}", value, mask_segmented(value, &email));
    }

    let original = email.keep_original_delimiters();
    println!(
        "  {:20} -> {} (original delimiters)",
        "john@mail.co.uk",
        mask_segmented("john@mail.co.uk", &original)
    );
}
