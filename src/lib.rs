//! # format_mask
//!
//! Pattern-based formatting and partial masking of document numbers, phone
//! numbers, currency amounts and emails.
//!
//! ## Features
//!
//! - Template substitution (`###.###.###-##`) with digit/letter filtering and case folding
//! - Masking that hides the middle or the edges of a value, with escape margins
//!   and characters that stay visible
//! - Segment-wise masking for emails and other delimited identifiers
//! - A field registry tying each secret field to its plain counterpart
//! - Remembers the raw value last supplied for each field
//!
//! ## Quick Start
//!
//! ```rust
//! use format_mask::Formatter;
//!
//! let mut formatter = Formatter::new();
//!
//! assert_eq!(formatter.cpf("12345678909"), "123.456.789-09");
//! assert_eq!(formatter.secret_cpf("12345678909"), "***.456.789-**");
//! assert_eq!(formatter.secret_phone("12934567890"), "(**) * ****-7890");
//! assert_eq!(formatter.real_currency("123456"), "R$ 1.234,56");
//! assert_eq!(formatter.secret_real_currency("123456"), "R$ *****,56");
//!
//! // The raw input is kept per field
//! assert_eq!(formatter.original_value("real_currency"), "123456");
//! ```
//!
//! ## Patterns
//!
//! ```rust
//! use format_mask::{apply_pattern, FormatOptions, Mode};
//!
//! let options = FormatOptions::new().only_numbers();
//! assert_eq!(apply_pattern("12345678", "#####-###", &options, Mode::Plain), "12345-678");
//!
//! // Custom separator symbol
//! let options = FormatOptions::new().separator('@');
//! assert_eq!(apply_pattern("123", "@ @ @", &options, Mode::Plain), "1 2 3");
//!
//! // Extra characters are dropped
//! assert_eq!(apply_pattern("123", "A.#.#", &FormatOptions::new(), Mode::Plain), "A.1.2");
//! ```
//!
//! ## Masking
//!
//! ```rust
//! use format_mask::{mask, mask_segmented, Bounds, SecretSpan, SegmentSpan};
//!
//! assert_eq!(mask("123456", &SecretSpan::new(2, 0)), "12****");
//! assert_eq!(mask("123456", &SecretSpan::new(2, 2).hide_edges()), "**34**");
//!
//! let span = SecretSpan::new(2, 0).escape_end(3).special(['-', '.']);
//! assert_eq!(mask("example-example.com", &span), "ex*****-*******.com");
//!
//! let email = SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.']);
//! assert_eq!(mask_segmented("example@example.com", &email), "ex*****@e******.com");
//! ```
//!
//! ## Custom Fields
//!
//! ```rust
//! use format_mask::field::{FieldSpec, PlainRule, SecretRule};
//! use format_mask::{FormatOptions, Formatter, SecretSpan};
//!
//! let mut formatter = Formatter::new();
//! formatter.registry_mut().register(
//!     FieldSpec::new("rg")
//!         .plain(PlainRule::template("##.###.###-#", FormatOptions::new().only_numbers()))
//!         .secret(SecretRule::MaskThenFormat(SecretSpan::new(2, 1))),
//! );
//!
//! assert_eq!(formatter.secret_field("rg", "123456789"), "12.***.***-9");
//! assert!(formatter.try_secret("passport", "X1").is_err());
//! ```
//!
//! ## Built-in Fields
//!
//! | Field | Plain | Secret |
//! |-------|-------|--------|
//! | `cpf` | `123.456.789-09` | `***.456.789-**` |
//! | `cnpj` | `12.345.678/0001-95` | `12.34*.***/***1-95` |
//! | `phone` | `(12) 9 3456-7890` | `(**) * ****-7890` |
//! | `cep` | `12345-678` | `*****-678` |
//! | `real_currency` | `R$ 1.234,56` | `R$ *****,56` |
//! | `percent` | `1,23%` | `*,23%` |
//! | `card_number` | `1234 5678 1234 5678` | `**** **** **** 5678` |
//! | `email` | - | `ex*****@e******.com` |
//! | `oab` | `123.456` | `12*.**6` |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | Serde support and JSON field registries |
//! | `parallel` | Rayon-based batch helpers |
//! | `full` | All of the above |
//!
//! ## Security
//!
//! - Raw values in the original value store are zeroized on overwrite, removal and drop
//! - `Debug` output of the store and the formatter lists field names only
//! - Raw values are never logged
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod classify;
pub mod error;
pub mod field;
pub mod format;
pub mod formatter;
pub mod mask;
pub mod number;
pub mod segment;
pub mod store;

// Re-export main types at crate root
pub use classify::Mode;
pub use error::FormatError;
pub use field::{FieldRegistry, FieldSpec};
pub use format::{apply_pattern, FormatOptions};
pub use formatter::{Formatter, FormatterBuilder};
pub use mask::{mask, Hidden, SecretSpan, MASK_CHAR};
pub use number::{Locale, NumberFormatter};
pub use segment::{mask_segmented, Bounds, SegmentSpan};
pub use store::OriginalValueStore;

#[cfg(test)]
mod tests {
    use super::*;

    const CPF: &str = "12345678909";
    const CARD: &str = "1234567812345678";
    const EMAIL: &str = "example@example.com";

    #[test]
    fn test_cpf_pattern() {
        let options = FormatOptions::new().only_numbers();
        assert_eq!(
            apply_pattern(CPF, "###.###.###-##", &options, Mode::Plain),
            "123.456.789-09"
        );
    }

    #[test]
    fn test_cpf_mask_then_reformat() {
        let masked = mask(CPF, &SecretSpan::new(3, 2).hide_edges());
        assert_eq!(masked, "***456789**");

        let options = FormatOptions::new().only_numbers();
        assert_eq!(
            apply_pattern(&masked, "###.###.###-##", &options, Mode::Secret),
            "***.456.789-**"
        );

        // Plain mode strips the stars; trailing literals still emit
        assert_eq!(
            apply_pattern(&masked, "###.###.###-##", &options, Mode::Plain),
            "456.789.-"
        );
    }

    #[test]
    fn test_card_pattern() {
        let options = FormatOptions::new().only_numbers();
        assert_eq!(
            apply_pattern(CARD, "#### #### #### ####", &options, Mode::Plain),
            "1234 5678 1234 5678"
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(apply_pattern("", "###-###", &FormatOptions::new(), Mode::Plain), "");
        assert_eq!(mask("", &SecretSpan::new(1, 1)), "");
    }

    #[test]
    fn test_email_segments() {
        let span = SegmentSpan::new(Bounds::Each(vec![2, 1]), Bounds::One(0), ['@', '.']);
        assert_eq!(mask_segmented(EMAIL, &span), "ex*****@e******.com");
    }

    #[test]
    fn test_formatter_round_trip() {
        let mut formatter = Formatter::default();
        formatter.cpf(CPF);
        formatter.secret_email(EMAIL);

        assert_eq!(formatter.original_value("cpf"), CPF);
        assert_eq!(formatter.original_value("email"), EMAIL);
        assert_eq!(formatter.original_value("cnpj"), "");
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Formatter>();
        assert_send_sync::<FormatError>();
        assert_send_sync::<FieldRegistry>();
        assert_send_sync::<OriginalValueStore>();
        assert_send_sync::<SecretSpan>();
        assert_send_sync::<SegmentSpan>();
    }
}
