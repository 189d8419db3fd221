//! Built-in Brazilian field definitions.
//!
//! | Field | Plain | Secret |
//! |-------|-------|--------|
//! | `cpf` | `123.456.789-09` | `***.456.789-**` |
//! | `cnpj` | `12.345.678/0001-95` | first 4 and last 3 visible |
//! | `phone` | `(12) 3456-7890`, `(12) 9 3456-7890` | last 4 visible |
//! | `cep` | `12345-678` | `*****-678` |
//! | `real_currency` | `R$ 1.234,56` | `R$ *****,56` |
//! | `percent` | `1,23%` | `*,23%` |
//! | `card_number` | `1234 5678 1234 5678` | `**** **** **** 5678` |
//! | `email` | - | `ex*****@e******.com` |
//! | `oab` | `123.456` | `12*.**6` |

use super::{FieldSpec, PatternChoice, PlainRule, SecretRule};
use crate::format::FormatOptions;
use crate::mask::SecretSpan;
use crate::segment::{Bounds, SegmentSpan};

/// Brazilian individual taxpayer number.
pub const CPF: &str = "cpf";
/// Brazilian company taxpayer number.
pub const CNPJ: &str = "cnpj";
/// Brazilian phone number, landline or mobile.
pub const PHONE: &str = "phone";
/// Brazilian postal code.
pub const CEP: &str = "cep";
/// Amount in Brazilian reais.
pub const REAL_CURRENCY: &str = "real_currency";
/// Percentage.
pub const PERCENT: &str = "percent";
/// Payment card number.
pub const CARD_NUMBER: &str = "card_number";
/// Email address.
pub const EMAIL: &str = "email";
/// Brazilian bar association registration.
pub const OAB: &str = "oab";

/// Returns the built-in field definitions.
pub fn fields() -> Vec<FieldSpec> {
    let digits = || FormatOptions::new().only_numbers();

    vec![
        FieldSpec::new(CPF)
            .plain(PlainRule::template("###.###.###-##", digits()))
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(3, 2).hide_edges())),
        FieldSpec::new(CNPJ)
            .plain(PlainRule::template("##.###.###/####-##", digits()))
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(4, 3))),
        FieldSpec::new(PHONE)
            .plain(PlainRule::Template {
                pattern: PatternChoice::ByLength {
                    lengths: vec![(11, "(##) # ####-####".to_string())],
                    fallback: "(##) ####-####".to_string(),
                },
                options: digits(),
            })
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(0, 4))),
        FieldSpec::new(CEP)
            .plain(PlainRule::template("#####-###", digits()))
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(0, 3))),
        // "R$ " stays visible, then everything but ",56"
        FieldSpec::new(REAL_CURRENCY)
            .plain(PlainRule::currency("BRL"))
            .secret(SecretRule::FormatThenMask(SecretSpan::new(1, 3).escape_start(2))),
        FieldSpec::new(PERCENT)
            .plain(PlainRule::Percent)
            .secret(SecretRule::FormatThenMask(SecretSpan::new(0, 3).escape_end(1))),
        FieldSpec::new(CARD_NUMBER)
            .plain(PlainRule::template("#### #### #### ####", digits()))
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(0, 4))),
        FieldSpec::new(EMAIL).secret(SecretRule::Segmented(SegmentSpan::new(
            Bounds::Each(vec![2, 1]),
            Bounds::One(0),
            ['@', '.'],
        ))),
        FieldSpec::new(OAB)
            .plain(PlainRule::template("###.###", FormatOptions::new().uppercase()))
            .secret(SecretRule::MaskThenFormat(SecretSpan::new(2, 1))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<String> = fields().into_iter().map(|f| f.name).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_all_fields_valid() {
        for field in fields() {
            assert!(field.validate().is_ok(), "{} is invalid", field.name);
            assert!(field.secret.is_some(), "{} has no secret rule", field.name);
        }
    }

    #[test]
    fn test_email_is_secret_only() {
        let email = fields().into_iter().find(|f| f.name == EMAIL);
        assert!(matches!(
            email,
            Some(FieldSpec { plain: None, secret: Some(SecretRule::Segmented(_)), .. })
        ));
    }
}
