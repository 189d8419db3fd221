//! Field definitions.
//!
//! A field ties a name (`cpf`, `phone`, `email`, ...) to how its values are
//! displayed in the clear and how they are masked. Fields live in a
//! [`FieldRegistry`], which a [`Formatter`](crate::Formatter) consults by
//! name, so a secret field always knows its plain counterpart (the same
//! [`FieldSpec`]) and the key under which raw values are stored (its name).
//!
//! # Features
//!
//! - `json` - load and save registries as JSON ([`JsonFieldLoader`])
//!
//! # Example
//!
//! ```
//! use format_mask::field::{FieldSpec, PlainRule, SecretRule};
//! use format_mask::format::FormatOptions;
//! use format_mask::mask::SecretSpan;
//! use format_mask::Formatter;
//!
//! let rg = FieldSpec::new("rg")
//!     .plain(PlainRule::template("##.###.###-#", FormatOptions::new().only_numbers()))
//!     .secret(SecretRule::MaskThenFormat(SecretSpan::new(2, 1)));
//!
//! let mut formatter = Formatter::new();
//! formatter.registry_mut().register(rg);
//!
//! assert_eq!(formatter.plain("rg", "123456789"), "12.345.678-9");
//! assert_eq!(formatter.secret_field("rg", "123456789"), "12.***.***-9");
//! assert_eq!(formatter.original_value("rg"), "123456789");
//! ```

pub mod builtin;
mod registry;

#[cfg(feature = "json")]
mod json;

pub use registry::FieldRegistry;

#[cfg(feature = "json")]
pub use json::JsonFieldLoader;

use crate::classify::{numeric_only, Mode};
use crate::error::FormatError;
use crate::format::{apply_pattern, separator_count, FormatOptions};
use crate::mask::SecretSpan;
use crate::number::{Locale, NumberFormatter};
use crate::segment::SegmentSpan;

/// A named field with optional plain and secret rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    /// Field name. Also the key raw values are recorded under.
    #[cfg_attr(feature = "json", serde(default))]
    pub name: String,

    /// How the value is displayed in the clear.
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub plain: Option<PlainRule>,

    /// How the value is masked.
    #[cfg_attr(feature = "json", serde(default, skip_serializing_if = "Option::is_none"))]
    pub secret: Option<SecretRule>,
}

impl FieldSpec {
    /// Creates a field with no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plain: None,
            secret: None,
        }
    }

    /// Builder method to set the plain rule.
    pub fn plain(mut self, rule: PlainRule) -> Self {
        self.plain = Some(rule);
        self
    }

    /// Builder method to set the secret rule.
    pub fn secret(mut self, rule: SecretRule) -> Self {
        self.secret = Some(rule);
        self
    }

    /// Checks that the definition can be used.
    ///
    /// A field needs a name, at least one rule, and template patterns that
    /// contain the separator symbol.
    pub fn validate(&self) -> Result<(), FormatError> {
        let invalid = |reason: &str| FormatError::InvalidField {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }

        if self.plain.is_none() && self.secret.is_none() {
            return Err(invalid("no plain or secret rule"));
        }

        if let Some(PlainRule::Template { pattern, options }) = &self.plain {
            for candidate in pattern.patterns() {
                if candidate.is_empty() {
                    return Err(invalid("empty pattern"));
                }
                if separator_count(candidate, options) == 0 {
                    return Err(invalid("pattern has no separator symbol"));
                }
            }
        }

        Ok(())
    }
}

/// How a field value is displayed in the clear.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PlainRule {
    /// Substitute the value into a pattern.
    Template {
        /// Pattern (or patterns chosen by value length).
        pattern: PatternChoice,
        /// Value preparation options.
        #[cfg_attr(feature = "json", serde(default))]
        options: FormatOptions,
    },

    /// Render the digits as an amount in minor units of a currency.
    Currency {
        /// ISO 4217 currency code.
        code: String,
    },

    /// Render the digits as hundredths of a percent.
    Percent,
}

impl PlainRule {
    /// Creates a template rule with a single pattern.
    pub fn template(pattern: impl Into<String>, options: FormatOptions) -> Self {
        Self::Template {
            pattern: PatternChoice::Fixed(pattern.into()),
            options,
        }
    }

    /// Creates a currency rule.
    pub fn currency(code: impl Into<String>) -> Self {
        Self::Currency { code: code.into() }
    }

    /// Renders a value with this rule.
    ///
    /// `mode` only affects template rules; number rules always read the
    /// value's digits.
    pub fn render(
        &self,
        value: &str,
        mode: Mode,
        locale: &Locale,
        numbers: &dyn NumberFormatter,
    ) -> String {
        match self {
            Self::Template { pattern, options } => {
                apply_pattern(value, pattern.select(value), options, mode)
            }
            Self::Currency { code } => {
                numbers.currency(&numeric_only(value, Mode::Plain), code, locale)
            }
            Self::Percent => numbers.percent(&numeric_only(value, Mode::Plain), locale),
        }
    }
}

/// A pattern, or a set of patterns picked by the value's length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum PatternChoice {
    /// Always the same pattern.
    Fixed(String),

    /// Pattern chosen by the number of characters in the value as given.
    ByLength {
        /// `(length, pattern)` pairs checked in order.
        lengths: Vec<(usize, String)>,
        /// Pattern used when no length matches.
        fallback: String,
    },
}

impl PatternChoice {
    /// Returns the pattern to use for `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use format_mask::field::PatternChoice;
    ///
    /// let phone = PatternChoice::ByLength {
    ///     lengths: vec![(11, "(##) # ####-####".to_string())],
    ///     fallback: "(##) ####-####".to_string(),
    /// };
    /// assert_eq!(phone.select("12934567890"), "(##) # ####-####");
    /// assert_eq!(phone.select("1234567890"), "(##) ####-####");
    /// ```
    pub fn select(&self, value: &str) -> &str {
        match self {
            Self::Fixed(pattern) => pattern.as_str(),
            Self::ByLength { lengths, fallback } => {
                let len = value.chars().count();
                lengths
                    .iter()
                    .find(|(n, _)| *n == len)
                    .map(|(_, pattern)| pattern.as_str())
                    .unwrap_or(fallback.as_str())
            }
        }
    }

    /// Iterates over every pattern this choice can return.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        let (listed, last): (&[(usize, String)], &str) = match self {
            Self::Fixed(pattern) => (&[][..], pattern.as_str()),
            Self::ByLength { lengths, fallback } => (lengths.as_slice(), fallback.as_str()),
        };
        listed
            .iter()
            .map(|(_, pattern)| pattern.as_str())
            .chain(std::iter::once(last))
    }
}

/// How a field value is masked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum SecretRule {
    /// Mask the raw value, then re-apply the plain rule in secret mode so
    /// template literals end up around the stars (document numbers, phones).
    MaskThenFormat(SecretSpan),

    /// Apply the plain rule first, then mask its output, for values whose
    /// display form (currency symbol, decimal point) must exist before
    /// masking.
    FormatThenMask(SecretSpan),

    /// Mask each delimiter-separated segment on its own (emails).
    Segmented(SegmentSpan),
}
