//! Locale-aware currency and percentage rendering.
//!
//! Number rendering is a pluggable collaborator: the [`NumberFormatter`]
//! trait turns a digit string into a display string for a [`Locale`], and
//! masking works on whatever it returns. [`BuiltinNumberFormatter`] covers a
//! small table of locales.
//!
//! Inputs are digit strings with two implied fraction digits (minor units for
//! currency, hundredths of a percent for percentages), so amounts of any size
//! render exactly without floating-point rounding.
//!
//! # Example
//!
//! ```
//! use format_mask::number::{BuiltinNumberFormatter, Locale, NumberFormatter};
//!
//! let numbers = BuiltinNumberFormatter;
//! let pt_br = Locale::default();
//!
//! assert_eq!(numbers.currency("123456", "BRL", &pt_br), "R$ 1.234,56");
//! assert_eq!(numbers.percent("123", &pt_br), "1,23%");
//! assert_eq!(numbers.percent("123", &Locale::new("en-US")), "1.23%");
//! ```

use std::fmt;

/// Locale used when none is set.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// A BCP 47 style locale tag such as `pt-BR`.
///
/// The tag is opaque to the formatting and masking engines; only a
/// [`NumberFormatter`] interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag (`pt` for `pt-BR`).
    pub fn language(&self) -> &str {
        self.0.split(|c: char| c == '-' || c == '_').next().unwrap_or("")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Renders currency amounts and percentages for a locale.
///
/// Implement this trait to plug in a different number formatting backend.
/// Both methods receive ASCII digit strings (possibly empty, meaning zero)
/// whose last two digits are the fractional part.
pub trait NumberFormatter: Send + Sync {
    /// Renders an amount given in minor units (`"123456"` is 1234.56).
    ///
    /// `currency` is an ISO 4217 code such as `BRL`.
    fn currency(&self, minor_units: &str, currency: &str, locale: &Locale) -> String;

    /// Renders a percentage given in hundredths of a percent (`"123"` is 1.23%).
    fn percent(&self, hundredths: &str, locale: &Locale) -> String;
}

/// Table-driven [`NumberFormatter`].
///
/// | Locale | Currency | Percent |
/// |--------|----------|---------|
/// | `pt-BR` | `R$ 1.234,56` | `1,23%` |
/// | `en-US`, `en-GB` | `R$1,234.56` | `1.23%` |
/// | `de-DE` | `1.234,56 R$` | `1,23 %` |
///
/// Other tags fall back on their language subtag, then on `pt-BR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinNumberFormatter;

impl NumberFormatter for BuiltinNumberFormatter {
    fn currency(&self, minor_units: &str, currency: &str, locale: &Locale) -> String {
        let symbols = Symbols::for_locale(locale);
        let amount = symbols.fixed(minor_units);
        let symbol = currency_symbol(currency, locale);

        match symbols.currency {
            Placement::Prefix { spaced: true } => format!("{} {}", symbol, amount),
            Placement::Prefix { spaced: false } => format!("{}{}", symbol, amount),
            Placement::Suffix => format!("{} {}", amount, symbol),
        }
    }

    fn percent(&self, hundredths: &str, locale: &Locale) -> String {
        let symbols = Symbols::for_locale(locale);
        let amount = symbols.fixed(hundredths);

        if symbols.spaced_percent {
            format!("{} %", amount)
        } else {
            format!("{}%", amount)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Prefix { spaced: bool },
    Suffix,
}

#[derive(Debug, Clone, Copy)]
struct Symbols {
    group: char,
    decimal: char,
    currency: Placement,
    spaced_percent: bool,
}

const PT_BR: Symbols = Symbols {
    group: '.',
    decimal: ',',
    currency: Placement::Prefix { spaced: true },
    spaced_percent: false,
};

const EN: Symbols = Symbols {
    group: ',',
    decimal: '.',
    currency: Placement::Prefix { spaced: false },
    spaced_percent: false,
};

const DE: Symbols = Symbols {
    group: '.',
    decimal: ',',
    currency: Placement::Suffix,
    spaced_percent: true,
};

impl Symbols {
    fn for_locale(locale: &Locale) -> Self {
        let tag = locale.as_str().replace('_', "-").to_ascii_lowercase();

        match tag.as_str() {
            "pt-br" => return PT_BR,
            "en-us" | "en-gb" => return EN,
            "de-de" => return DE,
            _ => {}
        }

        match locale.language().to_ascii_lowercase().as_str() {
            "pt" => PT_BR,
            "en" => EN,
            "de" => DE,
            _ => {
                tracing::debug!(locale = %locale, fallback = DEFAULT_LOCALE, "unsupported locale");
                PT_BR
            }
        }
    }

    /// Renders a digit string with two implied fraction digits.
    fn fixed(&self, digits: &str) -> String {
        let digits: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
        let significant = digits.trim_start_matches('0');
        let padded = format!("{:0>3}", significant);
        let (integer, fraction) = padded.split_at(padded.len() - 2);

        let mut result = group_thousands(integer, self.group);
        result.push(self.decimal);
        result.push_str(fraction);
        result
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}

fn currency_symbol<'a>(code: &'a str, locale: &Locale) -> &'a str {
    match code {
        "BRL" => "R$",
        "USD" if locale.as_str().eq_ignore_ascii_case("en-US") => "$",
        "USD" => "US$",
        "EUR" => "€",
        "GBP" => "£",
        other => other,
    }
}
