//! Field-aware formatter.
//!
//! [`Formatter`] owns the per-instance state: the locale handed to the number
//! formatter, the [`OriginalValueStore`], and the [`FieldRegistry`] it
//! dispatches field names against. Independent formatters (one per locale,
//! one per request) never share state.
//!
//! # Dispatch
//!
//! A field's secret rule decides how its plain rule is chained:
//!
//! - [`SecretRule::MaskThenFormat`]: mask the raw value, then run the plain
//!   rule on the masked string in [`Mode::Secret`] so literals land around
//!   the stars. Without a plain rule the masked string is returned.
//! - [`SecretRule::FormatThenMask`]: run the plain rule, then mask its
//!   output. Without a plain rule the value is returned unchanged.
//! - [`SecretRule::Segmented`]: mask delimiter-separated segments.
//!
//! Every field call records the raw argument under the field name.
//!
//! # Example
//!
//! ```
//! use format_mask::Formatter;
//!
//! let mut formatter = Formatter::new();
//!
//! assert_eq!(formatter.cpf("12345678909"), "123.456.789-09");
//! assert_eq!(formatter.secret_cpf("12345678909"), "***.456.789-**");
//! assert_eq!(formatter.secret_email("example@example.com"), "ex*****@e******.com");
//! assert_eq!(formatter.original_value("cpf"), "12345678909");
//! ```

use crate::classify::Mode;
use crate::error::FormatError;
use crate::field::{builtin, FieldRegistry, SecretRule};
use crate::format::{apply_pattern, FormatOptions};
use crate::mask::{mask, SecretSpan};
use crate::number::{BuiltinNumberFormatter, Locale, NumberFormatter};
use crate::segment::{mask_segmented, SegmentSpan};
use crate::store::OriginalValueStore;
use std::fmt;
use std::sync::Arc;

/// Formats and masks values, remembering the raw input per field.
#[derive(Clone)]
pub struct Formatter {
    locale: Locale,
    store: OriginalValueStore,
    registry: FieldRegistry,
    numbers: Arc<dyn NumberFormatter>,
}

impl Formatter {
    /// Creates a formatter with the built-in Brazilian fields and the
    /// `pt-BR` locale.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a customized formatter.
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    // ---- State ----

    /// Sets the locale used for currency and percentages.
    pub fn set_locale(&mut self, locale: impl Into<Locale>) -> &mut Self {
        self.locale = locale.into();
        self
    }

    /// Returns the current locale.
    #[inline]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the last raw value recorded under `key`, or an empty string.
    #[inline]
    pub fn original_value(&self, key: &str) -> &str {
        self.store.get(key)
    }

    /// Returns the original value store.
    #[inline]
    pub fn store(&self) -> &OriginalValueStore {
        &self.store
    }

    /// Returns the original value store mutably.
    #[inline]
    pub fn store_mut(&mut self) -> &mut OriginalValueStore {
        &mut self.store
    }

    /// Returns the field registry.
    #[inline]
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Returns the field registry mutably.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut FieldRegistry {
        &mut self.registry
    }

    // ---- Primitives ----

    /// Applies `pattern` to `value`, recording `value` under `key` if given.
    ///
    /// See [`apply_pattern`].
    pub fn format(
        &mut self,
        value: &str,
        pattern: &str,
        options: &FormatOptions,
        key: Option<&str>,
    ) -> String {
        let formatted = apply_pattern(value, pattern, options, Mode::Plain);
        self.remember(key, value);
        formatted
    }

    /// Masks `value`, recording it under `key` if given.
    ///
    /// See [`mask`].
    pub fn secret(&mut self, value: &str, span: &SecretSpan, key: Option<&str>) -> String {
        let masked = mask(value, span);
        self.remember(key, value);
        masked
    }

    /// Masks `value` segment by segment, recording it under `key` if given.
    ///
    /// See [`mask_segmented`].
    pub fn segmented(&mut self, value: &str, span: &SegmentSpan, key: Option<&str>) -> String {
        let masked = mask_segmented(value, span);
        self.remember(key, value);
        masked
    }

    fn remember(&mut self, key: Option<&str>, value: &str) {
        if let Some(key) = key {
            self.store.record(key, value);
        }
    }

    // ---- Field dispatch ----

    /// Formats `value` with the plain rule of field `name`.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownField`] or [`FormatError::NoPlainRule`]. Nothing
    /// is recorded on error.
    pub fn try_plain(&mut self, name: &str, value: &str) -> Result<String, FormatError> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| FormatError::UnknownField(name.to_string()))?;
        let rule = spec
            .plain
            .as_ref()
            .ok_or_else(|| FormatError::NoPlainRule(name.to_string()))?;

        let formatted = rule.render(value, Mode::Plain, &self.locale, self.numbers.as_ref());
        self.store.record(name, value);
        Ok(formatted)
    }

    /// Masks `value` with the secret rule of field `name`.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownField`] or [`FormatError::NoSecretRule`]. Nothing
    /// is recorded on error.
    pub fn try_secret(&mut self, name: &str, value: &str) -> Result<String, FormatError> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| FormatError::UnknownField(name.to_string()))?;
        let rule = spec
            .secret
            .as_ref()
            .ok_or_else(|| FormatError::NoSecretRule(name.to_string()))?;

        let masked = match (rule, &spec.plain) {
            (SecretRule::MaskThenFormat(span), Some(plain)) => plain.render(
                &mask(value, span),
                Mode::Secret,
                &self.locale,
                self.numbers.as_ref(),
            ),
            (SecretRule::MaskThenFormat(span), None) => {
                tracing::debug!(field = name, "no plain rule, returning masked value");
                mask(value, span)
            }
            (SecretRule::FormatThenMask(span), Some(plain)) => mask(
                &plain.render(value, Mode::Plain, &self.locale, self.numbers.as_ref()),
                span,
            ),
            (SecretRule::FormatThenMask(_), None) => {
                tracing::debug!(field = name, "no plain rule, returning value unchanged");
                value.to_string()
            }
            (SecretRule::Segmented(span), _) => mask_segmented(value, span),
        };

        self.store.record(name, value);
        Ok(masked)
    }

    /// Formats `value` with the plain rule of field `name`.
    ///
    /// Returns `value` unchanged if the field is unknown or has no plain rule.
    pub fn plain(&mut self, name: &str, value: &str) -> String {
        self.try_plain(name, value).unwrap_or_else(|e| {
            tracing::debug!(field = name, error = %e, "plain formatting skipped");
            value.to_string()
        })
    }

    /// Masks `value` with the secret rule of field `name`.
    ///
    /// Returns `value` unchanged if the field is unknown or has no secret rule.
    pub fn secret_field(&mut self, name: &str, value: &str) -> String {
        self.try_secret(name, value).unwrap_or_else(|e| {
            tracing::debug!(field = name, error = %e, "secret masking skipped");
            value.to_string()
        })
    }

    /// Formats many values of one field.
    ///
    /// The store ends up holding the last value.
    pub fn plain_all<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Vec<String> {
        let mut formatted = Vec::with_capacity(values.len());
        for value in values {
            formatted.push(self.plain(name, value.as_ref()));
        }
        formatted
    }

    // ---- Built-in fields ----

    /// Formats a CPF: `123.456.789-09`.
    pub fn cpf(&mut self, value: &str) -> String {
        self.plain(builtin::CPF, value)
    }

    /// Masks a CPF: `***.456.789-**`.
    pub fn secret_cpf(&mut self, value: &str) -> String {
        self.secret_field(builtin::CPF, value)
    }

    /// Formats a CNPJ: `12.345.678/0001-95`.
    pub fn cnpj(&mut self, value: &str) -> String {
        self.plain(builtin::CNPJ, value)
    }

    /// Masks a CNPJ, keeping the first four and last three digits.
    pub fn secret_cnpj(&mut self, value: &str) -> String {
        self.secret_field(builtin::CNPJ, value)
    }

    /// Formats a phone number: `(12) 3456-7890` or `(12) 9 3456-7890`.
    pub fn phone(&mut self, value: &str) -> String {
        self.plain(builtin::PHONE, value)
    }

    /// Masks a phone number, keeping the last four digits.
    pub fn secret_phone(&mut self, value: &str) -> String {
        self.secret_field(builtin::PHONE, value)
    }

    /// Formats a CEP: `12345-678`.
    pub fn cep(&mut self, value: &str) -> String {
        self.plain(builtin::CEP, value)
    }

    /// Masks a CEP: `*****-678`.
    pub fn secret_cep(&mut self, value: &str) -> String {
        self.secret_field(builtin::CEP, value)
    }

    /// Formats an amount in centavos as reais: `R$ 1.234,56`.
    pub fn real_currency(&mut self, value: &str) -> String {
        self.plain(builtin::REAL_CURRENCY, value)
    }

    /// Masks an amount in reais: `R$ *****,56`.
    pub fn secret_real_currency(&mut self, value: &str) -> String {
        self.secret_field(builtin::REAL_CURRENCY, value)
    }

    /// Formats hundredths of a percent: `1,23%`.
    pub fn percent(&mut self, value: &str) -> String {
        self.plain(builtin::PERCENT, value)
    }

    /// Masks a percentage: `*,23%`.
    pub fn secret_percent(&mut self, value: &str) -> String {
        self.secret_field(builtin::PERCENT, value)
    }

    /// Formats a card number: `1234 5678 1234 5678`.
    pub fn card_number(&mut self, value: &str) -> String {
        self.plain(builtin::CARD_NUMBER, value)
    }

    /// Masks a card number: `**** **** **** 5678`.
    pub fn secret_card_number(&mut self, value: &str) -> String {
        self.secret_field(builtin::CARD_NUMBER, value)
    }

    /// Masks an email: `ex*****@e******.com`.
    pub fn secret_email(&mut self, value: &str) -> String {
        self.secret_field(builtin::EMAIL, value)
    }

    /// Formats an OAB registration: `123.456`.
    pub fn oab(&mut self, value: &str) -> String {
        self.plain(builtin::OAB, value)
    }

    /// Masks an OAB registration: `12*.**6`.
    pub fn secret_oab(&mut self, value: &str) -> String {
        self.secret_field(builtin::OAB, value)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("locale", &self.locale)
            .field("store", &self.store)
            .field("fields", &self.registry.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Formatter`].
///
/// # Example
///
/// ```
/// use format_mask::field::FieldRegistry;
/// use format_mask::Formatter;
///
/// let mut formatter = Formatter::builder()
///     .locale("en-US")
///     .registry(FieldRegistry::brazilian())
///     .build();
///
/// assert_eq!(formatter.percent("123"), "1.23%");
/// ```
#[derive(Default)]
pub struct FormatterBuilder {
    locale: Option<Locale>,
    registry: Option<FieldRegistry>,
    numbers: Option<Arc<dyn NumberFormatter>>,
}

impl FormatterBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale. Defaults to `pt-BR`.
    pub fn locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the field registry. Defaults to [`FieldRegistry::brazilian`].
    pub fn registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the number formatter. Defaults to [`BuiltinNumberFormatter`].
    pub fn number_formatter(mut self, numbers: impl NumberFormatter + 'static) -> Self {
        self.numbers = Some(Arc::new(numbers));
        self
    }

    /// Builds the formatter.
    pub fn build(self) -> Formatter {
        Formatter {
            locale: self.locale.unwrap_or_default(),
            store: OriginalValueStore::new(),
            registry: self.registry.unwrap_or_else(FieldRegistry::brazilian),
            numbers: self.numbers.unwrap_or_else(|| Arc::new(BuiltinNumberFormatter)),
        }
    }
}
