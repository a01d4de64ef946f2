//! Locale-aware number formatting for gauge value labels.
//!
//! The value label always shows the raw measurement, so it may exceed the
//! gauge maximum or be negative. Formatting follows the conventions of the
//! dashboard locales: at most three fraction digits, trailing zeros dropped,
//! and digit groups of three.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of fraction digits kept by the formatter.
pub const DEFAULT_FRACTION_DIGITS: u8 = 3;

/// Number formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberLocale {
    /// Russian: `1 234,5` with a no-break space separator
    #[default]
    #[serde(rename = "ru-RU")]
    RuRu,
    /// US English: `1,234.5`
    #[serde(rename = "en-US")]
    EnUs,
    /// German: `1.234,5`
    #[serde(rename = "de-DE")]
    DeDe,
}

impl NumberLocale {
    /// Digit group separator.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::RuRu => '\u{a0}',
            Self::EnUs => ',',
            Self::DeDe => '.',
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::RuRu | Self::DeDe => ',',
            Self::EnUs => '.',
        }
    }

    /// Text shown for a NaN measurement.
    #[must_use]
    pub const fn nan_symbol(self) -> &'static str {
        match self {
            Self::RuRu => "не число",
            Self::EnUs | Self::DeDe => "NaN",
        }
    }

    /// BCP 47 tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::RuRu => "ru-RU",
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Format `value` with the locale's separators and up to three fraction digits.
///
/// NaN renders as the locale's NaN symbol and infinities as `∞` / `-∞`.
/// Values that round to zero render as `0` without a sign.
///
/// # Examples
///
/// ```
/// use arcgauge_core::{format_number, NumberLocale};
///
/// assert_eq!(format_number(1_234_567.891, NumberLocale::EnUs), "1,234,567.891");
/// assert_eq!(format_number(1_234.5, NumberLocale::RuRu), "1\u{a0}234,5");
/// ```
#[must_use]
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    format_number_with(value, locale, DEFAULT_FRACTION_DIGITS)
}

/// Format with an explicit maximum number of fraction digits.
#[must_use]
pub fn format_number_with(value: f64, locale: NumberLocale, max_fraction_digits: u8) -> String {
    if value.is_nan() {
        return locale.nan_symbol().to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let digits = usize::from(max_fraction_digits);
    let fixed = format!("{:.digits$}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    push_grouped(&mut out, int_part, locale.group_separator());
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}

/// Turns a raw measurement into its display label.
pub trait ValueFormatter: Send + Sync {
    /// Format the raw (unclamped) value.
    fn format_value(&self, value: f64) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format_value(&self, value: f64) -> String {
        self(value)
    }
}

/// Declarative value format: locale number plus optional affixes.
///
/// The dashboard's currency gauges use a `" ₸"` suffix.
///
/// # Examples
///
/// ```
/// use arcgauge_core::{NumberFormat, ValueFormatter};
///
/// let tenge = NumberFormat::default().with_suffix(" ₸");
/// assert_eq!(tenge.format_value(1_500_000.0), "1\u{a0}500\u{a0}000 ₸");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Separator conventions
    pub locale: NumberLocale,
    /// Maximum fraction digits
    pub max_fraction_digits: u8,
    /// Text placed before the number
    pub prefix: String,
    /// Text placed after the number
    pub suffix: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl NumberFormat {
    /// Plain number format for a locale.
    #[must_use]
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Set the maximum fraction digits.
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl ValueFormatter for NumberFormat {
    fn format_value(&self, value: f64) -> String {
        let number = format_number_with(value, self.locale, self.max_fraction_digits);
        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&number);
        out.push_str(&self.suffix);
        out
    }
}
