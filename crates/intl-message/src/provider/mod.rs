//! Formatter capabilities.
//!
//! The interpreter never formats numbers, dates or plural categories itself.
//! It asks a [`FormatterProvider`] for formatter objects built from a locale
//! list and an options bag, then calls them. Any conforming provider can be
//! plugged in; [`BasicFormatterProvider`] is the default.

mod date_time;
mod number;
mod plural;

use chrono::NaiveDateTime;
use icu_locale_core::Locale;

pub use date_time::BasicDateTimeFormatter;
pub use number::BasicNumberFormatter;
pub use plural::IcuPluralRules;

use crate::types::{DateTimeFormatOptions, NumberFormatOptions, PluralRulesOptions};

/// Locale used when none of the requested locales is usable.
pub const DEFAULT_LOCALE: &str = "en";

/// Formats numbers for one locale and options bag.
pub trait NumberFormatter {
    fn format(&self, value: f64) -> String;
}

/// Formats dates and times for one locale and options bag.
pub trait DateTimeFormatter {
    fn format(&self, value: &NaiveDateTime) -> String;
}

/// Selects the plural category of a number.
pub trait PluralRules {
    fn select(&self, n: f64) -> PluralCategory;
}

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The selector keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

/// Factory for formatter capabilities.
///
/// Built formatters are memoized by the
/// [`FormatterCache`](crate::cache::FormatterCache), so a provider is asked
/// at most once per distinct (locales, options) pair.
pub trait FormatterProvider {
    fn number_format(
        &self,
        locales: &[String],
        options: &NumberFormatOptions,
    ) -> Box<dyn NumberFormatter>;

    fn date_time_format(
        &self,
        locales: &[String],
        options: &DateTimeFormatOptions,
    ) -> Box<dyn DateTimeFormatter>;

    /// Plural rules, or `None` if this provider cannot select plural
    /// categories. Formatting a plural element then fails.
    fn plural_rules(
        &self,
        locales: &[String],
        options: &PluralRulesOptions,
    ) -> Option<Box<dyn PluralRules>>;

    /// The locale actually in effect for `locales`.
    fn resolve_locale(&self, locales: &[String]) -> String {
        locales
            .iter()
            .find(|locale| !locale.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

/// The default provider.
///
/// Plural rules come from CLDR data via `icu_plurals`. Numbers use a
/// locale-neutral decimal format and dates an English format.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatterProvider;

impl FormatterProvider for BasicFormatterProvider {
    fn number_format(
        &self,
        _locales: &[String],
        options: &NumberFormatOptions,
    ) -> Box<dyn NumberFormatter> {
        Box::new(BasicNumberFormatter::new(options.clone()))
    }

    fn date_time_format(
        &self,
        _locales: &[String],
        options: &DateTimeFormatOptions,
    ) -> Box<dyn DateTimeFormatter> {
        Box::new(BasicDateTimeFormatter::new(options.clone()))
    }

    fn plural_rules(
        &self,
        locales: &[String],
        options: &PluralRulesOptions,
    ) -> Option<Box<dyn PluralRules>> {
        let locale = first_supported_locale(locales);
        IcuPluralRules::try_new(locale, options.plural_type)
            .map(|rules| Box::new(rules) as Box<dyn PluralRules>)
    }

    fn resolve_locale(&self, locales: &[String]) -> String {
        first_supported_locale(locales)
            .map_or_else(|| DEFAULT_LOCALE.to_string(), |locale| locale.to_string())
    }
}

/// The first entry of `locales` that is a well-formed BCP 47 tag.
fn first_supported_locale(locales: &[String]) -> Option<Locale> {
    locales
        .iter()
        .find_map(|tag| Locale::try_from_str(tag).ok())
}
