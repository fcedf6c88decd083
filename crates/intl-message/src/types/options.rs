//! Typed formatter options.
//!
//! These mirror the option bags accepted by platform number and date-time
//! formatters. Every field is optional: `None` means "use the formatter's
//! default". Option structs are `Eq + Hash` so they can key the formatter
//! cache structurally.

use serde::{Deserialize, Serialize};

use crate::parser::PluralType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberFormatStyle {
    Decimal,
    Percent,
    Currency,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencySign {
    Standard,
    Accounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitDisplay {
    Short,
    Narrow,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    Standard,
    Scientific,
    Engineering,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompactDisplay {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignDisplay {
    Auto,
    Never,
    Always,
    ExceptZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrailingZeroDisplay {
    Auto,
    StripIfInteger,
}

/// Options for a number formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormatOptions {
    pub style: Option<NumberFormatStyle>,
    pub currency: Option<String>,
    pub currency_display: Option<CurrencyDisplay>,
    pub currency_sign: Option<CurrencySign>,
    pub unit: Option<String>,
    pub unit_display: Option<UnitDisplay>,
    pub use_grouping: Option<bool>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
    pub notation: Option<Notation>,
    pub compact_display: Option<CompactDisplay>,
    pub sign_display: Option<SignDisplay>,
    pub trailing_zero_display: Option<TrailingZeroDisplay>,
}

impl NumberFormatOptions {
    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(&self, overrides: &NumberFormatOptions) -> NumberFormatOptions {
        NumberFormatOptions {
            style: overrides.style.or(self.style),
            currency: overrides.currency.clone().or_else(|| self.currency.clone()),
            currency_display: overrides.currency_display.or(self.currency_display),
            currency_sign: overrides.currency_sign.or(self.currency_sign),
            unit: overrides.unit.clone().or_else(|| self.unit.clone()),
            unit_display: overrides.unit_display.or(self.unit_display),
            use_grouping: overrides.use_grouping.or(self.use_grouping),
            minimum_fraction_digits: overrides
                .minimum_fraction_digits
                .or(self.minimum_fraction_digits),
            maximum_fraction_digits: overrides
                .maximum_fraction_digits
                .or(self.maximum_fraction_digits),
            minimum_significant_digits: overrides
                .minimum_significant_digits
                .or(self.minimum_significant_digits),
            maximum_significant_digits: overrides
                .maximum_significant_digits
                .or(self.maximum_significant_digits),
            notation: overrides.notation.or(self.notation),
            compact_display: overrides.compact_display.or(self.compact_display),
            sign_display: overrides.sign_display.or(self.sign_display),
            trailing_zero_display: overrides.trailing_zero_display.or(self.trailing_zero_display),
        }
    }
}

/// Width of a textual date field such as era or weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextWidth {
    Narrow,
    Short,
    Long,
}

/// Width of a numeric date field such as day or hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericWidth {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthWidth {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "narrow")]
    Narrow,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    H11,
    H12,
    H23,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeZoneNameWidth {
    Short,
    Long,
}

/// Options for a date-time formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeFormatOptions {
    pub era: Option<TextWidth>,
    pub year: Option<NumericWidth>,
    pub month: Option<MonthWidth>,
    pub day: Option<NumericWidth>,
    pub weekday: Option<TextWidth>,
    pub hour: Option<NumericWidth>,
    pub minute: Option<NumericWidth>,
    pub second: Option<NumericWidth>,
    pub hour12: Option<bool>,
    pub hour_cycle: Option<HourCycle>,
    pub time_zone_name: Option<TimeZoneNameWidth>,
}

impl DateTimeFormatOptions {
    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(&self, overrides: &DateTimeFormatOptions) -> DateTimeFormatOptions {
        DateTimeFormatOptions {
            era: overrides.era.or(self.era),
            year: overrides.year.or(self.year),
            month: overrides.month.or(self.month),
            day: overrides.day.or(self.day),
            weekday: overrides.weekday.or(self.weekday),
            hour: overrides.hour.or(self.hour),
            minute: overrides.minute.or(self.minute),
            second: overrides.second.or(self.second),
            hour12: overrides.hour12.or(self.hour12),
            hour_cycle: overrides.hour_cycle.or(self.hour_cycle),
            time_zone_name: overrides.time_zone_name.or(self.time_zone_name),
        }
    }

    /// True when no date or time field is requested.
    pub fn has_no_fields(&self) -> bool {
        self.era.is_none()
            && self.year.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.weekday.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
            && self.second.is_none()
    }
}

/// Options for a plural-rules selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluralRulesOptions {
    #[serde(rename = "type")]
    pub plural_type: PluralType,
}
