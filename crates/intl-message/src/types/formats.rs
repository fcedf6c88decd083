use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::options::{
    DateTimeFormatOptions, MonthWidth, NumberFormatOptions, NumberFormatStyle, NumericWidth,
    TextWidth, TimeZoneNameWidth,
};

/// Named format presets referenced by `{n, number, integer}`-style elements.
///
/// The default presets are merged with caller overrides per category and per
/// option field, so overriding `date.short.year` keeps the default
/// `date.short.month` and `date.short.day`.
///
/// # Example
///
/// ```
/// use intl_message::{Formats, NumberFormatOptions};
///
/// let mut overrides = Formats::empty();
/// overrides.number.insert(
///     "integer".to_string(),
///     NumberFormatOptions { use_grouping: Some(false), ..Default::default() },
/// );
/// let merged = Formats::default().merged_with(&overrides);
/// let integer = &merged.number["integer"];
/// assert_eq!(integer.maximum_fraction_digits, Some(0));
/// assert_eq!(integer.use_grouping, Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formats {
    pub number: BTreeMap<String, NumberFormatOptions>,
    pub date: BTreeMap<String, DateTimeFormatOptions>,
    pub time: BTreeMap<String, DateTimeFormatOptions>,
}

impl Formats {
    /// A preset table with no entries.
    pub fn empty() -> Self {
        Self {
            number: BTreeMap::new(),
            date: BTreeMap::new(),
            time: BTreeMap::new(),
        }
    }

    /// Returns a copy of `self` with `overrides` merged in at the leaf level.
    pub fn merged_with(&self, overrides: &Formats) -> Formats {
        Formats {
            number: merge_category(&self.number, &overrides.number, NumberFormatOptions::merged_with),
            date: merge_category(&self.date, &overrides.date, DateTimeFormatOptions::merged_with),
            time: merge_category(&self.time, &overrides.time, DateTimeFormatOptions::merged_with),
        }
    }
}

fn merge_category<O: Clone>(
    defaults: &BTreeMap<String, O>,
    overrides: &BTreeMap<String, O>,
    merge: fn(&O, &O) -> O,
) -> BTreeMap<String, O> {
    let mut merged = defaults.clone();
    for (name, options) in overrides {
        let value = match defaults.get(name) {
            Some(base) => merge(base, options),
            None => options.clone(),
        };
        merged.insert(name.clone(), value);
    }
    merged
}

impl Default for Formats {
    fn default() -> Self {
        let number = BTreeMap::from([
            (
                "integer".to_string(),
                NumberFormatOptions {
                    maximum_fraction_digits: Some(0),
                    ..Default::default()
                },
            ),
            (
                "currency".to_string(),
                NumberFormatOptions {
                    style: Some(NumberFormatStyle::Currency),
                    ..Default::default()
                },
            ),
            (
                "percent".to_string(),
                NumberFormatOptions {
                    style: Some(NumberFormatStyle::Percent),
                    ..Default::default()
                },
            ),
        ]);

        let date = BTreeMap::from([
            (
                "short".to_string(),
                DateTimeFormatOptions {
                    month: Some(MonthWidth::Numeric),
                    day: Some(NumericWidth::Numeric),
                    year: Some(NumericWidth::TwoDigit),
                    ..Default::default()
                },
            ),
            (
                "medium".to_string(),
                DateTimeFormatOptions {
                    month: Some(MonthWidth::Short),
                    day: Some(NumericWidth::Numeric),
                    year: Some(NumericWidth::Numeric),
                    ..Default::default()
                },
            ),
            (
                "long".to_string(),
                DateTimeFormatOptions {
                    month: Some(MonthWidth::Long),
                    day: Some(NumericWidth::Numeric),
                    year: Some(NumericWidth::Numeric),
                    ..Default::default()
                },
            ),
            (
                "full".to_string(),
                DateTimeFormatOptions {
                    weekday: Some(TextWidth::Long),
                    month: Some(MonthWidth::Long),
                    day: Some(NumericWidth::Numeric),
                    year: Some(NumericWidth::Numeric),
                    ..Default::default()
                },
            ),
        ]);

        let short_time = DateTimeFormatOptions {
            hour: Some(NumericWidth::Numeric),
            minute: Some(NumericWidth::Numeric),
            ..Default::default()
        };
        let medium_time = DateTimeFormatOptions {
            second: Some(NumericWidth::Numeric),
            ..short_time.clone()
        };
        let long_time = DateTimeFormatOptions {
            time_zone_name: Some(TimeZoneNameWidth::Short),
            ..medium_time.clone()
        };
        let time = BTreeMap::from([
            ("short".to_string(), short_time),
            ("medium".to_string(), medium_time),
            ("long".to_string(), long_time.clone()),
            ("full".to_string(), long_time),
        ]);

        Self { number, date, time }
    }
}
