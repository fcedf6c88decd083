//! English date and time formatting over `chrono`.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use super::DateTimeFormatter;
use crate::types::{
    DateTimeFormatOptions, HourCycle, MonthWidth, NumericWidth, TextWidth, TimeZoneNameWidth,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats a [`NaiveDateTime`] in US English.
///
/// Without any date or time field the date is shown as numeric
/// month/day/year. Time zones are not tracked; a requested zone name is
/// always `UTC`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use intl_message::provider::{BasicDateTimeFormatter, DateTimeFormatter};
/// use intl_message::types::{DateTimeFormatOptions, MonthWidth, NumericWidth};
///
/// let when = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(14, 5, 0)
///     .unwrap();
/// let medium = BasicDateTimeFormatter::new(DateTimeFormatOptions {
///     month: Some(MonthWidth::Short),
///     day: Some(NumericWidth::Numeric),
///     year: Some(NumericWidth::Numeric),
///     ..Default::default()
/// });
/// assert_eq!(medium.format(&when), "Mar 9, 2024");
///
/// let short_time = BasicDateTimeFormatter::new(DateTimeFormatOptions {
///     hour: Some(NumericWidth::Numeric),
///     minute: Some(NumericWidth::Numeric),
///     ..Default::default()
/// });
/// assert_eq!(short_time.format(&when), "2:05 PM");
/// ```
#[derive(Debug, Clone)]
pub struct BasicDateTimeFormatter {
    options: DateTimeFormatOptions,
}

impl BasicDateTimeFormatter {
    pub fn new(options: DateTimeFormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DateTimeFormatOptions {
        &self.options
    }
}

impl DateTimeFormatter for BasicDateTimeFormatter {
    fn format(&self, value: &NaiveDateTime) -> String {
        let options = if self.options.has_no_fields() {
            DateTimeFormatOptions {
                year: Some(NumericWidth::Numeric),
                month: Some(MonthWidth::Numeric),
                day: Some(NumericWidth::Numeric),
                ..self.options.clone()
            }
        } else {
            self.options.clone()
        };

        match (format_date(&options, value), format_time(&options, value)) {
            (Some(date), Some(time)) => format!("{date}, {time}"),
            (Some(date), None) => date,
            (None, Some(time)) => time,
            (None, None) => String::new(),
        }
    }
}

fn format_date(options: &DateTimeFormatOptions, value: &NaiveDateTime) -> Option<String> {
    let era_year = if value.year() <= 0 {
        1 - value.year()
    } else {
        value.year()
    };
    let year = options.year.map(|width| match width {
        NumericWidth::Numeric => era_year.to_string(),
        NumericWidth::TwoDigit => format!("{:02}", era_year.rem_euclid(100)),
    });
    let day = options.day.map(|width| numeric(value.day(), width));

    let mut date = match options.month {
        None => [day, year].into_iter().flatten().collect::<Vec<_>>().join(" "),
        Some(MonthWidth::Numeric) => numeric_date(value.month().to_string(), day, year),
        Some(MonthWidth::TwoDigit) => numeric_date(format!("{:02}", value.month()), day, year),
        Some(width) => {
            let name = month_name(value.month0(), width);
            match (day, year) {
                (Some(day), Some(year)) => format!("{name} {day}, {year}"),
                (Some(day), None) => format!("{name} {day}"),
                (None, Some(year)) => format!("{name} {year}"),
                (None, None) => name.to_string(),
            }
        }
    };

    if let Some(width) = options.era {
        let era = era_name(value.year() > 0, width);
        if date.is_empty() {
            date = era.to_string();
        } else {
            date = format!("{date} {era}");
        }
    }

    if let Some(width) = options.weekday {
        let weekday = weekday_name(value.weekday(), width);
        date = if date.is_empty() {
            weekday.to_string()
        } else {
            format!("{weekday}, {date}")
        };
    }

    (!date.is_empty()).then_some(date)
}

fn numeric_date(month: String, day: Option<String>, year: Option<String>) -> String {
    [Some(month), day, year]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("/")
}

fn format_time(options: &DateTimeFormatOptions, value: &NaiveDateTime) -> Option<String> {
    let hour_cycle = match (options.hour12, options.hour_cycle) {
        (Some(true), _) => HourCycle::H12,
        (Some(false), Some(HourCycle::H24)) => HourCycle::H24,
        (Some(false), _) => HourCycle::H23,
        (None, Some(cycle)) => cycle,
        (None, None) => HourCycle::H12,
    };
    let twelve_hour = matches!(hour_cycle, HourCycle::H11 | HourCycle::H12);

    let hour = options.hour.map(|width| {
        let hour = match hour_cycle {
            HourCycle::H11 => value.hour() % 12,
            HourCycle::H12 => match value.hour() % 12 {
                0 => 12,
                hour => hour,
            },
            HourCycle::H23 => value.hour(),
            HourCycle::H24 => match value.hour() {
                0 => 24,
                hour => hour,
            },
        };
        if twelve_hour {
            numeric(hour, width)
        } else {
            format!("{hour:02}")
        }
    });
    let has_hour = hour.is_some();
    let minute = options.minute.map(|width| {
        if has_hour {
            format!("{:02}", value.minute())
        } else {
            numeric(value.minute(), width)
        }
    });
    let has_minute = minute.is_some();
    let second = options.second.map(|width| {
        if has_minute {
            format!("{:02}", value.second())
        } else {
            numeric(value.second(), width)
        }
    });

    let mut time = [hour, minute, second]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(":");
    if has_hour && twelve_hour {
        time.push_str(if value.hour() < 12 { " AM" } else { " PM" });
    }
    if let Some(width) = options.time_zone_name {
        let zone = match width {
            TimeZoneNameWidth::Short => "UTC",
            TimeZoneNameWidth::Long => "Coordinated Universal Time",
        };
        if !time.is_empty() {
            time.push(' ');
        }
        time.push_str(zone);
    }

    (!time.is_empty()).then_some(time)
}

fn numeric(value: u32, width: NumericWidth) -> String {
    match width {
        NumericWidth::Numeric => value.to_string(),
        NumericWidth::TwoDigit => format!("{value:02}"),
    }
}

fn month_name(month0: u32, width: MonthWidth) -> &'static str {
    let name = MONTHS[month0 as usize % 12];
    match width {
        MonthWidth::Long | MonthWidth::Numeric | MonthWidth::TwoDigit => name,
        MonthWidth::Short => &name[..3],
        MonthWidth::Narrow => &name[..1],
    }
}

fn weekday_name(weekday: Weekday, width: TextWidth) -> &'static str {
    let name = match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    match width {
        TextWidth::Long => name,
        TextWidth::Short => &name[..3],
        TextWidth::Narrow => &name[..1],
    }
}

fn era_name(common_era: bool, width: TextWidth) -> &'static str {
    match (common_era, width) {
        (true, TextWidth::Long) => "Anno Domini",
        (true, TextWidth::Short) => "AD",
        (true, TextWidth::Narrow) => "A",
        (false, TextWidth::Long) => "Before Christ",
        (false, TextWidth::Short) => "BC",
        (false, TextWidth::Narrow) => "B",
    }
}
