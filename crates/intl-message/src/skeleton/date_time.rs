//! Date-time skeleton compilation.
//!
//! A skeleton such as `yyyyMMMdEEEE` is scanned for runs of one repeated
//! field symbol; the run length selects the width of that field. Quoted
//! literal segments (`'at'`) are skipped.

use super::RangeError;
use crate::types::{
    DateTimeFormatOptions, HourCycle, MonthWidth, NumericWidth, TextWidth, TimeZoneNameWidth,
};

/// Compile a date-time skeleton pattern into formatter options.
///
/// # Example
///
/// ```
/// use intl_message::compile_date_time_skeleton;
/// use intl_message::types::{MonthWidth, NumericWidth};
///
/// let options = compile_date_time_skeleton("yyyyMMMd").unwrap();
/// assert_eq!(options.year, Some(NumericWidth::Numeric));
/// assert_eq!(options.month, Some(MonthWidth::Short));
/// assert_eq!(options.day, Some(NumericWidth::Numeric));
/// ```
pub fn compile_date_time_skeleton(pattern: &str) -> Result<DateTimeFormatOptions, RangeError> {
    let mut result = DateTimeFormatOptions::default();
    for (symbol, run) in symbol_runs(pattern) {
        let max = max_run_length(symbol);
        let mut remaining = run;
        while remaining > 0 {
            let len = remaining.min(max);
            apply_symbol(symbol, len, &mut result)?;
            remaining -= len;
        }
    }
    Ok(result)
}

/// Maximal runs of one repeated ASCII letter outside quoted segments.
fn symbol_runs(pattern: &str) -> Vec<(char, usize)> {
    let mut runs: Vec<(char, usize)> = Vec::new();
    let mut chars = pattern.chars().peekable();
    let mut in_quote = false;
    let mut previous: Option<char> = None;

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
            } else {
                in_quote = !in_quote;
            }
            previous = None;
            continue;
        }
        if in_quote || !c.is_ascii_alphabetic() {
            previous = None;
            continue;
        }
        match runs.last_mut() {
            Some((symbol, len)) if previous == Some(c) && *symbol == c => *len += 1,
            _ => runs.push((c, 1)),
        }
        previous = Some(c);
    }
    runs
}

/// Longest run a single field match consumes; longer runs are split.
fn max_run_length(symbol: char) -> usize {
    match symbol {
        'E' | 'e' | 'c' => 6,
        'G' | 'Q' | 'q' | 'U' | 'M' | 'L' | 'a' | 'b' | 'B' => 5,
        'z' | 'Z' | 'O' | 'v' | 'V' | 'x' | 'X' => 4,
        'D' => 3,
        'd' | 'h' | 'H' | 'k' | 'K' | 'w' | 'm' | 's' => 2,
        'F' | 'W' => 1,
        _ => usize::MAX,
    }
}

fn apply_symbol(
    symbol: char,
    len: usize,
    result: &mut DateTimeFormatOptions,
) -> Result<(), RangeError> {
    match symbol {
        'G' => result.era = Some(text_width(len)),
        'y' => {
            result.year = Some(if len == 2 {
                NumericWidth::TwoDigit
            } else {
                NumericWidth::Numeric
            });
        }
        'M' | 'L' => {
            result.month = Some(match len {
                1 => MonthWidth::Numeric,
                2 => MonthWidth::TwoDigit,
                3 => MonthWidth::Short,
                4 => MonthWidth::Long,
                _ => MonthWidth::Narrow,
            });
        }
        'd' => result.day = Some(numeric_width(len)),
        'E' => result.weekday = Some(text_width(len)),
        'e' | 'c' => {
            if len < 4 {
                return Err(RangeError::NumericWeekday { symbol });
            }
            result.weekday = Some(match len {
                5 => TextWidth::Long,
                6 => TextWidth::Narrow,
                _ => TextWidth::Short,
            });
        }
        'a' => result.hour12 = Some(true),
        'h' | 'H' | 'K' | 'k' => {
            result.hour_cycle = Some(match symbol {
                'h' => HourCycle::H12,
                'H' => HourCycle::H23,
                'K' => HourCycle::H11,
                _ => HourCycle::H24,
            });
            result.hour = Some(numeric_width(len));
        }
        'm' => result.minute = Some(numeric_width(len)),
        's' => result.second = Some(numeric_width(len)),
        'z' => {
            result.time_zone_name = Some(if len < 4 {
                TimeZoneNameWidth::Short
            } else {
                TimeZoneNameWidth::Long
            });
        }
        _ => {
            if let Some((field, substitute)) = unsupported_symbol(symbol) {
                return Err(RangeError::UnsupportedDateTimeSymbol {
                    symbol,
                    field,
                    substitute,
                });
            }
        }
    }
    Ok(())
}

/// Field name and supported replacement for symbols that cannot be mapped.
fn unsupported_symbol(symbol: char) -> Option<(&'static str, Option<&'static str>)> {
    let entry = match symbol {
        'Y' | 'u' | 'U' | 'r' => ("year", Some("y")),
        'q' | 'Q' => ("quarter", None),
        'w' | 'W' => ("week", None),
        'D' | 'F' | 'g' => ("day", Some("d")),
        'b' | 'B' => ("period", Some("a")),
        'j' | 'J' | 'C' => ("hour", Some("h/H/K/k")),
        'S' | 'A' => ("second", Some("s")),
        'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => ("timeZone", Some("z")),
        _ => return None,
    };
    Some(entry)
}

fn text_width(len: usize) -> TextWidth {
    match len {
        4 => TextWidth::Long,
        5 => TextWidth::Narrow,
        _ => TextWidth::Short,
    }
}

fn numeric_width(len: usize) -> NumericWidth {
    if len == 2 {
        NumericWidth::TwoDigit
    } else {
        NumericWidth::Numeric
    }
}
