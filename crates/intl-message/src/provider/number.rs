//! Locale-neutral decimal number formatting.

use crate::types::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Notation, NumberFormatOptions,
    NumberFormatStyle, SignDisplay, TrailingZeroDisplay, UnitDisplay,
};

use super::NumberFormatter;

/// Compact notation thresholds, largest first: (scale, short suffix, long suffix).
const COMPACT_SCALES: [(f64, &str, &str); 4] = [
    (1e12, "T", " trillion"),
    (1e9, "B", " billion"),
    (1e6, "M", " million"),
    (1e3, "K", " thousand"),
];

/// Formats numbers with `.` as decimal separator and `,` for grouping.
///
/// # Example
///
/// ```
/// use intl_message::provider::{BasicNumberFormatter, NumberFormatter};
/// use intl_message::types::{NumberFormatOptions, NumberFormatStyle};
///
/// let percent = BasicNumberFormatter::new(NumberFormatOptions {
///     style: Some(NumberFormatStyle::Percent),
///     ..Default::default()
/// });
/// assert_eq!(percent.format(0.256), "26%");
///
/// let plain = BasicNumberFormatter::new(NumberFormatOptions::default());
/// assert_eq!(plain.format(1234567.891), "1,234,567.891");
/// ```
#[derive(Debug, Clone)]
pub struct BasicNumberFormatter {
    options: NumberFormatOptions,
}

impl BasicNumberFormatter {
    pub fn new(options: NumberFormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NumberFormatOptions {
        &self.options
    }

    fn style(&self) -> NumberFormatStyle {
        self.options.style.unwrap_or(NumberFormatStyle::Decimal)
    }

    fn has_digit_options(&self) -> bool {
        let o = &self.options;
        o.minimum_fraction_digits.is_some()
            || o.maximum_fraction_digits.is_some()
            || o.minimum_significant_digits.is_some()
            || o.maximum_significant_digits.is_some()
    }

    /// Round and group a non-negative finite number.
    fn format_digits(&self, magnitude: f64, style: NumberFormatStyle) -> String {
        let o = &self.options;
        let (min_default, max_default) = match style {
            NumberFormatStyle::Currency => (2, 2),
            NumberFormatStyle::Percent => (0, 0),
            NumberFormatStyle::Decimal | NumberFormatStyle::Unit => (0, 3),
        };

        let mut digits = if o.minimum_significant_digits.is_some()
            || o.maximum_significant_digits.is_some()
        {
            let max = o.maximum_significant_digits.unwrap_or(21).clamp(1, 21);
            let min = o.minimum_significant_digits.unwrap_or(1).clamp(1, max);
            round_significant(magnitude, min, max)
        } else {
            let min = o.minimum_fraction_digits.unwrap_or(min_default);
            let max = o.maximum_fraction_digits.unwrap_or(max_default).max(min);
            round_fraction(magnitude, min, max)
        };

        if o.trailing_zero_display == Some(TrailingZeroDisplay::StripIfInteger)
            && let Some((integer, fraction)) = digits.split_once('.')
            && fraction.chars().all(|c| c == '0')
        {
            digits = integer.to_string();
        }

        if o.use_grouping.unwrap_or(true) {
            group(&digits)
        } else {
            digits
        }
    }

    /// Scientific (`step` 1) or engineering (`step` 3) notation.
    fn format_exponent(&self, magnitude: f64, step: i32) -> String {
        if magnitude == 0.0 {
            return "0E0".to_string();
        }
        let mut exponent = magnitude.log10().floor() as i32;
        exponent -= exponent.rem_euclid(step);
        let mantissa = |exponent: i32| {
            self.format_digits(magnitude / 10_f64.powi(exponent), NumberFormatStyle::Decimal)
        };
        let mut digits = mantissa(exponent);
        // 9.9996 rounds to 10, which belongs to the next exponent
        if reaches(&digits, 10_f64.powi(step)) {
            exponent += step;
            digits = mantissa(exponent);
        }
        format!("{digits}E{exponent}")
    }

    fn format_compact(&self, magnitude: f64) -> String {
        let scale = COMPACT_SCALES
            .iter()
            .position(|(scale, ..)| magnitude >= *scale);
        let (mut digits, mut suffix) = self.compact_digits(magnitude, scale);
        let larger = match scale {
            Some(index) => index.checked_sub(1),
            None => Some(COMPACT_SCALES.len() - 1),
        };
        if let Some(larger) = larger
            && reaches(&digits, 1000.0)
        {
            (digits, suffix) = self.compact_digits(magnitude, Some(larger));
        }
        format!("{digits}{suffix}")
    }

    /// Digits and suffix of `magnitude` at the given `COMPACT_SCALES` index.
    fn compact_digits(&self, magnitude: f64, scale: Option<usize>) -> (String, &'static str) {
        let long = self.options.compact_display == Some(CompactDisplay::Long);
        let (scaled, suffix) = scale
            .and_then(|index| COMPACT_SCALES.get(index))
            .map_or((magnitude, ""), |&(scale, short, long_suffix)| {
                (magnitude / scale, if long { long_suffix } else { short })
            });

        let digits = if self.has_digit_options() {
            self.format_digits(scaled, NumberFormatStyle::Decimal)
        } else {
            let fraction = if scaled < 10.0 { 1 } else { 0 };
            group(&round_fraction(scaled, 0, fraction))
        };
        (digits, suffix)
    }

    /// Add the currency, percent or unit affix.
    fn decorate(&self, body: String, style: NumberFormatStyle) -> String {
        let o = &self.options;
        match style {
            NumberFormatStyle::Decimal => body,
            NumberFormatStyle::Percent => format!("{body}%"),
            NumberFormatStyle::Currency => {
                let Some(code) = &o.currency else {
                    return body;
                };
                let code = code.to_ascii_uppercase();
                match o.currency_display.unwrap_or(CurrencyDisplay::Symbol) {
                    CurrencyDisplay::Code => format!("{code}\u{a0}{body}"),
                    CurrencyDisplay::Name => format!("{body} {code}"),
                    display @ (CurrencyDisplay::Symbol | CurrencyDisplay::NarrowSymbol) => {
                        let narrow = display == CurrencyDisplay::NarrowSymbol;
                        match currency_symbol(&code, narrow) {
                            Some(symbol) => format!("{symbol}{body}"),
                            None => format!("{code}\u{a0}{body}"),
                        }
                    }
                }
            }
            NumberFormatStyle::Unit => {
                let Some(unit) = &o.unit else {
                    return body;
                };
                match o.unit_display.unwrap_or(UnitDisplay::Short) {
                    UnitDisplay::Long => {
                        let name = long_unit_name(unit, body == "1");
                        format!("{body} {name}")
                    }
                    UnitDisplay::Short => format!("{body} {}", short_unit_name(unit)),
                    UnitDisplay::Narrow => format!("{body}{}", short_unit_name(unit)),
                }
            }
        }
    }

    fn apply_sign(&self, text: String, negative: bool, is_zero: bool) -> String {
        let accounting = self.style() == NumberFormatStyle::Currency
            && self.options.currency_sign == Some(CurrencySign::Accounting);
        let negate = |text: String| {
            if accounting {
                format!("({text})")
            } else {
                format!("-{text}")
            }
        };
        match self.options.sign_display.unwrap_or(SignDisplay::Auto) {
            SignDisplay::Never => text,
            SignDisplay::Auto if negative && !is_zero => negate(text),
            SignDisplay::Auto => text,
            SignDisplay::Always if negative && !is_zero => negate(text),
            SignDisplay::Always => format!("+{text}"),
            SignDisplay::ExceptZero if is_zero => text,
            SignDisplay::ExceptZero if negative => negate(text),
            SignDisplay::ExceptZero => format!("+{text}"),
        }
    }
}

impl NumberFormatter for BasicNumberFormatter {
    fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        let style = self.style();
        let scaled = if style == NumberFormatStyle::Percent {
            value * 100.0
        } else {
            value
        };
        let negative = scaled < 0.0;
        let magnitude = scaled.abs();

        let body = if magnitude.is_infinite() {
            "∞".to_string()
        } else {
            match self.options.notation.unwrap_or(Notation::Standard) {
                Notation::Standard => self.format_digits(magnitude, style),
                Notation::Scientific => self.format_exponent(magnitude, 1),
                Notation::Engineering => self.format_exponent(magnitude, 3),
                Notation::Compact => self.format_compact(magnitude),
            }
        };
        let is_zero = !magnitude.is_infinite()
            && body
                .chars()
                .take_while(|c| *c != 'E')
                .all(|c| !c.is_ascii_digit() || c == '0');

        let decorated = self.decorate(body, style);
        self.apply_sign(decorated, negative, is_zero)
    }
}

/// Round to at most `max` fraction digits, keeping at least `min`.
fn round_fraction(value: f64, min: u32, max: u32) -> String {
    let mut text = round_half_expand(value, max as i32);
    if let Some(point) = text.find('.') {
        let keep = point + 1 + min as usize;
        while text.len() > keep && text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Round to at most `max` significant digits, keeping at least `min`.
fn round_significant(value: f64, min: u32, max: u32) -> String {
    if value == 0.0 {
        return if min > 1 {
            format!("0.{}", "0".repeat(min as usize - 1))
        } else {
            "0".to_string()
        };
    }

    let exponent = value.log10().floor() as i32;
    let decimals = max as i32 - 1 - exponent;
    let mut text = round_half_expand(value, decimals);

    if text.contains('.') {
        while text.ends_with('0') && significant_digits(&text) > min as usize {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    } else if significant_digits(&text) < min as usize {
        let missing = min as usize - significant_digits(&text);
        text.push('.');
        text.push_str(&"0".repeat(missing));
    }
    text
}

/// Round a non-negative number to `decimals` fraction digits, ties away
/// from zero. A negative `decimals` rounds to tens, hundreds and so on.
///
/// Rounds the shortest decimal form of `value`, so `1.005` gives `1.01`.
fn round_half_expand(value: f64, decimals: i32) -> String {
    let text = value.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let mut point = integer.len();

    let keep = usize::try_from(point as i64 + i64::from(decimals)).ok();
    let round_up = keep
        .and_then(|keep| digits.get(keep))
        .is_some_and(|digit| *digit >= b'5');
    digits.truncate(keep.unwrap_or(0));
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            point += 1;
        }
    }
    digits.resize(point + usize::try_from(decimals).unwrap_or(0), b'0');

    let (integer, fraction) = digits.split_at(point);
    let leading_zeros = integer.iter().take_while(|digit| **digit == b'0').count();
    let integer = &integer[leading_zeros.min(integer.len() - 1)..];
    let mut out: String = integer.iter().map(|digit| char::from(*digit)).collect();
    if !fraction.is_empty() {
        out.push('.');
        out.extend(fraction.iter().map(|digit| char::from(*digit)));
    }
    out
}

/// Whether grouped `digits` are at least `limit`.
fn reaches(digits: &str, limit: f64) -> bool {
    digits
        .replace(',', "")
        .parse::<f64>()
        .is_ok_and(|value| value >= limit)
}

fn significant_digits(text: &str) -> usize {
    text.chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count()
}

/// Insert `,` between groups of three integer digits.
fn group(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };
    let mut out = String::with_capacity(digits.len() + 8);
    let len = integer.len();
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn currency_symbol(code: &str, narrow: bool) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "NGN" => "₦",
        "CAD" if narrow => "$",
        "CAD" => "CA$",
        "AUD" if narrow => "$",
        "AUD" => "A$",
        "CNY" if narrow => "¥",
        "CNY" => "CN¥",
        "MXN" if narrow => "$",
        "MXN" => "MX$",
        _ => return None,
    };
    Some(symbol)
}

fn short_unit_name(unit: &str) -> &str {
    match unit {
        "kilometer" => "km",
        "meter" => "m",
        "centimeter" => "cm",
        "millimeter" => "mm",
        "mile" => "mi",
        "foot" => "ft",
        "inch" => "in",
        "kilogram" => "kg",
        "gram" => "g",
        "pound" => "lb",
        "liter" => "L",
        "milliliter" => "mL",
        "second" => "sec",
        "minute" => "min",
        "hour" => "hr",
        "millisecond" => "ms",
        "byte" => "byte",
        "kilobyte" => "kB",
        "megabyte" => "MB",
        "gigabyte" => "GB",
        "terabyte" => "TB",
        "celsius" => "°C",
        "fahrenheit" => "°F",
        "percent" => "%",
        "kilometer-per-hour" => "km/h",
        "mile-per-hour" => "mph",
        "meter-per-second" => "m/s",
        other => other,
    }
}

/// `kilometer-per-hour` becomes `kilometers per hour`.
fn long_unit_name(unit: &str, singular: bool) -> String {
    let (head, tail) = match unit.split_once("-per-") {
        Some((head, tail)) => (head, Some(tail)),
        None => (unit, None),
    };
    let mut name = match head {
        "celsius" => "degrees Celsius".to_string(),
        "fahrenheit" => "degrees Fahrenheit".to_string(),
        "foot" if !singular => "feet".to_string(),
        "inch" if !singular => "inches".to_string(),
        "century" if !singular => "centuries".to_string(),
        head if singular || head.ends_with('s') => head.to_string(),
        head => format!("{head}s"),
    };
    if let Some(tail) = tail {
        name.push_str(" per ");
        name.push_str(tail);
    }
    name
}
