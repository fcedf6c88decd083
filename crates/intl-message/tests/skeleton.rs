//! Tests for number and date-time skeleton compilation

use intl_message::parser::NumberSkeletonToken;
use intl_message::types::{
    CompactDisplay, CurrencyDisplay, CurrencySign, DateTimeFormatOptions, HourCycle, MonthWidth,
    Notation, NumberFormatOptions, NumberFormatStyle, NumericWidth, SignDisplay, TextWidth,
    TimeZoneNameWidth, TrailingZeroDisplay, UnitDisplay,
};
use intl_message::{RangeError, compile_date_time_skeleton, compile_number_skeleton};

fn number(skeleton: &str) -> Result<NumberFormatOptions, RangeError> {
    let tokens: Vec<_> = skeleton
        .split_whitespace()
        .map(|token| {
            let mut pieces = token.split('/');
            let stem = pieces.next().unwrap_or_default();
            let options: Vec<&str> = pieces.collect();
            NumberSkeletonToken::new(stem, &options)
        })
        .collect();
    compile_number_skeleton(&tokens)
}

// =============================================================================
// Number skeletons
// =============================================================================

#[test]
fn test_percent_and_short_form() {
    let expected = NumberFormatOptions {
        style: Some(NumberFormatStyle::Percent),
        ..Default::default()
    };
    assert_eq!(number("percent").unwrap(), expected);
    assert_eq!(number("%").unwrap(), expected);
}

#[test]
fn test_currency() {
    let options = number("currency/USD").unwrap();
    assert_eq!(options.style, Some(NumberFormatStyle::Currency));
    assert_eq!(options.currency.as_deref(), Some("USD"));
}

#[test]
fn test_currency_requires_option() {
    assert_eq!(
        number("currency").unwrap_err(),
        RangeError::MissingOption {
            stem: "currency".to_string()
        }
    );
}

#[test]
fn test_measure_unit_drops_category() {
    let options = number("measure-unit/length-kilometer unit-width-full-name").unwrap();
    assert_eq!(options.style, Some(NumberFormatStyle::Unit));
    assert_eq!(options.unit.as_deref(), Some("kilometer"));
    assert_eq!(options.unit_display, Some(UnitDisplay::Long));
    assert_eq!(options.currency_display, Some(CurrencyDisplay::Name));
}

#[test]
fn test_grouping_and_integer_precision() {
    let options = number(",_ .").unwrap();
    assert_eq!(options.use_grouping, Some(false));
    assert_eq!(options.maximum_fraction_digits, Some(0));
    assert_eq!(number("group-off precision-integer").unwrap(), options);
}

#[test]
fn test_compact_notation() {
    let short = number("K").unwrap();
    assert_eq!(short.notation, Some(Notation::Compact));
    assert_eq!(short.compact_display, Some(CompactDisplay::Short));
    let long = number("compact-long").unwrap();
    assert_eq!(long.compact_display, Some(CompactDisplay::Long));
}

#[test]
fn test_scientific_with_sign_option() {
    let options = number("scientific/sign-always").unwrap();
    assert_eq!(options.notation, Some(Notation::Scientific));
    assert_eq!(options.sign_display, Some(SignDisplay::Always));
    assert_eq!(
        number("engineering").unwrap().notation,
        Some(Notation::Engineering)
    );
}

#[test]
fn test_fraction_precision_exact() {
    let options = number(".00").unwrap();
    assert_eq!(options.minimum_fraction_digits, Some(2));
    assert_eq!(options.maximum_fraction_digits, Some(2));
}

#[test]
fn test_fraction_precision_forms() {
    let at_least = number(".00*").unwrap();
    assert_eq!(at_least.minimum_fraction_digits, Some(2));
    assert_eq!(at_least.maximum_fraction_digits, None);

    let at_most = number(".##").unwrap();
    assert_eq!(at_most.minimum_fraction_digits, None);
    assert_eq!(at_most.maximum_fraction_digits, Some(2));

    let range = number(".0##").unwrap();
    assert_eq!(range.minimum_fraction_digits, Some(1));
    assert_eq!(range.maximum_fraction_digits, Some(3));
}

#[test]
fn test_fraction_precision_with_trailing_zero_option() {
    let options = number(".00/w").unwrap();
    assert_eq!(
        options.trailing_zero_display,
        Some(TrailingZeroDisplay::StripIfInteger)
    );
}

#[test]
fn test_fraction_precision_with_significant_option() {
    let options = number(".##/@@@").unwrap();
    assert_eq!(options.maximum_fraction_digits, Some(2));
    assert_eq!(options.minimum_significant_digits, Some(3));
    assert_eq!(options.maximum_significant_digits, Some(3));
}

#[test]
fn test_fraction_precision_rejects_two_options() {
    let err = number(".00/w/@@").unwrap_err();
    assert_eq!(
        err,
        RangeError::FractionPrecisionOptions {
            stem: ".00".to_string(),
            count: 2
        }
    );
}

#[test]
fn test_significant_precision() {
    let exact = number("@@@").unwrap();
    assert_eq!(exact.minimum_significant_digits, Some(3));
    assert_eq!(exact.maximum_significant_digits, Some(3));

    let at_least = number("@@+").unwrap();
    assert_eq!(at_least.minimum_significant_digits, Some(2));
    assert_eq!(at_least.maximum_significant_digits, None);

    let range = number("@##").unwrap();
    assert_eq!(range.minimum_significant_digits, Some(1));
    assert_eq!(range.maximum_significant_digits, Some(3));
}

#[test]
fn test_sign_stems_and_short_forms() {
    assert_eq!(number("+!").unwrap().sign_display, Some(SignDisplay::Always));
    assert_eq!(
        number("+?").unwrap().sign_display,
        Some(SignDisplay::ExceptZero)
    );
    assert_eq!(number("+_").unwrap().sign_display, Some(SignDisplay::Never));
    assert_eq!(
        number("sign-auto").unwrap().sign_display,
        Some(SignDisplay::Auto)
    );

    let accounting = number("()!").unwrap();
    assert_eq!(accounting.sign_display, Some(SignDisplay::Always));
    assert_eq!(accounting.currency_sign, Some(CurrencySign::Accounting));

    let plain_accounting = number("sign-accounting").unwrap();
    assert_eq!(plain_accounting.sign_display, None);
    assert_eq!(
        plain_accounting.currency_sign,
        Some(CurrencySign::Accounting)
    );
}

#[test]
fn test_unknown_stems_are_skipped() {
    assert_eq!(
        number("rounding-mode-floor integer-width/*000").unwrap(),
        NumberFormatOptions::default()
    );
}

#[test]
fn test_later_tokens_override_earlier() {
    let options = number("percent currency/EUR").unwrap();
    assert_eq!(options.style, Some(NumberFormatStyle::Currency));
}

// =============================================================================
// Date-time skeletons
// =============================================================================

#[test]
fn test_full_date() {
    assert_eq!(
        compile_date_time_skeleton("EEEEyMMMMd").unwrap(),
        DateTimeFormatOptions {
            weekday: Some(TextWidth::Long),
            year: Some(NumericWidth::Numeric),
            month: Some(MonthWidth::Long),
            day: Some(NumericWidth::Numeric),
            ..Default::default()
        }
    );
}

#[test]
fn test_two_digit_fields() {
    let options = compile_date_time_skeleton("yyMMdd").unwrap();
    assert_eq!(options.year, Some(NumericWidth::TwoDigit));
    assert_eq!(options.month, Some(MonthWidth::TwoDigit));
    assert_eq!(options.day, Some(NumericWidth::TwoDigit));
}

#[test]
fn test_month_widths() {
    let width = |pattern: &str| compile_date_time_skeleton(pattern).unwrap().month;
    assert_eq!(width("M"), Some(MonthWidth::Numeric));
    assert_eq!(width("LLL"), Some(MonthWidth::Short));
    assert_eq!(width("MMMM"), Some(MonthWidth::Long));
    assert_eq!(width("MMMMM"), Some(MonthWidth::Narrow));
}

#[test]
fn test_hour_symbols_set_cycle() {
    let h12 = compile_date_time_skeleton("hmma").unwrap();
    assert_eq!(h12.hour_cycle, Some(HourCycle::H12));
    assert_eq!(h12.hour, Some(NumericWidth::Numeric));
    assert_eq!(h12.minute, Some(NumericWidth::TwoDigit));
    assert_eq!(h12.hour12, Some(true));

    assert_eq!(
        compile_date_time_skeleton("HH").unwrap().hour_cycle,
        Some(HourCycle::H23)
    );
    assert_eq!(
        compile_date_time_skeleton("K").unwrap().hour_cycle,
        Some(HourCycle::H11)
    );
    assert_eq!(
        compile_date_time_skeleton("k").unwrap().hour_cycle,
        Some(HourCycle::H24)
    );
}

#[test]
fn test_era_and_time_zone() {
    let options = compile_date_time_skeleton("GGGGyz").unwrap();
    assert_eq!(options.era, Some(TextWidth::Long));
    assert_eq!(options.time_zone_name, Some(TimeZoneNameWidth::Short));
    assert_eq!(
        compile_date_time_skeleton("zzzz").unwrap().time_zone_name,
        Some(TimeZoneNameWidth::Long)
    );
}

#[test]
fn test_quoted_literals_are_skipped() {
    assert_eq!(
        compile_date_time_skeleton("d 'of' MMMM").unwrap(),
        compile_date_time_skeleton("dMMMM").unwrap()
    );
}

#[test]
fn test_local_weekday_needs_four_letters() {
    assert_eq!(
        compile_date_time_skeleton("eee").unwrap_err(),
        RangeError::NumericWeekday { symbol: 'e' }
    );
    assert_eq!(
        compile_date_time_skeleton("cccc").unwrap().weekday,
        Some(TextWidth::Short)
    );
}

#[test]
fn test_unsupported_symbols() {
    let err = compile_date_time_skeleton("YYYY").unwrap_err();
    assert_eq!(
        err.to_string(),
        "`Y` (year) patterns are not supported, use `y` instead"
    );

    let err = compile_date_time_skeleton("QQQ").unwrap_err();
    assert_eq!(err.to_string(), "`Q` (quarter) patterns are not supported");

    assert!(compile_date_time_skeleton("ZZZZ").is_err());
    assert!(compile_date_time_skeleton("SSS").is_err());
}

#[test]
fn test_unmapped_letters_are_ignored() {
    assert_eq!(
        compile_date_time_skeleton("n").unwrap(),
        DateTimeFormatOptions::default()
    );
}
