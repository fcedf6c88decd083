//! Integration tests for message formatting

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use intl_message::parser::Element;
use intl_message::types::{DateTimeFormatOptions, NumericWidth};
use intl_message::{
    Formats, Formatted, MessageFormat, MessageFormatOptions, NumberFormatOptions, Part, Value,
    Values, params,
};

fn format_in(locale: &str, pattern: &str, values: &Values) -> String {
    let message = MessageFormat::new(pattern, locale).unwrap();
    match message.format(values).unwrap() {
        Formatted::Text(text) => text,
        Formatted::Parts(parts) => panic!("expected text, got {parts:?}"),
    }
}

fn format(pattern: &str, values: &Values) -> String {
    format_in("en", pattern, values)
}

fn when() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 0)
        .unwrap()
}

// =============================================================================
// Arguments and literals
// =============================================================================

#[test]
fn test_simple_argument() {
    assert_eq!(format("{name}", &params! { "name" => "Ann" }), "Ann");
}

#[test]
fn test_plain_message() {
    assert_eq!(format("Just text", &params! {}), "Just text");
}

#[test]
fn test_numeric_arguments_use_plain_text() {
    assert_eq!(
        format("{a} and {b}", &params! { "a" => 1234, "b" => 1.5 }),
        "1234 and 1.5"
    );
}

#[test]
fn test_float_argument_text() {
    let text = format(
        "{a} {b} {c} {d} {e}",
        &params! {
            "a" => f64::INFINITY,
            "b" => f64::NAN,
            "c" => 1e21,
            "d" => 1.5e-7,
            "e" => -0.0,
        },
    );
    assert_eq!(text, "Infinity NaN 1e+21 1.5e-7 0");
}

#[test]
fn test_escaped_text() {
    assert_eq!(
        format("'{name}' is {name}''s", &params! { "name" => "Ann" }),
        "{name} is Ann's"
    );
}

// =============================================================================
// Plural and select
// =============================================================================

#[test]
fn test_plural_one_and_other() {
    let pattern = "I have {count, plural, one {# item} other {# items}}";
    assert_eq!(format(pattern, &params! { "count" => 1 }), "I have 1 item");
    assert_eq!(format(pattern, &params! { "count" => 5 }), "I have 5 items");
    assert_eq!(format(pattern, &params! { "count" => 0 }), "I have 0 items");
}

#[test]
fn test_plural_value_is_number_formatted() {
    let pattern = "{n, plural, one {# item} other {# items}}";
    assert_eq!(format(pattern, &params! { "n" => 1500 }), "1,500 items");
    assert_eq!(format(pattern, &params! { "n" => 1.5 }), "1.5 items");
}

#[test]
fn test_plural_accepts_numeric_string() {
    let pattern = "{n, plural, one {# item} other {# items}}";
    assert_eq!(format(pattern, &params! { "n" => "3" }), "3 items");
}

#[test]
fn test_plural_exact_match_wins() {
    let pattern = "{n, plural, =0 {no items} one {# item} other {# items}}";
    assert_eq!(format(pattern, &params! { "n" => 0 }), "no items");
    assert_eq!(format(pattern, &params! { "n" => 1.0 }), "1 item");
}

#[test]
fn test_plural_offset() {
    let pattern = "{n, plural, offset:1 =0 {nobody} =1 {just {host}} \
                   one {{host} and # other} other {{host} and # others}}";
    assert_eq!(
        format(pattern, &params! { "n" => 0, "host" => "Ann" }),
        "nobody"
    );
    assert_eq!(
        format(pattern, &params! { "n" => 1, "host" => "Ann" }),
        "just Ann"
    );
    assert_eq!(
        format(pattern, &params! { "n" => 2, "host" => "Ann" }),
        "Ann and 1 other"
    );
    assert_eq!(
        format(pattern, &params! { "n" => 5, "host" => "Ann" }),
        "Ann and 4 others"
    );
}

#[test]
fn test_selectordinal() {
    let pattern = "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
    let ordinal = |n: i64| format(pattern, &params! { "n" => n });
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(2), "2nd");
    assert_eq!(ordinal(3), "3rd");
    assert_eq!(ordinal(4), "4th");
    assert_eq!(ordinal(11), "11th");
    assert_eq!(ordinal(21), "21st");
}

#[test]
fn test_russian_plural_categories() {
    let pattern = "{n, plural, one {# файл} few {# файла} many {# файлов} other {# файла}}";
    assert_eq!(format_in("ru", pattern, &params! { "n" => 1 }), "1 файл");
    assert_eq!(format_in("ru", pattern, &params! { "n" => 3 }), "3 файла");
    assert_eq!(format_in("ru", pattern, &params! { "n" => 5 }), "5 файлов");
    assert_eq!(format_in("ru", pattern, &params! { "n" => 21 }), "21 файл");
}

#[test]
fn test_select() {
    let pattern = "{gender, select, male {He} female {She} other {They}}";
    assert_eq!(format(pattern, &params! { "gender" => "female" }), "She");
    assert_eq!(format(pattern, &params! { "gender" => "x" }), "They");
}

#[test]
fn test_select_on_number_uses_its_text() {
    let pattern = "{n, select, 1 {one} other {many}}";
    assert_eq!(format(pattern, &params! { "n" => 1 }), "one");
}

#[test]
fn test_select_does_not_carry_plural_value() {
    let ast = vec![Element::Select {
        value: "g".to_string(),
        options: [(
            "other".to_string(),
            intl_message::parser::PluralOrSelectOption::new(vec![
                Element::literal("["),
                Element::pound(),
                Element::literal("]"),
            ]),
        )]
        .into_iter()
        .collect(),
        location: None,
    }];
    let message = MessageFormat::with_options(ast, MessageFormatOptions::default()).unwrap();
    let text = message.format(&params! { "g" => "x" }).unwrap();
    assert_eq!(text.as_text(), Some("[]"));
}

#[test]
fn test_nested_select_in_plural() {
    let pattern = "{n, plural, one {{g, select, female {her cat} other {their cat}}} \
                   other {{g, select, female {her # cats} other {their # cats}}}}";
    assert_eq!(
        format(pattern, &params! { "n" => 1, "g" => "female" }),
        "her cat"
    );
    assert_eq!(
        format(pattern, &params! { "n" => 3, "g" => "male" }),
        "their # cats"
    );
}

// =============================================================================
// Number, date and time
// =============================================================================

#[test]
fn test_number_styles() {
    assert_eq!(format("{n, number}", &params! { "n" => 1234.5 }), "1,234.5");
    assert_eq!(format("{n, number, integer}", &params! { "n" => 3.7 }), "4");
    assert_eq!(format("{n, number, percent}", &params! { "n" => 0.25 }), "25%");
}

#[test]
fn test_number_skeletons() {
    assert_eq!(
        format("{p, number, ::currency/USD}", &params! { "p" => 12 }),
        "$12.00"
    );
    assert_eq!(format("{n, number, ::.00}", &params! { "n" => 3 }), "3.00");
    assert_eq!(
        format("{n, number, ::sign-always}", &params! { "n" => 5 }),
        "+5"
    );
    assert_eq!(
        format("{n, number, ::compact-short}", &params! { "n" => 1500 }),
        "1.5K"
    );
    assert_eq!(
        format(
            "{n, number, ::currency/EUR sign-accounting}",
            &params! { "n" => -3 }
        ),
        "(€3.00)"
    );
}

#[test]
fn test_rounding_ties_away_from_zero() {
    assert_eq!(format("{n, number, integer}", &params! { "n" => 2.5 }), "3");
    assert_eq!(format("{n, number, integer}", &params! { "n" => -2.5 }), "-3");
    assert_eq!(format("{p, number, percent}", &params! { "p" => 0.125 }), "13%");
    assert_eq!(format("{n, number, ::.0}", &params! { "n" => 0.25 }), "0.3");
    assert_eq!(format("{n, number, ::.00}", &params! { "n" => 1.005 }), "1.01");
    assert_eq!(format("{n, number, ::@@}", &params! { "n" => 125 }), "130");
}

#[test]
fn test_scientific_notation() {
    assert_eq!(
        format("{n, number, ::scientific}", &params! { "n" => 12345 }),
        "1.235E4"
    );
    assert_eq!(
        format("{n, number, ::engineering}", &params! { "n" => 12345 }),
        "12.345E3"
    );
    assert_eq!(
        format("{n, number, ::scientific}", &params! { "n" => 0 }),
        "0E0"
    );
}

#[test]
fn test_rounding_carry_moves_to_next_exponent() {
    assert_eq!(
        format("{n, number, ::scientific}", &params! { "n" => 9.9996 }),
        "1E1"
    );
    assert_eq!(
        format("{n, number, ::engineering}", &params! { "n" => 999_999.7 }),
        "1E6"
    );
}

#[test]
fn test_rounding_carry_moves_to_next_compact_scale() {
    assert_eq!(
        format("{n, number, ::compact-short}", &params! { "n" => 999_999.5 }),
        "1M"
    );
    assert_eq!(
        format("{n, number, ::compact-short}", &params! { "n" => 999.95 }),
        "1K"
    );
    assert_eq!(
        format("{n, number, ::compact-long}", &params! { "n" => 999_999.5 }),
        "1 million"
    );
}

#[test]
fn test_unknown_number_preset_uses_defaults() {
    assert_eq!(format("{n, number, fancy}", &params! { "n" => 1.5 }), "1.5");
}

#[test]
fn test_date_styles() {
    let values = params! { "d" => when() };
    assert_eq!(format("{d, date}", &values), "3/9/2024");
    assert_eq!(format("{d, date, short}", &values), "3/9/24");
    assert_eq!(format("{d, date, medium}", &values), "Mar 9, 2024");
    assert_eq!(format("{d, date, long}", &values), "March 9, 2024");
    assert_eq!(
        format("{d, date, full}", &values),
        "Saturday, March 9, 2024"
    );
}

#[test]
fn test_time_styles() {
    let values = params! { "d" => when() };
    assert_eq!(format("{d, time}", &values), "2:05:00 PM");
    assert_eq!(format("{d, time, short}", &values), "2:05 PM");
    assert_eq!(format("{d, time, long}", &values), "2:05:00 PM UTC");
    assert_eq!(format("{d, time, ::HHmm}", &values), "14:05");
}

#[test]
fn test_date_from_epoch_millis() {
    assert_eq!(format("{d, date}", &params! { "d" => 0 }), "1/1/1970");
    assert_eq!(
        format("{d, time, short}", &params! { "d" => 86_400_000 + 30 * 60_000 }),
        "12:30 AM"
    );
}

#[test]
fn test_date_as_plain_argument() {
    assert_eq!(format("{d}", &params! { "d" => when() }), "3/9/2024");
}

#[test]
fn test_date_skeleton() {
    assert_eq!(
        format("{d, date, ::EEEyMMMd}", &params! { "d" => when() }),
        "Sat, Mar 9, 2024"
    );
}

// =============================================================================
// Presets
// =============================================================================

#[test]
fn test_preset_overrides_merge_per_field() {
    let mut formats = Formats::empty();
    formats.number.insert(
        "integer".to_string(),
        NumberFormatOptions {
            use_grouping: Some(false),
            ..Default::default()
        },
    );
    formats.date.insert(
        "short".to_string(),
        DateTimeFormatOptions {
            year: Some(NumericWidth::Numeric),
            ..Default::default()
        },
    );
    let options = MessageFormatOptions::builder().formats(formats).build();
    let message =
        MessageFormat::with_options("{n, number, integer} {d, date, short}", options).unwrap();

    let text = message
        .format(&params! { "n" => 12345.6, "d" => when() })
        .unwrap();
    assert_eq!(text.as_text(), Some("12346 3/9/2024"));
    assert_eq!(
        message.formats().number["integer"].maximum_fraction_digits,
        Some(0)
    );
}

#[test]
fn test_custom_preset() {
    let mut formats = Formats::empty();
    formats.number.insert(
        "tenths".to_string(),
        NumberFormatOptions {
            maximum_fraction_digits: Some(1),
            ..Default::default()
        },
    );
    let options = MessageFormatOptions::builder().formats(formats).build();
    let message = MessageFormat::with_options("{n, number, tenths}", options).unwrap();
    let text = message.format(&params! { "n" => 1.26 }).unwrap();
    assert_eq!(text.as_text(), Some("1.3"));
}

// =============================================================================
// Tags and host objects
// =============================================================================

#[test]
fn test_tag_callback_wraps_children() {
    let values = params! {
        "b" => Value::tag(|chunks: Vec<Part>| {
            let mut out = vec![Part::literal("[")];
            out.extend(chunks);
            out.push(Part::literal("]"));
            out
        }),
    };
    assert_eq!(format("<b>x</b>", &values), "[x]");
}

#[test]
fn test_tag_children_see_plural_value() {
    let values = params! {
        "n" => 5,
        "b" => Value::tag(|chunks: Vec<Part>| {
            let mut out = vec![Part::literal("*")];
            out.extend(chunks);
            out.push(Part::literal("*"));
            out
        }),
    };
    assert_eq!(
        format("{n, plural, other {<b>#</b> left}}", &values),
        "*5* left"
    );
}

#[test]
fn test_self_closing_tag_is_text() {
    assert_eq!(format("a<br/>b", &params! {}), "a<br/>b");
}

#[test]
fn test_ignore_tag_formats_markup_as_text() {
    let options = MessageFormatOptions::builder().ignore_tag(true).build();
    let message = MessageFormat::with_options("<b>{n}</b>", options).unwrap();
    let text = message.format(&params! { "n" => 5 }).unwrap();
    assert_eq!(text.as_text(), Some("<b>5</b>"));
}

#[derive(Debug, Clone, PartialEq)]
struct Node(String);

#[test]
fn test_object_argument_passes_through() {
    let message = MessageFormat::new("Hello {who}!", "en").unwrap();
    let mut values: Values<Node> = HashMap::new();
    values.insert("who".to_string(), Value::Object(Node("avatar".to_string())));

    let parts = message.format_to_parts(&values).unwrap();
    assert_eq!(parts, vec![
        Part::literal("Hello "),
        Part::Object(Node("avatar".to_string())),
        Part::literal("!"),
    ]);
    assert!(matches!(
        message.format(&values).unwrap(),
        Formatted::Parts(_)
    ));
}

#[test]
fn test_tag_callback_returns_objects() {
    let message = MessageFormat::new("Click <link>here</link> now", "en").unwrap();
    let mut values: Values<Node> = HashMap::new();
    values.insert(
        "link".to_string(),
        Value::tag(|children: Vec<Part<Node>>| {
            let text: String = children.iter().filter_map(Part::as_literal).collect();
            vec![Part::Object(Node(text))]
        }),
    );

    let formatted = message.format(&values).unwrap();
    assert_eq!(
        formatted,
        Formatted::Parts(vec![
            Part::literal("Click "),
            Part::Object(Node("here".to_string())),
            Part::literal(" now"),
        ])
    );
}

#[test]
fn test_literal_parts_are_merged() {
    let message = MessageFormat::new("a{x}b{y}c", "en").unwrap();
    let parts = message
        .format_to_parts(&params! { "x" => 1, "y" => 2 })
        .unwrap();
    assert_eq!(parts, vec![Part::literal("a1b2c")]);
}

// =============================================================================
// Facade
// =============================================================================

#[test]
fn test_message_from_ast() {
    let ast = vec![Element::literal("Hi "), Element::argument("name")];
    let message = MessageFormat::with_options(ast.clone(), MessageFormatOptions::default()).unwrap();
    assert_eq!(message.ast(), ast.as_slice());
    let text = message.format(&params! { "name" => "Ann" }).unwrap();
    assert_eq!(text.as_text(), Some("Hi Ann"));
}

#[test]
fn test_resolved_options() {
    let message = MessageFormat::new("x", "de-DE").unwrap();
    assert_eq!(message.resolved_options().locale, "de-DE");

    let options = MessageFormatOptions::builder()
        .locales(vec!["not a locale!".to_string(), "fr".to_string()])
        .build();
    let message = MessageFormat::with_options("x", options).unwrap();
    assert_eq!(message.resolved_options().locale, "fr");

    let options = MessageFormatOptions::builder().locales(Vec::new()).build();
    let message = MessageFormat::with_options("x", options).unwrap();
    assert_eq!(message.locales(), ["en".to_string()]);
    assert_eq!(message.resolved_options().locale, "en");
}

#[test]
fn test_message_is_reusable() {
    let message = MessageFormat::new("{n, plural, one {# day} other {# days}}", "en").unwrap();
    for n in 0..3 {
        let expected = if n == 1 { "1 day".to_string() } else { format!("{n} days") };
        let text = message.format(&params! { "n" => n }).unwrap();
        assert_eq!(text.as_text(), Some(expected.as_str()));
    }
}
