//! Tests for parse error reporting

use intl_message::parser::{ParserOptions, SyntaxError, parse};

fn parse_err(input: &str) -> SyntaxError {
    parse(input, &ParserOptions::default()).unwrap_err()
}

#[test]
fn test_duplicate_plural_option() {
    let err = parse_err("{n, plural, one{a} one{b} other{c}}");
    assert!(err.message.contains("Duplicate option"));
    insta::assert_snapshot!(err, @r#"syntax error at 1:1: Duplicate option "one" in plural element: "{n, plural, one{a} one{b} other{c}}""#);
}

#[test]
fn test_duplicate_select_option() {
    let err = parse_err("x {g, select, a {1} a {2}}");
    insta::assert_snapshot!(err.message, @r#"Duplicate option "a" in select element: "{g, select, a {1} a {2}}""#);
    assert_eq!(err.location.start.offset, 2);
    assert_eq!(err.location.end.offset, 26);
}

#[test]
fn test_mismatched_tag() {
    let err = parse_err("<b>x</i>");
    insta::assert_snapshot!(err, @"syntax error at 1:5: Mismatched tag: <b> closed by </i>");
}

#[test]
fn test_unclosed_argument() {
    let err = parse_err("{name");
    insta::assert_snapshot!(err, @r#"syntax error at 1:6: Expected "}" or "," but end of input found."#);
    assert_eq!(err.expected, vec![r#""}""#, r#"",""#]);
    assert_eq!(err.found, None);
}

#[test]
fn test_argument_name_stops_at_syntax_and_space() {
    let err = parse_err("{a-b}");
    insta::assert_snapshot!(err, @r#"syntax error at 1:3: Expected "}" or "," but "-" found."#);
    assert_eq!(err.found.as_deref(), Some("-"));

    let err = parse_err("{a b}");
    insta::assert_snapshot!(err, @r#"syntax error at 1:4: Expected "}" or "," but "b" found."#);
}

#[test]
fn test_unknown_argument_type() {
    let err = parse_err("{n, foo}");
    insta::assert_snapshot!(err.message, @r#"Expected "number", "date", "time", "plural", "selectordinal" or "select" but "f" found."#);
    assert_eq!(err.found.as_deref(), Some("f"));
    assert_eq!(err.location.start.column, 5);
}

#[test]
fn test_unclosed_select() {
    let err = parse_err("{n, select, a {x}");
    insta::assert_snapshot!(err, @r#"syntax error at 1:18: Expected "}" but end of input found."#);
}

#[test]
fn test_unclosed_option_body() {
    let err = parse_err("{n, plural, other {x");
    assert_eq!(err.expected, vec![r#""}""#]);
    assert_eq!(err.location.start.offset, 20);
}

#[test]
fn test_empty_argument() {
    let err = parse_err("{}");
    assert!(err.message.starts_with("Expected argument name"));
    assert_eq!(err.found.as_deref(), Some("}"));
}

#[test]
fn test_stray_closing_angle_bracket() {
    let err = parse_err("a > b");
    insta::assert_snapshot!(err, @r#"syntax error at 1:3: Expected end of input but ">" found."#);
}

#[test]
fn test_stray_closing_tag() {
    let err = parse_err("x</b>");
    assert_eq!(err.found.as_deref(), Some("<"));
    assert_eq!(err.location.start.offset, 1);
}

#[test]
fn test_error_position_on_later_line() {
    let err = parse_err("line one\n{oops");
    assert_eq!(err.location.start.line, 2);
    assert_eq!(err.location.start.column, 6);
}

#[test]
fn test_invalid_date_skeleton_when_parsing_skeletons() {
    let options = ParserOptions {
        should_parse_skeletons: true,
        ..Default::default()
    };
    let err = parse("{d, date, ::YYYY}", &options).unwrap_err();
    insta::assert_snapshot!(err, @r#"syntax error at 1:13: Invalid skeleton "YYYY": `Y` (year) patterns are not supported, use `y` instead"#);
}

#[test]
fn test_invalid_skeleton_accepted_without_compiling() {
    assert!(parse("{d, date, ::YYYY}", &ParserOptions::default()).is_ok());
}

#[test]
fn test_missing_plural_options() {
    let err = parse_err("{n, plural, }");
    assert!(err.expected.contains(&"option".to_string()));
}
