//! Message pattern parser using winnow.
//!
//! Parses ICU message strings into an AST. Handles:
//! - Literal text with apostrophe escaping (`''`, `'{...}'`)
//! - Simple arguments, number/date/time elements with styles and skeletons
//! - Plural, selectordinal and select elements with nested messages
//! - Rich-text tags and the `#` shorthand inside plural branches
//!
//! Parser state (scope flags and the source used for locations) is passed
//! explicitly to every rule, so one parse never observes another.

use indexmap::IndexMap;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, fail, opt, preceded, repeat};
use winnow::error::{ContextError, ErrMode, FromExternalError, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{
    DateTimeSkeleton, DateTimeStyle, Element, Location, NumberSkeleton, NumberSkeletonToken,
    NumberStyle, PluralOrSelectOption, PluralType,
};
use super::chars::{is_name_char, is_pattern_white_space, is_skeleton_char, is_tag_name_char};
use super::error::{SyntaxError, Violation, location_between};
use super::normalize::normalize_hashtag_in_plural;
use crate::skeleton::{compile_date_time_skeleton, compile_number_skeleton};

/// Switches that change how a pattern is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Treat `<` and `>` as plain text instead of tag delimiters.
    pub ignore_tag: bool,
    /// Record a source [`Location`] on every element.
    pub capture_location: bool,
    /// Compile skeletons at parse time into `parsed_options`.
    pub should_parse_skeletons: bool,
    /// Run [`normalize_hashtag_in_plural`] on the result.
    pub normalize_hashtag_in_plural: bool,
}

/// Parse a message pattern into an AST.
///
/// # Example
///
/// ```
/// use intl_message::parser::{Element, ParserOptions, parse};
///
/// let ast = parse("Hello, {name}!", &ParserOptions::default()).unwrap();
/// assert_eq!(
///     ast,
///     vec![
///         Element::literal("Hello, "),
///         Element::argument("name"),
///         Element::literal("!"),
///     ]
/// );
/// ```
pub fn parse(input: &str, options: &ParserOptions) -> Result<Vec<Element>, SyntaxError> {
    let ctx = Ctx {
        source: input,
        options: *options,
        in_plural: false,
        nested: false,
    };
    let mut remaining = input;
    let result = message(ctx, &mut remaining);
    let mut elements = result.map_err(|e| syntax_error(input, remaining, e))?;
    if !remaining.is_empty() {
        return Err(trailing_input_error(input, remaining));
    }
    if options.normalize_hashtag_in_plural {
        normalize_hashtag_in_plural(&mut elements)?;
    }
    tracing::trace!(elements = elements.len(), "parsed message pattern");
    Ok(elements)
}

/// Scope of the rule currently being parsed.
#[derive(Clone, Copy)]
struct Ctx<'s> {
    source: &'s str,
    options: ParserOptions,
    /// Inside a plural branch: `#` is a pound element.
    in_plural: bool,
    /// Inside a branch or tag body: `}` ends the message.
    nested: bool,
}

impl<'s> Ctx<'s> {
    fn plural_option(self) -> Self {
        Self {
            in_plural: true,
            nested: true,
            ..self
        }
    }

    fn select_option(self) -> Self {
        Self {
            in_plural: false,
            nested: true,
            ..self
        }
    }

    fn tag_body(self) -> Self {
        Self {
            nested: true,
            ..self
        }
    }

    /// Characters that end a run of literal text.
    fn is_trigger(&self, c: char) -> bool {
        c == '{'
            || (!self.options.ignore_tag && (c == '<' || c == '>'))
            || (self.in_plural && c == '#')
            || (self.nested && c == '}')
    }

    fn offset(&self, remaining: &str) -> usize {
        self.source.len() - remaining.len()
    }

    fn span(&self, start: &str, end: &str) -> (usize, usize) {
        (self.offset(start), self.offset(end))
    }

    fn location(&self, start: &str, end: &str) -> Option<Location> {
        self.options
            .capture_location
            .then(|| location_between(self.source, self.offset(start), self.offset(end)))
    }
}

/// Parse a sequence of elements up to the first character no element accepts.
fn message<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<Vec<Element>> {
    repeat(0.., |i: &mut &'s str| element(ctx, i)).parse_next(input)
}

/// Parse a single element, dispatching on its first character.
fn element<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<Element> {
    let start = *input;
    let mut element = match start.chars().next() {
        Some('{') => argument_element(ctx, input)?,
        Some('<') if !ctx.options.ignore_tag && !start.starts_with("</") => {
            tag_element(ctx, input)?
        }
        Some('#') if ctx.in_plural => {
            '#'.parse_next(input)?;
            Element::pound()
        }
        _ => literal_element(ctx, input)?,
    };
    *element.location_mut() = ctx.location(start, input);
    Ok(element)
}

// =============================================================================
// Literal text
// =============================================================================

/// Parse a maximal run of literal text.
fn literal_element<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<Element> {
    let parts: Vec<String> =
        repeat(1.., |i: &mut &'s str| text_part(ctx, i)).parse_next(input)?;
    Ok(Element::literal(parts.concat()))
}

/// Parse one piece of literal text: `''`, a quoted run, plain text, or a lone `'`.
fn text_part<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<String> {
    alt((
        "''".value("'".to_string()),
        quoted_text,
        take_while(1.., move |c: char| c != '\'' && !ctx.is_trigger(c)).map(String::from),
        '\''.value("'".to_string()),
    ))
    .parse_next(input)
}

/// Parse a quoted run: `'` + a syntax character + text up to the next lone `'`.
///
/// The closing apostrophe may be omitted at end of input.
fn quoted_text(input: &mut &str) -> ModalResult<String> {
    '\''.parse_next(input)?;
    let first = one_of(['{', '}', '<', '>', '#']).parse_next(input)?;
    let rest: String = repeat(0.., alt(("''".value('\''), none_of('\'')))).parse_next(input)?;
    opt('\'').parse_next(input)?;

    let mut text = String::with_capacity(rest.len() + 1);
    text.push(first);
    text.push_str(&rest);
    Ok(text)
}

// =============================================================================
// Brace elements: {arg}, {arg, number}, {arg, plural, ...}
// =============================================================================

/// Parse any element that starts with `{`.
fn argument_element<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<Element> {
    let start = *input;
    '{'.parse_next(input)?;
    cut_err(|i: &mut &'s str| argument_body(ctx, start, i)).parse_next(input)
}

/// Parse the content after `{`: a name, then either `}` or a typed element.
fn argument_body<'s>(ctx: Ctx<'s>, start: &'s str, input: &mut &'s str) -> ModalResult<Element> {
    ws(input)?;
    let name = arg_name(input)?.to_string();
    ws(input)?;

    let has_format = alt(('}'.value(false), ','.value(true)))
        .context(expected('}'))
        .context(expected(','))
        .parse_next(input)?;
    if !has_format {
        return Ok(Element::argument(name));
    }

    ws(input)?;
    let keyword = alt((
        "number",
        "date",
        "time",
        "plural",
        "selectordinal",
        "select",
    ))
    .context(expected("number"))
    .context(expected("date"))
    .context(expected("time"))
    .context(expected("plural"))
    .context(expected("selectordinal"))
    .context(expected("select"))
    .parse_next(input)?;
    ws(input)?;

    match keyword {
        "number" => number_element(ctx, name, input),
        "date" => date_time_element(ctx, name, true, input),
        "time" => date_time_element(ctx, name, false, input),
        "plural" => plural_element(ctx, start, name, PluralType::Cardinal, input),
        "selectordinal" => plural_element(ctx, start, name, PluralType::Ordinal, input),
        _ => select_element(ctx, start, name, input),
    }
}

/// Parse the rest of `{name, number (, style)? }`.
fn number_element<'s>(ctx: Ctx<'s>, name: String, input: &mut &'s str) -> ModalResult<Element> {
    let style = if opt(',').parse_next(input)?.is_some() {
        ws(input)?;
        Some(number_style(ctx, input)?)
    } else {
        None
    };
    close_brace(input)?;
    Ok(Element::Number {
        value: name,
        style,
        location: None,
    })
}

/// Parse the rest of `{name, date|time (, style)? }`.
fn date_time_element<'s>(
    ctx: Ctx<'s>,
    name: String,
    is_date: bool,
    input: &mut &'s str,
) -> ModalResult<Element> {
    let style = if opt(',').parse_next(input)?.is_some() {
        ws(input)?;
        Some(date_time_style(ctx, input)?)
    } else {
        None
    };
    close_brace(input)?;
    Ok(if is_date {
        Element::Date {
            value: name,
            style,
            location: None,
        }
    } else {
        Element::Time {
            value: name,
            style,
            location: None,
        }
    })
}

/// Parse a number style: `::skeleton` or a preset name.
fn number_style<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<NumberStyle> {
    if opt("::").parse_next(input)?.is_none() {
        return free_style(input).map(NumberStyle::Named);
    }

    let start = *input;
    let tokens: Vec<NumberSkeletonToken> = repeat(1.., skeleton_token)
        .context(described("number skeleton"))
        .parse_next(input)?;
    let parsed_options = if ctx.options.should_parse_skeletons {
        match compile_number_skeleton(&tokens) {
            Ok(options) => Some(options),
            Err(source) => {
                let span = ctx.span(start, input);
                return Err(violation(
                    input,
                    Violation::InvalidSkeleton {
                        skeleton: ctx.source[span.0..span.1].trim().to_string(),
                        source,
                        span,
                    },
                ));
            }
        }
    } else {
        None
    };

    Ok(NumberStyle::Skeleton(NumberSkeleton {
        tokens,
        parsed_options,
        location: ctx.location(start, input),
    }))
}

/// Parse one skeleton token: `stem(/option)*`.
fn skeleton_token(input: &mut &str) -> ModalResult<NumberSkeletonToken> {
    ws(input)?;
    let stem = take_while(1.., is_skeleton_char).parse_next(input)?;
    let options: Vec<&str> =
        repeat(0.., preceded((ws, '/'), take_while(1.., is_skeleton_char))).parse_next(input)?;
    Ok(NumberSkeletonToken {
        stem: stem.to_string(),
        options: options.into_iter().map(String::from).collect(),
    })
}

/// Parse a date or time style: `::skeleton` or a preset name.
fn date_time_style<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<DateTimeStyle> {
    if opt("::").parse_next(input)?.is_none() {
        return free_style(input).map(DateTimeStyle::Named);
    }

    let start = *input;
    let pattern = style_text(input);
    if pattern.is_empty() {
        return fail.context(described("date-time skeleton")).parse_next(input);
    }
    let parsed_options = if ctx.options.should_parse_skeletons {
        match compile_date_time_skeleton(pattern) {
            Ok(options) => Some(options),
            Err(source) => {
                return Err(violation(
                    input,
                    Violation::InvalidSkeleton {
                        skeleton: pattern.to_string(),
                        source,
                        span: ctx.span(start, input),
                    },
                ));
            }
        }
    } else {
        None
    };

    Ok(DateTimeStyle::Skeleton(DateTimeSkeleton {
        pattern: pattern.to_string(),
        parsed_options,
        location: ctx.location(start, input),
    }))
}

/// Parse free-form style text, which must not be empty.
fn free_style(input: &mut &str) -> ModalResult<String> {
    let style = style_text(input);
    if style.is_empty() {
        return fail.context(described("argument style")).parse_next(input);
    }
    Ok(style.to_string())
}

/// Take the text up to the `}` that closes the current element, right-trimmed.
///
/// Nested braces and apostrophe-quoted runs are kept verbatim.
fn style_text<'s>(input: &mut &'s str) -> &'s str {
    let source = *input;
    let mut depth = 0_usize;
    let mut in_quote = false;
    let mut end = source.len();
    for (i, c) in source.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '{' if !in_quote => depth += 1,
            '}' if !in_quote => {
                if depth == 0 {
                    end = i;
                    break;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    let text = source[..end].trim_end();
    *input = &source[text.len()..];
    text
}

/// Parse the rest of a plural or selectordinal element.
fn plural_element<'s>(
    ctx: Ctx<'s>,
    start: &'s str,
    name: String,
    plural_type: PluralType,
    input: &mut &'s str,
) -> ModalResult<Element> {
    ','.context(expected(',')).parse_next(input)?;
    ws(input)?;
    let offset = opt(plural_offset).parse_next(input)?.unwrap_or(0);
    let entries = option_list(ctx.plural_option(), plural_selector, input)?;
    close_brace(input)?;
    let options = collect_options(ctx, start, input, "plural", entries)?;
    Ok(Element::Plural {
        value: name,
        plural_type,
        offset,
        options,
        location: None,
    })
}

/// Parse the rest of a select element.
fn select_element<'s>(
    ctx: Ctx<'s>,
    start: &'s str,
    name: String,
    input: &mut &'s str,
) -> ModalResult<Element> {
    ','.context(expected(',')).parse_next(input)?;
    ws(input)?;
    let entries = option_list(ctx.select_option(), arg_name, input)?;
    close_brace(input)?;
    let options = collect_options(ctx, start, input, "select", entries)?;
    Ok(Element::Select {
        value: name,
        options,
        location: None,
    })
}

/// Parse `offset: n`.
fn plural_offset(input: &mut &str) -> ModalResult<i64> {
    let offset = preceded(("offset", ws, ':', ws), signed_integer).parse_next(input)?;
    ws(input)?;
    Ok(offset)
}

/// Parse a plural selector: `=n` or a category name.
fn plural_selector<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    alt((('=', signed_integer).take(), arg_name)).parse_next(input)
}

type SelectorParser<'s> = fn(&mut &'s str) -> ModalResult<&'s str>;

/// Parse one or more `selector {message}` branches.
fn option_list<'s>(
    ctx: Ctx<'s>,
    selector: SelectorParser<'s>,
    input: &mut &'s str,
) -> ModalResult<Vec<(String, PluralOrSelectOption)>> {
    let entries: Vec<_> =
        repeat(0.., |i: &mut &'s str| option(ctx, selector, i)).parse_next(input)?;
    if entries.is_empty() {
        return fail.context(described("option")).parse_next(input);
    }
    Ok(entries)
}

/// Parse `selector {message}`. Once the selector matched the branch is committed.
fn option<'s>(
    ctx: Ctx<'s>,
    mut selector: SelectorParser<'s>,
    input: &mut &'s str,
) -> ModalResult<(String, PluralOrSelectOption)> {
    ws(input)?;
    let start = *input;
    let id = selector.parse_next(input)?;
    let value = cut_err(|i: &mut &'s str| -> ModalResult<Vec<Element>> {
        ws(i)?;
        '{'.context(expected('{')).parse_next(i)?;
        let value = message(ctx, i)?;
        '}'.context(expected('}')).parse_next(i)?;
        Ok(value)
    })
    .parse_next(input)?;
    Ok((
        id.to_string(),
        PluralOrSelectOption {
            value,
            location: ctx.location(start, input),
        },
    ))
}

/// Build the option map, rejecting a selector that appears twice.
fn collect_options<'s>(
    ctx: Ctx<'s>,
    start: &'s str,
    end: &'s str,
    kind: &'static str,
    entries: Vec<(String, PluralOrSelectOption)>,
) -> ModalResult<IndexMap<String, PluralOrSelectOption>> {
    let mut options = IndexMap::with_capacity(entries.len());
    for (selector, option) in entries {
        if options.contains_key(&selector) {
            let span = ctx.span(start, end);
            let text = ctx.source[span.0..span.1].to_string();
            return Err(violation(
                &end,
                Violation::DuplicateOption {
                    selector,
                    kind,
                    text,
                    span,
                },
            ));
        }
        options.insert(selector, option);
    }
    Ok(options)
}

// =============================================================================
// Tags
// =============================================================================

/// Parse `<name/>` (kept as literal text) or `<name>message</name>`.
fn tag_element<'s>(ctx: Ctx<'s>, input: &mut &'s str) -> ModalResult<Element> {
    let start = *input;
    '<'.parse_next(input)?;
    cut_err(|i: &mut &'s str| tag_body(ctx, start, i)).parse_next(input)
}

fn tag_body<'s>(ctx: Ctx<'s>, start: &'s str, input: &mut &'s str) -> ModalResult<Element> {
    ws(input)?;
    let name = tag_name(input)?;
    ws(input)?;

    if opt("/>").parse_next(input)?.is_some() {
        let raw = &start[..start.len() - input.len()];
        return Ok(Element::literal(raw));
    }
    '>'.context(expected('>'))
        .context(expected("/>"))
        .parse_next(input)?;

    let children = message(ctx.tag_body(), input)?;

    let close_start = *input;
    "</".context(expected("</")).parse_next(input)?;
    ws(input)?;
    let close = tag_name(input)?;
    ws(input)?;
    '>'.context(expected('>')).parse_next(input)?;
    if close != name {
        return Err(violation(
            input,
            Violation::MismatchedTag {
                open: name.to_string(),
                close: close.to_string(),
                span: ctx.span(close_start, input),
            },
        ));
    }

    Ok(Element::tag(name, children))
}

fn tag_name<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., is_tag_name_char)
        .context(described("tag name"))
        .parse_next(input)
}

// =============================================================================
// Tokens
// =============================================================================

/// Parse optional pattern white space.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., is_pattern_white_space)
        .void()
        .parse_next(input)
}

/// Parse an argument or selector name. Pure digit names are ordinary names.
fn arg_name<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., is_name_char)
        .context(described("argument name"))
        .parse_next(input)
}

fn signed_integer(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .context(described("integer"))
        .parse_next(input)
}

fn close_brace(input: &mut &str) -> ModalResult<()> {
    (ws, '}').void().context(expected('}')).parse_next(input)
}

/// An expected literal token, reported quoted.
fn expected(value: impl Into<StrContextValue>) -> StrContext {
    StrContext::Expected(value.into())
}

/// An expected construct, reported by name.
fn described(name: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(name))
}

/// A cut error carrying a semantic violation as its cause.
fn violation(input: &&str, violation: Violation) -> ErrMode<ContextError> {
    ErrMode::Cut(ContextError::from_external_error(input, violation))
}

// =============================================================================
// Error reporting
// =============================================================================

fn syntax_error(source: &str, remaining: &str, error: ErrMode<ContextError>) -> SyntaxError {
    let error = match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    if let Some(cause) = error.cause()
        && let Some(violation) = cause.downcast_ref::<Violation>()
    {
        let (start, end) = violation.span();
        return SyntaxError {
            message: violation.to_string(),
            expected: Vec::new(),
            found: None,
            location: location_between(source, start, end),
        };
    }

    let mut expected: Vec<String> = Vec::new();
    for context in error.context() {
        if let StrContext::Expected(value) = context {
            let text = match value {
                StrContextValue::CharLiteral(c) => format!("\"{c}\""),
                StrContextValue::StringLiteral(s) => format!("\"{s}\""),
                other => other.to_string(),
            };
            if !expected.contains(&text) {
                expected.push(text);
            }
        }
    }

    let found = remaining.chars().next().map(String::from);
    let message = match error.cause() {
        Some(cause) => cause.to_string(),
        None => describe(&expected, found.as_deref()),
    };
    let offset = source.len() - remaining.len();
    let end = offset + found.as_ref().map_or(0, String::len);
    SyntaxError {
        message,
        expected,
        found,
        location: location_between(source, offset, end),
    }
}

/// Input left over after the top-level message stopped.
fn trailing_input_error(source: &str, remaining: &str) -> SyntaxError {
    let found = remaining.chars().next().map(String::from);
    let expected = vec!["end of input".to_string()];
    let offset = source.len() - remaining.len();
    let end = offset + found.as_ref().map_or(0, String::len);
    SyntaxError {
        message: describe(&expected, found.as_deref()),
        expected,
        found,
        location: location_between(source, offset, end),
    }
}

fn describe(expected: &[String], found: Option<&str>) -> String {
    let expected = match expected {
        [] => "valid syntax".to_string(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    };
    let found = found.map_or_else(|| "end of input".to_string(), |f| format!("\"{f}\""));
    format!("Expected {expected} but {found} found.")
}
