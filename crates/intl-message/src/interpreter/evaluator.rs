//! Recursive AST walk producing output parts.

use chrono::{DateTime, NaiveDateTime};
use indexmap::IndexMap;

use super::context::{DateTimeKind, FormatContext};
use crate::interpreter::FormatError;
use crate::parser::{Element, PluralOrSelectOption, PluralType};
use crate::types::{NumberFormatOptions, Part, PluralRulesOptions, Value};

/// Append the parts of `elements` to `parts`.
///
/// `plural_value` is the offset-adjusted value of the innermost enclosing
/// plural element, rendered by `#`.
pub(crate) fn format_elements<T: Clone>(
    ctx: &FormatContext<'_, T>,
    elements: &[Element],
    plural_value: Option<f64>,
    parts: &mut Vec<Part<T>>,
) -> Result<(), FormatError> {
    for element in elements {
        format_element(ctx, element, plural_value, parts)?;
    }
    Ok(())
}

fn format_element<T: Clone>(
    ctx: &FormatContext<'_, T>,
    element: &Element,
    plural_value: Option<f64>,
    parts: &mut Vec<Part<T>>,
) -> Result<(), FormatError> {
    match element {
        Element::Literal { value, .. } => parts.push(Part::Literal(value.clone())),

        Element::Pound { .. } => {
            if let Some(n) = plural_value {
                let formatter = ctx
                    .formatters
                    .number_format(ctx.locales, &NumberFormatOptions::default());
                parts.push(Part::Literal(formatter.format(n)));
            }
        }

        Element::Argument { value: name, .. } => {
            let value = ctx.value(name)?;
            match value {
                Value::String(s) => parts.push(Part::Literal(s.clone())),
                Value::Number(_) | Value::Float(_) => {
                    parts.push(Part::Literal(value.to_string()));
                }
                Value::Date(date) => {
                    let formatter = ctx
                        .formatters
                        .date_time_format(ctx.locales, &Default::default());
                    parts.push(Part::Literal(formatter.format(date)));
                }
                Value::Object(object) => parts.push(Part::Object(object.clone())),
                Value::Tag(_) => {
                    return Err(ctx.invalid_type(name, "string, number, date or object", value));
                }
            }
        }

        Element::Number {
            value: name, style, ..
        } => {
            let value = ctx.value(name)?;
            let n = value
                .as_f64()
                .ok_or_else(|| ctx.invalid_type(name, "number", value))?;
            let options = ctx.number_options(style.as_ref())?;
            let formatter = ctx.formatters.number_format(ctx.locales, &options);
            parts.push(Part::Literal(formatter.format(n)));
        }

        Element::Date {
            value: name, style, ..
        } => {
            let options = ctx.date_time_options(DateTimeKind::Date, style.as_ref())?;
            let date = date_value(ctx, name)?;
            let formatter = ctx.formatters.date_time_format(ctx.locales, &options);
            parts.push(Part::Literal(formatter.format(&date)));
        }

        Element::Time {
            value: name, style, ..
        } => {
            let options = ctx.date_time_options(DateTimeKind::Time, style.as_ref())?;
            let date = date_value(ctx, name)?;
            let formatter = ctx.formatters.date_time_format(ctx.locales, &options);
            parts.push(Part::Literal(formatter.format(&date)));
        }

        Element::Tag {
            value: name,
            children,
            ..
        } => {
            let mut child_parts = Vec::new();
            format_elements(ctx, children, plural_value, &mut child_parts)?;
            let value = ctx.value(name)?;
            let Value::Tag(callback) = value else {
                return Err(ctx.invalid_type(name, "function", value));
            };
            parts.extend(callback(merge_literals(child_parts)));
        }

        Element::Select {
            value: name,
            options,
            ..
        } => {
            let value = ctx.value(name)?;
            let key = value.to_string();
            let option = options.get(&key).or_else(|| {
                tracing::trace!(variable = %name, value = %key, "no select branch, trying other");
                options.get("other")
            });
            let option = option.ok_or_else(|| invalid_value(ctx, name, key, options))?;
            format_elements(ctx, &option.value, None, parts)?;
        }

        Element::Plural {
            value: name,
            plural_type,
            offset,
            options,
            ..
        } => {
            let value = ctx.value(name)?;
            let n = value
                .as_f64()
                .ok_or_else(|| ctx.invalid_type(name, "number", value))?;
            let adjusted = n - *offset as f64;

            let option = match options.get(&format!("={}", number_key(n))) {
                Some(exact) => exact,
                None => {
                    let rules = ctx
                        .formatters
                        .plural_rules(
                            ctx.locales,
                            PluralRulesOptions {
                                plural_type: *plural_type,
                            },
                        )
                        .ok_or_else(|| FormatError::MissingCapability {
                            original_message: ctx.original_message(),
                        })?;
                    let category = rules.select(adjusted).as_str();
                    tracing::trace!(
                        variable = %name,
                        value = n,
                        category,
                        ordinal = *plural_type == PluralType::Ordinal,
                        "selected plural category"
                    );
                    options
                        .get(category)
                        .or_else(|| options.get("other"))
                        .ok_or_else(|| invalid_value(ctx, name, number_key(n), options))?
                }
            };
            format_elements(ctx, &option.value, Some(adjusted), parts)?;
        }
    }
    Ok(())
}

/// Interpret a value bound to a date or time element.
///
/// Numbers are milliseconds since the Unix epoch, in UTC.
fn date_value<T>(ctx: &FormatContext<'_, T>, name: &str) -> Result<NaiveDateTime, FormatError> {
    let value = ctx.value(name)?;
    let millis = match value {
        Value::Date(date) => return Ok(*date),
        Value::Number(n) => Some(*n),
        Value::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Value::Float(_) | Value::String(_) | Value::Object(_) | Value::Tag(_) => None,
    };
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|date| date.naive_utc())
        .ok_or_else(|| ctx.invalid_type(name, "date", value))
}

fn invalid_value<T>(
    ctx: &FormatContext<'_, T>,
    name: &str,
    value: String,
    options: &IndexMap<String, PluralOrSelectOption>,
) -> FormatError {
    FormatError::InvalidValue {
        variable: name.to_string(),
        value,
        options: options.keys().cloned().collect(),
        original_message: ctx.original_message(),
    }
}

/// The text of `n` as it appears in an exact `=n` selector.
fn number_key(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Join runs of adjacent literal parts.
pub(crate) fn merge_literals<T>(parts: Vec<Part<T>>) -> Vec<Part<T>> {
    let mut merged: Vec<Part<T>> = Vec::with_capacity(parts.len());
    for part in parts {
        match (merged.last_mut(), part) {
            (Some(Part::Literal(last)), Part::Literal(text)) => last.push_str(&text),
            (_, part) => merged.push(part),
        }
    }
    merged
}
