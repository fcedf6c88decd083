//! Message interpreter.
//!
//! This module walks a parsed AST against runtime values and produces an
//! ordered list of output parts. Number, date and plural formatting is
//! delegated to formatters obtained through the [`Formatters`] cache.

mod context;
mod error;
mod evaluator;

pub use error::FormatError;

use crate::cache::Formatters;
use crate::parser::Element;
use crate::types::{Formats, Formatted, Part, Values};

use context::FormatContext;
use evaluator::{format_elements, merge_literals};

/// Format `elements` into parts.
///
/// Adjacent literal parts are merged, so a message without host objects
/// yields at most one part.
///
/// # Example
///
/// ```
/// use intl_message::cache::{FormatterCache, Formatters};
/// use intl_message::interpreter::format_to_parts;
/// use intl_message::parser::{ParserOptions, parse};
/// use intl_message::provider::BasicFormatterProvider;
/// use intl_message::{Formats, Part, params};
///
/// let ast = parse("{count, plural, one {# file} other {# files}}", &ParserOptions::default()).unwrap();
/// let cache = FormatterCache::new();
/// let formatters = Formatters::new(&BasicFormatterProvider, &cache);
/// let parts = format_to_parts(
///     &ast,
///     &["en".to_string()],
///     &formatters,
///     &Formats::default(),
///     &params! { "count" => 3 },
///     None,
///     None,
/// )
/// .unwrap();
/// assert_eq!(parts, vec![Part::literal("3 files")]);
/// ```
pub fn format_to_parts<T: Clone>(
    elements: &[Element],
    locales: &[String],
    formatters: &Formatters<'_>,
    formats: &Formats,
    values: &Values<T>,
    current_plural_value: Option<f64>,
    original_message: Option<&str>,
) -> Result<Vec<Part<T>>, FormatError> {
    if let [Element::Literal { value, .. }] = elements {
        return Ok(vec![Part::Literal(value.clone())]);
    }

    let ctx = FormatContext {
        locales,
        formatters,
        formats,
        values,
        original_message,
    };
    let mut parts = Vec::new();
    format_elements(&ctx, elements, current_plural_value, &mut parts)?;
    Ok(merge_literals(parts))
}

/// Format `elements`, joining the result into one string when it holds no
/// host objects.
pub fn format<T: Clone>(
    elements: &[Element],
    locales: &[String],
    formatters: &Formatters<'_>,
    formats: &Formats,
    values: &Values<T>,
    original_message: Option<&str>,
) -> Result<Formatted<T>, FormatError> {
    let parts = format_to_parts(
        elements,
        locales,
        formatters,
        formats,
        values,
        None,
        original_message,
    )?;
    Ok(Formatted::from_parts(parts))
}
