//! Hashtag normalization for plural and select branches.
//!
//! An AST built by other tooling may leave `#` as plain text inside a
//! branch. This pass turns every unescaped `#` into `{arg, number}` where
//! `arg` is the enclosing element's argument, so the value is formatted
//! the same way a parsed `#` would be.

use super::ast::Element;
use super::error::SyntaxError;
use super::message::{ParserOptions, parse};
use super::printer::escape_literal;

/// Rewrite bare `#` characters in option literals, recursively.
///
/// A `#` preceded by `\` is left alone.
///
/// # Example
///
/// ```
/// use intl_message::parser::{
///     Element, PluralOrSelectOption, normalize_hashtag_in_plural, print_ast,
/// };
///
/// let mut ast = vec![Element::Select {
///     value: "n".to_string(),
///     options: [(
///         "other".to_string(),
///         PluralOrSelectOption::new(vec![Element::literal("# items")]),
///     )]
///     .into_iter()
///     .collect(),
///     location: None,
/// }];
/// normalize_hashtag_in_plural(&mut ast).unwrap();
/// assert_eq!(print_ast(&ast), "{n, select, other {{n, number} items}}");
/// ```
pub fn normalize_hashtag_in_plural(elements: &mut [Element]) -> Result<(), SyntaxError> {
    for element in elements {
        match element {
            Element::Plural { value, options, .. } | Element::Select { value, options, .. } => {
                for option in options.values_mut() {
                    while rewrite_first_hash_literal(value, &mut option.value)? {}
                    normalize_hashtag_in_plural(&mut option.value)?;
                }
            }
            Element::Tag { children, .. } => normalize_hashtag_in_plural(children)?,
            Element::Literal { .. }
            | Element::Argument { .. }
            | Element::Number { .. }
            | Element::Date { .. }
            | Element::Time { .. }
            | Element::Pound { .. } => {}
        }
    }
    Ok(())
}

/// Replace the first literal holding an unescaped `#` with its re-parsed
/// expansion. Returns `false` when there was nothing left to rewrite.
fn rewrite_first_hash_literal(
    argument: &str,
    elements: &mut Vec<Element>,
) -> Result<bool, SyntaxError> {
    let found = elements
        .iter()
        .enumerate()
        .find_map(|(index, element)| match element {
            Element::Literal { value, .. } if has_unescaped_hash(value) => {
                Some((index, value.clone()))
            }
            _ => None,
        });
    let Some((index, text)) = found else {
        return Ok(false);
    };

    let pattern = substitute_hashes(&text, argument);
    tracing::trace!(argument, %pattern, "normalizing hashtag literal");
    let replacement = parse(&pattern, &ParserOptions::default())?;
    elements.splice(index..=index, replacement);
    Ok(true)
}

fn has_unescaped_hash(text: &str) -> bool {
    let mut previous = None;
    for c in text.chars() {
        if c == '#' && previous != Some('\\') {
            return true;
        }
        previous = Some(c);
    }
    false
}

/// Build a pattern where each unescaped `#` becomes `{argument, number}` and
/// the surrounding text is escaped so it re-parses as literal text.
fn substitute_hashes(text: &str, argument: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + argument.len() + 10);
    let mut pending = String::new();
    let mut previous = None;
    for c in text.chars() {
        if c == '#' && previous != Some('\\') {
            pattern.push_str(&escape_literal(&pending, false));
            pending.clear();
            pattern.push('{');
            pattern.push_str(argument);
            pattern.push_str(", number}");
        } else {
            pending.push(c);
        }
        previous = Some(c);
    }
    pattern.push_str(&escape_literal(&pending, false));
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_hash_is_not_substituted() {
        assert!(!has_unescaped_hash(r"only \# here"));
        assert!(has_unescaped_hash("# at start"));
        assert_eq!(
            substitute_hashes(r"# and \# {x}", "n"),
            r"{n, number} and \# '{x}'"
        );
    }
}
