//! Prints an AST back to message syntax.

use super::ast::{
    DateTimeStyle, Element, NumberSkeletonToken, NumberStyle, PluralOrSelectOption, PluralType,
};
use indexmap::IndexMap;

/// Print elements as a pattern that parses back to an equivalent AST.
///
/// Literal text is re-escaped; locations are not represented.
pub fn print_ast(elements: &[Element]) -> String {
    let mut out = String::new();
    print_elements(elements, false, &mut out);
    out
}

fn print_elements(elements: &[Element], in_plural: bool, out: &mut String) {
    for element in elements {
        match element {
            Element::Literal { value, .. } => out.push_str(&escape_literal(value, in_plural)),
            Element::Argument { value, .. } => {
                out.push_str(&format!("{{{value}}}"));
            }
            Element::Number { value, style, .. } => {
                out.push_str(&format!("{{{value}, number"));
                match style {
                    Some(NumberStyle::Skeleton(skeleton)) => {
                        out.push_str(", ::");
                        out.push_str(&print_number_skeleton(&skeleton.tokens));
                    }
                    Some(NumberStyle::Named(name)) => {
                        out.push_str(&format!(", {name}"));
                    }
                    None => {}
                }
                out.push('}');
            }
            Element::Date { value, style, .. } => print_date_time(value, "date", style.as_ref(), out),
            Element::Time { value, style, .. } => print_date_time(value, "time", style.as_ref(), out),
            Element::Pound { .. } => out.push('#'),
            Element::Tag {
                value, children, ..
            } => {
                out.push_str(&format!("<{value}>"));
                print_elements(children, in_plural, out);
                out.push_str(&format!("</{value}>"));
            }
            Element::Plural {
                value,
                plural_type,
                offset,
                options,
                ..
            } => {
                let keyword = match plural_type {
                    PluralType::Cardinal => "plural",
                    PluralType::Ordinal => "selectordinal",
                };
                out.push_str(&format!("{{{value}, {keyword}, "));
                if *offset != 0 {
                    out.push_str(&format!("offset:{offset} "));
                }
                print_options(options, true, out);
                out.push('}');
            }
            Element::Select { value, options, .. } => {
                out.push_str(&format!("{{{value}, select, "));
                print_options(options, false, out);
                out.push('}');
            }
        }
    }
}

fn print_date_time(value: &str, keyword: &str, style: Option<&DateTimeStyle>, out: &mut String) {
    out.push_str(&format!("{{{value}, {keyword}"));
    match style {
        Some(DateTimeStyle::Skeleton(skeleton)) => {
            out.push_str(&format!(", ::{}", skeleton.pattern));
        }
        Some(DateTimeStyle::Named(name)) => {
            out.push_str(&format!(", {name}"));
        }
        None => {}
    }
    out.push('}');
}

fn print_options(
    options: &IndexMap<String, PluralOrSelectOption>,
    in_plural: bool,
    out: &mut String,
) {
    for (index, (selector, option)) in options.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{selector} {{"));
        print_elements(&option.value, in_plural, out);
        out.push('}');
    }
}

fn print_number_skeleton(tokens: &[NumberSkeletonToken]) -> String {
    tokens
        .iter()
        .map(|token| {
            let mut text = token.stem.clone();
            for option in &token.options {
                text.push('/');
                text.push_str(option);
            }
            text
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape literal text so it parses back unchanged.
///
/// Apostrophes are doubled. Everything from the first syntax character on
/// is wrapped in one quoted run.
pub(crate) fn escape_literal(text: &str, in_plural: bool) -> String {
    let is_special = |c: char| matches!(c, '{' | '}' | '<' | '>') || (in_plural && c == '#');
    let Some(first) = text.find(is_special) else {
        return text.replace('\'', "''");
    };
    let (plain, quoted) = text.split_at(first);
    format!(
        "{}'{}'",
        plain.replace('\'', "''"),
        quoted.replace('\'', "''")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_literal_quotes_from_first_syntax_character() {
        assert_eq!(escape_literal("it's", false), "it''s");
        assert_eq!(escape_literal("a {b} c", false), "a '{b} c'");
        assert_eq!(escape_literal("# left", false), "# left");
        assert_eq!(escape_literal("# left", true), "'# left'");
    }
}
