//! Public AST types for ICU message patterns.
//!
//! These types are public to enable external tooling (extractors, linters,
//! precompilers). They serialize to the `type`-tagged JSON shape used by
//! other ICU message tooling, so a pre-parsed AST can be shipped as data and
//! handed straight to [`MessageFormat`](crate::MessageFormat).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{DateTimeFormatOptions, NumberFormatOptions};

/// A position in the source pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the pattern.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

/// A source span, start inclusive and end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// A single element of a parsed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Element {
    /// Plain text, already unescaped.
    Literal {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// A bare `{name}` substitution.
    Argument {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `{name, number}` with an optional named style or skeleton.
    Number {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<NumberStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `{name, date}` with an optional named style or skeleton.
    Date {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<DateTimeStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `{name, time}` with an optional named style or skeleton.
    Time {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<DateTimeStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `#` inside a plural branch: the offset-adjusted plural value.
    Pound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `<name>children</name>` rich-text markup.
    Tag {
        value: String,
        children: Vec<Element>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `{name, plural, ...}` or `{name, selectordinal, ...}`.
    Plural {
        value: String,
        plural_type: PluralType,
        #[serde(default)]
        offset: i64,
        options: IndexMap<String, PluralOrSelectOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
    /// `{name, select, ...}`.
    Select {
        value: String,
        options: IndexMap<String, PluralOrSelectOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
}

impl Element {
    /// Creates a literal element without location.
    pub fn literal(value: impl Into<String>) -> Self {
        Element::Literal {
            value: value.into(),
            location: None,
        }
    }

    /// Creates an argument element without location.
    pub fn argument(value: impl Into<String>) -> Self {
        Element::Argument {
            value: value.into(),
            location: None,
        }
    }

    /// Creates a number element without location.
    pub fn number(value: impl Into<String>, style: Option<NumberStyle>) -> Self {
        Element::Number {
            value: value.into(),
            style,
            location: None,
        }
    }

    /// Creates a pound element without location.
    pub fn pound() -> Self {
        Element::Pound { location: None }
    }

    /// Creates a tag element without location.
    pub fn tag(value: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Tag {
            value: value.into(),
            children,
            location: None,
        }
    }

    /// Returns the source span, if it was captured.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Element::Literal { location, .. }
            | Element::Argument { location, .. }
            | Element::Number { location, .. }
            | Element::Date { location, .. }
            | Element::Time { location, .. }
            | Element::Pound { location }
            | Element::Tag { location, .. }
            | Element::Plural { location, .. }
            | Element::Select { location, .. } => location.as_ref(),
        }
    }

    pub(crate) fn location_mut(&mut self) -> &mut Option<Location> {
        match self {
            Element::Literal { location, .. }
            | Element::Argument { location, .. }
            | Element::Number { location, .. }
            | Element::Date { location, .. }
            | Element::Time { location, .. }
            | Element::Pound { location }
            | Element::Tag { location, .. }
            | Element::Plural { location, .. }
            | Element::Select { location, .. } => location,
        }
    }

    /// Returns a copy of this element with every location removed, recursively.
    pub fn without_location(&self) -> Element {
        let mut element = self.clone();
        element.strip_location();
        element
    }

    fn strip_location(&mut self) {
        match self {
            Element::Literal { location, .. }
            | Element::Argument { location, .. }
            | Element::Pound { location } => *location = None,
            Element::Number {
                style, location, ..
            } => {
                *location = None;
                if let Some(NumberStyle::Skeleton(skeleton)) = style {
                    skeleton.location = None;
                }
            }
            Element::Date {
                style, location, ..
            }
            | Element::Time {
                style, location, ..
            } => {
                *location = None;
                if let Some(DateTimeStyle::Skeleton(skeleton)) = style {
                    skeleton.location = None;
                }
            }
            Element::Tag {
                children, location, ..
            } => {
                *location = None;
                for child in children {
                    child.strip_location();
                }
            }
            Element::Plural {
                options, location, ..
            }
            | Element::Select {
                options, location, ..
            } => {
                *location = None;
                for option in options.values_mut() {
                    option.location = None;
                    for element in &mut option.value {
                        element.strip_location();
                    }
                }
            }
        }
    }
}

/// Whether a plural element selects by cardinal or ordinal rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PluralType {
    /// `plural`: one item, two items.
    #[default]
    Cardinal,
    /// `selectordinal`: 1st, 2nd, 3rd.
    Ordinal,
}

/// The body of one plural or select branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluralOrSelectOption {
    pub value: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl PluralOrSelectOption {
    /// Creates an option branch without location.
    pub fn new(value: Vec<Element>) -> Self {
        Self {
            value,
            location: None,
        }
    }
}

/// The style slot of a `{name, number, style}` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberStyle {
    /// `::currency/EUR` style skeleton.
    Skeleton(NumberSkeleton),
    /// A preset name such as `percent`, resolved against the format presets.
    Named(String),
}

/// The style slot of a `{name, date|time, style}` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateTimeStyle {
    /// `::yyyyMMMd` style skeleton.
    Skeleton(DateTimeSkeleton),
    /// A preset name such as `short`, resolved against the format presets.
    Named(String),
}

/// One whitespace-separated token of a number skeleton: `stem/opt1/opt2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberSkeletonToken {
    pub stem: String,
    pub options: Vec<String>,
}

impl NumberSkeletonToken {
    pub fn new(stem: impl Into<String>, options: &[&str]) -> Self {
        Self {
            stem: stem.into(),
            options: options.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSkeleton {
    pub tokens: Vec<NumberSkeletonToken>,
    /// Options compiled at parse time when `should_parse_skeletons` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_options: Option<NumberFormatOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeSkeleton {
    pub pattern: String,
    /// Options compiled at parse time when `should_parse_skeletons` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_options: Option<DateTimeFormatOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}
