use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use chrono::NaiveDateTime;

use super::Part;

/// A rich-text tag callback.
///
/// Receives the formatted children of `<tag>...</tag>` and returns the chunks
/// to emit in their place.
pub type TagFn<T> = Rc<dyn Fn(Vec<Part<T>>) -> Vec<Part<T>>>;

/// Runtime values keyed by argument name.
pub type Values<T = ()> = HashMap<String, Value<T>>;

/// A runtime value that can be passed as a message argument.
///
/// `T` is the type of host objects that may be embedded in the output (for
/// example UI nodes). Messages that only produce text use the default `()`.
///
/// # Example
///
/// ```
/// use intl_message::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// assert_eq!(count.as_f64(), Some(42.0));
/// assert_eq!(name.to_string(), "Alice");
/// ```
#[derive(Clone)]
pub enum Value<T = ()> {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A calendar date and wall-clock time.
    Date(NaiveDateTime),

    /// An opaque host object, passed through to the output unchanged.
    Object(T),

    /// A callback bound to a rich-text tag.
    Tag(TagFn<T>),
}

impl<T> Value<T> {
    /// Wraps a closure as a tag callback.
    pub fn tag(f: impl Fn(Vec<Part<T>>) -> Vec<Part<T>> + 'static) -> Self {
        Value::Tag(Rc::new(f))
    }

    /// Numeric view of this value.
    ///
    /// Strings holding a number are coerced; other kinds return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.trim().parse().ok(),
            Value::Date(_) | Value::Object(_) | Value::Tag(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Object(_) => "object",
            Value::Tag(_) => "function",
        }
    }
}

impl<T> Display for Value<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write_float(f, *n),
            Value::String(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Object(_) => write!(f, "[object]"),
            Value::Tag(_) => write!(f, "[function]"),
        }
    }
}

/// Shortest round-trip text, in exponent form (`1e+21`, `1.5e-7`) outside
/// `1e-6..1e21`.
fn write_float(f: &mut Formatter<'_>, n: f64) -> FmtResult {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n < 0.0 { "-Infinity" } else { "Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return write!(f, "{n}");
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&text),
    }
}

impl<T: Debug> Debug for Value<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
            Value::Tag(_) => f.write_str("Tag(..)"),
        }
    }
}

impl<T> From<i32> for Value<T> {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl<T> From<i64> for Value<T> {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl<T> From<u32> for Value<T> {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl<T> From<usize> for Value<T> {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<f32> for Value<T> {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl<T> From<f64> for Value<T> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T> From<NaiveDateTime> for Value<T> {
    fn from(d: NaiveDateTime) -> Self {
        Value::Date(d)
    }
}
