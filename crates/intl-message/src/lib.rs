pub mod cache;
pub mod interpreter;
pub mod message_format;
pub mod parser;
pub mod provider;
pub mod skeleton;
pub mod types;

pub use cache::{FormatterCache, Formatters};
pub use interpreter::{FormatError, format_to_parts};
pub use message_format::{MessageFormat, MessageFormatOptions, MessageSource, ResolvedOptions};
pub use parser::{
    Element, ParserOptions, SyntaxError, normalize_hashtag_in_plural, parse, print_ast,
};
pub use provider::{
    BasicFormatterProvider, DateTimeFormatter, FormatterProvider, NumberFormatter,
    PluralCategory, PluralRules,
};
pub use skeleton::{RangeError, compile_date_time_skeleton, compile_number_skeleton};
pub use types::{
    DateTimeFormatOptions, Formats, Formatted, NumberFormatOptions, Part, Value, Values,
};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or dates directly.
///
/// # Example
///
/// ```
/// use intl_message::{Value, params};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_f64(), Some(3.0));
/// assert_eq!(p["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
