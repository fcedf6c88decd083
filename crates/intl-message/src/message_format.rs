//! User-facing message formatting.

use std::rc::Rc;

use bon::Builder;

use crate::cache::{FormatterCache, Formatters};
use crate::interpreter::{self, FormatError};
use crate::parser::{Element, ParserOptions, SyntaxError, parse};
use crate::provider::{BasicFormatterProvider, DEFAULT_LOCALE, FormatterProvider};
use crate::types::{Formats, Formatted, Part, Values};

/// Construction options for [`MessageFormat`].
///
/// # Example
///
/// ```
/// use std::rc::Rc;
///
/// use intl_message::cache::FormatterCache;
/// use intl_message::{MessageFormat, MessageFormatOptions, params};
///
/// let cache = Rc::new(FormatterCache::new());
/// let options = MessageFormatOptions::builder()
///     .locales(vec!["en-GB".to_string()])
///     .cache(Rc::clone(&cache))
///     .build();
/// let message = MessageFormat::with_options("{n, number, percent}", options).unwrap();
///
/// let text = message.format(&params! { "n" => 0.5 }).unwrap();
/// assert_eq!(text.as_text(), Some("50%"));
/// assert_eq!(cache.number_formatters(), 1);
/// ```
#[derive(Builder, Clone)]
pub struct MessageFormatOptions {
    /// Requested locales, most preferred first.
    #[builder(default = vec![DEFAULT_LOCALE.to_string()])]
    pub locales: Vec<String>,

    /// Preset overrides, merged over the default presets field by field.
    #[builder(default = Formats::empty())]
    pub formats: Formats,

    /// Formatter factory. Defaults to [`BasicFormatterProvider`].
    pub provider: Option<Rc<dyn FormatterProvider>>,

    /// Formatter cache, possibly shared with other messages.
    pub cache: Option<Rc<FormatterCache>>,

    /// Treat `<` and `>` as plain text.
    #[builder(default)]
    pub ignore_tag: bool,
}

impl Default for MessageFormatOptions {
    fn default() -> Self {
        MessageFormatOptions::builder().build()
    }
}

/// A message to format: pattern text or a pre-built AST.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageSource {
    Pattern(String),
    Ast(Vec<Element>),
}

impl From<&str> for MessageSource {
    fn from(pattern: &str) -> Self {
        MessageSource::Pattern(pattern.to_string())
    }
}

impl From<String> for MessageSource {
    fn from(pattern: String) -> Self {
        MessageSource::Pattern(pattern)
    }
}

impl From<Vec<Element>> for MessageSource {
    fn from(ast: Vec<Element>) -> Self {
        MessageSource::Ast(ast)
    }
}

/// Options actually in effect for a [`MessageFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub locale: String,
}

/// A compiled message bound to locales, presets and a formatter cache.
///
/// The AST is built once and reused by every call to [`format`](Self::format).
///
/// # Example
///
/// ```
/// use intl_message::{MessageFormat, params};
///
/// let message = MessageFormat::new(
///     "I have {count, plural, one {# item} other {# items}}",
///     "en",
/// )
/// .unwrap();
///
/// let one = message.format(&params! { "count" => 1 }).unwrap();
/// assert_eq!(one.as_text(), Some("I have 1 item"));
///
/// let many = message.format(&params! { "count" => 5 }).unwrap();
/// assert_eq!(many.as_text(), Some("I have 5 items"));
/// ```
pub struct MessageFormat {
    ast: Vec<Element>,
    /// Pattern text, when built from a string. Reported in format errors.
    message: Option<String>,
    locales: Vec<String>,
    formats: Formats,
    provider: Rc<dyn FormatterProvider>,
    cache: Rc<FormatterCache>,
}

impl MessageFormat {
    /// Parse `pattern` for a single locale with default options.
    pub fn new(pattern: &str, locale: impl Into<String>) -> Result<Self, SyntaxError> {
        let options = MessageFormatOptions::builder()
            .locales(vec![locale.into()])
            .build();
        Self::with_options(pattern, options)
    }

    /// Build a message from a pattern or AST.
    ///
    /// Skeletons in a pattern are compiled immediately, so an unsupported
    /// skeleton is reported here rather than at format time.
    pub fn with_options(
        source: impl Into<MessageSource>,
        options: MessageFormatOptions,
    ) -> Result<Self, SyntaxError> {
        let parser_options = ParserOptions {
            ignore_tag: options.ignore_tag,
            should_parse_skeletons: true,
            ..ParserOptions::default()
        };
        let (ast, message) = match source.into() {
            MessageSource::Pattern(pattern) => (parse(&pattern, &parser_options)?, Some(pattern)),
            MessageSource::Ast(ast) => (ast, None),
        };

        let locales = if options.locales.is_empty() {
            vec![DEFAULT_LOCALE.to_string()]
        } else {
            options.locales
        };
        let formats = Formats::default().merged_with(&options.formats);
        let provider: Rc<dyn FormatterProvider> = match options.provider {
            Some(provider) => provider,
            None => Rc::new(BasicFormatterProvider),
        };
        let cache = options.cache.unwrap_or_default();

        tracing::debug!(?locales, elements = ast.len(), "created message format");
        Ok(Self {
            ast,
            message,
            locales,
            formats,
            provider,
            cache,
        })
    }

    /// Format with `values`, joining the output into a string when it
    /// contains no host objects.
    pub fn format<T: Clone>(&self, values: &Values<T>) -> Result<Formatted<T>, FormatError> {
        interpreter::format(
            &self.ast,
            &self.locales,
            &self.formatters(),
            &self.formats,
            values,
            self.message.as_deref(),
        )
    }

    /// Format with `values` into ordered parts.
    pub fn format_to_parts<T: Clone>(
        &self,
        values: &Values<T>,
    ) -> Result<Vec<Part<T>>, FormatError> {
        interpreter::format_to_parts(
            &self.ast,
            &self.locales,
            &self.formatters(),
            &self.formats,
            values,
            None,
            self.message.as_deref(),
        )
    }

    pub fn resolved_options(&self) -> ResolvedOptions {
        ResolvedOptions {
            locale: self.provider.resolve_locale(&self.locales),
        }
    }

    pub fn ast(&self) -> &[Element] {
        &self.ast
    }

    /// The merged presets in effect.
    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn cache(&self) -> &Rc<FormatterCache> {
        &self.cache
    }

    fn formatters(&self) -> Formatters<'_> {
        Formatters::new(self.provider.as_ref(), &self.cache)
    }
}
