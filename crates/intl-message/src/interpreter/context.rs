//! Formatting context shared by every level of the recursive walk.

use crate::cache::Formatters;
use crate::interpreter::FormatError;
use crate::parser::{DateTimeStyle, NumberStyle};
use crate::skeleton::{compile_date_time_skeleton, compile_number_skeleton};
use crate::types::{DateTimeFormatOptions, Formats, NumberFormatOptions, Value, Values};

/// Which preset table a date-time style resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateTimeKind {
    Date,
    Time,
}

/// Read-only state for one `format_to_parts` call.
///
/// The only per-branch state, the current plural value, is passed alongside
/// the context rather than stored in it.
pub(crate) struct FormatContext<'a, T> {
    pub(crate) locales: &'a [String],
    pub(crate) formatters: &'a Formatters<'a>,
    pub(crate) formats: &'a Formats,
    pub(crate) values: &'a Values<T>,
    pub(crate) original_message: Option<&'a str>,
}

impl<'a, T> FormatContext<'a, T> {
    /// Look up a value by argument name.
    pub(crate) fn value(&self, name: &str) -> Result<&'a Value<T>, FormatError> {
        self.values
            .get(name)
            .ok_or_else(|| FormatError::MissingValue {
                variable: name.to_string(),
                original_message: self.original_message(),
            })
    }

    pub(crate) fn original_message(&self) -> Option<String> {
        self.original_message.map(str::to_string)
    }

    pub(crate) fn invalid_type(
        &self,
        variable: &str,
        expected: &'static str,
        value: &Value<T>,
    ) -> FormatError {
        FormatError::InvalidValueType {
            variable: variable.to_string(),
            expected,
            found: value.kind(),
            original_message: self.original_message(),
        }
    }

    /// Resolve a number style to formatter options.
    ///
    /// Unknown preset names fall back to default options.
    pub(crate) fn number_options(
        &self,
        style: Option<&NumberStyle>,
    ) -> Result<NumberFormatOptions, FormatError> {
        match style {
            None => Ok(NumberFormatOptions::default()),
            Some(NumberStyle::Named(name)) => Ok(match self.formats.number.get(name) {
                Some(options) => options.clone(),
                None => {
                    tracing::debug!(preset = %name, "unknown number preset, using defaults");
                    NumberFormatOptions::default()
                }
            }),
            Some(NumberStyle::Skeleton(skeleton)) => match &skeleton.parsed_options {
                Some(options) => Ok(options.clone()),
                None => Ok(compile_number_skeleton(&skeleton.tokens)?),
            },
        }
    }

    /// Resolve a date or time style to formatter options.
    ///
    /// A time element without a style uses the `medium` time preset.
    pub(crate) fn date_time_options(
        &self,
        kind: DateTimeKind,
        style: Option<&DateTimeStyle>,
    ) -> Result<DateTimeFormatOptions, FormatError> {
        let presets = match kind {
            DateTimeKind::Date => &self.formats.date,
            DateTimeKind::Time => &self.formats.time,
        };
        match style {
            None if kind == DateTimeKind::Time => {
                Ok(presets.get("medium").cloned().unwrap_or_default())
            }
            None => Ok(DateTimeFormatOptions::default()),
            Some(DateTimeStyle::Named(name)) => Ok(match presets.get(name) {
                Some(options) => options.clone(),
                None => {
                    tracing::debug!(preset = %name, ?kind, "unknown date-time preset, using defaults");
                    DateTimeFormatOptions::default()
                }
            }),
            Some(DateTimeStyle::Skeleton(skeleton)) => match &skeleton.parsed_options {
                Some(options) => Ok(options.clone()),
                None => Ok(compile_date_time_skeleton(&skeleton.pattern)?),
            },
        }
    }
}
