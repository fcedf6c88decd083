//! Error types for message formatting.

use thiserror::Error;

use crate::skeleton::RangeError;

/// An error that occurred while formatting a message.
///
/// Formatting stops at the first error; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A referenced argument or tag callback is absent from the values.
    #[error(
        "The intl string context variable \"{variable}\" was not provided to the string{}",
        quoted(original_message)
    )]
    MissingValue {
        variable: String,
        original_message: Option<String>,
    },

    /// No branch matches the value and there is no `other` branch.
    #[error(
        "Invalid values for \"{variable}\": \"{value}\". Options are \"{}\"",
        options.join("\", \"")
    )]
    InvalidValue {
        variable: String,
        value: String,
        options: Vec<String>,
        original_message: Option<String>,
    },

    /// A value of the wrong kind was bound to an argument or tag.
    #[error(
        "Value for \"{variable}\" must be of type {expected}, got {found}{}",
        in_string(original_message)
    )]
    InvalidValueType {
        variable: String,
        expected: &'static str,
        found: &'static str,
        original_message: Option<String>,
    },

    /// A plural element was formatted but the provider has no plural rules.
    #[error("Plural rules are not available to format the string{}", quoted(original_message))]
    MissingCapability { original_message: Option<String> },

    /// A skeleton compiled lazily at format time was rejected.
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl FormatError {
    /// The message pattern being formatted, when known.
    pub fn original_message(&self) -> Option<&str> {
        match self {
            FormatError::MissingValue {
                original_message, ..
            }
            | FormatError::InvalidValue {
                original_message, ..
            }
            | FormatError::InvalidValueType {
                original_message, ..
            }
            | FormatError::MissingCapability { original_message } => original_message.as_deref(),
            FormatError::Range(_) => None,
        }
    }
}

fn quoted(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(" \"{message}\""))
        .unwrap_or_default()
}

fn in_string(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(" in the string \"{message}\""))
        .unwrap_or_default()
}
