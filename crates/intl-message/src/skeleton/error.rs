//! Skeleton compilation errors.

use thiserror::Error;

/// A skeleton token or symbol that cannot be mapped to formatter options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A fraction-precision stem carried more than one option.
    #[error("fraction-precision stems only accept a single optional option, got {count} on '{stem}'")]
    FractionPrecisionOptions { stem: String, count: usize },

    /// A stem that needs an option was given none.
    #[error("number skeleton stem '{stem}' requires an option")]
    MissingOption { stem: String },

    /// A date-time symbol from the unsupported set.
    #[error(
        "`{symbol}` ({field}) patterns are not supported{}",
        substitute.map(|s| format!(", use `{s}` instead")).unwrap_or_default()
    )]
    UnsupportedDateTimeSymbol {
        symbol: char,
        field: &'static str,
        substitute: Option<&'static str>,
    },

    /// `e`/`c` weekday symbols shorter than four characters.
    #[error("`{symbol}..{symbol}{symbol}{symbol}` (weekday) patterns are not supported")]
    NumericWeekday { symbol: char },
}
