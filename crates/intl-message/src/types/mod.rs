mod formats;
mod options;
mod part;
mod value;

pub use formats::Formats;
pub use options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, DateTimeFormatOptions, HourCycle, MonthWidth,
    Notation, NumberFormatOptions, NumberFormatStyle, NumericWidth, PluralRulesOptions,
    SignDisplay, TextWidth, TimeZoneNameWidth, TrailingZeroDisplay, UnitDisplay,
};
pub use part::{Formatted, Part};
pub use value::{TagFn, Value, Values};
