//! ICU skeleton compilation.
//!
//! Skeletons are the compact `::`-prefixed style syntax inside number, date
//! and time elements. This module turns them into typed formatter options.
//! It is used by the parser when `should_parse_skeletons` is set and by the
//! interpreter the first time an uncompiled skeleton is formatted.

mod date_time;
mod error;
mod number;

pub use date_time::compile_date_time_skeleton;
pub use error::RangeError;
pub use number::compile_number_skeleton;
