//! ICU message pattern parser.
//!
//! This module parses message patterns into an AST that can be used for
//! interpretation, serialization, or external tooling. It also provides the
//! inverse printer and the hashtag normalization pass.

pub mod ast;
pub mod chars;
pub mod error;
mod message;
mod normalize;
mod printer;

pub use ast::*;
pub use error::SyntaxError;
pub use message::{ParserOptions, parse};
pub use normalize::normalize_hashtag_in_plural;
pub use printer::print_ast;
