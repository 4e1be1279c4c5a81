//! An insertion-ordered model of npm's `.npmrc` configuration format.
//!
//! npm reads its client configuration from plain `key = value` lines and
//! treats `;`/`#` lines as comments. [`Npmrc`] preserves the order lines
//! first appear in, so a parsed document serializes back with its settings
//! and comments in their original positions.

mod document;
mod error;

pub use document::Npmrc;
pub use error::{NpmrcError, Result};
