use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum NpmrcError {
    /// Failed to read an npmrc file from disk.
    #[error("Failed to read npmrc file at `{}`.", .1.display())]
    #[diagnostic(code(fulcrum_npmrc::read_error), url(docsrs))]
    ReadError(#[source] std::io::Error, PathBuf),

    /// Failed to write an npmrc file to disk.
    #[error("Failed to write npmrc file at `{}`.", .1.display())]
    #[diagnostic(code(fulcrum_npmrc::write_error), url(docsrs))]
    WriteError(#[source] std::io::Error, PathBuf),
}

/// The result type returned by calls to this library.
pub type Result<T> = std::result::Result<T, NpmrcError>;
