use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// A registry was declared with an empty URL. Registries come straight
    /// from the host's job configuration, so this is caller misuse rather
    /// than something to recover from.
    #[error("Registry URL must not be empty.")]
    #[diagnostic(code(fulcrum_registry::empty_url), url(docsrs))]
    EmptyRegistryUrl,

    /// A scoped registry URL has no `scheme://` part, so no settings prefix
    /// can be derived for it.
    #[error("Cannot derive a settings prefix from registry URL `{0}`.")]
    #[diagnostic(code(fulcrum_registry::invalid_url), url(docsrs))]
    InvalidRegistryUrl(String),
}

/// The result type returned by calls to this library.
pub type Result<T> = std::result::Result<T, RegistryError>;
