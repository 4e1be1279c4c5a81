use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ProxyEnvError {
    /// The proxy endpoint has no host. A proxy URL cannot be assembled
    /// from it, so this fails immediately rather than producing partial
    /// variables.
    #[error("Proxy endpoint has an empty host.")]
    #[diagnostic(code(fulcrum_proxy_env::missing_host), url(docsrs))]
    MissingHost,

    /// The proxy endpoint's port is zero, which no proxy listens on.
    #[error("Proxy endpoint port must be non-zero.")]
    #[diagnostic(code(fulcrum_proxy_env::invalid_port), url(docsrs))]
    InvalidPort,
}

/// The result type returned by calls to this library.
pub type Result<T> = std::result::Result<T, ProxyEnvError>;
