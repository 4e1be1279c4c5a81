//! Fulcrum is a toolkit for provisioning npm build environments. It
//! generates the client-side configuration a freshly-prepared Node.js
//! installation needs before `npm install` can run: an `.npmrc` document
//! wiring up package registries and their credentials, and the proxy
//! environment variables npm and friends pick up from the process
//! environment.
//!
//! The work is split across three crates, re-exported here:
//!
//! - [`fulcrum_npmrc`]: the ordered `.npmrc` document model ([`Npmrc`]).
//! - [`fulcrum_registry`]: registry declarations and the compiler that
//!   turns them into npmrc settings ([`RegistryCompiler`]).
//! - [`fulcrum_proxy_env`]: `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY`
//!   synthesis from a proxy endpoint description ([`build_env`]).
//!
//! ### Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use fulcrum::{build_env, Credential, NpmRegistry, ProxyEndpoint, RegistryCompiler};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registries = vec![
//!     NpmRegistry::new("https://registry.npmjs.org"),
//!     NpmRegistry::new("https://registry.acme.com")
//!         .with_credentials_id("acme-ci")
//!         .with_scopes("@acme"),
//! ];
//!
//! let mut resolved = HashMap::new();
//! resolved.insert(
//!     "https://registry.acme.com".to_owned(),
//!     Credential::new("ci-bot", "hunter2"),
//! );
//!
//! let npmrc = RegistryCompiler::new(registries).compile(&resolved)?;
//! assert!(npmrc.contains("@acme:registry = https://registry.acme.com/"));
//!
//! let env = build_env(&ProxyEndpoint::new("proxy.example.org", 8080))?;
//! assert_eq!(env["HTTP_PROXY"], "http://proxy.example.org:8080");
//! # Ok(())
//! # }
//! ```

pub use fulcrum_npmrc::{Npmrc, NpmrcError};
pub use fulcrum_proxy_env::{build_env, ProxyEndpoint, ProxyEnvError};
pub use fulcrum_registry::{
    calculate_prefix, compose, settings, Credential, NpmRegistry, RegistryCompiler, RegistryError,
    ResolvedCredentials,
};
