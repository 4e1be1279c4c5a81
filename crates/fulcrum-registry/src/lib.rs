//! Compile npm registry declarations into `.npmrc` client configuration.
//!
//! A build host declares the registries a job should use as a list of
//! [`NpmRegistry`] entries (URL, optional credential reference, optional
//! scope list) and resolves referenced credentials against its own secret
//! store ahead of time. [`RegistryCompiler`] turns the declarations plus
//! the [`ResolvedCredentials`] map into the exact key/value lines the npm
//! client reads: the un-prefixed `registry`/`always-auth`/`_auth` settings
//! for the global registry, and nerf-darted `//host/path/:`-prefixed
//! settings plus `@scope:registry` routes for scoped registries.

mod compiler;
mod credentials;
mod error;
mod registry;
pub mod settings;

pub use compiler::{calculate_prefix, compose, RegistryCompiler};
pub use credentials::{Credential, ResolvedCredentials};
pub use error::{RegistryError, Result};
pub use registry::NpmRegistry;
