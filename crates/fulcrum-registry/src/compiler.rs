use fulcrum_npmrc::Npmrc;

use crate::credentials::ResolvedCredentials;
use crate::error::{RegistryError, Result};
use crate::registry::NpmRegistry;
use crate::settings;

/// Compiles registry declarations plus resolved credentials into npm client
/// configuration.
///
/// Declarations are processed in order. Global registries write into the
/// un-prefixed namespace, so a later global entry overwrites an earlier
/// one; scoped registries write under their own URL-derived prefix and
/// never collide with each other or with the global settings.
///
/// Compilation is a pure function of its inputs: no I/O, no caching, and
/// repeated calls produce byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct RegistryCompiler {
    registries: Vec<NpmRegistry>,
}

impl RegistryCompiler {
    pub fn new(registries: impl Into<Vec<NpmRegistry>>) -> Self {
        Self {
            registries: registries.into(),
        }
    }

    /// The registry declarations, in compilation order.
    pub fn registries(&self) -> &[NpmRegistry] {
        &self.registries
    }

    /// Compiles into a fresh document and serializes it.
    pub fn compile(&self, resolved: &ResolvedCredentials) -> Result<String> {
        self.compile_into("", resolved)
    }

    /// Fills registry settings into already-present rc content, preserving
    /// unrelated settings and comments, and serializes the result.
    pub fn compile_into(
        &self,
        existing: impl AsRef<str>,
        resolved: &ResolvedCredentials,
    ) -> Result<String> {
        let mut npmrc = Npmrc::parse(existing);
        self.fill(&mut npmrc, resolved)?;
        Ok(npmrc.to_string())
    }

    /// Writes the settings for every declared registry into `npmrc`.
    pub fn fill(&self, npmrc: &mut Npmrc, resolved: &ResolvedCredentials) -> Result<()> {
        tracing::debug!(
            "Compiling npm configuration for {} registry declaration(s).",
            self.registries.len()
        );
        for registry in &self.registries {
            if registry.url.trim().is_empty() {
                return Err(RegistryError::EmptyRegistryUrl);
            }
            let credential = resolved.get(&registry.url);
            if credential.is_none() && registry.credentials_id.is_some() {
                tracing::debug!(
                    "No resolved credential for registry {}, continuing unauthenticated.",
                    registry.url
                );
            }

            if !registry.has_scopes() {
                npmrc.set(settings::REGISTRY, &registry.url);
                // npm requires always-auth when _auth is in play, and reads
                // a missing flag as false; write it either way.
                npmrc.set_bool(settings::ALWAYS_AUTH, credential.is_some());
                if let Some(credential) = credential {
                    npmrc.set(settings::AUTH, credential.legacy_auth_token());
                }
            } else {
                let prefix = calculate_prefix(&registry.url)?;
                if let Some(credential) = credential {
                    npmrc.set(compose(&prefix, settings::ALWAYS_AUTH), "true");
                    npmrc.set(compose(&prefix, settings::USER), credential.username());
                    npmrc.set(compose(&prefix, settings::PASSWORD), credential.encoded_secret());
                }
                for scope in registry.scope_list() {
                    npmrc.set(
                        compose(&format!("@{}", scope), settings::REGISTRY),
                        with_trailing_slash(&registry.url),
                    );
                }
            }
        }
        Ok(())
    }
}

/// Derives the settings prefix npm associates with a registry URL: the
/// nerf-dart form `//host[:port]/path/`, i.e. the URL with one trailing
/// slash trimmed, the scheme stripped, and exactly one trailing slash
/// appended. npm deliberately ignores the scheme here so that credentials
/// attach to the host and path rather than the transport.
pub fn calculate_prefix(url: &str) -> Result<String> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    match trimmed.split_once("://") {
        Some((_, rest)) if !rest.is_empty() => Ok(format!("//{}/", rest)),
        _ => Err(RegistryError::InvalidRegistryUrl(url.to_owned())),
    }
}

/// Joins a settings prefix and a setting name into the full key, e.g.
/// `//registry.acme.com/` + `_password` -> `//registry.acme.com/:_password`
/// and `@acme` + `registry` -> `@acme:registry`.
pub fn compose(prefix: &str, setting: &str) -> String {
    format!("{}:{}", prefix, setting)
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_owned()
    } else {
        format!("{}/", url)
    }
}
