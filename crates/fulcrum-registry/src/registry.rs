use serde::{Deserialize, Serialize};

/// A declarative npm registry entry.
///
/// A registry with no scopes is the *global* registry: npm consults it for
/// every unscoped package name, and only one such entry is meaningful per
/// generated document. A registry with scopes only serves packages under
/// the given `@scope` prefixes, and any number of scoped entries can
/// coexist.
///
/// `scopes` is kept in the raw space-delimited form hosts declare it in
/// (`"@acme tools"`); [`NpmRegistry::scope_list`] yields the individual
/// scope names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NpmRegistry {
    /// Registry URL exactly as declared, e.g. `https://registry.npmjs.org`.
    pub url: String,

    /// Opaque identifier of the credential to resolve for this registry.
    /// Resolution happens outside this crate; an unresolvable reference
    /// degrades to unauthenticated output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_id: Option<String>,

    /// Space-delimited scope list, with or without leading `@` signs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<String>,
}

impl NpmRegistry {
    /// Creates a global, unauthenticated registry entry. Surrounding
    /// whitespace in the URL is trimmed; the URL is otherwise kept
    /// byte-exact, since the credential map is keyed by it.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().to_owned(),
            credentials_id: None,
            scopes: None,
        }
    }

    /// Attaches a credential reference.
    pub fn with_credentials_id(mut self, id: impl Into<String>) -> Self {
        self.credentials_id = Some(id.into());
        self
    }

    /// Restricts the registry to the given space-delimited scopes. A blank
    /// list leaves the registry global.
    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        let scopes = scopes.into();
        self.scopes = if scopes.trim().is_empty() {
            None
        } else {
            Some(scopes)
        };
        self
    }

    /// True when the registry is restricted to at least one scope.
    pub fn has_scopes(&self) -> bool {
        self.scope_list().next().is_some()
    }

    /// The declared scope names in order, split on whitespace, each with a
    /// single leading `@` stripped.
    pub fn scope_list(&self) -> impl Iterator<Item = &str> {
        self.scopes
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(|scope| scope.strip_prefix('@').unwrap_or(scope))
    }
}
