use std::fmt;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{NpmrcError, Result};

/// Entry identity inside the document. Settings are keyed by name; comment
/// lines get a synthetic sequence number so identical comments stay
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum EntryKey {
    Setting(String),
    Comment(u64),
}

/// An npm `.npmrc` document: an insertion-ordered mapping from setting name
/// to value, with comment lines carried through in position.
///
/// Settings are case-sensitive and matched exactly. Writing to an existing
/// setting updates its value in place, keeping the position of the first
/// write, which is what npm's top-down reading of the file expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Npmrc {
    entries: IndexMap<EntryKey, String>,
    comment_seq: u64,
}

impl Npmrc {
    /// Creates an empty document.
    pub fn new() -> Self {
        Default::default()
    }

    /// Parses a document from `.npmrc`-style text.
    ///
    /// Lines whose first non-blank character is `;` or `#` are kept as
    /// comments. Every other line containing `=` is split at the first `=`
    /// into a trimmed setting name and value. Blank lines and lines with no
    /// `=` carry no configuration and are dropped; parsing never fails.
    pub fn parse(content: impl AsRef<str>) -> Self {
        let mut npmrc = Self::new();
        for line in content.as_ref().lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with(';') || line.starts_with('#') {
                npmrc.push_comment(line.to_owned());
            } else if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    npmrc.set(key, value.trim());
                }
            }
        }
        npmrc
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| NpmrcError::ReadError(e, path.to_owned()))?;
        let npmrc = Self::parse(content);
        tracing::debug!(
            "Loaded {} npm setting(s) from {}.",
            npmrc.entries.len(),
            path.display()
        );
        Ok(npmrc)
    }

    /// Serializes the document to the file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string())
            .map_err(|e| NpmrcError::WriteError(e, path.to_owned()))?;
        tracing::debug!("Wrote npmrc file to {}.", path.display());
        Ok(())
    }

    /// Returns the value of a setting, if present.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries
            .get(&EntryKey::Setting(key.as_ref().to_owned()))
            .map(String::as_str)
    }

    /// Returns true if the setting is present.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.entries
            .contains_key(&EntryKey::Setting(key.as_ref().to_owned()))
    }

    /// Boolean coercion of a setting value: true iff the stored value is the
    /// literal `true`, case-insensitively. Absent settings read as false.
    pub fn get_as_boolean(&self, key: impl AsRef<str>) -> bool {
        self.get(key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Inserts or overwrites a setting. A new setting appends to the end of
    /// the document; an existing one is updated in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(EntryKey::Setting(key.into()), value.into());
    }

    /// Writes a boolean setting as the literal `true`/`false`.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Appends a comment line. Text without a leading `;` or `#` marker gets
    /// the standard `; ` prefix.
    pub fn add_comment(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        let line = if text.starts_with(';') || text.starts_with('#') {
            text.to_owned()
        } else {
            format!("; {}", text)
        };
        self.push_comment(line);
    }

    /// True when the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The settings in document order, comments excluded.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match key {
            EntryKey::Setting(name) => Some((name.as_str(), value.as_str())),
            EntryKey::Comment(_) => None,
        })
    }

    fn push_comment(&mut self, line: String) {
        self.entries.insert(EntryKey::Comment(self.comment_seq), line);
        self.comment_seq += 1;
    }
}

impl fmt::Display for Npmrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            match key {
                EntryKey::Setting(name) => writeln!(f, "{} = {}", name, value)?,
                EntryKey::Comment(_) => writeln!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Npmrc {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Npmrc {
    fn from(content: &str) -> Self {
        Self::parse(content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_key_values() {
        let npmrc = Npmrc::parse("registry = https://registry.npmjs.org\nalways-auth=false");
        assert_eq!(npmrc.get("registry"), Some("https://registry.npmjs.org"));
        assert_eq!(npmrc.get("always-auth"), Some("false"));
        assert!(npmrc.contains("registry"));
        assert!(!npmrc.contains("Registry"));
        assert_eq!(npmrc.get("missing"), None);
    }

    #[test]
    fn parse_splits_at_first_equals() {
        let npmrc = Npmrc::parse("_auth = dXNlcjpwYXNz==\n");
        assert_eq!(npmrc.get("_auth"), Some("dXNlcjpwYXNz=="));
    }

    #[test]
    fn parse_skips_malformed_lines() {
        let npmrc = Npmrc::parse("no equals here\n\n   \nkey = value\n= orphaned value\n");
        assert_eq!(npmrc.entries().count(), 1);
        assert_eq!(npmrc.get("key"), Some("value"));
    }

    #[test]
    fn parse_keeps_last_duplicate_in_first_position() {
        let npmrc = Npmrc::parse("loglevel = warn\nregistry = a\nloglevel = silent\n");
        assert_eq!(npmrc.get("loglevel"), Some("silent"));
        assert_eq!(npmrc.to_string(), "loglevel = silent\nregistry = a\n");
    }

    #[test]
    fn boolean_coercion() {
        let npmrc = Npmrc::parse("a = true\nb = TRUE\nc = True\nd = false\ne = yes\n");
        assert!(npmrc.get_as_boolean("a"));
        assert!(npmrc.get_as_boolean("b"));
        assert!(npmrc.get_as_boolean("c"));
        assert!(!npmrc.get_as_boolean("d"));
        assert!(!npmrc.get_as_boolean("e"));
        assert!(!npmrc.get_as_boolean("missing"));
    }

    #[test]
    fn set_preserves_first_write_position() {
        let mut npmrc = Npmrc::new();
        npmrc.set("registry", "https://registry.npmjs.org");
        npmrc.set("always-auth", "false");
        npmrc.set("registry", "https://registry.acme.com");
        assert_eq!(
            npmrc.to_string(),
            "registry = https://registry.acme.com\nalways-auth = false\n"
        );
    }

    #[test]
    fn set_bool_writes_literals() {
        let mut npmrc = Npmrc::new();
        npmrc.set_bool("always-auth", true);
        npmrc.set_bool("strict-ssl", false);
        assert_eq!(npmrc.get("always-auth"), Some("true"));
        assert_eq!(npmrc.get("strict-ssl"), Some("false"));
        assert!(npmrc.get_as_boolean("always-auth"));
    }

    #[test]
    fn comments_round_trip_in_position() {
        let text = "; generated for job #42\nregistry = https://registry.npmjs.org\n# keep me\nalways-auth = false\n";
        let npmrc = Npmrc::parse(text);
        assert_eq!(npmrc.to_string(), text);
        assert_eq!(npmrc.entries().count(), 2);
    }

    #[test]
    fn identical_comments_both_survive() {
        let text = "; note\na = 1\n; note\nb = 2\n";
        assert_eq!(Npmrc::parse(text).to_string(), text);
    }

    #[test]
    fn add_comment_prefixes_bare_text() {
        let mut npmrc = Npmrc::new();
        npmrc.add_comment("managed file, do not edit");
        npmrc.add_comment("# hand-written marker");
        npmrc.set("registry", "https://registry.npmjs.org");
        assert_eq!(
            npmrc.to_string(),
            "; managed file, do not edit\n# hand-written marker\nregistry = https://registry.npmjs.org\n"
        );
    }

    #[test]
    fn empty_document_serializes_to_nothing() {
        assert_eq!(Npmrc::new().to_string(), "");
        assert!(Npmrc::new().is_empty());
    }

    #[test]
    fn from_str_never_fails() {
        let npmrc: Npmrc = "garbage without equals".parse().unwrap();
        assert!(npmrc.is_empty());
    }

    #[test]
    fn load_save_round_trip() -> Result<()> {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".npmrc");

        let mut npmrc = Npmrc::new();
        npmrc.add_comment("generated");
        npmrc.set("registry", "https://registry.npmjs.org");
        npmrc.set_bool("always-auth", false);
        npmrc.save(&path)?;

        let loaded = Npmrc::load(&path)?;
        assert_eq!(loaded, npmrc);
        assert_eq!(loaded.to_string(), npmrc.to_string());
        Ok(())
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Npmrc::load(dir.path().join("definitely-missing")).unwrap_err();
        assert!(matches!(err, NpmrcError::ReadError(..)));
    }
}
