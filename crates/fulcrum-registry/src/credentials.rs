use std::collections::HashMap;
use std::fmt;

use base64::{engine::general_purpose, Engine as _};

/// A username/secret pair already looked up for a registry URL, keyed by
/// that exact URL in [`ResolvedCredentials`]. Construction is a plain
/// constructor; how the secret was obtained is the caller's business.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    secret: String,
}

/// Resolved credentials by registry URL, exactly as declared. The compiler
/// only ever reads this map.
pub type ResolvedCredentials = HashMap<String, Credential>;

impl Credential {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The legacy npm `_auth` token: `username:secret`, base64-encoded as
    /// one string.
    pub fn legacy_auth_token(&self) -> String {
        general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.secret))
    }

    /// The secret alone, base64-encoded, as npm expects in per-registry
    /// `_password` settings.
    pub fn encoded_secret(&self) -> String {
        general_purpose::STANDARD.encode(&self.secret)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "Credential(username={},secret=***)",
            self.username
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn legacy_auth_token_is_base64_of_pair() {
        let credential = Credential::new("myuser", "mypassword");
        let decoded = general_purpose::STANDARD
            .decode(credential.legacy_auth_token())
            .expect("valid base64");
        assert_eq!(String::from_utf8_lossy(&decoded), "myuser:mypassword");
    }

    #[test]
    fn encoded_secret_is_base64_of_secret_alone() {
        let credential = Credential::new("myuser", "mypassword");
        let decoded = general_purpose::STANDARD
            .decode(credential.encoded_secret())
            .expect("valid base64");
        assert_eq!(String::from_utf8_lossy(&decoded), "mypassword");
    }

    #[test]
    fn debug_masks_the_secret() {
        let credential = Credential::new("myuser", "mypassword");
        let debugged = format!("{:?}", credential);
        assert!(debugged.contains("myuser"));
        assert!(!debugged.contains("mypassword"));
    }
}
