//! The npm setting names this crate writes.
//!
//! These are npm's own documented configuration keys; they are part of the
//! wire format of the generated file and must not drift.

/// Default registry URL for unscoped packages.
pub const REGISTRY: &str = "registry";

/// Force authentication on every request, including reads.
pub const ALWAYS_AUTH: &str = "always-auth";

/// Legacy combined `username:password` basic-auth token, base64-encoded.
pub const AUTH: &str = "_auth";

/// Per-registry username, stored in plaintext.
pub const USER: &str = "username";

/// Per-registry password, base64-encoded on its own.
pub const PASSWORD: &str = "_password";
