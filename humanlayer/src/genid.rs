//! Identifier generation for contact requests.

use std::sync::Arc;

/// Produces a fresh identifier. The argument is a prefix hint
/// (`"call"` for contact requests); generators may ignore it.
pub type IdGenerator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Prefix hint passed to the generator for contact requests.
pub(crate) const CALL_PREFIX: &str = "call";

/// `<prefix>-<uuid v4>`.
pub fn default_genid(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
