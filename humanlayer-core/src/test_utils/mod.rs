//! Scripted collaborators for testing.
//!
//! Available behind the `test-utils` feature flag. These record every
//! call they receive and replay canned results, so client tests can
//! assert on exactly what was written and read.

mod scripted_backend;
mod scripted_store;

pub use scripted_backend::ScriptedBackend;
pub use scripted_store::ScriptedStore;
