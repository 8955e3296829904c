//! # humanlayer-core: contact records and store protocol traits
//!
//! This crate defines the data an agent exchanges with a human and the
//! interface to the backend that persists it. It contains no polling,
//! no transport, and no persistence of its own.
//!
//! ## The Pieces
//!
//! | Piece | Types | What it does |
//! |-------|-------|-------------|
//! | Channel | [`ContactChannel`] | How to reach a human (Slack, email) |
//! | Contact | [`ContactSpec`], [`ContactStatus`], [`ContactRecord`] | The question and its eventual answer |
//! | Store | [`AgentStore`], [`AgentBackend`] | Where contact records live |
//! | Errors | [`StoreError`] | Collaborator failures |
//!
//! ## Ownership of `status`
//!
//! A [`ContactRecord`] is created with no status. The backend is the only
//! party that ever sets it, exactly once, in response to a human's action.
//! Clients create records and read them back; they never write a status.

#![deny(missing_docs)]

pub mod channel;
pub mod contact;
pub mod duration;
pub mod error;
pub mod id;
pub mod store;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use channel::{ContactChannel, EmailContactChannel, SlackContactChannel};
pub use contact::{ContactRecord, ContactSpec, ContactStatus, Resolution};
pub use duration::DurationMs;
pub use error::StoreError;
pub use id::{CallId, RunId};
pub use store::{AgentBackend, AgentStore};
