#![deny(missing_docs)]
//! # humanlayer: ask a human, wait for the answer
//!
//! An agent that needs a decision creates a contact request through
//! [`HumanLayer`], which persists a [`ContactRecord`](humanlayer_core::ContactRecord)
//! in the backend and polls it until a human answers, declines, or a
//! deadline passes. [`HumanLayer::human_as_tool`] wraps the same operation
//! as a named, described tool for an LLM tool-calling loop.
//!
//! ```no_run
//! # async fn run() -> Result<(), humanlayer::HumanLayerError> {
//! use std::sync::Arc;
//! use humanlayer::{HumanLayer, HumanLayerConfig};
//! use humanlayer_core::{ContactChannel, DurationMs};
//! use humanlayer_store_memory::MemoryBackend;
//!
//! let hl = HumanLayer::new(Arc::new(MemoryBackend::new()))
//!     .contact_channel(ContactChannel::slack("U8675309", "a dm with the librarian"))
//!     .config(HumanLayerConfig::default().timeout(DurationMs::from_secs(600)));
//!
//! let tool = hl.human_as_tool(None);
//! assert_eq!(tool.name(), "contact_human_in_slack_in_a_dm_with_the_librarian");
//! let answer = tool.call("may I delete the staging database?").await?;
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod genid;
pub mod layer;
pub mod poll;
pub mod tool;

pub use config::HumanLayerConfig;
pub use error::{ConfigError, HumanLayerError};
pub use genid::{default_genid, IdGenerator};
pub use layer::HumanLayer;
pub use poll::{NoSleep, Sleeper, TokioSleeper};
pub use tool::{describe_tool, normalize_token, HumanTool, ToolDescription, BASE_TOOL_NAME};
