#![deny(missing_docs)]
//! # humanlayer-workspace: umbrella crate
//!
//! One import surface for the contact client, the protocol types, the
//! tool registry, and the in-memory backend, plus a `prelude` for the
//! common path.

pub use humanlayer;
pub use humanlayer_core;
pub use humanlayer_store_memory;
pub use humanlayer_tool;

/// Happy-path imports for wiring a human into an agent.
pub mod prelude {
    pub use humanlayer::{
        HumanLayer, HumanLayerConfig, HumanLayerError, HumanTool, NoSleep, Sleeper, TokioSleeper,
        describe_tool,
    };
    pub use humanlayer_core::{
        AgentBackend, AgentStore, CallId, ContactChannel, ContactRecord, ContactSpec,
        ContactStatus, DurationMs, RunId, StoreError,
    };
    pub use humanlayer_store_memory::{MemoryBackend, MemoryContactStore};
    pub use humanlayer_tool::{ToolDyn, ToolError, ToolRegistry};
}
