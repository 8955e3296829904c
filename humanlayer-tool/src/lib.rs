#![deny(missing_docs)]
//! Tool trait and registry for exposing callables to an LLM tool-calling layer.
//!
//! A tool is a named, described function taking JSON and returning JSON.
//! [`ToolDyn`] is object safe so heterogeneous tools can live in one
//! [`ToolRegistry`], keyed by name.

pub mod error;
pub mod registry;

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

pub use error::ToolError;
pub use registry::ToolRegistry;

/// Boxed future returned by [`ToolDyn::call`].
pub type ToolFuture<'a> =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, ToolError>> + Send + 'a>>;

/// Type-erased tool for dynamic dispatch.
///
/// The name must be stable for a given configuration: registries and
/// model providers key on it.
pub trait ToolDyn: Send + Sync {
    /// The tool's unique name.
    fn name(&self) -> &str;
    /// What the tool does, as shown to the model.
    fn description(&self) -> &str;
    /// JSON Schema for the tool's input.
    fn input_schema(&self) -> serde_json::Value;
    /// Execute the tool with a JSON input.
    fn call(&self, input: serde_json::Value) -> ToolFuture<'_>;

    /// The definition advertised to the model.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Definition of a tool available to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// The tool name (unique identifier).
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
}
