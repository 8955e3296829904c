//! Tool registry: register, look up, and execute tools by name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{ToolDefinition, ToolDyn, ToolError};

/// Registry of type-erased tools keyed by [`ToolDyn::name`].
///
/// Registering a second tool under an existing name replaces the first;
/// the replaced tool is returned.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolDyn>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    pub fn register(&mut self, tool: impl ToolDyn + 'static) -> Option<Arc<dyn ToolDyn>> {
        self.register_dyn(Arc::new(tool))
    }

    /// Register a pre-erased tool.
    pub fn register_dyn(&mut self, tool: Arc<dyn ToolDyn>) -> Option<Arc<dyn ToolDyn>> {
        let name = tool.name().to_string();
        tracing::debug!(tool = %name, "registering tool");
        self.tools.insert(name, tool)
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolDyn>> {
        self.tools.get(name).cloned()
    }

    /// Whether a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions for all registered tools, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name.
    pub async fn execute(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tracing::debug!(tool = %name, "executing tool");
        tool.call(input).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.tools.keys().collect();
        names.sort();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}
