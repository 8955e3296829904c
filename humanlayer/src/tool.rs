//! Exposing contact requests as an LLM tool.
//!
//! [`describe_tool`] is the pure part: channel in, name and description
//! out. [`HumanTool`] binds that description to a [`HumanLayer`] and a
//! resolved channel.

use crate::error::HumanLayerError;
use crate::layer::HumanLayer;
use humanlayer_core::ContactChannel;
use humanlayer_tool::{ToolDyn, ToolError, ToolFuture};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// Tool name when no channel is configured, and the prefix otherwise.
pub const BASE_TOOL_NAME: &str = "contact_human";

const GENERIC_DESCRIPTION: &str = "Contact a human and wait for a response";

/// Name and description advertised for a contact tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescription {
    /// Identifier-safe tool name, e.g.
    /// `contact_human_in_slack_in_a_dm_with_the_librarian`.
    pub name: String,
    /// Sentence shown to the model.
    pub description: String,
}

/// Derive the tool name and description for a channel.
///
/// Deterministic in `channel`: registries and providers key on the name.
///
/// ```
/// use humanlayer::describe_tool;
/// use humanlayer_core::ContactChannel;
///
/// let channel = ContactChannel::slack("U8675309", "a dm with the librarian");
/// let desc = describe_tool(Some(&channel));
/// assert_eq!(desc.name, "contact_human_in_slack_in_a_dm_with_the_librarian");
/// assert_eq!(
///     desc.description,
///     "Contact a human via slack and wait for a response in a dm with the librarian"
/// );
/// assert_eq!(describe_tool(None).name, "contact_human");
/// ```
pub fn describe_tool(channel: Option<&ContactChannel>) -> ToolDescription {
    let Some(channel) = channel else {
        return ToolDescription {
            name: BASE_TOOL_NAME.to_string(),
            description: GENERIC_DESCRIPTION.to_string(),
        };
    };

    let transport = channel.transport();
    let phrase = channel.context();
    let context = normalize_token(phrase);

    // Name and description drop the context together.
    if context.is_empty() {
        return ToolDescription {
            name: format!("{BASE_TOOL_NAME}_in_{transport}"),
            description: format!("Contact a human via {transport} and wait for a response"),
        };
    }

    ToolDescription {
        name: format!("{BASE_TOOL_NAME}_in_{transport}_in_{context}"),
        description: format!("Contact a human via {transport} and wait for a response in {phrase}"),
    }
}

/// Lower-case ASCII alphanumeric runs joined by single underscores.
///
/// Everything else, non-ASCII letters included, separates runs.
/// The result never starts or ends with `_` and may be empty.
pub fn normalize_token(phrase: &str) -> String {
    phrase
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// A contact request bound to a channel, callable by an agent.
///
/// Created by [`HumanLayer::human_as_tool`]. Cloning is cheap.
#[derive(Clone)]
pub struct HumanTool {
    layer: HumanLayer,
    channel: Option<ContactChannel>,
    description: ToolDescription,
}

impl HumanTool {
    pub(crate) fn new(layer: HumanLayer, channel: Option<ContactChannel>) -> Self {
        let description = describe_tool(channel.as_ref());
        Self {
            layer,
            channel,
            description,
        }
    }

    /// The tool name.
    pub fn name(&self) -> &str {
        &self.description.name
    }

    /// The tool description.
    pub fn description(&self) -> &str {
        &self.description.description
    }

    /// The channel every call goes to. `None` leaves it to the backend.
    pub fn channel(&self) -> Option<&ContactChannel> {
        self.channel.as_ref()
    }

    /// Ask the human and wait for the answer.
    pub async fn call(&self, message: &str) -> Result<String, HumanLayerError> {
        self.layer
            .request_contact(message, self.channel.clone())
            .await
    }

    /// [`HumanTool::call`], stopping early when `cancel` fires.
    pub async fn call_with_cancel(
        &self,
        message: &str,
        cancel: &CancellationToken,
    ) -> Result<String, HumanLayerError> {
        self.layer
            .request_contact_with_cancel(message, self.channel.clone(), cancel)
            .await
    }
}

impl std::fmt::Debug for HumanTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanTool")
            .field("name", &self.description.name)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

/// Accepted tool inputs: `{"message": "..."}` or a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContactInput {
    Object { message: String },
    Bare(String),
}

impl ContactInput {
    fn into_message(self) -> String {
        match self {
            Self::Object { message } | Self::Bare(message) => message,
        }
    }
}

impl ToolDyn for HumanTool {
    fn name(&self) -> &str {
        &self.description.name
    }

    fn description(&self) -> &str {
        &self.description.description
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "The question or content to send to the human"
                }
            },
            "required": ["message"]
        })
    }

    fn call(&self, input: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let message = serde_json::from_value::<ContactInput>(input)
                .map_err(|e| ToolError::InvalidInput(e.to_string()))?
                .into_message();
            match HumanTool::call(self, &message).await {
                Ok(response) => Ok(serde_json::Value::String(response)),
                Err(HumanLayerError::InvalidRequest(msg)) => Err(ToolError::InvalidInput(msg)),
                Err(err) => Err(ToolError::ExecutionFailed(Box::new(err))),
            }
        })
    }
}
