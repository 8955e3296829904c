//! Contact requests and their resolution.

use crate::channel::ContactChannel;
use crate::id::{CallId, RunId};
use serde::{Deserialize, Serialize};

/// What to ask and, optionally, where to ask it.
///
/// When `channel` is `None` the backend applies its own default
/// recipient policy (or rejects the request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSpec {
    /// The question or content to put in front of the human.
    pub msg: String,
    /// Delivery channel. Omitted from the wire format when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ContactChannel>,
}

impl ContactSpec {
    /// Create a spec with no channel.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            channel: None,
        }
    }

    /// Set (or clear) the delivery channel.
    #[must_use]
    pub fn with_channel(mut self, channel: Option<ContactChannel>) -> Self {
        self.channel = channel;
        self
    }
}

/// The human's answer, written by the backend.
///
/// A well-formed status carries exactly one of `response` or `error`.
/// See [`ContactStatus::resolution`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactStatus {
    /// The human's answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Why the request was declined or failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactStatus {
    /// A status carrying the human's answer.
    pub fn responded(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            error: None,
        }
    }

    /// A status carrying a refusal or failure.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            response: None,
            error: Some(error.into()),
        }
    }

    /// Classify this status.
    ///
    /// Returns `Err` with a description when the status is malformed:
    /// both fields set, or neither.
    pub fn resolution(&self) -> Result<Resolution<'_>, String> {
        match (&self.response, &self.error) {
            (Some(response), None) => Ok(Resolution::Responded(response)),
            (None, Some(error)) => Ok(Resolution::Failed(error)),
            (Some(_), Some(_)) => Err("status carries both a response and an error".into()),
            (None, None) => Err("status carries neither a response nor an error".into()),
        }
    }
}

/// A well-formed [`ContactStatus`], borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The human answered.
    Responded(&'a str),
    /// The human (or backend policy) declined.
    Failed(&'a str),
}

/// The unit persisted by the backend and polled by the client.
///
/// Identity is `call_id`. `status` is `None` while the request is
/// pending and is set once by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Groups records from one agent invocation.
    pub run_id: RunId,
    /// Unique per request.
    pub call_id: CallId,
    /// The request itself.
    pub spec: ContactSpec,
    /// The human's answer, once there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

impl ContactRecord {
    /// Create a pending record.
    pub fn new(run_id: impl Into<RunId>, call_id: impl Into<CallId>, spec: ContactSpec) -> Self {
        Self {
            run_id: run_id.into(),
            call_id: call_id.into(),
            spec,
            status: None,
        }
    }

    /// Attach a status. Backends and tests use this; clients never do.
    #[must_use]
    pub fn with_status(mut self, status: ContactStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether the backend has written a status.
    pub fn is_resolved(&self) -> bool {
        self.status.is_some()
    }
}
