//! Contact channels: how a contact request reaches a human.

use serde::{Deserialize, Serialize};

/// Where and how a human should be contacted. Exactly one transport is
/// active per value.
///
/// Serializes externally tagged, one key per transport:
///
/// ```json
/// { "slack": { "channel_or_user_id": "U8675309", "context_about_channel_or_user": "a dm with the librarian" } }
/// ```
///
/// Code that only needs a transport name or a recipient description
/// should go through [`ContactChannel::transport`] and
/// [`ContactChannel::context`] rather than matching, so adding a
/// transport does not touch it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    /// A Slack channel or direct message.
    Slack(SlackContactChannel),
    /// An email address.
    Email(EmailContactChannel),
}

impl ContactChannel {
    /// Shorthand for a Slack channel without delivery options.
    pub fn slack(
        channel_or_user_id: impl Into<String>,
        context_about_channel_or_user: impl Into<String>,
    ) -> Self {
        Self::Slack(SlackContactChannel::new(
            channel_or_user_id,
            context_about_channel_or_user,
        ))
    }

    /// Shorthand for an email channel.
    pub fn email(address: impl Into<String>, context_about_user: impl Into<String>) -> Self {
        Self::Email(EmailContactChannel::new(address, context_about_user))
    }

    /// Lower-case transport name, e.g. `"slack"`.
    pub fn transport(&self) -> &'static str {
        match self {
            Self::Slack(_) => "slack",
            Self::Email(_) => "email",
        }
    }

    /// Human-readable phrase describing the recipient,
    /// e.g. `"a dm with the librarian"`.
    pub fn context(&self) -> &str {
        match self {
            Self::Slack(slack) => &slack.context_about_channel_or_user,
            Self::Email(email) => &email.context_about_user,
        }
    }

    /// Transport-specific recipient identifier (channel id, user id, address).
    pub fn target(&self) -> &str {
        match self {
            Self::Slack(slack) => &slack.channel_or_user_id,
            Self::Email(email) => &email.address,
        }
    }
}

impl From<SlackContactChannel> for ContactChannel {
    fn from(slack: SlackContactChannel) -> Self {
        Self::Slack(slack)
    }
}

impl From<EmailContactChannel> for ContactChannel {
    fn from(email: EmailContactChannel) -> Self {
        Self::Email(email)
    }
}

/// Slack delivery target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackContactChannel {
    /// Slack channel id (`C...`) or user id (`U...`).
    pub channel_or_user_id: String,
    /// Describes the channel or user, e.g. `"a dm with the librarian"`.
    pub context_about_channel_or_user: String,
    /// Restricts who may answer. `None` lets anyone in the channel respond.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_responder_ids: Option<Vec<String>>,
}

impl SlackContactChannel {
    /// Create a Slack target with no responder restriction.
    pub fn new(
        channel_or_user_id: impl Into<String>,
        context_about_channel_or_user: impl Into<String>,
    ) -> Self {
        Self {
            channel_or_user_id: channel_or_user_id.into(),
            context_about_channel_or_user: context_about_channel_or_user.into(),
            allowed_responder_ids: None,
        }
    }

    /// Only accept responses from these Slack user ids.
    #[must_use]
    pub fn with_allowed_responders<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_responder_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}

/// Email delivery target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContactChannel {
    /// Recipient address.
    pub address: String,
    /// Describes the recipient, e.g. `"the on-call reviewer"`.
    pub context_about_user: String,
}

impl EmailContactChannel {
    /// Create an email target.
    pub fn new(address: impl Into<String>, context_about_user: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            context_about_user: context_about_user.into(),
        }
    }
}
