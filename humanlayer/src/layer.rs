//! The contact-request orchestrator.

use crate::config::HumanLayerConfig;
use crate::error::HumanLayerError;
use crate::genid::{default_genid, IdGenerator, CALL_PREFIX};
use crate::poll::{Sleeper, TokioSleeper};
use crate::tool::HumanTool;
use humanlayer_core::{
    AgentBackend, AgentStore, CallId, ContactChannel, ContactRecord, ContactSpec, ContactStatus,
    Resolution, RunId,
};
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Creates contact requests and waits for humans to answer them.
///
/// Holds a backend handle, an optional default channel, and the injected
/// id generator and sleeper. Cloning is cheap; clones share everything.
///
/// ```no_run
/// # async fn run(backend: std::sync::Arc<dyn humanlayer_core::AgentBackend>) -> Result<(), humanlayer::HumanLayerError> {
/// use humanlayer::HumanLayer;
/// use humanlayer_core::ContactChannel;
///
/// let hl = HumanLayer::new(backend)
///     .contact_channel(ContactChannel::slack("U8675309", "a dm with the librarian"));
/// let answer = hl.human_as_tool(None).call("what is your favorite color").await?;
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct HumanLayer {
    backend: Arc<dyn AgentBackend>,
    contact_channel: Option<ContactChannel>,
    genid: IdGenerator,
    sleeper: Arc<dyn Sleeper>,
    config: HumanLayerConfig,
}

impl HumanLayer {
    /// Create a client with no default channel, uuid ids, tokio sleeps,
    /// and default configuration.
    pub fn new(backend: Arc<dyn AgentBackend>) -> Self {
        Self {
            backend,
            contact_channel: None,
            genid: Arc::new(default_genid),
            sleeper: Arc::new(TokioSleeper),
            config: HumanLayerConfig::default(),
        }
    }

    /// Set the channel used when a call does not name one.
    #[must_use]
    pub fn contact_channel(mut self, channel: ContactChannel) -> Self {
        self.contact_channel = Some(channel);
        self
    }

    /// Replace the id generator.
    #[must_use]
    pub fn genid<F>(mut self, genid: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.genid = Arc::new(genid);
        self
    }

    /// Replace the sleeper used between polls.
    #[must_use]
    pub fn sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Arc::new(sleeper);
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn config(mut self, config: HumanLayerConfig) -> Self {
        self.config = config;
        self
    }

    /// The default channel, if any.
    pub fn default_channel(&self) -> Option<&ContactChannel> {
        self.contact_channel.as_ref()
    }

    /// The active configuration.
    pub fn configuration(&self) -> &HumanLayerConfig {
        &self.config
    }

    /// Ask a human and wait for the answer.
    ///
    /// `channel` overrides the default channel for this call. With
    /// neither, the record carries no channel and the backend decides.
    /// Waits until the backend resolves the record, the configured
    /// timeout elapses, or the store fails.
    pub async fn request_contact(
        &self,
        message: &str,
        channel: Option<ContactChannel>,
    ) -> Result<String, HumanLayerError> {
        self.request_contact_with_cancel(message, channel, &CancellationToken::new())
            .await
    }

    /// [`HumanLayer::request_contact`], stopping early when `cancel` fires.
    pub async fn request_contact_with_cancel(
        &self,
        message: &str,
        channel: Option<ContactChannel>,
        cancel: &CancellationToken,
    ) -> Result<String, HumanLayerError> {
        if message.trim().is_empty() {
            return Err(HumanLayerError::InvalidRequest(
                "message must not be empty".into(),
            ));
        }

        let call_id = CallId::new((self.genid)(CALL_PREFIX));
        let run_id = match &self.config.run_id {
            Some(run_id) => RunId::new(run_id.as_str()),
            None => RunId::new(call_id.as_str()),
        };
        let channel = channel.or_else(|| self.contact_channel.clone());
        tracing::debug!(
            call_id = %call_id,
            run_id = %run_id,
            transport = channel.as_ref().map_or("default", ContactChannel::transport),
            "creating contact request"
        );

        let spec = ContactSpec::new(message).with_channel(channel);
        let store = self.backend.contacts();
        store
            .add(ContactRecord::new(run_id, call_id.clone(), spec))
            .await?;

        self.wait_for_resolution(store.as_ref(), &call_id, cancel)
            .await
    }

    /// Wrap [`HumanLayer::request_contact`] as a tool.
    ///
    /// `channel` overrides the default channel for this tool only.
    pub fn human_as_tool(&self, channel: Option<ContactChannel>) -> HumanTool {
        let channel = channel.or_else(|| self.contact_channel.clone());
        HumanTool::new(self.clone(), channel)
    }

    async fn wait_for_resolution(
        &self,
        store: &dyn AgentStore<ContactRecord>,
        call_id: &CallId,
        cancel: &CancellationToken,
    ) -> Result<String, HumanLayerError> {
        let started = Instant::now();
        let interval = self.config.poll_interval.to_std();
        let mut polls: u64 = 0;

        loop {
            if cancel.is_cancelled() {
                tracing::warn!(call_id = %call_id, polls, "contact request cancelled");
                return Err(HumanLayerError::Cancelled);
            }

            let record = store.get(call_id).await?;
            polls += 1;
            if record.call_id != *call_id {
                return Err(violation(
                    call_id,
                    format!("asked for {call_id}, store returned {}", record.call_id),
                ));
            }
            if let Some(status) = &record.status {
                return settle(call_id, status, polls);
            }

            let mut wait = interval;
            if let Some(timeout) = self.config.timeout {
                let elapsed = started.elapsed();
                let limit = timeout.to_std();
                if elapsed >= limit {
                    tracing::warn!(call_id = %call_id, polls, %timeout, "contact request timed out");
                    return Err(HumanLayerError::Timeout(timeout));
                }
                wait = wait.min(limit - elapsed);
            }

            tracing::trace!(call_id = %call_id, polls, "contact pending");
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::warn!(call_id = %call_id, polls, "contact request cancelled");
                    return Err(HumanLayerError::Cancelled);
                }
                _ = self.sleeper.sleep(wait) => {}
            }
        }
    }
}

fn settle(call_id: &CallId, status: &ContactStatus, polls: u64) -> Result<String, HumanLayerError> {
    match status.resolution() {
        Ok(Resolution::Responded(response)) => {
            tracing::debug!(call_id = %call_id, polls, "contact resolved");
            Ok(response.to_string())
        }
        Ok(Resolution::Failed(error)) => {
            tracing::warn!(call_id = %call_id, error, "human responded with an error");
            Err(HumanLayerError::HumanResponse(error.to_string()))
        }
        Err(reason) => Err(violation(call_id, reason)),
    }
}

fn violation(call_id: &CallId, reason: String) -> HumanLayerError {
    tracing::warn!(call_id = %call_id, %reason, "store contract violation");
    HumanLayerError::ContractViolation(reason)
}

impl std::fmt::Debug for HumanLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanLayer")
            .field("contact_channel", &self.contact_channel)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
