#![deny(missing_docs)]
//! In-memory implementation of humanlayer-core's contact store.
//!
//! Records live in a `HashMap` behind a `RwLock`, keyed by call id.
//! The human side of the exchange is [`MemoryContactStore::respond`]:
//! whatever surface shows requests to people (a console prompt, a test)
//! calls it to resolve a record, exactly once.

use async_trait::async_trait;
use humanlayer_core::contact::{ContactRecord, ContactStatus};
use humanlayer_core::error::StoreError;
use humanlayer_core::id::CallId;
use humanlayer_core::store::{AgentBackend, AgentStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory contact store backed by a `HashMap` behind a `RwLock`.
///
/// Suitable for testing, prototyping, and single-process use where
/// records need not survive a restart.
pub struct MemoryContactStore {
    records: RwLock<HashMap<CallId, ContactRecord>>,
}

impl MemoryContactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a pending record.
    ///
    /// Fails with `NotFound` for an unknown id and with `Conflict` if the
    /// record already has a status or `status` is malformed.
    pub async fn respond(&self, call_id: &CallId, status: ContactStatus) -> Result<(), StoreError> {
        if let Err(reason) = status.resolution() {
            return Err(StoreError::Conflict(format!("{call_id}: {reason}")));
        }
        let mut records = self.records.write().await;
        let record = records
            .get_mut(call_id)
            .ok_or_else(|| StoreError::not_found(call_id.as_str()))?;
        if record.status.is_some() {
            return Err(StoreError::Conflict(format!("{call_id} already resolved")));
        }
        tracing::debug!(call_id = %call_id, "contact resolved");
        record.status = Some(status);
        Ok(())
    }

    /// Records still waiting on a human, ordered by call id.
    pub async fn pending(&self) -> Vec<ContactRecord> {
        let records = self.records.read().await;
        let mut pending: Vec<ContactRecord> = records
            .values()
            .filter(|r| r.status.is_none())
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.call_id.as_str().cmp(b.call_id.as_str()));
        pending
    }

    /// Number of records, pending or resolved.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentStore<ContactRecord> for MemoryContactStore {
    async fn add(&self, record: ContactRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.call_id) {
            return Err(StoreError::Conflict(format!(
                "{} already exists",
                record.call_id
            )));
        }
        tracing::debug!(call_id = %record.call_id, run_id = %record.run_id, "contact stored");
        records.insert(record.call_id.clone(), record);
        Ok(())
    }

    async fn get(&self, call_id: &CallId) -> Result<ContactRecord, StoreError> {
        let records = self.records.read().await;
        records
            .get(call_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(call_id.as_str()))
    }
}

/// A backend whose stores all live in process memory.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    contacts: Arc<MemoryContactStore>,
}

impl MemoryBackend {
    /// Create a backend with an empty contact store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The concrete contact store, for the human side to resolve records.
    pub fn contact_store(&self) -> Arc<MemoryContactStore> {
        Arc::clone(&self.contacts)
    }
}

impl AgentBackend for MemoryBackend {
    fn contacts(&self) -> Arc<dyn AgentStore<ContactRecord>> {
        self.contacts.clone()
    }
}
