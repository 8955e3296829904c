//! The store protocol: where contact records are persisted and read back.

use crate::contact::ContactRecord;
use crate::error::StoreError;
use crate::id::CallId;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence and lookup for one record kind, keyed by call id.
///
/// Implementations:
/// - MemoryContactStore: HashMap (local development, tests)
/// - a hosted API client (production)
///
/// The trait is minimal: create and read. Records are never
/// deleted, and clients never update them; the backend resolves records
/// through its own channel.
#[async_trait]
pub trait AgentStore<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Persist a new record. Ids are never reused, so a second `add`
    /// with the same call id is a caller bug and may be rejected.
    async fn add(&self, record: T) -> Result<(), StoreError>;

    /// Fetch the current state of a record.
    /// Fails with [`StoreError::NotFound`] if no such id exists.
    async fn get(&self, call_id: &CallId) -> Result<T, StoreError>;
}

/// A backend exposing typed stores.
///
/// Only contact records are modeled here; a full backend may expose
/// other record kinds through additional accessors.
pub trait AgentBackend: Send + Sync {
    /// The store holding contact records.
    fn contacts(&self) -> Arc<dyn AgentStore<ContactRecord>>;
}

/// Any `Arc`'d backend is a backend.
impl<B: AgentBackend + ?Sized> AgentBackend for Arc<B> {
    fn contacts(&self) -> Arc<dyn AgentStore<ContactRecord>> {
        (**self).contacts()
    }
}
