//! ScriptedStore: records calls and replays queued `get` results.

use crate::contact::ContactRecord;
use crate::error::StoreError;
use crate::id::CallId;
use crate::store::AgentStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A contact store that never persists anything.
///
/// `get` first drains results queued with [`ScriptedStore::push_get`],
/// then falls back to the sticky record set with
/// [`ScriptedStore::get_returns`], then fails with `NotFound`.
#[derive(Default)]
pub struct ScriptedStore {
    added: Mutex<Vec<ContactRecord>>,
    gets: Mutex<Vec<CallId>>,
    add_error: Mutex<Option<StoreError>>,
    queued: Mutex<VecDeque<Result<ContactRecord, StoreError>>>,
    sticky: Mutex<Option<ContactRecord>>,
}

impl ScriptedStore {
    /// Create a store with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` without a queued result return this record.
    pub fn get_returns(&self, record: ContactRecord) {
        *self.sticky.lock().unwrap() = Some(record);
    }

    /// Queue one `get` result ahead of the sticky record.
    pub fn push_get(&self, result: Result<ContactRecord, StoreError>) {
        self.queued.lock().unwrap().push_back(result);
    }

    /// Make the next `add` fail with this error.
    pub fn fail_next_add(&self, err: StoreError) {
        *self.add_error.lock().unwrap() = Some(err);
    }

    /// Every record passed to `add`, in call order.
    pub fn added(&self) -> Vec<ContactRecord> {
        self.added.lock().unwrap().clone()
    }

    /// Every key passed to `get`, in call order.
    pub fn gets(&self) -> Vec<CallId> {
        self.gets.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentStore<ContactRecord> for ScriptedStore {
    async fn add(&self, record: ContactRecord) -> Result<(), StoreError> {
        self.added.lock().unwrap().push(record);
        match self.add_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn get(&self, call_id: &CallId) -> Result<ContactRecord, StoreError> {
        self.gets.lock().unwrap().push(call_id.clone());
        if let Some(result) = self.queued.lock().unwrap().pop_front() {
            return result;
        }
        self.sticky
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::not_found(call_id.as_str()))
    }
}
