//! ScriptedBackend: hands out a shared [`ScriptedStore`].

use super::ScriptedStore;
use crate::contact::ContactRecord;
use crate::store::{AgentBackend, AgentStore};
use std::sync::Arc;

/// A backend whose contact store is a [`ScriptedStore`].
/// Keep the `Arc` from [`ScriptedBackend::store`] to script and inspect it.
#[derive(Default)]
pub struct ScriptedBackend {
    contacts: Arc<ScriptedStore>,
}

impl ScriptedBackend {
    /// Create a backend over a fresh store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying scripted store.
    pub fn store(&self) -> Arc<ScriptedStore> {
        Arc::clone(&self.contacts)
    }
}

impl AgentBackend for ScriptedBackend {
    fn contacts(&self) -> Arc<dyn AgentStore<ContactRecord>> {
        self.contacts.clone()
    }
}
