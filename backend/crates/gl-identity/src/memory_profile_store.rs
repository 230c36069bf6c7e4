use crate::{ProfileFields, ProfileStore, StoreError, StoreResult};

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

/// In-process document store keyed by `(collection, key)`.
#[derive(Default)]
pub struct MemoryProfileStore {
    documents: Mutex<BTreeMap<(String, String), ProfileFields>>,
    rejecting: AtomicBool,
    put_calls: AtomicUsize,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While rejecting, every write fails with a permission error.
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }

    pub fn document(&self, collection: &str, key: &str) -> Option<ProfileFields> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    pub fn document_count(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        fields: &ProfileFields,
    ) -> StoreResult<()> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);

        if self.rejecting.load(Ordering::SeqCst) {
            return Err(StoreError::rejected(403, "PERMISSION_DENIED"));
        }

        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((collection.to_string(), key.to_string()), fields.clone());
        Ok(())
    }
}
