use crate::StoreResult;

use gl_core::FieldValue;

use std::collections::BTreeMap;

use async_trait::async_trait;

pub type ProfileFields = BTreeMap<String, FieldValue>;

/// Managed document database holding one profile document per uid.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write `fields` to `collection/key`. `FieldValue::ServerTimestamp`
    /// fields are assigned by the store.
    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        fields: &ProfileFields,
    ) -> StoreResult<()>;
}
