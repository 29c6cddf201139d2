use crate::ports::KeyValueStore;
use keyscope_domain::key_inspection::{
    TYPE_HASH, TYPE_LIST, TYPE_NONE, TYPE_SET, TYPE_STRING, TYPE_ZSET,
};
use keyscope_domain::{DomainError, KeyInspection, KeyValue};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct InspectKeyUseCase {
    store: Arc<dyn KeyValueStore>,
    max_elements: usize,
}

impl InspectKeyUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>, max_elements: usize) -> Self {
        Self {
            store,
            max_elements,
        }
    }

    #[instrument(skip(self), name = "inspect_key")]
    pub async fn execute(&self, key: &str) -> Result<KeyInspection, DomainError> {
        if key.is_empty() {
            return Err(DomainError::InvalidInput("key is required".to_string()));
        }

        let key_type = self.store.key_type(key).await?;
        let limit = self.max_elements;

        let value = match key_type.as_str() {
            TYPE_NONE => return Ok(KeyInspection::absent(key)),
            TYPE_STRING => self.store.get_string(key).await?.map(KeyValue::String),
            TYPE_HASH => Some(KeyValue::Hash(self.store.hash_entries(key, limit).await?)),
            TYPE_LIST => Some(KeyValue::List(self.store.list_range(key, limit).await?)),
            TYPE_SET => Some(KeyValue::Set(self.store.set_members(key, limit).await?)),
            TYPE_ZSET => Some(KeyValue::SortedSet(
                self.store.sorted_set_range(key, limit).await?,
            )),
            other => {
                debug!(key_type = other, "No value reader for key type");
                None
            }
        };

        Ok(KeyInspection {
            key: key.to_string(),
            key_type,
            value,
        })
    }
}
