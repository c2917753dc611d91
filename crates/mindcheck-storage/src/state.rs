use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON record. `Ok(None)` when the key is absent.
pub fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

pub fn save_state<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, &body)
}
