use crate::error::StorageError;

/// Raw byte storage addressed by string keys.
///
/// Keys are relative, `/`-separated paths such as `answers/phq9.json`.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written or was deleted.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Reject keys that could escape the store root.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|part| part.is_empty() || part == "." || part == "..");
    if bad {
        return Err(StorageError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}
