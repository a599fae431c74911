use std::collections::HashMap;

use super::{ReadItemState, Storage, StorageError, StorageResult};

/// In-process key-value store. An optional byte quota mirrors the limit
/// browsers put on local storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes that would take the total size of keys and values over `quota` bytes fail
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota: Some(quota),
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(existing_key, _)| existing_key.as_str() != key)
            .map(|(existing_key, value)| existing_key.len() + value.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn init(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn get_item(&self, key: &str) -> StorageResult<ReadItemState> {
        Ok(match self.items.get(key) {
            Some(value) => ReadItemState::Found(value.clone()),
            None => ReadItemState::NotFound,
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();

            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        self.items.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn reset(&mut self) -> StorageResult<()> {
        self.items.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let mut storage = MemoryStorage::new();

        storage.set_item("employees", "[]").unwrap();

        assert_eq!(
            storage.get_item("employees").unwrap(),
            ReadItemState::Found("[]".to_string())
        );
    }

    #[test]
    fn write_over_quota_fails_and_keeps_the_previous_value() {
        // Given a storage holding a value that fits
        let mut storage = MemoryStorage::with_quota(16);

        storage.set_item("employees", "[]").unwrap();

        // When a larger value is written
        let result = storage.set_item("employees", "[1,2,3,4,5,6,7,8]");

        // Then the write fails and the previous value is untouched
        assert!(matches!(
            result,
            Err(StorageError::QuotaExceeded {
                needed: 26,
                quota: 16
            })
        ));

        assert_eq!(
            storage.get_item("employees").unwrap(),
            ReadItemState::Found("[]".to_string())
        );
    }

    #[test]
    fn quota_counts_the_replaced_value_once() {
        let mut storage = MemoryStorage::with_quota(12);

        // "employees" + "[1]" is exactly 12 bytes
        storage.set_item("employees", "[1]").unwrap();
        storage.set_item("employees", "[2]").unwrap();
    }
}
