use crate::model::employee::Employee;

use super::storage::{ReadItemState, SharedStorage, StorageError, StorageResult};

/// Saves and restores the canonical employee sequence as a single JSON array under one key
pub struct EmployeePersistence {
    storage: SharedStorage,
    key: String,
}

impl EmployeePersistence {
    pub fn new(storage: SharedStorage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn init(&self) -> StorageResult<()> {
        self.storage
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .init()
    }

    /// Missing key is an empty directory, malformed content is an error
    #[tracing::instrument(skip(self), fields(key = %self.key))]
    pub fn try_load(&self) -> StorageResult<Vec<Employee>> {
        let result = self
            .storage
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .get_item(&self.key)?;

        match result {
            ReadItemState::Found(contents) => serde_json::from_str(&contents)
                .map_err(|e| StorageError::Corrupt(self.key.clone(), e.to_string())),
            ReadItemState::NotFound => Ok(vec![]),
        }
    }

    /// Never fails, any storage problem is logged and yields an empty sequence
    pub fn load(&self) -> Vec<Employee> {
        match self.try_load() {
            Ok(employees) => employees,
            Err(e) => {
                log::error!("Unable to load employees, starting empty: {}", e);
                vec![]
            }
        }
    }

    /// Overwrites the stored sequence with `employees`
    #[tracing::instrument(skip(self, employees), fields(key = %self.key, count = employees.len()))]
    pub fn save(&self, employees: &[Employee]) -> StorageResult<()> {
        let serialized = serde_json::to_string(employees)
            .map_err(|e| StorageError::UnableToSerialize(self.key.clone(), e.to_string()))?;

        self.storage
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .set_item(&self.key, &serialized)
    }

    #[cfg(test)]
    pub fn raw(&self) -> StorageResult<Option<String>> {
        let result = self
            .storage
            .lock()
            .map_err(|_| StorageError::Poisoned)?
            .get_item(&self.key)?;

        Ok(match result {
            ReadItemState::Found(contents) => Some(contents),
            ReadItemState::NotFound => None,
        })
    }
}
