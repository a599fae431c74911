use std::path::PathBuf;

use crate::{consts::consts::STORAGE_KEY, persistence::storage::StorageEngine};

#[derive(Debug, Clone)]
pub struct DirectoryOptions {
    pub restore: bool,
    pub storage_engine: StorageEngine,
    pub storage_key: String,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DirectoryOptions {
    /// Defines whether the canonical sequence is loaded from storage on startup
    pub fn set_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    pub fn set_storage_engine(mut self, storage_engine: StorageEngine) -> Self {
        self.storage_engine = storage_engine;
        self
    }

    /// Shorthand for a file storage engine rooted at `data_directory`
    pub fn set_data_directory(self, data_directory: PathBuf) -> Self {
        self.set_storage_engine(StorageEngine::File(data_directory))
    }

    pub fn set_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        // Defaults to $CWD/data
        Self {
            restore: true,
            storage_engine: StorageEngine::File(PathBuf::from("data")),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
impl DirectoryOptions {
    pub fn new_test() -> Self {
        DirectoryOptions::default().set_storage_engine(StorageEngine::Memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_storage_in_data_directory() {
        let options = DirectoryOptions::default();

        assert!(options.restore);
        assert_eq!(options.storage_key, "employees");
        assert_eq!(
            options.storage_engine,
            StorageEngine::File(PathBuf::from("data"))
        );
    }

    #[test]
    fn builder_overrides_each_option() {
        let options = DirectoryOptions::default()
            .set_restore(false)
            .set_data_directory(PathBuf::from("/tmp/somewhere"))
            .set_storage_key("staff");

        assert!(!options.restore);
        assert_eq!(options.storage_key, "staff");
        assert_eq!(
            options.storage_engine,
            StorageEngine::File(PathBuf::from("/tmp/somewhere"))
        );
    }
}
