use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use thiserror::Error;

use self::{file::FileStorage, memory::MemoryStorage};

pub mod file;
pub mod memory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to initialize storage: {0}")]
    UnableToInitialize(String),

    #[error("Unable to read item [{0}]: {1}")]
    UnableToReadItem(String, String),

    #[error("Unable to write item [{0}]: {1}")]
    UnableToWriteItem(String, String),

    #[error("Unable to reset storage: {0}")]
    UnableToReset(String),

    #[error("Storage quota exceeded, needed {needed} bytes of {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Stored item [{0}] is corrupt: {1}")]
    Corrupt(String, String),

    #[error("Unable to serialize item [{0}]: {1}")]
    UnableToSerialize(String, String),

    #[error("Storage handle is poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

pub fn io_to_generic_error(error: std::io::Error) -> String {
    format!("{} ({:?})", error, error.kind())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadItemState {
    Found(String),
    NotFound,
}

/// Local, synchronous, string-keyed key-value store. Writes are last-writer-wins.
pub trait Storage {
    /// Called on start-up, should be idempotent
    fn init(&mut self) -> StorageResult<()>;

    fn get_item(&self, key: &str) -> StorageResult<ReadItemState>;

    /// Overwrites any previous value stored under the key
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Drops every stored item
    fn reset(&mut self) -> StorageResult<()>;
}

pub type SharedStorage = Arc<Mutex<dyn Storage + Send + Sync>>;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageEngine {
    /// One file per key inside the given directory
    File(PathBuf),
    /// Kept in process memory, lost on exit
    Memory,
}

impl StorageEngine {
    pub fn get_engine(&self) -> SharedStorage {
        match self {
            StorageEngine::File(path) => Arc::new(Mutex::new(FileStorage::new(path.clone()))),
            StorageEngine::Memory => Arc::new(Mutex::new(MemoryStorage::new())),
        }
    }
}
