use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::PathBuf,
};

use super::{io_to_generic_error, ReadItemState, Storage, StorageError, StorageResult};

pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn get_temporary_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!(".{}.json.tmp", key))
    }
}

impl Storage for FileStorage {
    #[tracing::instrument(skip(self))]
    fn init(&mut self) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path)
            .map_err(|e| StorageError::UnableToInitialize(io_to_generic_error(e)))
    }

    #[tracing::instrument(skip(self))]
    fn get_item(&self, key: &str) -> StorageResult<ReadItemState> {
        let mut file = match File::open(self.get_path(key)) {
            Ok(file) => file,
            Err(err) => match err.kind() {
                std::io::ErrorKind::NotFound => return Ok(ReadItemState::NotFound),
                _ => {
                    return Err(StorageError::UnableToReadItem(
                        key.to_string(),
                        io_to_generic_error(err),
                    ))
                }
            },
        };

        let mut contents = String::new();

        file.read_to_string(&mut contents)
            .map_err(|e| StorageError::UnableToReadItem(key.to_string(), io_to_generic_error(e)))?;

        Ok(ReadItemState::Found(contents))
    }

    // The value is written next to the target then renamed over it, readers
    // either see the previous value or the new one
    #[tracing::instrument(skip(self, value))]
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let temporary_path = self.get_temporary_path(key);

        let write_error =
            |e: std::io::Error| StorageError::UnableToWriteItem(key.to_string(), io_to_generic_error(e));

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temporary_path)
            .map_err(write_error)?;

        file.write_all(value.as_bytes()).map_err(write_error)?;
        file.sync_all().map_err(write_error)?;

        fs::rename(&temporary_path, self.get_path(key)).map_err(write_error)
    }

    fn reset(&mut self) -> StorageResult<()> {
        match fs::remove_dir_all(&self.base_path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(StorageError::UnableToReset(io_to_generic_error(err))),
        }

        self.init()
    }
}
