//! Key-value storage persisted as JSON files in a capability-scoped directory.

use crate::task::ports::{KeyValueStorage, StorageError, StorageResult};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{ErrorKind, Write};

const RECORD_EXTENSION: &str = "json";

/// Stores each record as `<key>.json` inside a single directory.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// record, so readers never observe a half-written record.
#[derive(Debug)]
pub struct DirectoryKeyValueStorage {
    dir: Dir,
}

impl DirectoryKeyValueStorage {
    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `path`, creating it and any missing parents first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        match Dir::create_ambient_dir_all(path, ambient_authority()) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => return Err(err.into()),
        }
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        tracing::debug!(%path, "opened task storage directory");
        Ok(Self::new(dir))
    }

    fn replace_record(&self, staging: &str, name: &str, value: &str) -> std::io::Result<()> {
        let mut file = self.dir.create(staging)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);
        self.dir.rename(staging, &self.dir, name)
    }
}

fn record_name(key: &str) -> StorageResult<String> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if !valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{RECORD_EXTENSION}"))
}

impl KeyValueStorage for DirectoryKeyValueStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let name = record_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = record_name(key)?;
        let staging = format!("{name}.tmp");
        if let Err(err) = self.replace_record(&staging, &name, value) {
            if let Err(cleanup) = self.dir.remove_file(&staging)
                && cleanup.kind() != ErrorKind::NotFound
            {
                tracing::warn!(%staging, error = %cleanup, "failed to remove staging file");
            }
            return Err(err.into());
        }
        Ok(())
    }
}
