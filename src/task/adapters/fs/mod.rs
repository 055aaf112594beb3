//! Filesystem adapters.

mod directory;

pub use directory::DirectoryKeyValueStorage;
