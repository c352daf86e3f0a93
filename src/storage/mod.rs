//! String key-value persistence for tallies and match history.
//!
//! The game only ever talks to the `Store` trait; `FileStore` backs the
//! desktop build and `MemoryStore` backs tests and `--no-persist` runs.

mod file;
mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::fmt;

/// Errors raised by a store backend
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    Io(std::io::Error),
    /// The backing file is not a JSON object of strings
    Corrupt(serde_json::Error),
}

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "storage I/O error: {}", err),
            StoreError::Corrupt(err) => write!(f, "storage data is corrupt: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err)
    }
}

/// A string-valued key-value store
pub trait Store {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
