//! Storage medium abstraction.
//!
//! The portal persists each collection as one raw JSON blob under a stable
//! key. The medium only moves raw strings; encoding and decoding live in the
//! record store. Keys partition the medium, and every write fully replaces
//! the prior value for its key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A key-partitioned storage medium with whole-value replacement.
pub trait StorageMedium: Send {
    /// Load the raw value stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `raw` under `key`, fully replacing any prior value.
    fn store(&mut self, key: &str, raw: &str) -> io::Result<()>;
}

/// Durable medium keeping one file per key under a data directory.
#[derive(Debug)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageMedium for FileMedium {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn store(&mut self, key: &str, raw: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), raw)
    }
}

/// Volatile medium used by tests in place of the file-backed one.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: HashMap<String, String>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, raw: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
