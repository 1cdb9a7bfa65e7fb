// src/local_store.rs
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::warn;

use crate::errors::ServerError;

/// Flat string key -> string value store, one `<key>.json` file per key.
///
/// Values survive restarts. Each write goes through its own temp file, so a
/// reader always sees one complete value; racing writers on the same key
/// can lose an update, and the last rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store nested under this one, e.g. per-user state.
    pub fn scoped(&self, name: &str) -> Self {
        Self::new(self.dir.join(name))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// Missing keys and unreadable files both read as `None`.
    pub fn get_item(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "local store read failed");
                None
            }
        }
    }

    /// Whole-value replace through a temp file and rename.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let path = self.path_for(key);

        let write = || -> io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            let mut tmp = NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        };

        write().map_err(|e| {
            warn!(path = %path.display(), error = %e, "local store write failed");
            ServerError::InternalError
        })
    }
}
