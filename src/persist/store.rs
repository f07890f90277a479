//! Key→blob storage backends

use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Errors from reading or writing persisted blobs
#[derive(Debug)]
pub enum StoreError {
    /// File system error
    Io(io::Error),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
    /// Key cannot be used as a storage name
    InvalidKey(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::InvalidKey(key) => write!(f, "Invalid store key: {key:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Persistent key→blob storage
pub trait BlobStore {
    /// Fetch a blob; `None` if the key was never saved
    ///
    /// # Errors
    /// Returns `StoreError` if the backend fails.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store a blob, replacing any previous value
    ///
    /// # Errors
    /// Returns `StoreError` if the backend fails.
    fn save(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError>;
}

/// Blobs held in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: FxHashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), blob.to_vec());
        Ok(())
    }
}

/// One `<key>.json` file per blob under a directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Use `root`, creating it if needed
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for DirStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)?) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, blob: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let mut writer = BufWriter::new(fs::File::create(path)?);
        writer.write_all(blob)?;
        writer.flush()?;
        Ok(())
    }
}
