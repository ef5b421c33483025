//! Binary payloads
//!
//! Raw file content read in one pass, tagged with its source path.

use crate::encoding;
use std::path::{Path, PathBuf};

/// Raw bytes of a source file
///
/// Immutable once read; lives for a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    source: PathBuf,
    data: Vec<u8>,
}

impl BinaryPayload {
    /// Create from bytes and the path they came from
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    /// Read the whole file into memory
    ///
    /// # Errors
    /// Returns the underlying IO error if the file cannot be read
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read payload");
        Ok(Self::new(path, data))
    }

    /// Path the payload was read from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Get reference to bytes
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get content length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Base64 text of the payload
    #[must_use]
    pub fn encode(&self) -> String {
        encoding::encode(&self.data)
    }
}
