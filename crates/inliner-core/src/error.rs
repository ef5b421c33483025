//! Error types for inlining operations
//!
//! Provides error handling for:
//! - Embed operations (artifact + template → document)
//! - Convert operations (image → data URL)
//! - Decode operations (base64 text → bytes)

use std::path::PathBuf;

/// Errors while decoding base64 text or parsing a data URL
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Text is not valid standard base64
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Data URL does not start with the `data:image/` scheme prefix
    #[error("not an image data URL: missing '{0}' prefix")]
    MissingPrefix(&'static str),

    /// Data URL has no `;base64,` separator
    #[error("data URL is not base64-encoded")]
    NotBase64,

    /// Data URL names a MIME subtype outside the supported set
    #[error("unsupported image format in data URL: '{0}'")]
    UnsupportedFormat(String),
}

/// IO error writing an output file
#[derive(Debug, thiserror::Error)]
#[error("io error writing {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Errors during template embedding
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// IO error reading an input or writing the output
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template is not valid UTF-8 text
    #[error("template {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    /// Template has no occurrence of the marker
    #[error("marker '{marker}' not found in {path}")]
    MarkerNotFound { path: PathBuf, marker: String },

    /// Marker text is empty
    #[error("marker must not be empty")]
    EmptyMarker,
}

impl EmbedError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create marker-not-found error for path
    pub fn marker_not_found(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            path: path.into(),
            marker: marker.into(),
        }
    }
}

impl From<WriteError> for EmbedError {
    fn from(err: WriteError) -> Self {
        Self::io(err.path, err.source)
    }
}

/// Errors during image conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Extension is not in the supported image set
    #[error("unsupported image format: '{0}'")]
    UnsupportedFormat(String),

    /// IO error reading the image or writing the output
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<WriteError> for ConvertError {
    fn from(err: WriteError) -> Self {
        Self::io(err.path, err.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display() {
        let err = ConvertError::UnsupportedFormat("bmp".to_string());
        assert_eq!(err.to_string(), "unsupported image format: 'bmp'");
    }

    #[test]
    fn marker_not_found_display() {
        let err = EmbedError::marker_not_found("index.html", "<!-- X -->");
        assert_eq!(err.to_string(), "marker '<!-- X -->' not found in index.html");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = EmbedError::io(
            "missing.wasm",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("io error on missing.wasm"));
        assert!(err.source().is_some());
    }

    #[test]
    fn write_error_converts_to_io_variants() {
        let write = || WriteError {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(matches!(
            EmbedError::from(write()),
            EmbedError::Io { path, .. } if path == PathBuf::from("out.txt")
        ));
        assert!(matches!(
            ConvertError::from(write()),
            ConvertError::Io { path, .. } if path == PathBuf::from("out.txt")
        ));
    }
}
