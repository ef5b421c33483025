//! Output destinations
//!
//! Where a generated document or data URL ends up.

use crate::error::WriteError;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Target of a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Destination {
    /// Explicit output file
    File(PathBuf),
    /// Overwrite the input in place
    InPlace(PathBuf),
    /// Returned to the caller for printing
    Stdout,
}

impl Destination {
    /// Explicit path if given, otherwise overwrite `input`
    #[must_use]
    pub fn file_or_in_place(output: Option<&Path>, input: &Path) -> Self {
        match output {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::InPlace(input.to_path_buf()),
        }
    }

    /// Explicit path if given, otherwise stdout
    #[must_use]
    pub fn file_or_stdout(output: Option<&Path>) -> Self {
        output.map_or(Self::Stdout, |path| Self::File(path.to_path_buf()))
    }

    /// File path, if the destination is on disk
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) | Self::InPlace(path) => Some(path),
            Self::Stdout => None,
        }
    }

    /// Write UTF-8 text to the destination file
    ///
    /// `Stdout` is a no-op; the caller prints the text itself.
    ///
    /// # Errors
    /// Returns [`WriteError`] naming the failing path
    pub fn write_text(&self, text: &str) -> Result<(), WriteError> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        std::fs::write(path, text).map_err(|source| WriteError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        Ok(())
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) | Self::InPlace(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inliner_test_utils::TempWorkspace;

    #[test]
    fn defaults_to_in_place() {
        let dest = Destination::file_or_in_place(None, Path::new("index.html"));
        assert_eq!(dest, Destination::InPlace(PathBuf::from("index.html")));
        assert_eq!(dest.to_string(), "index.html");
    }

    #[test]
    fn explicit_output_wins() {
        let dest = Destination::file_or_in_place(Some(Path::new("out.html")), Path::new("index.html"));
        assert_eq!(dest, Destination::File(PathBuf::from("out.html")));
    }

    #[test]
    fn stdout_write_is_noop() {
        let dest = Destination::file_or_stdout(None);
        assert_eq!(dest.path(), None);
        assert!(dest.write_text("ignored").is_ok());
        assert_eq!(dest.to_string(), "<stdout>");
    }

    #[test]
    fn write_text_to_file() {
        let ws = TempWorkspace::new();
        let dest = Destination::File(ws.path("out.txt"));
        dest.write_text("hello").unwrap();
        assert_eq!(ws.read_text("out.txt"), "hello");
    }

    #[test]
    fn write_text_reports_failing_path() {
        let ws = TempWorkspace::new();
        let target = ws.path("missing-dir").join("out.txt");
        let err = Destination::File(target.clone()).write_text("x").unwrap_err();
        assert_eq!(err.path, target);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }
}
