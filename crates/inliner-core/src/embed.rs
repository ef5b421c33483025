//! Template embedding
//!
//! Splices the base64 text of a binary artifact into every occurrence of a
//! marker inside a UTF-8 template.
//!
//! # Example
//!
//! ```rust,ignore
//! use inliner_core::embed::{embed_file, EmbedRequest};
//!
//! let request = EmbedRequest::new("app.wasm", "index.html");
//! let report = embed_file(&request)?;
//! println!("Embedded WASM into {}", report.output);
//! ```

use crate::error::EmbedError;
use crate::output::Destination;
use crate::payload::BinaryPayload;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Marker replaced by the encoded artifact
pub const DEFAULT_MARKER: &str = "<!-- WASM_BASE64_PLACEHOLDER -->";

/// What to do when the template has no marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingMarker {
    /// Fail without writing anything
    #[default]
    Reject,
    /// Write the template unchanged and log a warning
    Allow,
}

/// Result of a pure substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
    pub document: String,
    pub replacements: usize,
}

/// Replace every occurrence of `marker` in `template` with `encoded`
///
/// An empty marker matches nothing.
#[must_use]
pub fn embed_into_template(template: &str, marker: &str, encoded: &str) -> Embedded {
    let replacements = if marker.is_empty() {
        0
    } else {
        template.matches(marker).count()
    };
    let document = if replacements == 0 {
        template.to_owned()
    } else {
        template.replace(marker, encoded)
    };
    Embedded {
        document,
        replacements,
    }
}

/// Parameters for [`embed_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    pub artifact: PathBuf,
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    pub marker: String,
    pub missing_marker: MissingMarker,
}

impl EmbedRequest {
    /// Request with the default marker, in-place output and strict marker check
    pub fn new(artifact: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            template: template.into(),
            output: None,
            marker: DEFAULT_MARKER.to_owned(),
            missing_marker: MissingMarker::default(),
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_missing_marker(mut self, policy: MissingMarker) -> Self {
        self.missing_marker = policy;
        self
    }

    /// Where the document will be written
    #[must_use]
    pub fn destination(&self) -> Destination {
        Destination::file_or_in_place(self.output.as_deref(), &self.template)
    }
}

/// Outcome of a successful [`embed_file`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedReport {
    pub output: Destination,
    pub replacements: usize,
    pub payload_bytes: usize,
    pub encoded_len: usize,
}

/// Embed the artifact into the template and write the result
///
/// # Errors
/// - [`EmbedError::EmptyMarker`] if the marker is empty
/// - [`EmbedError::Io`] if an input cannot be read or the output written
/// - [`EmbedError::InvalidUtf8`] if the template is not UTF-8
/// - [`EmbedError::MarkerNotFound`] if the marker is absent and the policy
///   is [`MissingMarker::Reject`]; nothing is written in that case
pub fn embed_file(request: &EmbedRequest) -> Result<EmbedReport, EmbedError> {
    if request.marker.is_empty() {
        return Err(EmbedError::EmptyMarker);
    }

    let payload =
        BinaryPayload::read(&request.artifact).map_err(|e| EmbedError::io(&request.artifact, e))?;
    let template = read_template(&request.template)?;

    let encoded = payload.encode();
    let embedded = embed_into_template(&template, &request.marker, &encoded);
    tracing::debug!(
        artifact = %payload.source().display(),
        replacements = embedded.replacements,
        encoded_len = encoded.len(),
        "substituted marker"
    );

    if embedded.replacements == 0 {
        match request.missing_marker {
            MissingMarker::Reject => {
                return Err(EmbedError::marker_not_found(
                    &request.template,
                    &request.marker,
                ));
            }
            MissingMarker::Allow => tracing::warn!(
                template = %request.template.display(),
                marker = %request.marker,
                "marker not found, writing template unchanged"
            ),
        }
    }

    let output = request.destination();
    output.write_text(&embedded.document)?;

    Ok(EmbedReport {
        output,
        replacements: embedded.replacements,
        payload_bytes: payload.len(),
        encoded_len: encoded.len(),
    })
}

fn read_template(path: &Path) -> Result<String, EmbedError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            EmbedError::InvalidUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            EmbedError::io(path, e)
        }
    })
}
