//! inliner core
//!
//! Base64 inlining of binary assets into text documents.
//!
//! # Core Concepts
//!
//! - [`BinaryPayload`]: Raw bytes of a source file
//! - [`embed_file`]: Splice a WASM module into every marker of a template
//! - [`image_to_data_url`] / [`DataUrl`]: `data:image/<ext>;base64,...` strings
//! - [`Destination`]: Output file, in-place overwrite, or stdout
//!
//! # Example
//!
//! ```rust,ignore
//! use inliner_core::{convert_file, ConvertRequest};
//!
//! let report = convert_file(&ConvertRequest::new("icons/merge.png"))?;
//! println!("{}", report.data_url);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod data_url;
pub mod embed;
pub mod encoding;
pub mod error;
pub mod output;
pub mod payload;

// Re-exports
pub use data_url::{convert_file, image_to_data_url, ConvertReport, ConvertRequest, DataUrl, ImageFormat};
pub use embed::{
    embed_file, embed_into_template, EmbedReport, EmbedRequest, Embedded, MissingMarker,
    DEFAULT_MARKER,
};
pub use error::{ConvertError, DecodeError, EmbedError, WriteError};
pub use output::Destination;
pub use payload::BinaryPayload;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
