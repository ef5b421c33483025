//! Image data URLs
//!
//! Provides [`ImageFormat`], the closed set of image extensions accepted for
//! conversion, and [`DataUrl`], the `data:image/<ext>;base64,<text>` string
//! built from an image file.

use crate::encoding;
use crate::error::{ConvertError, DecodeError};
use crate::output::Destination;
use crate::payload::BinaryPayload;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const SCHEME_PREFIX: &str = "data:image/";
const BASE64_SEPARATOR: &str = ";base64,";

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Svg,
}

impl ImageFormat {
    /// All supported formats
    pub const ALL: [Self; 5] = [Self::Png, Self::Jpg, Self::Jpeg, Self::Gif, Self::Svg];

    /// Match a file extension, ignoring case and a leading dot
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Format of a path, judged by its extension
    ///
    /// # Errors
    /// Returns [`ConvertError::UnsupportedFormat`] with the lowercase
    /// extension (empty if there is none)
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or(ConvertError::UnsupportedFormat(ext))
    }

    /// Lowercase extension
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Svg => "svg",
        }
    }

    /// MIME type as written into the data URL
    ///
    /// The subtype is the extension verbatim, so `svg` yields `image/svg`
    /// and `jpg` yields `image/jpg`.
    #[must_use]
    pub fn mime_type(self) -> String {
        format!("image/{}", self.extension())
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `data:image/<ext>;base64,<text>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    format: ImageFormat,
    encoded: String,
}

impl DataUrl {
    /// Build from raw image bytes
    #[must_use]
    pub fn from_bytes(format: ImageFormat, bytes: &[u8]) -> Self {
        Self {
            format,
            encoded: encoding::encode(bytes),
        }
    }

    #[inline]
    #[must_use]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Base64 part of the URL
    #[inline]
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Recover the original image bytes
    ///
    /// # Errors
    /// Returns error if the base64 part is malformed
    pub fn decode_payload(&self) -> Result<Vec<u8>, DecodeError> {
        encoding::decode(&self.encoded)
    }
}

impl Display for DataUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data:{}{BASE64_SEPARATOR}{}",
            self.format.mime_type(),
            self.encoded
        )
    }
}

impl FromStr for DataUrl {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(SCHEME_PREFIX)
            .ok_or(DecodeError::MissingPrefix(SCHEME_PREFIX))?;
        let (subtype, encoded) = rest
            .split_once(BASE64_SEPARATOR)
            .ok_or(DecodeError::NotBase64)?;
        let format = ImageFormat::ALL
            .into_iter()
            .find(|format| format.extension() == subtype)
            .ok_or_else(|| DecodeError::UnsupportedFormat(subtype.to_owned()))?;
        encoding::decode(encoded)?;
        Ok(Self {
            format,
            encoded: encoded.to_owned(),
        })
    }
}

impl Serialize for DataUrl {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Read an image file and build its data URL
///
/// The extension is checked before the file is opened.
///
/// # Errors
/// - [`ConvertError::UnsupportedFormat`] if the extension is not supported
/// - [`ConvertError::Io`] if the file cannot be read
pub fn image_to_data_url(image: &Path) -> Result<DataUrl, ConvertError> {
    let format = ImageFormat::from_path(image)?;
    let payload = BinaryPayload::read(image).map_err(|e| ConvertError::io(image, e))?;
    Ok(DataUrl::from_bytes(format, payload.data()))
}

/// Parameters for [`convert_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub image: PathBuf,
    pub output: Option<PathBuf>,
}

impl ConvertRequest {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            output: None,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Outcome of a successful [`convert_file`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    pub output: Destination,
    pub format: ImageFormat,
    pub data_url: DataUrl,
}

/// Convert an image and write the URL to the requested output file
///
/// Without an output path the URL is only returned, for the caller to print.
/// On any error no output file is created or modified.
///
/// # Errors
/// Same as [`image_to_data_url`], plus [`ConvertError::Io`] on write failure
pub fn convert_file(request: &ConvertRequest) -> Result<ConvertReport, ConvertError> {
    let data_url = image_to_data_url(&request.image)?;
    let output = Destination::file_or_stdout(request.output.as_deref());
    output.write_text(&data_url.to_string())?;
    Ok(ConvertReport {
        output,
        format: data_url.format(),
        data_url,
    })
}
