//! Unified error type for storeshot.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while planning, rendering, or writing screenshots.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A platform's source directory does not exist.
    #[error("Platform directory not found: {}", path.display())]
    MissingInputDirectory {
        /// The directory that was expected to hold source screenshots.
        path: PathBuf,
    },

    /// A source image could not be decoded.
    #[error("Failed to decode {name}: {message}")]
    Decode {
        /// Source file name.
        name: String,
        /// Decoder error message.
        message: String,
    },

    /// A source or target dimension has a zero component.
    #[error("Invalid dimension {width}x{height}")]
    InvalidDimension {
        /// Width component.
        width: u32,
        /// Height component.
        height: u32,
    },

    /// An output image could not be encoded.
    #[error("Failed to encode {name}: {message}")]
    Encode {
        /// Output file name.
        name: String,
        /// Encoder error message.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The imaging library was built without a required codec.
    #[error("{0} codec not available in this build of the image library")]
    MissingCodec(String),
}

impl RenderError {
    /// Stable label for the error kind, used in reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingInputDirectory { .. } => "missing_input_directory",
            Self::Decode { .. } => "decode_failure",
            Self::InvalidDimension { .. } => "invalid_dimension",
            Self::Encode { .. } => "encode_failure",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::MissingCodec(_) => "missing_codec",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels() {
        let err = RenderError::InvalidDimension { width: 0, height: 10 };
        assert_eq!(err.kind(), "invalid_dimension");
        assert_eq!(err.to_string(), "Invalid dimension 0x10");

        let err = RenderError::MissingInputDirectory { path: PathBuf::from("shots/ios") };
        assert_eq!(err.kind(), "missing_input_directory");
        assert!(err.to_string().contains("shots/ios"));
    }

    #[test]
    fn io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: RenderError = io.into();
        assert_eq!(err.kind(), "io");
    }
}
