//! Image store port: where source screenshots come from and outputs go.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::RenderError;
use crate::platform::{Platform, Purpose};

/// Identity of one source screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceImage {
    /// File name including extension (e.g., `"android-1.png"`).
    pub name: String,
    /// File name without extension (e.g., `"android-1"`).
    pub stem: String,
}

impl SourceImage {
    /// Build a source identity from a file name.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let stem = name.rsplit_once('.').map_or(name.as_str(), |(stem, _)| stem).to_string();
        Self { name, stem }
    }
}

/// Reads source screenshots and stores rendered outputs.
pub trait ImageStore {
    /// List the platform's source screenshots in sorted file-name order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingInputDirectory`] if the platform has no
    /// source directory.
    fn list_sources(&self, platform: Platform) -> Result<Vec<SourceImage>, RenderError>;

    /// Read the encoded bytes of a source screenshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn read(&self, platform: Platform, source: &SourceImage) -> Result<Vec<u8>, RenderError>;

    /// Make sure the output location for a platform and purpose exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be created.
    fn prepare(&self, platform: Platform, purpose: Purpose) -> Result<PathBuf, RenderError>;

    /// Store an encoded output image and return where it went.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn write(
        &self,
        platform: Platform,
        purpose: Purpose,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, RenderError>;
}
