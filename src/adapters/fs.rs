//! Filesystem image store.
//!
//! Layout under the screenshots directory:
//!
//! ```text
//! <dir>/android/*.png          sources
//! <dir>/android/readme/*.png   display images
//! <dir>/android/feature/*.png  feature images
//! <dir>/ios/...                same for iOS
//! ```

use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::platform::{Platform, Purpose};
use crate::ports::{ImageStore, SourceImage};

/// Image store rooted at a screenshots directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding a platform's source screenshots.
    #[must_use]
    pub fn platform_dir(&self, platform: Platform) -> PathBuf {
        self.root.join(platform.dir_name())
    }

    /// Directory receiving a platform's outputs for one purpose.
    #[must_use]
    pub fn output_dir(&self, platform: Platform, purpose: Purpose) -> PathBuf {
        self.platform_dir(platform).join(purpose.dir_name())
    }
}

fn is_source_png(path: &Path) -> bool {
    let visible = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| !n.starts_with('.'));
    visible && path.extension().is_some_and(|ext| ext == "png") && path.is_file()
}

impl ImageStore for FsImageStore {
    fn list_sources(&self, platform: Platform) -> Result<Vec<SourceImage>, RenderError> {
        let dir = self.platform_dir(platform);
        if !dir.is_dir() {
            return Err(RenderError::MissingInputDirectory { path: dir });
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if !is_source_png(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            } else {
                log::warn!("Skipping non UTF-8 file name: {}", path.display());
            }
        }
        names.sort();
        Ok(names.into_iter().map(SourceImage::from_name).collect())
    }

    fn read(&self, platform: Platform, source: &SourceImage) -> Result<Vec<u8>, RenderError> {
        Ok(std::fs::read(self.platform_dir(platform).join(&source.name))?)
    }

    fn prepare(&self, platform: Platform, purpose: Purpose) -> Result<PathBuf, RenderError> {
        let dir = self.output_dir(platform, purpose);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn write(
        &self,
        platform: Platform,
        purpose: Purpose,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, RenderError> {
        let path = self.output_dir(platform, purpose).join(file_name);
        std::fs::write(&path, data)?;
        Ok(path)
    }
}
