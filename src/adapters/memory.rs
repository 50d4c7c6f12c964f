//! In-memory image store for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::RenderError;
use crate::platform::{Platform, Purpose};
use crate::ports::{ImageStore, SourceImage};

/// Keeps sources and outputs in maps instead of on disk.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    sources: BTreeMap<(Platform, String), Vec<u8>>,
    present: Vec<Platform>,
    outputs: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    fail_writes: bool,
}

impl MemoryImageStore {
    /// Register a platform directory with no sources yet.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        if !self.present.contains(&platform) {
            self.present.push(platform);
        }
        self
    }

    /// Add a source file for a platform.
    pub fn with_source(mut self, platform: Platform, name: &str, data: Vec<u8>) -> Self {
        self = self.with_platform(platform);
        self.sources.insert((platform, name.to_string()), data);
        self
    }

    /// Make every write fail with an I/O error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Path an output would be stored under.
    pub fn output_path(platform: Platform, purpose: Purpose, file_name: &str) -> PathBuf {
        PathBuf::from(platform.dir_name()).join(purpose.dir_name()).join(file_name)
    }

    /// Bytes written for an output, if any.
    pub fn output(&self, platform: Platform, purpose: Purpose, file_name: &str) -> Option<Vec<u8>> {
        self.outputs.borrow().get(&Self::output_path(platform, purpose, file_name)).cloned()
    }

    /// Number of outputs written so far.
    pub fn output_count(&self) -> usize {
        self.outputs.borrow().len()
    }
}

impl ImageStore for MemoryImageStore {
    fn list_sources(&self, platform: Platform) -> Result<Vec<SourceImage>, RenderError> {
        if !self.present.contains(&platform) {
            return Err(RenderError::MissingInputDirectory {
                path: PathBuf::from(platform.dir_name()),
            });
        }
        // BTreeMap keys are already in name order
        Ok(self
            .sources
            .keys()
            .filter(|(p, _)| *p == platform)
            .map(|(_, name)| SourceImage::from_name(name.clone()))
            .collect())
    }

    fn read(&self, platform: Platform, source: &SourceImage) -> Result<Vec<u8>, RenderError> {
        self.sources.get(&(platform, source.name.clone())).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, source.name.clone()).into()
        })
    }

    fn prepare(&self, platform: Platform, purpose: Purpose) -> Result<PathBuf, RenderError> {
        Ok(PathBuf::from(platform.dir_name()).join(purpose.dir_name()))
    }

    fn write(
        &self,
        platform: Platform,
        purpose: Purpose,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, RenderError> {
        if self.fail_writes {
            return Err(std::io::Error::other("disk full").into());
        }
        let path = Self::output_path(platform, purpose, file_name);
        self.outputs.borrow_mut().insert(path.clone(), data.to_vec());
        Ok(path)
    }
}
