//! Configuration file loading and the immutable render settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::params::{
    all_sizes, default_sizes, validate_quality, DEFAULT_DISPLAY_QUALITY, DEFAULT_FEATURE_QUALITY,
    DEFAULT_MAX_DISPLAY_WIDTH,
};
use crate::platform::Platform;

/// Default screenshots directory, relative to the project root.
pub const DEFAULT_SCREENSHOTS_DIR: &str = "assets/screenshots";

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Filesystem locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// README display image settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Store feature image settings.
    #[serde(default)]
    pub feature: FeatureConfig,
}

/// Filesystem locations.
#[derive(Debug, Default, Deserialize)]
pub struct PathsConfig {
    /// Screenshots directory; relative paths resolve against the project root.
    pub screenshots_dir: Option<PathBuf>,
}

/// README display image settings.
#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    /// Maximum width of display images.
    pub max_width: Option<u32>,
    /// PNG quality for display images.
    pub quality: Option<u8>,
}

/// Store feature image settings.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureConfig {
    /// PNG quality for feature images.
    pub quality: Option<u8>,
    /// Google Play sizes, as `WIDTHxHEIGHT` strings.
    pub android_sizes: Option<Vec<Dimension>>,
    /// App Store sizes, as `WIDTHxHEIGHT` strings.
    pub ios_sizes: Option<Vec<Dimension>>,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    /// `--max-width`.
    pub max_display_width: Option<u32>,
    /// `--android-sizes`.
    pub android_sizes: Option<Vec<Dimension>>,
    /// `--ios-sizes`.
    pub ios_sizes: Option<Vec<Dimension>>,
    /// `--all-sizes`.
    pub all_sizes: bool,
}

/// Settings the renderer runs with. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    /// Display images wider than this are shrunk to it.
    pub max_display_width: u32,
    /// PNG quality for display images.
    pub display_quality: u8,
    /// PNG quality for feature images.
    pub feature_quality: u8,
    /// Feature sizes for Google Play.
    pub android_sizes: Vec<Dimension>,
    /// Feature sizes for the App Store.
    pub ios_sizes: Vec<Dimension>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_display_width: DEFAULT_MAX_DISPLAY_WIDTH,
            display_quality: DEFAULT_DISPLAY_QUALITY,
            feature_quality: DEFAULT_FEATURE_QUALITY,
            android_sizes: default_sizes(Platform::Android),
            ios_sizes: default_sizes(Platform::Ios),
        }
    }
}

impl RenderConfig {
    /// Feature sizes requested for a platform.
    #[must_use]
    pub fn sizes(&self, platform: Platform) -> &[Dimension] {
        match platform {
            Platform::Android => &self.android_sizes,
            Platform::Ios => &self.ios_sizes,
        }
    }

    /// Check the run-wide settings.
    ///
    /// Feature sizes are not checked here. A size with a zero side fails
    /// only its own outputs when rendered.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        validate_quality(self.display_quality)?;
        validate_quality(self.feature_quality)
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Screenshots directory for a project root.
    #[must_use]
    pub fn screenshots_dir(&self, root: &Path) -> PathBuf {
        match &self.paths.screenshots_dir {
            Some(dir) => root.join(dir),
            None => root.join(DEFAULT_SCREENSHOTS_DIR),
        }
    }

    /// Merge defaults, this file, and command-line overrides.
    ///
    /// `all_sizes` replaces both size lists with every preset. A max width of
    /// zero counts as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged settings are invalid.
    pub fn render_config(&self, overrides: Overrides) -> Result<RenderConfig, String> {
        let defaults = RenderConfig::default();

        let (android_sizes, ios_sizes) = if overrides.all_sizes {
            (all_sizes(Platform::Android), all_sizes(Platform::Ios))
        } else {
            (
                overrides
                    .android_sizes
                    .or_else(|| self.feature.android_sizes.clone())
                    .unwrap_or(defaults.android_sizes),
                overrides
                    .ios_sizes
                    .or_else(|| self.feature.ios_sizes.clone())
                    .unwrap_or(defaults.ios_sizes),
            )
        };

        let config = RenderConfig {
            max_display_width: overrides
                .max_display_width
                .filter(|&w| w > 0)
                .or(self.display.max_width.filter(|&w| w > 0))
                .unwrap_or(defaults.max_display_width),
            display_quality: self.display.quality.unwrap_or(defaults.display_quality),
            feature_quality: self.feature.quality.unwrap_or(defaults.feature_quality),
            android_sizes,
            ios_sizes,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `STORESHOT_CONFIG` environment variable
/// 3. `storeshot.toml` in the project root
#[must_use]
pub fn discover_config_path(explicit: Option<&str>, root: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("STORESHOT_CONFIG") {
        return PathBuf::from(p);
    }

    root.join("storeshot.toml")
}
