//! Target platforms and output purposes.

use std::fmt;

use serde::Serialize;

/// App distribution platforms with their own screenshot folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Google Play.
    Android,
    /// Apple App Store.
    Ios,
}

impl Platform {
    /// All platforms in processing order.
    pub const ALL: [Self; 2] = [Self::Android, Self::Ios];

    /// Name of the platform's source directory.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }

    /// Human-readable label for console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an output image is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Low-resolution preview for documentation.
    Display,
    /// Fixed-size store listing image.
    Feature,
}

impl Purpose {
    /// Name of the output subdirectory under the platform directory.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Display => "readme",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("display"),
            Self::Feature => f.write_str("feature"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_names() {
        assert_eq!(Platform::Android.dir_name(), "android");
        assert_eq!(Platform::Ios.dir_name(), "ios");
        assert_eq!(Purpose::Display.dir_name(), "readme");
        assert_eq!(Purpose::Feature.dir_name(), "feature");
    }

    #[test]
    fn labels() {
        assert_eq!(Platform::Ios.to_string(), "iOS");
        assert_eq!(Purpose::Feature.to_string(), "feature");
    }
}
