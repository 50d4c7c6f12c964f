//! Built-in size presets, quality defaults, and parameter validation.

use crate::dimension::Dimension;
use crate::platform::Platform;

/// Default maximum width of README display images.
pub const DEFAULT_MAX_DISPLAY_WIDTH: u32 = 300;

/// Default PNG quality for display images.
pub const DEFAULT_DISPLAY_QUALITY: u8 = 85;

/// Default PNG quality for feature images.
pub const DEFAULT_FEATURE_QUALITY: u8 = 95;

/// Every Google Play feature size the tool knows about.
pub const ALL_ANDROID_SIZES: [Dimension; 4] = [
    Dimension::new(1920, 1080), // 16:9 landscape
    Dimension::new(1080, 1920), // 9:16 portrait
    Dimension::new(2560, 1440), // QHD 16:9
    Dimension::new(1440, 2560), // QHD 9:16
];

/// Every App Store feature size the tool knows about.
pub const ALL_IOS_SIZES: [Dimension; 4] = [
    Dimension::new(1242, 2688), // 6.5" portrait
    Dimension::new(2688, 1242), // 6.5" landscape
    Dimension::new(1284, 2778), // 6.7" portrait
    Dimension::new(2778, 1284), // 6.7" landscape
];

/// Sizes used when nothing else is requested.
///
/// Android keeps the native capture size; iOS gets the size Apple requires.
#[must_use]
pub fn default_sizes(platform: Platform) -> Vec<Dimension> {
    match platform {
        Platform::Android => vec![Dimension::new(1080, 2400)],
        Platform::Ios => vec![Dimension::new(1284, 2778)],
    }
}

/// Every preset size for a platform.
#[must_use]
pub fn all_sizes(platform: Platform) -> Vec<Dimension> {
    match platform {
        Platform::Android => ALL_ANDROID_SIZES.to_vec(),
        Platform::Ios => ALL_IOS_SIZES.to_vec(),
    }
}

/// Validate a quality setting.
///
/// # Errors
///
/// Returns an error if the quality is outside 1..=100.
pub fn validate_quality(quality: u8) -> Result<(), String> {
    if (1..=100).contains(&quality) {
        Ok(())
    } else {
        Err(format!("Unsupported quality '{quality}'. Valid: 1-100"))
    }
}
