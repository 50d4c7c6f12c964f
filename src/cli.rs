//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;
use crate::dimension::Dimension;
use crate::render::RunMode;

/// Batch-resize app screenshots into store feature images and README previews.
#[derive(Parser, Debug)]
#[command(name = "storeshot", version, about)]
pub struct Cli {
    /// Project root containing `assets/screenshots`.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Generate only README display images.
    #[arg(long, visible_alias = "display-only", conflicts_with = "feature_only")]
    pub readme_only: bool,

    /// Generate only store feature images.
    #[arg(long)]
    pub feature_only: bool,

    /// Max width for README images (0 keeps the default).
    #[arg(long, value_name = "PIXELS")]
    pub max_width: Option<u32>,

    /// Android feature image sizes (e.g., 2560x1440 1920x1080).
    #[arg(long, num_args = 1.., value_name = "WxH", conflicts_with = "all_sizes")]
    pub android_sizes: Option<Vec<Dimension>>,

    /// iOS feature image sizes (e.g., 2778x1284 2688x1242).
    #[arg(long, num_args = 1.., value_name = "WxH", conflicts_with = "all_sizes")]
    pub ios_sizes: Option<Vec<Dimension>>,

    /// Generate every known size for both platforms.
    #[arg(long)]
    pub all_sizes: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Write a JSON report of the run to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Which pipelines the flags select.
    #[must_use]
    pub fn mode(&self) -> RunMode {
        if self.feature_only {
            RunMode::FeatureOnly
        } else if self.readme_only {
            RunMode::DisplayOnly
        } else {
            RunMode::All
        }
    }

    /// Settings given on the command line.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            max_display_width: self.max_width,
            android_sizes: self.android_sizes.clone(),
            ios_sizes: self.ios_sizes.clone(),
            all_sizes: self.all_sizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["storeshot"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.mode(), RunMode::All);
        assert!(cli.max_width.is_none());
        assert!(cli.android_sizes.is_none());
        assert!(cli.ios_sizes.is_none());
        assert!(!cli.all_sizes);
        assert!(cli.report.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn size_lists() {
        let cli = Cli::parse_from([
            "storeshot",
            "--android-sizes",
            "2560x1440",
            "1920x1080",
            "--ios-sizes",
            "2778x1284",
        ]);
        let overrides = cli.overrides();
        assert_eq!(
            overrides.android_sizes.unwrap(),
            [Dimension::new(2560, 1440), Dimension::new(1920, 1080)]
        );
        assert_eq!(overrides.ios_sizes.unwrap(), [Dimension::new(2778, 1284)]);
        assert!(!overrides.all_sizes);
    }

    #[test]
    fn mode_flags() {
        assert_eq!(Cli::parse_from(["storeshot", "--readme-only"]).mode(), RunMode::DisplayOnly);
        assert_eq!(Cli::parse_from(["storeshot", "--display-only"]).mode(), RunMode::DisplayOnly);
        assert_eq!(Cli::parse_from(["storeshot", "--feature-only"]).mode(), RunMode::FeatureOnly);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "storeshot",
            "--root",
            "/proj",
            "--feature-only",
            "--max-width",
            "400",
            "--all-sizes",
            "--config",
            "shots.toml",
            "--report",
            "out.json",
            "-v",
        ]);
        assert_eq!(cli.root, PathBuf::from("/proj"));
        assert_eq!(cli.max_width, Some(400));
        assert!(cli.all_sizes);
        assert_eq!(cli.config.as_deref(), Some("shots.toml"));
        assert_eq!(cli.report, Some(PathBuf::from("out.json")));
        assert!(cli.verbose);
        assert_eq!(cli.overrides().max_display_width, Some(400));
    }

    #[test]
    fn rejects_conflicts_and_bad_sizes() {
        assert!(Cli::try_parse_from(["storeshot", "--readme-only", "--feature-only"]).is_err());
        assert!(Cli::try_parse_from(["storeshot", "--all-sizes", "--ios-sizes", "1x1"]).is_err());
        assert!(Cli::try_parse_from(["storeshot", "--ios-sizes", "big"]).is_err());
        assert!(Cli::try_parse_from(["storeshot", "--max-width", "-5"]).is_err());
    }
}
