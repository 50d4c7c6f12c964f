//! Batch rendering of display and feature images.

use chrono::Utc;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

use crate::config::RenderConfig;
use crate::dimension::Dimension;
use crate::enhance::enhance_for_display;
use crate::error::RenderError;
use crate::output::{encode_png, feature_filename};
use crate::planner::{plan_display, plan_placement, PlacementPlan, PAD_BACKGROUND};
use crate::platform::{Platform, Purpose};
use crate::ports::{ImageStore, SourceImage};
use crate::report::{BatchReport, Failure, RunReport, WrittenImage};

/// Which pipelines a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Display images, then feature images.
    All,
    /// README display images only.
    DisplayOnly,
    /// Store feature images only.
    FeatureOnly,
}

impl RunMode {
    fn purposes(self) -> &'static [Purpose] {
        match self {
            Self::All => &[Purpose::Display, Purpose::Feature],
            Self::DisplayOnly => &[Purpose::Display],
            Self::FeatureOnly => &[Purpose::Feature],
        }
    }
}

fn natural_size(image: &DynamicImage) -> Dimension {
    image.dimensions().into()
}

/// Resize and pad a decoded source according to a placement plan.
///
/// Identity plans return the source unchanged. Padded plans produce an RGB
/// canvas filled with [`PAD_BACKGROUND`].
#[must_use]
pub fn compose_feature(image: &DynamicImage, plan: &PlacementPlan) -> DynamicImage {
    if plan.is_identity(natural_size(image)) {
        return image.clone();
    }

    let resized = image.resize_exact(plan.resized.width, plan.resized.height, FilterType::Lanczos3);
    if !plan.needs_padding() {
        return resized;
    }

    let mut canvas =
        RgbImage::from_pixel(plan.target.width, plan.target.height, Rgb(PAD_BACKGROUND));
    imageops::replace(
        &mut canvas,
        &resized.to_rgb8(),
        i64::from(plan.offset.0),
        i64::from(plan.offset.1),
    );
    DynamicImage::ImageRgb8(canvas)
}

/// Shrink a decoded source to `size` if needed, then enhance it for display.
#[must_use]
pub fn compose_display(image: &DynamicImage, size: Dimension) -> DynamicImage {
    if natural_size(image) == size {
        enhance_for_display(image)
    } else {
        enhance_for_display(&image.resize_exact(size.width, size.height, FilterType::Lanczos3))
    }
}

/// Runs the display and feature pipelines against an image store.
pub struct Renderer {
    config: RenderConfig,
    store: Box<dyn ImageStore>,
}

impl Renderer {
    /// Create a renderer with fixed settings.
    #[must_use]
    pub fn new(config: RenderConfig, store: Box<dyn ImageStore>) -> Self {
        Self { config, store }
    }

    /// Settings this renderer runs with.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Run the selected pipelines for every platform.
    ///
    /// Per-image failures are recorded in the report, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if an output location cannot be prepared.
    pub fn run(&self, mode: RunMode) -> Result<RunReport, RenderError> {
        let mut batches = Vec::new();
        for &purpose in mode.purposes() {
            log::info!("Processing {purpose} images...");
            for platform in Platform::ALL {
                batches.push(self.render_batch(platform, purpose)?);
            }
        }

        Ok(RunReport { generated_at: Utc::now(), config: self.config.clone(), batches })
    }

    /// Render one platform's display or feature images.
    ///
    /// A platform without a source directory yields a skipped batch. The
    /// output location is only created once sources have been found.
    ///
    /// # Errors
    ///
    /// Returns an error if the output location cannot be prepared.
    pub fn render_batch(
        &self,
        platform: Platform,
        purpose: Purpose,
    ) -> Result<BatchReport, RenderError> {
        let mut report = BatchReport::new(platform, purpose);
        let sources = match self.store.list_sources(platform) {
            Ok(sources) => sources,
            Err(e) => {
                log::warn!("{e}");
                report.skipped = Some(e.to_string());
                return Ok(report);
            }
        };
        log::info!("Found {} {platform} screenshots", sources.len());

        let dir = self.store.prepare(platform, purpose)?;
        log::debug!("Output directory: {}", dir.display());

        match purpose {
            Purpose::Display => self.render_display(platform, &sources, &mut report),
            Purpose::Feature => self.render_features(platform, &sources, &mut report),
        }
        Ok(report)
    }

    fn decode(
        &self,
        platform: Platform,
        source: &SourceImage,
    ) -> Result<DynamicImage, RenderError> {
        let data = self.store.read(platform, source)?;
        image::load_from_memory(&data)
            .map_err(|e| RenderError::Decode { name: source.name.clone(), message: e.to_string() })
    }

    fn render_display(
        &self,
        platform: Platform,
        sources: &[SourceImage],
        report: &mut BatchReport,
    ) {
        for source in sources {
            match self.display_one(platform, source) {
                Ok(written) => {
                    log::info!(
                        "{}: {} -> {}",
                        source.name,
                        written.source_size,
                        written.output_size
                    );
                    report.written.push(written);
                }
                Err(e) => {
                    log::error!("Failed to process {}: {e}", source.name);
                    report.failures.push(Failure::new(&source.name, None, &e));
                }
            }
        }
    }

    fn display_one(
        &self,
        platform: Platform,
        source: &SourceImage,
    ) -> Result<WrittenImage, RenderError> {
        let image = self.decode(platform, source)?;
        let source_size = natural_size(&image);
        let size = plan_display(source_size, self.config.max_display_width)?;

        let out = compose_display(&image, size);
        let data = encode_png(&out, self.config.display_quality, &source.name)?;
        let output = self.store.write(platform, Purpose::Display, &source.name, &data)?;

        Ok(WrittenImage {
            source: source.name.clone(),
            output,
            source_size,
            output_size: natural_size(&out),
            plan: None,
        })
    }

    /// One output per (source, requested size) pair.
    fn render_features(
        &self,
        platform: Platform,
        sources: &[SourceImage],
        report: &mut BatchReport,
    ) {
        let sizes = self.config.sizes(platform);

        for source in sources {
            let image = match self.decode(platform, source) {
                Ok(image) => image,
                Err(e) => {
                    log::error!("Failed to decode {} for {platform} features: {e}", source.name);
                    for &size in sizes {
                        report.failures.push(Failure::new(&source.name, Some(size), &e));
                    }
                    continue;
                }
            };

            for &size in sizes {
                match self.feature_one(platform, source, &image, size) {
                    Ok(written) => {
                        log::info!("{platform} {size}: {}", written.output.display());
                        report.written.push(written);
                    }
                    Err(e) => {
                        log::error!(
                            "Failed to create {platform} feature {size} for {}: {e}",
                            source.name
                        );
                        report.failures.push(Failure::new(&source.name, Some(size), &e));
                    }
                }
            }
        }
    }

    fn feature_one(
        &self,
        platform: Platform,
        source: &SourceImage,
        image: &DynamicImage,
        target: Dimension,
    ) -> Result<WrittenImage, RenderError> {
        let source_size = natural_size(image);
        let plan = plan_placement(source_size, target)?;
        log::debug!(
            "{}: {source_size} -> {} at ({}, {}) on {target}",
            source.name,
            plan.resized,
            plan.offset.0,
            plan.offset.1
        );

        let out = compose_feature(image, &plan);
        let file_name = feature_filename(&source.stem, target);
        let data = encode_png(&out, self.config.feature_quality, &file_name)?;
        let output = self.store.write(platform, Purpose::Feature, &file_name, &data)?;

        Ok(WrittenImage {
            source: source.name.clone(),
            output,
            source_size,
            output_size: natural_size(&out),
            plan: Some(plan),
        })
    }
}
