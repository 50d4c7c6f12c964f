//! Fit-within placement planning for feature and display images.
//!
//! Everything here is pure integer geometry. The pixel work lives in
//! [`crate::render`].

use serde::Serialize;

use crate::dimension::Dimension;
use crate::error::RenderError;

/// Background used for the padded area of feature images.
pub const PAD_BACKGROUND: [u8; 3] = [0, 0, 0];

/// How a source image is resized and placed on a target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacementPlan {
    /// Canvas size of the output.
    pub target: Dimension,
    /// Size of the source after fit-within scaling.
    pub resized: Dimension,
    /// Top-left corner of the resized image on the canvas.
    pub offset: (u32, u32),
}

impl PlacementPlan {
    /// True when the source already matches the target.
    #[must_use]
    pub fn is_identity(&self, source: Dimension) -> bool {
        source == self.target
    }

    /// True when the resized image leaves canvas area to be filled.
    #[must_use]
    pub fn needs_padding(&self) -> bool {
        self.resized != self.target
    }
}

fn check(dim: Dimension) -> Result<(), RenderError> {
    if dim.is_empty() {
        Err(RenderError::InvalidDimension { width: dim.width, height: dim.height })
    } else {
        Ok(())
    }
}

/// `floor(value * num / den)` without overflow, clamped to at least one pixel.
fn scale_floor(value: u32, num: u32, den: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(num) / u64::from(den);
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Plan how to fit `source` inside `target` without distortion.
///
/// The smaller of the two axis ratios wins. The bound axis lands exactly on
/// the target, the other axis is floored, and the result is centred.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimension`] if either size has a zero
/// component.
pub fn plan_placement(source: Dimension, target: Dimension) -> Result<PlacementPlan, RenderError> {
    check(source)?;
    check(target)?;

    if source == target {
        return Ok(PlacementPlan { target, resized: source, offset: (0, 0) });
    }

    // target.w / source.w <= target.h / source.h, compared without division
    let width_bound = u64::from(target.width) * u64::from(source.height)
        <= u64::from(target.height) * u64::from(source.width);

    let resized = if width_bound {
        Dimension::new(target.width, scale_floor(source.height, target.width, source.width))
    } else {
        Dimension::new(scale_floor(source.width, target.height, source.height), target.height)
    };

    let offset = ((target.width - resized.width) / 2, (target.height - resized.height) / 2);
    Ok(PlacementPlan { target, resized, offset })
}

/// Plan the display-size variant: shrink to `max_width`, never enlarge.
///
/// # Errors
///
/// Returns [`RenderError::InvalidDimension`] if the source has a zero
/// component or `max_width` is zero.
pub fn plan_display(source: Dimension, max_width: u32) -> Result<Dimension, RenderError> {
    check(source)?;
    if max_width == 0 {
        return Err(RenderError::InvalidDimension { width: 0, height: source.height });
    }
    if source.width <= max_width {
        return Ok(source);
    }
    Ok(Dimension::new(max_width, scale_floor(source.height, max_width, source.width)))
}
