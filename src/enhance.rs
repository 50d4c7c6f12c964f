//! Cosmetic enhancement for README display images.

use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// Gaussian radius of the display sharpening pass.
pub const SHARPEN_RADIUS: f32 = 0.5;

/// Strength of the display sharpening pass, in percent.
pub const SHARPEN_PERCENT: u32 = 120;

/// Minimum per-channel difference before sharpening kicks in.
pub const SHARPEN_THRESHOLD: u8 = 3;

/// Contrast multiplier applied after sharpening.
pub const CONTRAST_FACTOR: f32 = 1.1;

fn clamp_channel(value: f32) -> u8 {
    // clamped to 0..=255 first, so the cast is exact
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let out = value.round().clamp(0.0, 255.0) as u8;
    out
}

/// Sharpen by adding back the difference from a Gaussian-blurred copy.
///
/// Channels that differ from the blur by less than `threshold` are left
/// alone. Alpha is never touched.
#[must_use]
pub fn unsharp_mask(image: &RgbaImage, radius: f32, percent: u32, threshold: u8) -> RgbaImage {
    let blurred = imageops::blur(image, radius);
    #[allow(clippy::cast_precision_loss)]
    let amount = percent as f32 / 100.0;

    let mut out = image.clone();
    for (px, soft) in out.pixels_mut().zip(blurred.pixels()) {
        for c in 0..3 {
            let orig = i16::from(px[c]);
            let diff = orig - i16::from(soft[c]);
            if diff.unsigned_abs() >= u16::from(threshold) {
                px[c] = clamp_channel(f32::from(orig) + f32::from(diff) * amount);
            }
        }
    }
    out
}

/// Rounded mean luma of the image (ITU-R 601 weights).
fn mean_luma(image: &RgbaImage) -> f32 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0.0;
    }
    let total: u64 = image
        .pixels()
        .map(|Rgba([r, g, b, _])| {
            (299 * u64::from(*r) + 587 * u64::from(*g) + 114 * u64::from(*b) + 500) / 1000
        })
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total as f64 / count as f64;
    #[allow(clippy::cast_possible_truncation)]
    let mean = mean.round() as f32;
    mean
}

/// Scale each colour channel's distance from the mean luma by `factor`.
#[must_use]
pub fn adjust_contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let pivot = mean_luma(image);
    let mut out = image.clone();
    for px in out.pixels_mut() {
        for c in 0..3 {
            px[c] = clamp_channel(pivot + factor * (f32::from(px[c]) - pivot));
        }
    }
    out
}

/// Apply the fixed sharpen and contrast passes used for display images.
///
/// Images without an alpha channel come back as RGB.
#[must_use]
pub fn enhance_for_display(image: &DynamicImage) -> DynamicImage {
    let rgba = image.to_rgba8();
    let sharpened = unsharp_mask(&rgba, SHARPEN_RADIUS, SHARPEN_PERCENT, SHARPEN_THRESHOLD);
    let enhanced = DynamicImage::ImageRgba8(adjust_contrast(&sharpened, CONTRAST_FACTOR));
    if image.color().has_alpha() {
        enhanced
    } else {
        DynamicImage::ImageRgb8(enhanced.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(8, 8, Rgba([value, value, value, 255]))
    }

    #[test]
    fn flat_image_unchanged_by_sharpen() {
        let img = flat(120);
        assert_eq!(unsharp_mask(&img, 0.5, 120, 3), img);
    }

    #[test]
    fn flat_image_unchanged_by_contrast() {
        // every pixel sits on the pivot
        let img = flat(77);
        assert_eq!(adjust_contrast(&img, 1.1), img);
    }

    #[test]
    fn contrast_spreads_values_around_mean() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([100, 100, 100, 255]));
        img.put_pixel(1, 0, Rgba([200, 200, 200, 255]));
        let out = adjust_contrast(&img, 1.1);
        // pivot 150
        assert_eq!(out.get_pixel(0, 0)[0], 95);
        assert_eq!(out.get_pixel(1, 0)[0], 205);
    }

    #[test]
    fn luma_rounds_per_pixel() {
        // 0.598 and 0.570 each round up to 1
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([2, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 5, 255]));
        assert!((mean_luma(&img) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn contrast_clamps() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        let out = adjust_contrast(&img, 1.1);
        assert_eq!(out.get_pixel(0, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 0)[0], 255);
    }

    #[test]
    fn sharpen_increases_edge_contrast() {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([60, 60, 60, 255]));
        for y in 0..8 {
            for x in 4..8 {
                img.put_pixel(x, y, Rgba([180, 180, 180, 255]));
            }
        }
        let out = unsharp_mask(&img, 0.5, 120, 3);
        assert!(out.get_pixel(3, 4)[0] <= 60);
        assert!(out.get_pixel(4, 4)[0] >= 180);
    }

    #[test]
    fn alpha_untouched() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 200, 30, 128]));
        img.put_pixel(0, 0, Rgba([250, 5, 90, 7]));
        let out = adjust_contrast(&unsharp_mask(&img, 0.5, 120, 3), 1.1);
        assert_eq!(out.get_pixel(0, 0)[3], 7);
        assert_eq!(out.get_pixel(2, 2)[3], 128);
    }

    #[test]
    fn enhance_keeps_colour_type() {
        let rgb = DynamicImage::new_rgb8(6, 6);
        assert!(!enhance_for_display(&rgb).color().has_alpha());
        let rgba = DynamicImage::new_rgba8(6, 6);
        assert!(enhance_for_display(&rgba).color().has_alpha());
    }
}
