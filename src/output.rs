//! Output file naming and PNG encoding.

use std::io::Cursor;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageFormat};

use crate::dimension::Dimension;
use crate::error::RenderError;

/// Qualities at or above this use default compression; below it, best.
const HIGH_QUALITY: u8 = 90;

/// Check that the image library can both read and write PNG.
///
/// # Errors
///
/// Returns [`RenderError::MissingCodec`] if either direction is disabled.
pub fn ensure_png_support() -> Result<(), RenderError> {
    let png = ImageFormat::Png;
    if png.reading_enabled() && png.writing_enabled() {
        Ok(())
    } else {
        Err(RenderError::MissingCodec("PNG".to_string()))
    }
}

/// Name of a feature image: `{stem}_{width}x{height}.png`.
#[must_use]
pub fn feature_filename(stem: &str, size: Dimension) -> String {
    format!("{stem}_{size}.png")
}

/// PNG compression effort for a quality setting.
///
/// PNG is lossless, so quality only trades encode time against file size.
/// Lower qualities are lightweight previews and get the smallest files.
#[must_use]
pub fn compression_for_quality(quality: u8) -> CompressionType {
    if quality >= HIGH_QUALITY {
        CompressionType::Default
    } else {
        CompressionType::Best
    }
}

/// Encode an image as PNG bytes.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the encoder rejects the image.
pub fn encode_png(image: &DynamicImage, quality: u8, name: &str) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    let encoder = PngEncoder::new_with_quality(
        &mut buf,
        compression_for_quality(quality),
        FilterType::Adaptive,
    );
    image.write_with_encoder(encoder).map_err(|e| RenderError::Encode {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_codec_available() {
        assert!(ensure_png_support().is_ok());
    }

    #[test]
    fn feature_name() {
        assert_eq!(
            feature_filename("android-1", Dimension::new(1080, 2400)),
            "android-1_1080x2400.png"
        );
    }

    #[test]
    fn compression_mapping() {
        assert!(matches!(compression_for_quality(95), CompressionType::Default));
        assert!(matches!(compression_for_quality(85), CompressionType::Best));
    }

    #[test]
    fn encodes_png() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_png(&img, 95, "x.png").unwrap();
        assert_eq!(&data[0..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 10));
    }

    #[test]
    fn encodes_rgba_png() {
        let img = DynamicImage::new_rgba8(3, 5);
        let data = encode_png(&img, 85, "y.png").unwrap();
        assert_eq!(&data[0..8], &PNG_MAGIC);
    }
}
