//! Normalizes a decoded source image to opaque RGB.

use image::imageops;
use image::{ColorType, DynamicImage, ExtendedColorType, Rgb, RgbImage, Rgba, RgbaImage};

pub const BACKDROP: Rgb<u8> = Rgb([255, 255, 255]);

/// How a source image stores color and transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Opaque,
    Alpha,
    LumaAlpha,
    /// Palette-indexed in the file. The decoder has already expanded it.
    Palette,
}

impl SourceMode {
    /// Classify a decoded image. `original` is the color type stored in the
    /// file, which is the only place a palette source can still be told apart.
    pub fn of(image: &DynamicImage, original: ExtendedColorType) -> Self {
        if let ExtendedColorType::Unknown(_) = original {
            return SourceMode::Palette;
        }

        match image.color() {
            ColorType::La8 | ColorType::La16 => SourceMode::LumaAlpha,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => SourceMode::Alpha,
            _ => SourceMode::Opaque,
        }
    }

    /// Whether the alpha channel is used as the compositing mask.
    pub fn uses_mask(self) -> bool {
        matches!(self, SourceMode::Alpha | SourceMode::LumaAlpha)
    }
}

/// Convert `image` to opaque RGB.
///
/// RGBA and luminance+alpha sources are composited onto white through their
/// alpha channel. Palette sources are pasted without a mask, so a transparent
/// palette entry keeps its own RGB color.
pub fn flatten(image: &DynamicImage, mode: SourceMode) -> RgbImage {
    if !mode.uses_mask() {
        return image.to_rgb8();
    }

    let [r, g, b] = BACKDROP.0;
    let mut canvas = RgbaImage::from_pixel(image.width(), image.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, &image.to_rgba8(), 0, 0);

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA};

    fn mode_of(image: &DynamicImage) -> SourceMode {
        SourceMode::of(image, image.color().into())
    }

    #[test]
    fn classifies_modes() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let la = DynamicImage::ImageLumaA8(GrayAlphaImage::new(2, 2));

        assert_eq!(mode_of(&rgb), SourceMode::Opaque);
        assert_eq!(mode_of(&rgba), SourceMode::Alpha);
        assert_eq!(mode_of(&la), SourceMode::LumaAlpha);
    }

    #[test]
    fn indexed_original_is_palette() {
        // expanded to RGBA by the decoder because of a transparency chunk
        let expanded = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let mode = SourceMode::of(&expanded, ExtendedColorType::Unknown(8));

        assert_eq!(mode, SourceMode::Palette);
        assert!(!mode.uses_mask());
    }

    #[test]
    fn opaque_source_is_unchanged() {
        let source = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let flat = flatten(&DynamicImage::ImageRgb8(source.clone()), SourceMode::Opaque);
        assert_eq!(flat.as_raw(), source.as_raw());
    }

    #[test]
    fn transparent_pixels_become_white() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let flat = flatten(&DynamicImage::ImageRgba8(source), SourceMode::Alpha);
        assert!(flat.pixels().all(|p| *p == BACKDROP));
    }

    #[test]
    fn opaque_pixels_keep_their_color() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([200, 10, 50, 255]));
        let flat = flatten(&DynamicImage::ImageRgba8(source), SourceMode::Alpha);
        assert!(flat.pixels().all(|p| *p == Rgb([200, 10, 50])));
    }

    #[test]
    fn half_alpha_blends_toward_white() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flat = flatten(&DynamicImage::ImageRgba8(source), SourceMode::Alpha);

        let [r, g, b] = flat.get_pixel(0, 0).0;
        assert!((126..=128).contains(&r), "got {}", r);
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn luma_alpha_uses_alpha_mask() {
        let source = GrayAlphaImage::from_pixel(2, 1, LumaA([0, 0]));
        let flat = flatten(&DynamicImage::ImageLumaA8(source), SourceMode::LumaAlpha);
        assert!(flat.pixels().all(|p| *p == BACKDROP));
    }

    #[test]
    fn palette_ignores_transparency() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 0]));
        let flat = flatten(&DynamicImage::ImageRgba8(source), SourceMode::Palette);
        assert!(flat.pixels().all(|p| *p == Rgb([255, 0, 0])));
    }
}
