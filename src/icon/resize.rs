use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::icon::IconError;

/// Resample `image` to exactly `size` x `size` with a Lanczos3 filter.
///
/// Aspect ratio is not preserved: the image is stretched, never cropped or
/// letterboxed.
pub fn resize_square(image: &RgbImage, size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize { size });
    }
    Ok(imageops::resize(image, size, size, FilterType::Lanczos3))
}
