use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageResult, RgbImage};

/// Create a directory and its parents. An existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Encode `image` as a 24-bit RGB PNG at `path`, overwriting any existing file.
/// The parent directory must already exist.
pub fn write_png(image: &RgbImage, path: &Path) -> ImageResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    PngEncoder::new(&mut writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    writer.flush()?;

    Ok(())
}

/// A decoded image along with the color type stored in the file.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
    /// Palette PNGs report `ExtendedColorType::Unknown(bit_depth)` here even
    /// though `image` holds their expanded RGB or RGBA pixels.
    pub original_color: ExtendedColorType,
}

/// Decode an image file, guessing the format from its contents.
pub fn load_source(path: &Path) -> ImageResult<SourceImage> {
    let decoder = image::ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let original_color = decoder.original_color_type();
    let image = DynamicImage::from_decoder(decoder)?;

    Ok(SourceImage {
        image,
        original_color,
    })
}

pub fn load_image(path: &Path) -> ImageResult<DynamicImage> {
    load_source(path).map(|source| source.image)
}
