//! Draws the placeholder bottle icon.

use image::{Rgb, RgbImage};

use crate::icon::IconError;
use crate::icon::layout::{BottleLayout, PixelBox};

pub const BACKGROUND: Rgb<u8> = Rgb([74, 144, 226]);
pub const BOTTLE: Rgb<u8> = Rgb([255, 255, 255]);
pub const CAP: Rgb<u8> = Rgb([255, 200, 200]);
pub const FILL: Rgb<u8> = Rgb([200, 230, 255]);

/// Render the placeholder icon as a `size` x `size` opaque RGB image.
pub fn render(size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize { size });
    }

    let layout = BottleLayout::new(size);
    let mut canvas = RgbImage::from_pixel(size, size, BACKGROUND);

    fill_box(&mut canvas, &layout.body, BOTTLE);
    fill_box(&mut canvas, &layout.neck, BOTTLE);
    fill_ellipse(&mut canvas, &layout.cap, CAP);
    fill_box(&mut canvas, &layout.fill, FILL);

    Ok(canvas)
}

fn fill_box(canvas: &mut RgbImage, area: &PixelBox, color: Rgb<u8>) {
    let Some(visible) = area.clip(canvas.width(), canvas.height()) else {
        return;
    };

    for y in visible.y0..=visible.y1 {
        for x in visible.x0..=visible.x1 {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Fill the ellipse inscribed in `bounds`, covering each pixel whose center
/// lies inside it.
fn fill_ellipse(canvas: &mut RgbImage, bounds: &PixelBox, color: Rgb<u8>) {
    let Some(visible) = bounds.clip(canvas.width(), canvas.height()) else {
        return;
    };

    let center_x = (bounds.x0 + bounds.x1 + 1) as f64 / 2.0;
    let center_y = (bounds.y0 + bounds.y1 + 1) as f64 / 2.0;
    let radius_x = (bounds.x1 - bounds.x0 + 1) as f64 / 2.0;
    let radius_y = (bounds.y1 - bounds.y0 + 1) as f64 / 2.0;

    for y in visible.y0..=visible.y1 {
        let dy = (y as f64 + 0.5 - center_y) / radius_y;
        for x in visible.x0..=visible.x1 {
            let dx = (x as f64 + 0.5 - center_x) / radius_x;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
