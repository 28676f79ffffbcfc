//! Geometry of the placeholder bottle icon.
//!
//! Every shape is derived from the icon size alone. Coordinates are signed
//! because the neck and cap of the larger icons start above the canvas.

/// An inclusive box of pixels: both `(x0, y0)` and `(x1, y1)` are covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelBox {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        PixelBox { x0, y0, x1, y1 }
    }

    /// Whether `other` lies entirely within this box.
    pub fn contains(&self, other: &PixelBox) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    /// The part of this box that falls on a `width` x `height` canvas, if any.
    pub fn clip(&self, width: u32, height: u32) -> Option<PixelBox> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i64 - 1);
        let y1 = self.y1.min(height as i64 - 1);

        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(PixelBox { x0, y0, x1, y1 })
    }
}

/// Positions of the four bottle shapes for one icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottleLayout {
    pub size: u32,
    pub body: PixelBox,
    pub neck: PixelBox,
    /// Bounding box of the circular cap.
    pub cap: PixelBox,
    pub fill: PixelBox,
}

impl BottleLayout {
    pub fn new(size: u32) -> Self {
        let size_px = size as i64;

        let margin = size_px / 6;
        let body_width = size_px - margin * 2;
        // body_width * 1.5 truncated
        let body_height = body_width * 3 / 2;
        let body_x = margin;
        let body_y = (size_px - body_height).div_euclid(2);
        let body = PixelBox::new(
            body_x,
            body_y,
            body_x + body_width,
            body_y + body_height,
        );

        let neck_width = body_width / 3;
        let neck_height = body_height / 4;
        let neck_x = body_x + (body_width - neck_width) / 2;
        let neck_y = body_y - neck_height;
        let neck = PixelBox::new(neck_x, neck_y, neck_x + neck_width, neck_y + neck_height);

        let cap_radius = neck_width / 2;
        let cap_x = neck_x + neck_width / 2;
        let cap_y = neck_y;
        let cap = PixelBox::new(
            cap_x - cap_radius,
            cap_y - cap_radius,
            cap_x + cap_radius,
            cap_y + cap_radius,
        );

        let fill_height = (body_height as f64 * 0.6) as i64;
        let fill_margin = size_px / 20;
        let fill = PixelBox::new(
            body_x + fill_margin,
            body_y + body_height - fill_height + fill_margin,
            body_x + body_width - fill_margin,
            body_y + body_height - fill_margin,
        );

        BottleLayout {
            size,
            body,
            neck,
            cap,
            fill,
        }
    }
}
