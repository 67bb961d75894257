//! Raster canvas and whole-image operations used by the compositor.

use image::{imageops, Rgba, RgbaImage};

use crate::artwork::Point;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A growable RGBA buffer with a logical origin and a running cursor.
///
/// Drawing positions are logical; the origin is the pixel position of the
/// logical point `(0, 0)`, so callers can work with coordinates that go
/// negative as long as the origin leaves enough room.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    origin: Point,
    cursor: Point,
}

impl Canvas {
    /// Transparent canvas with the origin at the top-left corner.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_origin(width, height, Point::default())
    }

    pub fn with_origin(width: u32, height: u32, origin: Point) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            origin,
            cursor: Point::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    pub fn advance(&mut self, delta: Point) {
        self.cursor = self.cursor + delta;
    }

    /// Pixel position of a logical point.
    pub fn to_pixel(&self, p: Point) -> Point {
        self.origin + p
    }

    /// Alpha-composite `art` with its top-left corner at logical `top_left`.
    pub fn draw(&mut self, art: &RgbaImage, top_left: Point) {
        let at = self.to_pixel(top_left);
        imageops::overlay(&mut self.image, art, at.x, at.y);
    }

    /// Grow to at least `width` x `height`, keeping existing content.
    pub fn ensure_size(&mut self, width: u32, height: u32) {
        if width > self.width() || height > self.height() {
            self.image = grow(&self.image, width.max(self.width()), height.max(self.height()));
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Bounding box `(x, y, width, height)` of pixels with non-zero alpha.
pub fn content_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crop to the non-transparent bounding box. A fully transparent image is
/// returned unchanged.
pub fn crop_to_content(img: &RgbaImage) -> RgbaImage {
    match content_bounds(img) {
        Some((x, y, w, h)) => imageops::crop_imm(img, x, y, w, h).to_image(),
        None => img.clone(),
    }
}

/// Composite `img` onto an opaque background of the same size.
pub fn matte(img: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(img.width(), img.height(), background);
    imageops::overlay(&mut out, img, 0, 0);
    out
}

/// Copy `img` into a larger transparent buffer at `(0, 0)`.
pub fn grow(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::new(width.max(img.width()), height.max(img.height()));
    imageops::replace(&mut out, img, 0, 0);
    out
}

/// Surround `img` with a white border of `padding` pixels, then extend the
/// right and bottom edges with white up to `target` (if given).
pub fn pad_to(img: &RgbaImage, padding: u32, target: Option<(u32, u32)>) -> RgbaImage {
    let mut width = img.width() + 2 * padding;
    let mut height = img.height() + 2 * padding;
    if let Some((tw, th)) = target {
        width = width.max(tw);
        height = height.max(th);
    }
    let mut out = RgbaImage::from_pixel(width, height, WHITE);
    imageops::overlay(&mut out, img, padding as i64, padding as i64);
    out
}
