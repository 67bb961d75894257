//! Symbol artwork with its alignment markers.
//!
//! Each asset is a grayscale ink drawing carrying two reserved pixels: a pure
//! green anchor, where the previous stroke ends, and a pure red connector,
//! where the next stroke begins. Markers are located once, when the artwork
//! is loaded, and the drawing is converted to black ink with alpha coverage.

use std::ops::{Add, Sub};

use image::{Rgba, RgbaImage};

use crate::error::{Error, Marker, Result};
use crate::token::is_special;

pub const ANCHOR_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const CONNECTOR_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A pixel position. Signed so canvas arithmetic can go negative before
/// the final translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Marker positions found in a raw asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub anchor: Option<Point>,
    pub connector: Option<Point>,
}

/// Scan `img` in row-major order for marker pixels.
///
/// When a colour occurs more than once, the last pixel in scan order wins.
pub fn find_markers(img: &RgbaImage) -> Markers {
    let mut markers = Markers::default();
    for (x, y, px) in img.enumerate_pixels() {
        if *px == ANCHOR_COLOR {
            markers.anchor = Some(Point::new(x as i64, y as i64));
        } else if *px == CONNECTOR_COLOR {
            markers.connector = Some(Point::new(x as i64, y as i64));
        }
    }
    markers
}

/// Count pixels of each marker colour: `(anchors, connectors)`.
pub fn count_markers(img: &RgbaImage) -> (usize, usize) {
    img.pixels().fold((0, 0), |(a, c), px| {
        if *px == ANCHOR_COLOR {
            (a + 1, c)
        } else if *px == CONNECTOR_COLOR {
            (a, c + 1)
        } else {
            (a, c)
        }
    })
}

/// ITU-R 601 luma, rounded.
pub fn luma(px: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = px.0;
    let l = (299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000;
    l.min(255) as u8
}

fn is_marker(px: &Rgba<u8>) -> bool {
    *px == ANCHOR_COLOR || *px == CONNECTOR_COLOR
}

/// Convert gray intensity to black ink with alpha `255 - luma`, scaled by
/// the pixel's own alpha. Marker pixels are left untouched.
pub fn gray_to_ink(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        if is_marker(px) {
            continue;
        }
        let coverage = 255 - luma(px) as u32;
        let alpha = coverage * px.0[3] as u32 / 255;
        *px = Rgba([0, 0, 0, alpha as u8]);
    }
}

/// Anchor and connector of an artwork that has both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub anchor: Point,
    pub connector: Point,
}

impl Alignment {
    /// Cursor advance produced by this glyph.
    pub fn advance(&self) -> Point {
        self.connector - self.anchor
    }
}

/// Prepared artwork for one symbol id.
#[derive(Debug, Clone)]
pub struct Artwork {
    symbol: String,
    image: RgbaImage,
    markers: Markers,
}

impl Artwork {
    /// Prepare a raw asset: locate markers, convert ink to alpha and paint
    /// the marker pixels.
    ///
    /// Marker pixels become opaque ink, so they join the strokes of the
    /// neighbouring glyphs, except for special symbols where they are
    /// cleared.
    pub fn from_raw(symbol: &str, raw: RgbaImage) -> Self {
        let markers = find_markers(&raw);
        let mut image = raw;
        gray_to_ink(&mut image);
        let fill = if is_special(symbol) { TRANSPARENT } else { INK };
        for px in image.pixels_mut() {
            if is_marker(px) {
                *px = fill;
            }
        }
        Self {
            symbol: symbol.to_string(),
            image,
            markers,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Both markers, or the first missing one as an error.
    pub fn alignment(&self) -> Result<Alignment> {
        let anchor = self.markers.anchor.ok_or_else(|| self.missing(Marker::Anchor))?;
        let connector = self
            .markers
            .connector
            .ok_or_else(|| self.missing(Marker::Connector))?;
        Ok(Alignment { anchor, connector })
    }

    fn missing(&self, marker: Marker) -> Error {
        Error::MissingAlignmentMarker {
            symbol: self.symbol.clone(),
            marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn raw_glyph() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(4, 3, WHITE);
        img.put_pixel(0, 1, ANCHOR_COLOR);
        img.put_pixel(3, 1, CONNECTOR_COLOR);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 1, Rgba([128, 128, 128, 255]));
        img
    }

    #[test]
    fn luma_weights() {
        assert_eq!(luma(&WHITE), 255);
        assert_eq!(luma(&Rgba([0, 0, 0, 255])), 0);
        assert_eq!(luma(&Rgba([255, 0, 0, 255])), 76);
        assert_eq!(luma(&Rgba([0, 255, 0, 255])), 150);
    }

    #[test]
    fn markers_found_and_painted_as_ink() {
        let art = Artwork::from_raw("a", raw_glyph());
        let align = art.alignment().expect("both markers");
        assert_eq!(align.anchor, Point::new(0, 1));
        assert_eq!(align.connector, Point::new(3, 1));
        assert_eq!(align.advance(), Point::new(3, 0));

        assert_eq!(*art.image().get_pixel(0, 1), INK);
        assert_eq!(*art.image().get_pixel(3, 1), INK);
        assert_eq!(*art.image().get_pixel(1, 1), INK);
        assert_eq!(art.image().get_pixel(2, 1).0[3], 127);
        assert_eq!(art.image().get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn special_symbol_markers_are_cleared() {
        let art = Artwork::from_raw(",", raw_glyph());
        assert_eq!(*art.image().get_pixel(0, 1), TRANSPARENT);
        assert_eq!(*art.image().get_pixel(3, 1), TRANSPARENT);
        assert!(art.alignment().is_ok());
    }

    #[test]
    fn last_marker_in_scan_order_wins() {
        let mut img = raw_glyph();
        img.put_pixel(2, 2, ANCHOR_COLOR);
        img.put_pixel(1, 0, CONNECTOR_COLOR);
        let markers = find_markers(&img);
        assert_eq!(markers.anchor, Some(Point::new(2, 2)));
        assert_eq!(markers.connector, Some(Point::new(3, 1)));
        assert_eq!(count_markers(&img), (2, 2));
    }

    #[test]
    fn missing_connector_is_reported() {
        let mut img = raw_glyph();
        img.put_pixel(3, 1, WHITE);
        let art = Artwork::from_raw("b", img);
        match art.alignment() {
            Err(Error::MissingAlignmentMarker { symbol, marker }) => {
                assert_eq!(symbol, "b");
                assert_eq!(marker, Marker::Connector);
            }
            other => panic!("expected missing marker, got {:?}", other),
        }
    }
}
