//! Word compositing.
//!
//! Glyphs are chained anchor-to-connector: each glyph is placed so its anchor
//! sits on the cursor, then the cursor moves by the glyph's
//! `connector - anchor` vector, producing one continuous stroke.

use std::sync::Arc;

use image::RgbaImage;
use orthic_core::canvas::{self, Canvas, WHITE};
use orthic_core::{Config, GlyphAtlas, Point, Result, Token, CAPITAL_MARK, DOUBLE_MARK};
use tracing::warn;

/// Room kept around the planned glyph extents on the scratch canvas.
pub const SCRATCH_MARGIN: i64 = 64;

/// Where a glyph ended up in a composed word, in output pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub symbol: String,
    /// Top-left corner of the glyph artwork.
    pub top_left: Point,
    /// Pixel the glyph's anchor landed on.
    pub anchor: Point,
    /// Cursor after the glyph (its connector position).
    pub connector: Point,
}

/// A rendered word with the geometry that produced it.
#[derive(Debug, Clone)]
pub struct ComposedWord {
    /// Cropped, transparent word image.
    pub image: RgbaImage,
    pub placements: Vec<Placement>,
    /// Symbols skipped for missing alignment markers.
    pub skipped: Vec<String>,
    pub capital: bool,
}

impl ComposedWord {
    fn empty(skipped: Vec<String>) -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            placements: Vec::new(),
            skipped,
            capital: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }
}

struct Draw<'a> {
    image: &'a RgbaImage,
    top_left: Point,
}

/// Renders token sequences with artwork from a [`GlyphAtlas`].
#[derive(Debug, Clone)]
pub struct WordRenderer {
    atlas: Arc<GlyphAtlas>,
    dot_gap: u32,
    capital_gap: u32,
}

impl WordRenderer {
    pub fn new(atlas: Arc<GlyphAtlas>, config: &Config) -> Self {
        Self {
            atlas,
            dot_gap: config.dot_gap,
            capital_gap: config.capital_gap,
        }
    }

    /// Renderer over the same atlas with the mark gaps of `config`.
    pub fn with_config(&self, config: &Config) -> Self {
        Self::new(Arc::clone(&self.atlas), config)
    }

    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Render `tokens` into a tight-cropped image, matted onto white when
    /// `opaque` is set.
    pub fn render_word(&self, tokens: &[Token], opaque: bool) -> Result<RgbaImage> {
        let word = self.compose(tokens)?;
        Ok(if opaque {
            canvas::matte(&word.image, WHITE)
        } else {
            word.image
        })
    }

    /// Composite `tokens` into a transparent, tight-cropped word.
    ///
    /// `Unknown` tokens are skipped. Glyphs without both alignment markers
    /// are skipped with a warning, but still count towards the capital
    /// mark. A token whose artwork is missing fails the whole word.
    pub fn compose(&self, tokens: &[Token]) -> Result<ComposedWord> {
        let mut draws: Vec<Draw> = Vec::new();
        let mut placements = Vec::new();
        let mut skipped = Vec::new();
        let capital = tokens.iter().any(|t| t.capital);
        let mut cursor = Point::default();

        for token in tokens.iter().filter(|t| !t.is_unknown()) {
            let art = self.atlas.get(&token.symbol)?;
            let align = match art.alignment() {
                Ok(a) => a,
                Err(e) => {
                    warn!(symbol = %token.symbol, error = %e, "skipping glyph");
                    skipped.push(token.symbol.clone());
                    continue;
                }
            };

            let top_left = cursor - align.anchor;
            let advance = align.advance();
            draws.push(Draw {
                image: art.image(),
                top_left,
            });
            placements.push(Placement {
                symbol: token.symbol.clone(),
                top_left,
                anchor: cursor,
                connector: cursor + advance,
            });

            if token.double {
                let dot = self.atlas.get(DOUBLE_MARK)?;
                let center_x = cursor.x + advance.x.signum() * (art.width() as i64 / 2);
                draws.push(Draw {
                    image: dot.image(),
                    top_left: Point::new(
                        center_x - dot.width() as i64 / 2,
                        top_left.y + art.height() as i64 + self.dot_gap as i64,
                    ),
                });
            }

            cursor = cursor + advance;
        }

        if draws.is_empty() {
            return Ok(ComposedWord::empty(skipped));
        }

        let (min, max) = extents(&draws);
        let width = (max.x - min.x + 2 * SCRATCH_MARGIN) as u32;
        let height = (max.y - min.y + 2 * SCRATCH_MARGIN) as u32;
        let origin = Point::new(SCRATCH_MARGIN - min.x, SCRATCH_MARGIN - min.y);
        let mut scratch = Canvas::with_origin(width, height, origin);
        for d in &draws {
            scratch.draw(d.image, d.top_left);
        }

        let Some((bx, by, _, _)) = canvas::content_bounds(scratch.image()) else {
            return Ok(ComposedWord::empty(skipped));
        };
        let mut image = canvas::crop_to_content(scratch.image());
        let crop_offset = Point::new(bx as i64, by as i64);
        let to_output = |p: Point| scratch.to_pixel(p) - crop_offset;
        for p in placements.iter_mut() {
            p.top_left = to_output(p.top_left);
            p.anchor = to_output(p.anchor);
            p.connector = to_output(p.connector);
        }

        if capital {
            let (with_mark, shift) = self.append_capital_mark(&image)?;
            image = with_mark;
            for p in placements.iter_mut() {
                p.top_left.x += shift;
                p.anchor.x += shift;
                p.connector.x += shift;
            }
        }

        Ok(ComposedWord {
            image,
            placements,
            skipped,
            capital,
        })
    }

    /// Append the capital mark centred below `word`. Returns the new image
    /// and the horizontal shift applied to the word.
    fn append_capital_mark(&self, word: &RgbaImage) -> Result<(RgbaImage, i64)> {
        let mark = self.atlas.get(CAPITAL_MARK)?;
        let width = word.width().max(mark.width());
        let height = word.height() + self.capital_gap + mark.height();
        let shift = ((width - word.width()) / 2) as i64;

        let mut out = Canvas::new(width, height);
        out.draw(word, Point::new(shift, 0));
        out.draw(
            mark.image(),
            Point::new(
                ((width - mark.width()) / 2) as i64,
                (word.height() + self.capital_gap) as i64,
            ),
        );
        Ok((out.into_image(), shift))
    }
}

/// Top-left and bottom-right (exclusive) corners covering every draw.
fn extents(draws: &[Draw]) -> (Point, Point) {
    let mut min = Point::new(i64::MAX, i64::MAX);
    let mut max = Point::new(i64::MIN, i64::MIN);
    for d in draws {
        min.x = min.x.min(d.top_left.x);
        min.y = min.y.min(d.top_left.y);
        max.x = max.x.max(d.top_left.x + d.image.width() as i64);
        max.y = max.y.max(d.top_left.y + d.image.height() as i64);
    }
    (min, max)
}
