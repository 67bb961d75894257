//! Line and page assembly.
//!
//! Word images are laid out left to right on a line canvas of fixed width,
//! wrapping to the next line when a word would overflow it. With bounded
//! pagination a page is closed once it holds `lines_per_page` lines.

use image::RgbaImage;
use orthic_core::canvas::{self, Canvas, WHITE};
use orthic_core::{Config, Point};
use tracing::debug;

/// One finished page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Cropped, white-matted (and padded, if configured) page image.
    pub image: RgbaImage,
    /// Lines started on this page.
    pub lines: usize,
    /// Words placed on this page.
    pub words: usize,
}

/// Incremental page builder. Feed transparent word images with
/// [`PageBuilder::push_word`], then collect pages with
/// [`PageBuilder::finish`].
#[derive(Debug)]
pub struct PageBuilder {
    config: Config,
    canvas: Canvas,
    /// 1-based line number on the current page.
    line: usize,
    /// Tallest word on the current line; not used for placement.
    line_extent: u32,
    words: usize,
    pages: Vec<Page>,
}

impl PageBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            canvas: Self::blank(config),
            line: 1,
            line_extent: 0,
            words: 0,
            pages: Vec::new(),
        }
    }

    fn blank(config: &Config) -> Canvas {
        Canvas::new(config.line_width, config.line_height)
    }

    /// Height of the tallest word placed on the current line so far.
    ///
    /// Informational only: wrapping always advances by the configured
    /// `line_height`, and taller words grow the canvas instead.
    pub fn line_extent(&self) -> u32 {
        self.line_extent
    }

    /// Pages closed so far (the current page is not included).
    pub fn finished_pages(&self) -> usize {
        self.pages.len()
    }

    /// Place one word image. Empty images are ignored.
    pub fn push_word(&mut self, word: &RgbaImage) {
        let (w, h) = word.dimensions();
        if w == 0 || h == 0 {
            return;
        }

        let mut cursor = self.canvas.cursor();
        if cursor.x > 0 && cursor.x + w as i64 > self.config.line_width as i64 {
            self.wrap();
            cursor = self.canvas.cursor();
        }

        // grow rather than clip
        self.canvas
            .ensure_size((cursor.x + w as i64) as u32, (cursor.y + h as i64) as u32);
        self.canvas.draw(word, cursor);
        self.line_extent = self.line_extent.max(h);
        self.words += 1;
        self.canvas.advance(Point::new(
            w as i64 + self.config.word_spacing as i64,
            0,
        ));
    }

    fn wrap(&mut self) {
        let cursor = self.canvas.cursor();
        self.canvas.set_cursor(Point::new(
            0,
            cursor.y + self.config.line_height as i64,
        ));
        self.line += 1;
        self.line_extent = 0;

        if let Some(max_lines) = self.config.lines_per_page {
            if self.line > max_lines {
                self.line -= 1;
                self.close_page();
            }
        }
    }

    fn close_page(&mut self) {
        let canvas = std::mem::replace(&mut self.canvas, Self::blank(&self.config));
        let image = self.finalize(canvas.image());
        debug!(
            page = self.pages.len() + 1,
            lines = self.line,
            words = self.words,
            "page finished"
        );
        self.pages.push(Page {
            image,
            lines: self.line,
            words: self.words,
        });
        self.line = 1;
        self.line_extent = 0;
        self.words = 0;
    }

    fn finalize(&self, image: &RgbaImage) -> RgbaImage {
        let page = canvas::matte(&canvas::crop_to_content(image), WHITE);
        if self.config.page_padding > 0 || self.config.page_size.is_some() {
            canvas::pad_to(&page, self.config.page_padding, self.config.page_size)
        } else {
            page
        }
    }

    /// Close the current page and return all pages.
    pub fn finish(mut self) -> Vec<Page> {
        self.close_page();
        self.pages
    }
}

/// Lay out word images into page images.
pub fn layout_pages<'a, I>(words: I, config: &Config) -> Vec<Page>
where
    I: IntoIterator<Item = &'a RgbaImage>,
{
    let mut builder = PageBuilder::new(config);
    for word in words {
        builder.push_word(word);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn block(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]))
    }

    fn config(lines_per_page: Option<usize>) -> Config {
        Config {
            word_spacing: 10,
            line_height: 30,
            line_width: 100,
            lines_per_page,
            ..Config::default()
        }
    }

    #[test]
    fn words_share_a_line_until_it_overflows() {
        let words = vec![block(40, 20), block(40, 20), block(40, 20)];
        let pages = layout_pages(&words, &config(None));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines, 2);
        assert_eq!(pages[0].words, 3);
        // second line starts at y = 30, content cropped to 90 x 50
        assert_eq!(pages[0].image.dimensions(), (90, 50));
    }

    #[test]
    fn oversized_word_grows_canvas() {
        let mut b = PageBuilder::new(&config(None));
        b.push_word(&block(150, 80));
        assert_eq!(b.line_extent(), 80);
        b.push_word(&block(10, 10));
        // wrapped: the new line only knows the small word
        assert_eq!(b.line_extent(), 10);
        let pages = b.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].image.dimensions(), (150, 80));
    }

    #[test]
    fn line_extent_only_grows() {
        let mut b = PageBuilder::new(&config(None));
        b.push_word(&block(10, 20));
        b.push_word(&block(10, 5));
        assert_eq!(b.line_extent(), 20);
        b.push_word(&block(10, 25));
        assert_eq!(b.line_extent(), 25);
    }

    #[test]
    fn empty_input_gives_one_blank_page() {
        let pages = layout_pages(std::iter::empty(), &config(Some(2)));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].words, 0);
        assert_eq!(pages[0].image.dimensions(), (100, 30));
        assert!(pages[0].image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn padding_and_page_size() {
        let cfg = Config {
            page_padding: 5,
            page_size: Some((200, 100)),
            ..config(None)
        };
        let pages = layout_pages([&block(40, 20)], &cfg);
        assert_eq!(pages[0].image.dimensions(), (200, 100));
        assert_eq!(*pages[0].image.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(*pages[0].image.get_pixel(4, 5), WHITE);
    }
}
