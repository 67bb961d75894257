// Line wrapping and page breaking.

use image::{Rgba, RgbaImage};
use orthic::{layout_pages, Config, MemoryProvider, PageBuilder, Transcriber};
use orthic_core::artwork::{ANCHOR_COLOR, CONNECTOR_COLOR, INK};

const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn block(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, INK)
}

fn narrow_lines(lines_per_page: Option<usize>) -> Config {
    Config {
        word_spacing: 20,
        line_height: 30,
        line_width: 100,
        lines_per_page,
        ..Config::default()
    }
}

#[test]
fn six_wide_words_fill_three_pages() {
    let words: Vec<RgbaImage> = (0..6).map(|_| block(60, 10)).collect();
    let pages = layout_pages(&words, &narrow_lines(Some(2)));
    assert_eq!(pages.len(), 3);
    for page in &pages {
        assert_eq!(page.lines, 2);
        assert_eq!(page.words, 2);
        // two lines, 30px apart, each one word tall
        assert_eq!(page.image.dimensions(), (60, 40));
        assert!(page.image.pixels().all(|p| p.0[3] == 255));
    }
}

#[test]
fn unbounded_layout_keeps_one_page() {
    let words: Vec<RgbaImage> = (0..6).map(|_| block(60, 10)).collect();
    let pages = layout_pages(&words, &narrow_lines(None));
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines, 6);
    assert_eq!(pages[0].image.dimensions(), (60, 160));
}

#[test]
fn first_word_on_a_line_never_wraps() {
    let mut builder = PageBuilder::new(&narrow_lines(Some(1)));
    builder.push_word(&block(250, 10));
    assert_eq!(builder.finished_pages(), 0);
    builder.push_word(&block(10, 10));
    assert_eq!(builder.finished_pages(), 1);
    let pages = builder.finish();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].image.dimensions(), (250, 10));
    assert_eq!(pages[1].image.dimensions(), (10, 10));
}

#[test]
fn empty_words_take_no_space() {
    let words = vec![block(30, 10), RgbaImage::new(0, 0), block(30, 10)];
    let pages = layout_pages(&words, &narrow_lines(None));
    assert_eq!(pages[0].words, 2);
    // 30 + 20 spacing + 30
    assert_eq!(pages[0].image.dimensions(), (80, 10));
}

#[test]
fn kindle_pages_have_the_screen_size() {
    let words: Vec<RgbaImage> = (0..3).map(|_| block(400, 50)).collect();
    let pages = layout_pages(&words, &Config::kindle());
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].image.dimensions(), (768, 1024));
    assert_eq!(*pages[0].image.get_pixel(0, 0), PAPER);
    assert_eq!(*pages[0].image.get_pixel(20, 20), INK);
}

#[test]
fn transcriber_paginates_text() {
    let mut glyph = RgbaImage::from_pixel(61, 3, PAPER);
    for x in 1..60 {
        glyph.put_pixel(x, 1, INK);
    }
    glyph.put_pixel(0, 1, ANCHOR_COLOR);
    glyph.put_pixel(60, 1, CONNECTOR_COLOR);
    let provider = MemoryProvider::new().with("a", glyph);

    let config = narrow_lines(Some(2));
    let t = Transcriber::from_provider(&provider, config.clone()).unwrap();
    let pages = t.render_pages("a a a a a", &config).unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages.iter().map(|p| p.words).collect::<Vec<_>>(), vec![2, 2, 1]);

    let images = t.render_text("a a a a a").unwrap();
    assert_eq!(images.len(), 3);
    assert_eq!(images[2].dimensions(), (61, 1));
}

#[test]
fn blank_text_gives_a_blank_page() {
    let provider = MemoryProvider::new();
    let config = narrow_lines(Some(2));
    let t = Transcriber::from_provider(&provider, config).unwrap();
    let pages = t.render_text("   \n").unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].dimensions(), (100, 30));
    assert!(pages[0].pixels().all(|p| *p == PAPER));
}
