//! Text to Orthic pages.
//!
//! `Transcriber` ties the encoder, the word renderer and the page layout
//! together over one glyph atlas.

use std::sync::Arc;

use image::RgbaImage;
use orthic_core::{AssetProvider, Config, GlyphAtlas, Result, Token};
use tracing::info;

use crate::config::OrthicConfig;
use crate::encoder::{Encoder, Encoding};
use crate::layout::{Page, PageBuilder};
use crate::renderer::{ComposedWord, WordRenderer};

/// Public transcription engine.
#[derive(Debug, Clone)]
pub struct Transcriber {
    encoder: Encoder,
    renderer: WordRenderer,
    config: Config,
}

impl Transcriber {
    /// Build from a prepared atlas. The symbol dictionary is derived from
    /// the atlas so every segmented symbol has artwork.
    pub fn new(atlas: GlyphAtlas, config: Config) -> Self {
        let dict = Arc::new(atlas.dictionary());
        let atlas = Arc::new(atlas);
        Self {
            encoder: Encoder::new(dict),
            renderer: WordRenderer::new(atlas, &config),
            config,
        }
    }

    /// Load every glyph from `provider`.
    pub fn from_provider(provider: &dyn AssetProvider, config: Config) -> Result<Self> {
        let atlas = GlyphAtlas::from_provider(provider)?;
        Ok(Self::new(atlas, config))
    }

    /// Load glyphs from the configured directory.
    pub fn from_config(config: &OrthicConfig) -> Result<Self> {
        info!(dir = %config.glyph_dir.display(), "loading glyphs");
        Self::from_provider(&config.provider(), config.base.clone())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn renderer(&self) -> &WordRenderer {
        &self.renderer
    }

    pub fn encode(&self, word: &str) -> Vec<Token> {
        self.encoder.encode_word(word)
    }

    pub fn encode_text(&self, text: &str) -> Vec<Encoding> {
        self.encoder.encode_text(text)
    }

    /// Render a single word, matted onto white if `matte_words` is set.
    pub fn render_word(&self, word: &str) -> Result<RgbaImage> {
        let tokens = self.encoder.encode_word(word);
        self.renderer.render_word(&tokens, self.config.matte_words)
    }

    /// Render a single word keeping its glyph placements.
    pub fn compose_word(&self, word: &str) -> Result<ComposedWord> {
        self.renderer.compose(&self.encoder.encode_word(word))
    }

    /// Render `text` into page images using the transcriber's layout.
    pub fn render_text(&self, text: &str) -> Result<Vec<RgbaImage>> {
        self.render_text_with(text, &self.config)
    }

    /// Render `text` into page images with an explicit layout.
    pub fn render_text_with(&self, text: &str, layout: &Config) -> Result<Vec<RgbaImage>> {
        Ok(self
            .render_pages(text, layout)?
            .into_iter()
            .map(|p| p.image)
            .collect())
    }

    /// Render `text` into pages, with per-page line and word counts.
    ///
    /// Every field of `layout` applies, including the dot and capital mark
    /// gaps used for each word.
    pub fn render_pages(&self, text: &str, layout: &Config) -> Result<Vec<Page>> {
        let renderer = self.renderer.with_config(layout);
        let mut builder = PageBuilder::new(layout);
        let mut unknown = 0;
        for enc in self.encoder.encode_text(text) {
            unknown += enc.unknown;
            let word = renderer.compose(&enc.tokens)?;
            builder.push_word(&word.image);
        }
        let pages = builder.finish();
        info!(pages = pages.len(), unknown, "rendered text");
        Ok(pages)
    }
}
