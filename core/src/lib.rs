//! orthic-core
//!
//! Core symbol dictionary, artwork, asset provider, canvas and configuration
//! types shared by the `orthic` transcriber crate.
//!
//! Public API:
//! - `Token` - Resolved shorthand unit with capital/double flags
//! - `SymbolDictionary` - Read-only index of known symbol ids
//! - `Artwork` - Prepared glyph image with anchor/connector markers
//! - `AssetProvider` - Source of raw artwork (directory or in-memory)
//! - `GlyphAtlas` - Prepared artwork for every symbol
//! - `Canvas` - Growable raster buffer with a cursor
//! - `Config` - Layout configuration and presets
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Marker, Result};

pub mod token;
pub use token::{is_special, Token, CAPITAL_MARK, DOUBLE_MARK, SPECIAL_SYMBOLS, UNKNOWN_SYMBOL};

pub mod trie;
pub use trie::TrieNode;

pub mod dictionary;
pub use dictionary::SymbolDictionary;

pub mod artwork;
pub use artwork::{Alignment, Artwork, Point};

pub mod provider;
pub use provider::{AssetProvider, DirectoryProvider, MemoryProvider};

pub mod atlas;
pub use atlas::GlyphAtlas;

pub mod canvas;
pub use canvas::Canvas;

/// Layout configuration for rendering text into pages.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Horizontal gap between words (pixels)
    pub word_spacing: u32,
    /// Vertical distance between line tops (pixels)
    pub line_height: u32,
    /// Maximum line width before wrapping (pixels)
    pub line_width: u32,
    /// Lines per page; `None` renders everything onto a single page
    pub lines_per_page: Option<usize>,

    /// Matte single-word renders onto white
    pub matte_words: bool,
    /// Gap between a doubled glyph's lower edge and its doubling dot
    pub dot_gap: u32,
    /// Gap between a word and the capital mark appended below it
    pub capital_gap: u32,

    // Page export sizing
    /// White border added around each finished page
    pub page_padding: u32,
    /// Minimum page size `(width, height)` after padding
    pub page_size: Option<(u32, u32)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_spacing: 20,
            line_height: 100,
            line_width: 1000,
            lines_per_page: None,
            matte_words: true,
            dot_gap: 2,
            capital_gap: 4,
            page_padding: 0,
            page_size: None,
        }
    }
}

impl Config {
    /// Page layout for a 768x1024 e-reader screen: 20px padding, 100px
    /// lines, as many lines as fit on the page.
    pub fn kindle() -> Self {
        const WIDTH: u32 = 768;
        const HEIGHT: u32 = 1024;
        const PADDING: u32 = 20;
        const LINE_HEIGHT: u32 = 100;
        Self {
            line_width: WIDTH - PADDING,
            line_height: LINE_HEIGHT,
            lines_per_page: Some(((HEIGHT - PADDING) / LINE_HEIGHT) as usize),
            page_padding: PADDING,
            page_size: Some((WIDTH, HEIGHT)),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.lines_per_page == Some(0) {
            return Err(Error::Config("lines_per_page must be positive".into()));
        }
        if self.line_width == 0 {
            return Err(Error::Config("line_width must be positive".into()));
        }
        if self.line_height == 0 {
            return Err(Error::Config("line_height must be positive".into()));
        }
        Ok(())
    }

    // ========== Pagination ==========

    /// Set lines per page; `None` (or zero) means unbounded.
    pub fn set_lines_per_page(&mut self, lines: Option<usize>) {
        self.lines_per_page = lines.filter(|&n| n > 0);
    }

    pub fn is_paginated(&self) -> bool {
        self.lines_per_page.is_some()
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input text (NFC).
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>()
    }

    /// Split normalized text into whitespace-separated words.
    pub fn words(text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
