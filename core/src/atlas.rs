//! Prepared artwork for every known symbol.

use ahash::AHashMap;
use image::RgbaImage;
use tracing::{debug, info};

use crate::artwork::Artwork;
use crate::dictionary::SymbolDictionary;
use crate::error::{Error, Result};
use crate::provider::AssetProvider;
use crate::token::{CAPITAL_MARK, DOUBLE_MARK};

/// Symbol id → prepared [`Artwork`], built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GlyphAtlas {
    glyphs: AHashMap<String, Artwork>,
}

impl GlyphAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and prepare every symbol the provider lists.
    pub fn from_provider(provider: &dyn AssetProvider) -> Result<Self> {
        let mut atlas = Self::new();
        for symbol in provider.symbol_ids()? {
            let raw = provider.load(&symbol)?;
            atlas.insert(&symbol, raw);
        }
        info!(glyphs = atlas.len(), "loaded glyph atlas");
        Ok(atlas)
    }

    /// Prepare `raw` and store it under `symbol`, replacing any previous
    /// artwork.
    pub fn insert(&mut self, symbol: &str, raw: RgbaImage) {
        let art = Artwork::from_raw(symbol, raw);
        if art.alignment().is_err() && symbol != DOUBLE_MARK && symbol != CAPITAL_MARK {
            debug!(symbol, "artwork has incomplete alignment markers");
        }
        self.glyphs.insert(symbol.to_string(), art);
    }

    pub fn get(&self, symbol: &str) -> Result<&Artwork> {
        self.glyphs.get(symbol).ok_or_else(|| Error::AssetNotFound {
            symbol: symbol.to_string(),
        })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.glyphs.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Dictionary over the symbols in this atlas.
    pub fn dictionary(&self) -> SymbolDictionary {
        SymbolDictionary::from_symbols(self.glyphs.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MemoryProvider;

    #[test]
    fn atlas_from_provider() {
        let p = MemoryProvider::new()
            .with("a", RgbaImage::new(2, 2))
            .with("th_under", RgbaImage::new(2, 2));
        let atlas = GlyphAtlas::from_provider(&p).unwrap();
        assert_eq!(atlas.len(), 2);
        assert!(atlas.get("a").is_ok());
        assert!(matches!(atlas.get("zz"), Err(Error::AssetNotFound { .. })));

        let dict = atlas.dictionary();
        assert!(dict.contains("th_under"));
        assert_eq!(dict.scan_order(), vec!["a"]);
    }
}
