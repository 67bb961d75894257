//! Sources of raw symbol artwork.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use image::RgbaImage;

use crate::error::{Error, Result};

/// Supplies raw artwork by symbol id.
pub trait AssetProvider {
    /// Every symbol id this provider has artwork for.
    fn symbol_ids(&self) -> Result<Vec<String>>;

    /// Load the raw artwork for `symbol`.
    ///
    /// Fails with [`Error::AssetNotFound`] if there is none.
    fn load(&self, symbol: &str) -> Result<RgbaImage>;
}

/// Artwork stored as one image file per symbol id in a directory:
/// `<dir>/<symbol>.<extension>`.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    dir: PathBuf,
    extension: String,
}

impl DirectoryProvider {
    pub fn new<P: AsRef<Path>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Provider for a directory of PNG files.
    pub fn png<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir, "png")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", symbol, self.extension))
    }
}

impl AssetProvider for DirectoryProvider {
    fn symbol_ids(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.extension);
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(id) = name.to_str().and_then(|n| n.strip_suffix(&suffix)) {
                if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn load(&self, symbol: &str) -> Result<RgbaImage> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(Error::AssetNotFound {
                symbol: symbol.to_string(),
            });
        }
        Ok(image::open(&path)?.into_rgba8())
    }
}

/// In-memory artwork, used for generated assets and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    images: AHashMap<String, RgbaImage>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, symbol: S, image: RgbaImage) {
        self.images.insert(symbol.into(), image);
    }

    /// Builder-style [`MemoryProvider::insert`].
    pub fn with<S: Into<String>>(mut self, symbol: S, image: RgbaImage) -> Self {
        self.insert(symbol, image);
        self
    }
}

impl AssetProvider for MemoryProvider {
    fn symbol_ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.images.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn load(&self, symbol: &str) -> Result<RgbaImage> {
        self.images
            .get(symbol)
            .cloned()
            .ok_or_else(|| Error::AssetNotFound {
                symbol: symbol.to_string(),
            })
    }
}
