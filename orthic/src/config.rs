//! Transcriber configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All layout options from `orthic_core::Config` (flattened via serde)
//! - Where the glyph artwork lives and which file extension it uses
//!
//! # Example
//!
//! ```rust
//! use orthic::OrthicConfig;
//!
//! let config = OrthicConfig::from_toml_str("glyph_dir = \"glyphs\"\nline_width = 640\n").unwrap();
//! assert_eq!(config.base().line_width, 640);
//! assert_eq!(config.extension, "png");
//! ```
use std::path::{Path, PathBuf};

use orthic_core::{DirectoryProvider, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrthicConfig {
    /// Layout fields (spacing, line geometry, pagination, page sizing)
    #[serde(flatten)]
    pub base: orthic_core::Config,

    /// Directory holding one artwork file per symbol id
    pub glyph_dir: PathBuf,

    /// Artwork file extension, without the dot
    pub extension: String,
}

impl Default for OrthicConfig {
    fn default() -> Self {
        Self {
            base: orthic_core::Config::default(),
            glyph_dir: PathBuf::from("resources/glyphs"),
            extension: "png".to_string(),
        }
    }
}

impl OrthicConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: OrthicConfig = toml::from_str(content)?;
        config.base.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Asset provider reading `glyph_dir`.
    pub fn provider(&self) -> DirectoryProvider {
        DirectoryProvider::new(&self.glyph_dir, &self.extension)
    }

    /// Convert into the base config.
    pub fn into_base(self) -> orthic_core::Config {
        self.base
    }

    pub fn base(&self) -> &orthic_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut orthic_core::Config {
        &mut self.base
    }
}
