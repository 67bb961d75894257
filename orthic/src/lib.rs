//! orthic crate root
//!
//! This crate provides the Orthic shorthand encoder, the word compositor,
//! page layout and a high-level `Transcriber` that composes them over the
//! shared `orthic-core` types.
//!
//! Public API exported here:
//! - `Encoder` and `Encoding` from `encoder`
//! - `rewrite` and the rule table from `rules`
//! - `WordRenderer` and `ComposedWord` from `renderer`
//! - `PageBuilder` and `Page` from `layout`
//! - `Transcriber` from `transcriber`

pub mod config;
pub mod encoder;
pub mod layout;
pub mod renderer;
pub mod rules;
pub mod transcriber;

// Re-export the core types callers need alongside the engine.
pub use orthic_core::{
    AssetProvider, Config, DirectoryProvider, Error, GlyphAtlas, MemoryProvider, Point, Result,
    SymbolDictionary, Token, UNKNOWN_SYMBOL,
};

pub use config::OrthicConfig;
pub use encoder::{Encoder, Encoding};
pub use layout::{layout_pages, Page, PageBuilder};
pub use renderer::{ComposedWord, Placement, WordRenderer};
pub use rules::{rewrite, RuleKind, REWRITE_RULES};
pub use transcriber::Transcriber;
