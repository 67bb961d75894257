use std::collections::BTreeMap;

use anyhow::{Context, Result};
use orthic_core::dictionary::VARIANT_SEPARATOR;
use orthic_core::{AssetProvider, SymbolDictionary};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Listing {
    /// Scan keys, in the order the segmenter tries them.
    pub scan_order: Vec<String>,
    /// Base symbol → variant ids drawn for it.
    pub variants: BTreeMap<String, Vec<String>>,
}

pub fn listing(dict: &SymbolDictionary) -> Listing {
    let scan_order = dict.scan_order().into_iter().map(str::to_string).collect();
    let mut variants: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for id in dict.symbols().filter(|s| !SymbolDictionary::is_scan_key(s)) {
        if let Some((base, _)) = id.split_once(VARIANT_SEPARATOR) {
            variants.entry(base.to_string()).or_default().push(id.to_string());
        }
    }
    Listing {
        scan_order,
        variants,
    }
}

pub fn run(provider: &dyn AssetProvider, json: bool) -> Result<()> {
    let ids = provider.symbol_ids().context("listing glyphs")?;
    let listing = listing(&SymbolDictionary::from_symbols(&ids));

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    println!("scan order ({}):", listing.scan_order.len());
    println!("  {}", listing.scan_order.join(" "));
    println!("variants:");
    for (base, ids) in &listing.variants {
        println!("  {:<8} {}", base, ids.join(" "));
    }
    Ok(())
}
