use anyhow::{Context, Result};
use image::RgbaImage;
use orthic_core::artwork::count_markers;
use orthic_core::{AssetProvider, Marker, CAPITAL_MARK, DOUBLE_MARK};

/// Marker problems of one raw asset. Mark glyphs are drawn without
/// alignment, so only repeated markers matter for them.
pub fn inspect(symbol: &str, raw: &RgbaImage) -> Vec<String> {
    let (anchors, connectors) = count_markers(raw);
    let is_mark = symbol == DOUBLE_MARK || symbol == CAPITAL_MARK;
    let mut problems = Vec::new();
    for (marker, count) in [(Marker::Anchor, anchors), (Marker::Connector, connectors)] {
        if count == 0 && !is_mark {
            problems.push(format!("no {} marker", marker));
        } else if count > 1 {
            problems.push(format!("{} {} markers, the last one is used", count, marker));
        }
    }
    problems
}

/// Print every problem found and return the number of glyphs with one.
pub fn run(provider: &dyn AssetProvider) -> Result<usize> {
    let ids = provider.symbol_ids().context("listing glyphs")?;
    let mut bad = 0;
    for id in &ids {
        let raw = provider
            .load(id)
            .with_context(|| format!("loading glyph {}", id))?;
        let problems = inspect(id, &raw);
        if !problems.is_empty() {
            bad += 1;
            println!("{}: {}", id, problems.join("; "));
        }
    }
    for mark in [DOUBLE_MARK, CAPITAL_MARK] {
        if !ids.iter().any(|id| id == mark) {
            bad += 1;
            println!("{}: missing", mark);
        }
    }
    println!("checked {} glyphs, {} with problems", ids.len(), bad);
    Ok(bad)
}
