//! Read-only dictionary of known symbol ids.

use std::collections::BTreeSet;

use crate::token::UNKNOWN_SYMBOL;
use crate::trie::TrieNode;

/// Separator between a base symbol and its variant suffixes
/// (`th_under`, `ou_over_angled`, `mark_double`).
pub const VARIANT_SEPARATOR: char = '_';

/// Case-fold one character for matching.
pub fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// The set of symbol ids with artwork, plus the scan index used by the
/// segmenter.
///
/// Ids containing [`VARIANT_SEPARATOR`] are variants or structural marks:
/// they are known to the dictionary but never matched against text directly.
#[derive(Debug, Clone, Default)]
pub struct SymbolDictionary {
    symbols: BTreeSet<String>,
    scan: TrieNode,
}

impl SymbolDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a list of symbol ids.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for s in symbols {
            dict.insert(s.as_ref());
        }
        dict
    }

    /// Register a symbol id. Empty ids are ignored.
    pub fn insert(&mut self, symbol: &str) {
        if symbol.is_empty() {
            return;
        }
        if Self::is_scan_key(symbol) {
            let key: String = symbol.chars().map(fold).collect();
            self.scan.insert(&key, symbol);
        }
        self.symbols.insert(symbol.to_string());
    }

    /// True for ids that take part in the longest-match scan.
    pub fn is_scan_key(symbol: &str) -> bool {
        !symbol.is_empty() && symbol != UNKNOWN_SYMBOL && !symbol.contains(VARIANT_SEPARATOR)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All ids in lexicographic order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Scan keys in scan order: decreasing length, ties broken
    /// lexicographically.
    pub fn scan_order(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .symbols()
            .filter(|s| Self::is_scan_key(s))
            .collect();
        keys.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        keys
    }

    /// Candidates matching the case-folded `input` at `start`, longest first.
    ///
    /// Returns `(length_in_chars, symbol)` pairs.
    pub fn candidates_at(&self, folded: &[char], start: usize) -> Vec<(usize, String)> {
        self.scan
            .walk_prefixes(folded, start)
            .into_iter()
            .rev()
            .map(|(end, symbol)| (end - start, symbol))
            .collect()
    }

    /// Map a requested variant id to the closest id present in the
    /// dictionary by stripping trailing `_suffix` parts.
    ///
    /// `ou_over_angled` falls back to `ou_over`, then `ou`. Returns `None`
    /// only if not even the base symbol is known.
    pub fn resolve_variant<'a>(&self, requested: &'a str) -> Option<&'a str> {
        let mut id = requested;
        loop {
            if self.contains(id) {
                return Some(id);
            }
            id = &id[..id.rfind(VARIANT_SEPARATOR)?];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> SymbolDictionary {
        SymbolDictionary::from_symbols([
            "a", "b", "th", "th_under", "ing", "ou", "ou_over", "mark_double", "Unknown", ",",
        ])
    }

    #[test]
    fn variants_are_not_scan_keys() {
        let d = dict();
        assert!(d.contains("th_under"));
        assert!(d.contains("mark_double"));
        let order = d.scan_order();
        assert!(!order.contains(&"th_under"));
        assert!(!order.contains(&"mark_double"));
        assert!(!order.contains(&"Unknown"));
    }

    #[test]
    fn scan_order_is_length_then_lexicographic() {
        let d = dict();
        assert_eq!(d.scan_order(), vec!["ing", "ou", "th", ",", "a", "b"]);
    }

    #[test]
    fn candidates_are_longest_first_and_case_folded() {
        let d = SymbolDictionary::from_symbols(["t", "th", "TH"]);
        let input: Vec<char> = "the".chars().collect();
        let cands = d.candidates_at(&input, 0);
        assert_eq!(cands, vec![(2, "TH".to_string()), (1, "t".to_string())]);
    }

    #[test]
    fn resolve_variant_strips_suffixes() {
        let d = dict();
        assert_eq!(d.resolve_variant("ou_over_angled"), Some("ou_over"));
        assert_eq!(d.resolve_variant("th_under"), Some("th_under"));
        assert_eq!(d.resolve_variant("ch_initial"), None);
        assert_eq!(d.resolve_variant("a"), Some("a"));
    }
}
