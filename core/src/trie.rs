/// Prefix trie over lower-cased symbol keys.
use std::collections::HashMap;

/// A prefix tree mapping lower-cased match keys to symbol ids.
///
/// The segmenter walks it from a character position to find every symbol
/// that can start there; the longest match comes last.
///
/// # Example
/// ```
/// use orthic_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("t", "t");
/// trie.insert("th", "th");
///
/// assert!(trie.contains_key("th"));
/// assert!(!trie.contains_key("h"));
///
/// let input: Vec<char> = "the".chars().collect();
/// let prefixes = trie.walk_prefixes(&input, 0);
/// assert_eq!(prefixes, vec![(1, "t".to_string()), (2, "th".to_string())]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, Box<TrieNode>>,
    /// Symbol id stored at this node when a key ends here.
    symbol: Option<String>,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            symbol: None,
        }
    }

    /// Insert `symbol` under the match key `key`.
    ///
    /// Two symbols sharing one key (e.g. `"A"` and `"a"`) resolve to the
    /// lexicographically smaller id so lookups do not depend on insertion
    /// order.
    pub fn insert(&mut self, key: &str, symbol: &str) {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        match &node.symbol {
            Some(existing) if existing.as_str() <= symbol => {}
            _ => node.symbol = Some(symbol.to_string()),
        }
    }

    /// True if `key` was inserted as a complete key, not just as a prefix.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Symbol id stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.symbol.as_deref()
    }

    /// Walk the trie from `start` in `input` and return every key that
    /// matches there.
    ///
    /// Returns `(end_index, symbol)` pairs where `end_index` is the exclusive
    /// character index after the match. Results come in order of increasing
    /// length.
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, String)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(s) = &node.symbol {
                        res.push((idx, s.clone()));
                    }
                }
                None => break,
            }
        }
        res
    }
}
