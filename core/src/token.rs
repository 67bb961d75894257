//! Tokens produced by segmentation and consumed by the compositor.

use phf::phf_set;
use serde::{Deserialize, Serialize};

/// Symbol id of the sentinel token emitted for unmappable characters.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// Artwork drawn below a glyph whose letter is doubled.
pub const DOUBLE_MARK: &str = "mark_double";

/// Artwork appended below a word that contains a capital.
pub const CAPITAL_MARK: &str = "mark_capital";

/// Symbols printed as freestanding marks: no joining stroke to their
/// neighbours and never collapsed into a doubled token.
pub static SPECIAL_SYMBOLS: phf::Set<&'static str> = phf_set! {
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
    ";", ",", ":", ".", "?", "-",
};

/// True if `symbol` is a digit or punctuation mark rendered without joins.
pub fn is_special(symbol: &str) -> bool {
    SPECIAL_SYMBOLS.contains(symbol)
}

/// One resolved shorthand unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Resolved symbol id (after contextual substitution).
    pub symbol: String,
    /// The matched source text was upper-case.
    pub capital: bool,
    /// Two identical source characters collapsed into this token.
    pub double: bool,
}

impl Token {
    pub fn new<S: Into<String>>(symbol: S, capital: bool, double: bool) -> Self {
        Self {
            symbol: symbol.into(),
            capital,
            double,
        }
    }

    /// Plain token: not capital, not doubled.
    pub fn plain<S: Into<String>>(symbol: S) -> Self {
        Self::new(symbol, false, false)
    }

    pub fn unknown() -> Self {
        Self::plain(UNKNOWN_SYMBOL)
    }

    pub fn is_unknown(&self) -> bool {
        self.symbol == UNKNOWN_SYMBOL
    }

    pub fn is_special(&self) -> bool {
        is_special(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_symbols_are_digits_and_punctuation() {
        assert!(is_special("7"));
        assert!(is_special(","));
        assert!(is_special("?"));
        assert!(!is_special("a"));
        assert!(!is_special("th"));
        assert!(!is_special(UNKNOWN_SYMBOL));
    }

    #[test]
    fn unknown_token() {
        let t = Token::unknown();
        assert!(t.is_unknown());
        assert!(!t.capital);
        assert!(!t.double);
        assert!(!Token::plain("a").is_unknown());
    }
}
