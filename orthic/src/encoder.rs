// orthic/src/encoder.rs
//
// Word segmentation into Orthic symbols.
// - Longest-match scan over the symbol dictionary (case-insensitive)
// - Double-letter guard and single-letter doubling
// - Contextual variants via `rules::rewrite`
// - Standalone letters and the trailing w+s merge

use std::sync::Arc;

use orthic_core::dictionary::fold;
use orthic_core::{is_special, SymbolDictionary, Token};
use serde::Serialize;
use tracing::{debug, warn};

use crate::rules;

/// Letters that, as a whole word, use a dedicated standalone glyph.
pub const STANDALONE_LETTERS: &[(char, &str)] = &[('l', "l_alone"), ('s', "s_alone")];

pub const PERIOD: &str = ".";

/// Bases of the trailing merge and its combined glyph.
pub const MERGE_W: &[&str] = &["w", "w_initial"];
pub const MERGE_S: &str = "s";
pub const FINAL_WS: &str = "ws_final";

/// Tokens for one word plus the number of unmappable characters in it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Encoding {
    pub word: String,
    pub tokens: Vec<Token>,
    pub unknown: usize,
}

/// Segments words into tokens against a fixed symbol dictionary.
#[derive(Debug, Clone)]
pub struct Encoder {
    dict: Arc<SymbolDictionary>,
}

impl Encoder {
    pub fn new(dict: Arc<SymbolDictionary>) -> Self {
        Self { dict }
    }

    /// Build an encoder over a list of symbol ids.
    pub fn with_symbols<T: AsRef<str>>(symbols: &[T]) -> Self {
        Self::new(Arc::new(SymbolDictionary::from_symbols(symbols)))
    }

    pub fn dictionary(&self) -> &SymbolDictionary {
        &self.dict
    }

    /// Encode one word into tokens.
    pub fn encode_word(&self, word: &str) -> Vec<Token> {
        self.encode_word_report(word).tokens
    }

    /// Encode every whitespace-separated word of `text`.
    pub fn encode_text(&self, text: &str) -> Vec<Encoding> {
        orthic_core::utils::words(text)
            .iter()
            .map(|w| self.encode_word_report(w))
            .collect()
    }

    /// Encode one word, also reporting how many characters had no symbol.
    pub fn encode_word_report(&self, word: &str) -> Encoding {
        let chars: Vec<char> = word.chars().collect();
        let folded: Vec<char> = chars.iter().map(|&c| fold(c)).collect();

        let mut enc = match self.standalone(&chars, &folded) {
            Some(enc) => enc,
            None => self.scan(&chars, &folded),
        };
        enc.word = word.to_string();

        debug!(word, tokens = enc.tokens.len(), "encoded word");
        if enc.unknown > 0 {
            warn!(word, unknown = enc.unknown, "word contains unmappable characters");
        }
        enc
    }

    /// Whole-word exception: a lone standalone letter, optionally followed
    /// by a period.
    fn standalone(&self, chars: &[char], folded: &[char]) -> Option<Encoding> {
        let period = match folded {
            [_] => false,
            [_, '.'] => true,
            _ => return None,
        };
        let (_, variant) = STANDALONE_LETTERS
            .iter()
            .find(|(letter, _)| *letter == folded[0])?;
        if !self.dict.contains(variant) {
            return None;
        }

        let mut enc = Encoding::default();
        enc.tokens
            .push(Token::new(*variant, chars[0].is_uppercase(), false));
        if period {
            if self.dict.contains(PERIOD) {
                enc.tokens.push(Token::plain(PERIOD));
            } else {
                enc.tokens.push(Token::unknown());
                enc.unknown += 1;
            }
        }
        Some(enc)
    }

    fn scan(&self, chars: &[char], folded: &[char]) -> Encoding {
        let n = folded.len();
        let mut enc = Encoding::default();
        let mut i = 0;

        while i < n {
            let accepted = self
                .dict
                .candidates_at(folded, i)
                .into_iter()
                .find(|(len, _)| {
                    // a multi-letter symbol must not swallow the first half
                    // of a doubled letter
                    let end = i + len;
                    !(*len > 1 && end < n && folded[end] == folded[end - 1])
                });

            let Some((len, base)) = accepted else {
                enc.tokens.push(Token::unknown());
                enc.unknown += 1;
                i += 1;
                continue;
            };

            let end = i + len;
            let double = len == 1 && !is_special(&base) && end < n && folded[end] == folded[i];
            let symbol = self.resolve(&base, &folded[..i], &folded[end..]);
            let capital = is_upper(&chars[i..end]);
            enc.tokens.push(Token::new(symbol, capital, double));
            i += if double { 2 } else { len };
        }

        self.merge_final_ws(&mut enc.tokens);
        enc
    }

    /// Contextual variant of `base`, falling back to the closest variant the
    /// dictionary has artwork for.
    fn resolve(&self, base: &str, left: &[char], right: &[char]) -> String {
        let requested = rules::rewrite(base, left, right);
        self.dict
            .resolve_variant(&requested)
            .unwrap_or(base)
            .to_string()
    }

    /// A word ending in a plain `w` + plain `s` is written with one combined
    /// glyph. Doubled letters keep their own tokens.
    fn merge_final_ws(&self, tokens: &mut Vec<Token>) {
        if !self.dict.contains(FINAL_WS) {
            return;
        }
        let n = tokens.len();
        if n < 2 {
            return;
        }
        let (w, s) = (&tokens[n - 2], &tokens[n - 1]);
        let plain_pair = !w.double && !s.double;
        if plain_pair && MERGE_W.contains(&w.symbol.as_str()) && s.symbol == MERGE_S {
            let capital = w.capital && s.capital;
            tokens.truncate(n - 2);
            tokens.push(Token::new(FINAL_WS, capital, false));
        }
    }
}

/// At least one cased character, and every cased character upper-case.
fn is_upper(span: &[char]) -> bool {
    let mut cased = false;
    for c in span {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
