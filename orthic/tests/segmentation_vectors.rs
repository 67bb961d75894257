// Segmentation test vectors.
//
// - Each test seeds the encoder with the minimal symbol set it needs.
// - Vectors cover longest match, the doubled-letter guard, contextual
//   variants, standalone letters, the trailing w+s merge and the unknown
//   fallback.

use orthic::{Encoder, Token, UNKNOWN_SYMBOL};

fn symbols(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.symbol.clone()).collect()
}

#[test]
fn issue_doubles_the_s() {
    let enc = Encoder::with_symbols(&["i", "is", "s", "u", "e"]);
    let tokens = enc.encode_word("ISSUE");
    assert_eq!(
        tokens,
        vec![
            Token::new("i", true, false),
            Token::new("s", true, true),
            Token::new("u", true, false),
            Token::new("e", true, false),
        ]
    );
}

#[test]
fn encoding_is_deterministic() {
    let enc = Encoder::with_symbols(&["t", "h", "th", "e", "ea", "a", "r"]);
    let first = enc.encode_word("Theatre");
    for _ in 0..10 {
        assert_eq!(enc.encode_word("Theatre"), first);
    }
}

#[test]
fn capital_follows_the_matched_span() {
    let enc = Encoder::with_symbols(&["a", "l"]);
    let tokens = enc.encode_word("All");
    assert_eq!(
        tokens,
        vec![Token::new("a", true, false), Token::new("l", false, true)]
    );
}

#[test]
fn trailing_ws_merges() {
    let enc = Encoder::with_symbols(&["l", "a", "w", "s", "ws_final"]);
    assert_eq!(symbols(&enc.encode_word("laws")), vec!["l", "a", "ws_final"]);

    let upper = enc.encode_word("LAWS");
    assert_eq!(upper.last(), Some(&Token::new("ws_final", true, false)));
    let mixed = enc.encode_word("LAWs");
    assert_eq!(mixed.last(), Some(&Token::new("ws_final", false, false)));
}

#[test]
fn doubled_s_is_not_merged() {
    let enc = Encoder::with_symbols(&["l", "a", "w", "s", "ws_final"]);
    let tokens = enc.encode_word("lawss");
    assert_eq!(symbols(&tokens), vec!["l", "a", "w", "s"]);
    assert!(tokens[3].double);
}

#[test]
fn doubled_w_is_not_merged() {
    let enc = Encoder::with_symbols(&["a", "w", "s", "ws_final"]);
    let tokens = enc.encode_word("awws");
    assert_eq!(symbols(&tokens), vec!["a", "w", "s"]);
    assert!(tokens[1].double);
    assert!(!tokens[2].double);
}

#[test]
fn merge_needs_the_combined_glyph() {
    let enc = Encoder::with_symbols(&["l", "a", "w", "s"]);
    assert_eq!(symbols(&enc.encode_word("laws")), vec!["l", "a", "w", "s"]);
}

#[test]
fn standalone_letters() {
    let enc = Encoder::with_symbols(&["l", "s", "l_alone", "s_alone", "."]);
    assert_eq!(symbols(&enc.encode_word("l")), vec!["l_alone"]);
    assert_eq!(symbols(&enc.encode_word("s")), vec!["s_alone"]);
    assert_eq!(
        enc.encode_word("L."),
        vec![Token::new("l_alone", true, false), Token::plain(".")]
    );
    assert_eq!(symbols(&enc.encode_word("s.")), vec!["s_alone", "."]);
    // only whole words take the standalone form
    assert_eq!(symbols(&enc.encode_word("ls")), vec!["l", "s"]);
}

#[test]
fn standalone_period_without_artwork_is_unknown() {
    let enc = Encoder::with_symbols(&["s", "s_alone"]);
    let report = enc.encode_word_report("s.");
    assert_eq!(symbols(&report.tokens), vec!["s_alone", UNKNOWN_SYMBOL]);
    assert_eq!(report.unknown, 1);
}

#[test]
fn unmappable_characters_become_unknown() {
    let enc = Encoder::with_symbols(&["a", "b"]);
    let report = enc.encode_word_report("a#b");
    assert_eq!(symbols(&report.tokens), vec!["a", UNKNOWN_SYMBOL, "b"]);
    assert_eq!(report.unknown, 1);
    assert!(report.tokens[1].is_unknown());
}

#[test]
fn th_goes_under_after_consonants() {
    let enc = Encoder::with_symbols(&["b", "d", "e", "p", "th", "th_under", "a"]);
    assert_eq!(symbols(&enc.encode_word("depth")), vec!["d", "e", "p", "th_under"]);
    assert_eq!(symbols(&enc.encode_word("bath")), vec!["b", "a", "th"]);
    assert_eq!(symbols(&enc.encode_word("the")), vec!["th", "e"]);
}

#[test]
fn w_initial_at_start_and_before_h() {
    let enc = Encoder::with_symbols(&["w", "w_initial", "o", "r", "d", "h", "e", "n"]);
    assert_eq!(symbols(&enc.encode_word("word")), vec!["w_initial", "o", "r", "d"]);
    assert_eq!(symbols(&enc.encode_word("when")), vec!["w_initial", "h", "e", "n"]);
    assert_eq!(symbols(&enc.encode_word("new")), vec!["n", "e", "w"]);
}

#[test]
fn vowel_pairs_over_and_angled() {
    let enc = Encoder::with_symbols(&["ou", "ou_over", "ou_over_angled", "r", "t", "b"]);
    assert_eq!(symbols(&enc.encode_word("our")), vec!["ou_over_angled", "r"]);
    assert_eq!(symbols(&enc.encode_word("out")), vec!["ou_over", "t"]);
    assert_eq!(symbols(&enc.encode_word("bout")), vec!["b", "ou", "t"]);
}

#[test]
fn missing_variant_falls_back() {
    let enc = Encoder::with_symbols(&["ch", "ch_initial", "ai", "ai_over", "r", "s", "u"]);
    assert_eq!(
        symbols(&enc.encode_word("chair")),
        vec!["ch_initial", "ai_over", "r"]
    );
    assert_eq!(symbols(&enc.encode_word("such")), vec!["s", "u", "ch"]);
}

#[test]
fn variant_ids_are_never_matched_directly() {
    let enc = Encoder::with_symbols(&["t", "h", "th_under"]);
    assert_eq!(symbols(&enc.encode_word("th")), vec!["t", "h"]);
}

#[test]
fn text_splits_on_whitespace() {
    let enc = Encoder::with_symbols(&["a", "b", ","]);
    let words = enc.encode_text("  ab,\tba\n");
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "ab,");
    assert_eq!(symbols(&words[0].tokens), vec!["a", "b", ","]);
    assert_eq!(symbols(&words[1].tokens), vec!["b", "a"]);
}
