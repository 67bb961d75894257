//! Contextual glyph variants.
//!
//! Some symbols are drawn differently depending on their neighbours. After
//! the segmenter accepts a base symbol, [`rewrite`] maps it to the variant
//! id for its context. The rule set is a fixed table so every rule can be
//! listed and tested on its own.
//!
//! Contexts are case-folded characters: `left` is everything before the
//! match (so `left.len()` is its position in the word), `right` everything
//! after the matched span.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// How a rule picks its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `<base>_under` after one of [`UNDER_AFTER`] or the digraph `sh`.
    Under,
    /// `<base>_initial` at word start or before `h`.
    Initial,
    /// `<base>_over` at word start or after one of [`OVER_AFTER`];
    /// `<base>_over_angled` when also followed by `l`, `r` or `gh`.
    Over,
    /// `<base>_initial` at word start only.
    StartOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct RewriteRule {
    pub kind: RuleKind,
    pub bases: &'static [&'static str],
}

pub const UNDER_SUFFIX: &str = "_under";
pub const INITIAL_SUFFIX: &str = "_initial";
pub const OVER_SUFFIX: &str = "_over";
pub const ANGLED_SUFFIX: &str = "_angled";

/// Consonants after which the connector digraph is written under the line.
pub const UNDER_AFTER: &[char] = &['b', 'c', 'd', 'f', 'g', 'j', 'k', 'p', 'q', 'v'];
/// Digraph that also sends the connector under the line.
pub const UNDER_AFTER_DIGRAPH: &[char] = &['s', 'h'];
/// Letter after which `w` takes its initial form.
pub const INITIAL_BEFORE: char = 'h';
/// Letters after which vowel pairs are written over.
pub const OVER_AFTER: &[char] = &['d', 'h', 'm', 'n', 't'];
/// Following letters that angle an over-written vowel pair.
pub const ANGLED_BEFORE: &[char] = &['l', 'r'];
pub const ANGLED_BEFORE_DIGRAPH: &[char] = &['g', 'h'];

pub static REWRITE_RULES: &[RewriteRule] = &[
    RewriteRule {
        kind: RuleKind::Under,
        bases: &["th"],
    },
    RewriteRule {
        kind: RuleKind::Initial,
        bases: &["w"],
    },
    RewriteRule {
        kind: RuleKind::Over,
        bases: &["ai", "au", "ea", "ei", "oi", "ou"],
    },
    RewriteRule {
        kind: RuleKind::StartOnly,
        bases: &["ch"],
    },
];

static RULES_BY_BASE: Lazy<HashMap<&'static str, RuleKind>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for rule in REWRITE_RULES {
        for base in rule.bases {
            map.insert(*base, rule.kind);
        }
    }
    map
});

/// Rule kind that applies to `base`, if any.
pub fn rule_for(base: &str) -> Option<RuleKind> {
    RULES_BY_BASE.get(base).copied()
}

/// Resolve the variant id of `base` in its context.
///
/// Returns `base` itself when no rule fires. The result may name artwork
/// that does not exist; the caller falls back along the suffix chain.
pub fn rewrite(base: &str, left: &[char], right: &[char]) -> String {
    let at_start = left.is_empty();
    let Some(kind) = rule_for(base) else {
        return base.to_string();
    };
    match kind {
        RuleKind::Under => {
            let after_consonant = left.last().is_some_and(|c| UNDER_AFTER.contains(c));
            if after_consonant || left.ends_with(UNDER_AFTER_DIGRAPH) {
                return format!("{}{}", base, UNDER_SUFFIX);
            }
        }
        RuleKind::Initial => {
            if at_start || right.first() == Some(&INITIAL_BEFORE) {
                return format!("{}{}", base, INITIAL_SUFFIX);
            }
        }
        RuleKind::Over => {
            if at_start || left.last().is_some_and(|c| OVER_AFTER.contains(c)) {
                let angled = right.first().is_some_and(|c| ANGLED_BEFORE.contains(c))
                    || right.starts_with(ANGLED_BEFORE_DIGRAPH);
                return if angled {
                    format!("{}{}{}", base, OVER_SUFFIX, ANGLED_SUFFIX)
                } else {
                    format!("{}{}", base, OVER_SUFFIX)
                };
            }
        }
        RuleKind::StartOnly => {
            if at_start {
                return format!("{}{}", base, INITIAL_SUFFIX);
            }
        }
    }
    base.to_string()
}
