use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::IntentRule;

/// Shortest query token that may substring-match anything.
pub const MIN_MATCH_CHARS: usize = 3;

/// Byte-order mark; counted as whitespace when trimming and splitting.
const BOM: char = '\u{feff}';

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid whitespace regex"));

/// Case-folds and trims the whole utterance. Inner whitespace is left alone
/// so the greeting tier compares against exactly what the user typed.
pub fn normalize_text(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_lowercase()
}

pub fn tokenize(input: &str) -> Vec<String> {
    let normalized = normalize_text(input);

    WHITESPACE
        .split(&normalized)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// True when `query` has at least three characters and occurs inside
/// `target`, both compared case-folded and trimmed.
pub fn is_similar(query: &str, target: &str) -> bool {
    let q = normalize_text(query);
    let t = normalize_text(target);

    q.chars().count() >= MIN_MATCH_CHARS && t.contains(&q)
}

/// First rule in table order with any token matching any of its triggers,
/// together with the token that matched.
pub fn first_matching_rule<'a>(
    rules: &'a [IntentRule],
    tokens: &[String],
) -> Option<(&'a IntentRule, String)> {
    rules.iter().find_map(|rule| {
        tokens
            .iter()
            .find(|token| {
                rule.triggers
                    .iter()
                    .any(|trigger| is_similar(token, trigger))
            })
            .map(|token| (rule, token.clone()))
    })
}
