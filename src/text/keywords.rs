//! Keyword extraction: top-N distinctive terms of a document.

use std::collections::HashMap;

use super::stopwords::is_stop_word;
use super::tfidf::tokenize;

/// Returns the `limit` most frequent non-stop-word terms of `text`,
/// lowercase, in descending frequency order.
///
/// With a single document as its own corpus, inverse document frequency
/// is a constant factor, so TF-IDF ranking reduces to raw term
/// frequency; this scores frequency directly. Frequency ties are broken
/// by first occurrence in the token stream, so output is deterministic.
///
/// Tokens shorter than `min_token_len` characters are dropped. Empty
/// input yields an empty vector. Never fails.
pub fn keywords(text: &str, limit: usize, min_token_len: usize) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text, min_token_len)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect();

    // (count, first occurrence index) per term
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        let entry = counts.entry(token.as_str()).or_insert((0, i));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(term, _, _)| term.to_string())
        .collect()
}
