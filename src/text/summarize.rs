//! Extractive summarization: pick the top-K sentences by TF-IDF weight.

use super::sentences::split_sentences;
use super::tfidf;

/// Reduces `text` to at most `max_sentences` representative sentences.
///
/// Sentences are scored by the sum of their TF-IDF weights, with the
/// sentences of the document acting as the corpus. Selection uses a
/// stable ascending sort and takes the last K, so score ties favor
/// earlier sentences. Selected sentences are joined in original document
/// order; texts with `max_sentences` or fewer sentences come back whole.
///
/// Empty input yields an empty string. Never fails.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let matrix = tfidf::vectorize(&sentences);
    let mut scored: Vec<(usize, f64)> = (0..sentences.len())
        .map(|i| (i, matrix.row_score(i)))
        .collect();
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut picked: Vec<usize> = scored[sentences.len() - max_sentences..]
        .iter()
        .map(|(i, _)| *i)
        .collect();
    // Restore document order for readability.
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
