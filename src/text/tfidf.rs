//! Minimal TF-IDF vectorizer.
//!
//! Treats each input string as one document: term frequency is the raw
//! in-document count, inverse document frequency is `ln(n / df) + 1`
//! (smoothed so weights stay positive even for terms present in every
//! document).

use std::collections::{BTreeMap, HashSet};

/// Per-document term weights over a shared vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Sorted vocabulary; index-aligned with every row.
    pub vocabulary: Vec<String>,
    /// One weight vector per input document.
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Sum of all term weights in document `row` — the sentence score
    /// used by the summarizer.
    pub fn row_score(&self, row: usize) -> f64 {
        self.rows.get(row).map(|r| r.iter().sum()).unwrap_or(0.0)
    }
}

/// Lowercased alphabetic tokens of `text`, at least `min_len` characters
/// long. Splitting on non-alphabetic characters keeps only purely
/// alphabetic tokens.
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty() && t.chars().count() >= min_len)
        .map(|t| t.to_lowercase())
        .collect()
}

/// Vectorizes `documents` into a TF-IDF matrix.
pub fn vectorize(documents: &[String]) -> TfidfMatrix {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d, 1)).collect();

    // Document frequency per term; BTreeMap keeps the vocabulary sorted.
    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let vocabulary: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
    let index: BTreeMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|t| (n_docs / doc_freq[t.as_str()] as f64).ln() + 1.0)
        .collect();

    let rows = tokenized
        .iter()
        .map(|tokens| {
            let mut row = vec![0.0; vocabulary.len()];
            for token in tokens {
                if let Some(&i) = index.get(token.as_str()) {
                    row[i] += idf[i];
                }
            }
            row
        })
        .collect();

    TfidfMatrix { vocabulary, rows }
}
