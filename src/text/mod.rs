//! Text analysis: sentence segmentation, TF-IDF scoring, summarization
//! and keyword extraction.

pub mod keywords;
pub mod sentences;
pub mod stopwords;
pub mod summarize;
pub mod tfidf;

pub use keywords::keywords;
pub use sentences::split_sentences;
pub use summarize::summarize;
