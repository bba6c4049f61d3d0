//! Rule-based sentence boundary segmentation.
//!
//! The rules are fixed and explicit so segmentation is reproducible
//! across platforms: a sentence ends at `.`, `!` or `?` when the
//! terminator is followed by whitespace and an uppercase letter, a digit
//! or an opening quote/bracket (or end of input). Periods after common
//! abbreviations and single-letter initials do not end a sentence.

/// Abbreviations whose trailing period does not terminate a sentence.
/// Compared lowercase, without the final period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "fig",
    "al", "inc", "ltd", "co", "dept", "est", "approx",
];

/// Splits `text` into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (idx, c) = chars[i];
        let terminator = match c {
            '!' | '?' => true,
            '.' => !ends_with_abbreviation(&text[..idx]),
            _ => false,
        };

        if terminator {
            // Absorb runs of terminators and closing punctuation ("...", "?!", '."').
            let mut end = idx + c.len_utf8();
            while i + 1 < chars.len() && matches!(chars[i + 1].1, '.' | '!' | '?' | '"' | '\'' | ')') {
                i += 1;
                end = chars[i].0 + chars[i].1.len_utf8();
            }

            // A real boundary needs whitespace (or end of input) after the
            // terminator run, so "3.14" and "e.g" stay intact, and the next
            // sentence must open with a capital, digit, quote or bracket.
            let after = &text[end..];
            let rest = after.trim_start();
            let boundary = (after.is_empty() || after.starts_with(|c: char| c.is_whitespace()))
                && (rest.is_empty()
                    || rest
                        .chars()
                        .next()
                        .is_some_and(|n| n.is_uppercase() || n.is_ascii_digit() || n == '"' || n == '('));

            if boundary {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// True when the text ending just before a period finishes with a known
/// abbreviation or a single-letter initial ("J." in "J. Smith").
fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default();
    let word = word.trim_start_matches(|c: char| !c.is_alphabetic());
    if word.is_empty() {
        return false;
    }
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}
