//! Text normalization used for quote verification.

use cov_core::entities::EvidenceSource;

/// Lower-case `text` and collapse every whitespace run to a single space,
/// trimming both ends.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// All text of an evidence source a quote may be found in: excerpt, raw
/// text and title, skipping empty parts, joined by spaces and normalized.
#[must_use]
pub fn searchable_text(evidence: &EvidenceSource) -> String {
    let parts = [
        evidence.excerpt.as_deref(),
        evidence.raw_text.as_deref(),
        Some(evidence.title.as_str()),
    ];
    let joined = parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&joined)
}

/// Whether `quote` occurs in `normalized_text` once both are normalized.
///
/// An empty quote or empty text never matches.
#[must_use]
pub fn quote_in_text(quote: &str, normalized_text: &str) -> bool {
    let quote = normalize(quote);
    if quote.is_empty() || normalized_text.is_empty() {
        return false;
    }
    normalized_text.contains(&quote)
}

/// The first `max` characters of `text`.
pub(crate) fn prefix_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
