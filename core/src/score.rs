use crate::index::Index;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of results a ranked query returns at most.
pub const MAX_RESULTS: usize = 10;

/// One ranked query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub url: String,
    pub score: f64,
}

/// Occurrences of `term` in `doc` divided by the document's total word
/// count. A document with no recorded words scores 0.0 rather than
/// dividing by zero.
pub fn term_freq(index: &Index, term: &str, doc: &str) -> f64 {
    let occurrences = index
        .inv_index
        .get(term)
        .and_then(|docs| docs.get(doc))
        .copied()
        .unwrap_or(0) as f64;
    let total_words = index.word_count.get(doc).copied().unwrap_or(0) as f64;
    if total_words == 0.0 {
        return 0.0;
    }
    occurrences / total_words
}

/// log10(total documents / documents containing the term). Callers only
/// invoke this for terms present in the index, so the denominator is
/// nonzero in practice.
pub fn idf(index: &Index, term: &str) -> f64 {
    let total_docs = index.total_docs() as f64;
    let docs_with_term = index.docs_containing(term) as f64;
    (total_docs / docs_with_term).log10()
}

/// TF-IDF score, rounded half away from zero at the fourth decimal.
pub fn tf_idf(index: &Index, term: &str, doc: &str) -> f64 {
    let score = term_freq(index, term, doc) * idf(index, term);
    (score * 10_000.0).round() / 10_000.0
}

/// Score every document containing `term` and return at most
/// [`MAX_RESULTS`] hits, ordered by descending score with ties broken by
/// ascending URL. A term absent from the index yields an empty list.
pub fn rank(index: &Index, term: &str) -> Vec<Hit> {
    let Some(docs) = index.inv_index.get(term) else {
        return Vec::new();
    };

    let mut hits: Vec<Hit> = docs
        .keys()
        .map(|doc| Hit {
            url: doc.clone(),
            score: tf_idf(index, term, doc),
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.url.cmp(&b.url))
    });
    hits.truncate(MAX_RESULTS);
    hits
}
