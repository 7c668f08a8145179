use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// In-memory index bundle: populated by the crawler during its traversal,
/// read by the query service. Counts are cumulative within a single crawl
/// run and never decremented; nothing is ever deleted.
#[derive(Debug, Default)]
pub struct Index {
    /// Stemmed term -> document URL -> occurrence count. A term key exists
    /// only while it maps to at least one document with count >= 1.
    pub inv_index: HashMap<String, HashMap<String, u32>>,
    /// Document URL -> total count of non-stopword tokens extracted from it.
    pub word_count: HashMap<String, u32>,
    /// URLs already enqueued or fetched; membership is permanent for the run.
    pub visited: HashSet<String>,
}

/// Single-writer/multi-reader gate over the index. The crawl task holds the
/// write side; query handlers take the read side, possibly while the crawl
/// is still running.
pub type SharedIndex = Arc<RwLock<Index>>;

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedIndex {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Record one occurrence of `term` in `doc`, bumping the document's
    /// total word count alongside.
    pub fn record(&mut self, doc: &str, term: String) {
        *self
            .inv_index
            .entry(term)
            .or_default()
            .entry(doc.to_string())
            .or_insert(0) += 1;
        *self.word_count.entry(doc.to_string()).or_insert(0) += 1;
    }

    /// Number of documents seen by the crawl, i.e. the corpus size used for
    /// inverse document frequency.
    pub fn total_docs(&self) -> usize {
        self.word_count.len()
    }

    pub fn docs_containing(&self, term: &str) -> usize {
        self.inv_index.get(term).map_or(0, |docs| docs.len())
    }
}
