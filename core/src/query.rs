use crate::index::Index;
use crate::score::{rank, Hit};
use crate::stem::stem;
use std::collections::HashMap;

/// Raw per-document occurrence counts for the stemmed form of `word`, or
/// `None` when the term never occurred.
pub fn search(index: &Index, word: &str) -> Option<HashMap<String, u32>> {
    index.inv_index.get(&stem(word)).cloned()
}

/// Stem the raw query word and return the ranked top-ten documents.
/// Empty or unknown input yields an empty list, never an error; "no
/// results" and "word never occurred" are indistinguishable here.
pub fn query(index: &Index, word: &str) -> Vec<Hit> {
    rank(index, &stem(word))
}
