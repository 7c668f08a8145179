use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Literal (pre-stemming) words excluded from indexing. Loaded once at
/// startup, immutable afterwards.
#[derive(Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Read a newline-delimited word list. Blank lines and `#` comments are
    /// skipped. Failure here is fatal to startup: no stopword filtering can
    /// proceed without the list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("opening stopword list {}", path.as_ref().display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_string());
        }
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop stopwords by exact, case-sensitive match, preserving the order
    /// and duplicates of everything that survives.
    pub fn remove_stopwords(&self, words: Vec<String>) -> Vec<String> {
        words
            .into_iter()
            .filter(|word| !self.words.contains(word))
            .collect()
    }
}
