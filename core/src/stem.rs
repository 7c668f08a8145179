use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Reduce a word to its canonical lowercase root with the English Snowball
/// stemmer. Input case is ignored.
pub fn stem(word: &str) -> String {
    STEMMER.stem(&word.to_lowercase()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_to_canonical_roots() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("testing"), "test");
        assert_eq!(stem("proposition"), "proposit");
        assert_eq!(stem("make"), "make");
    }

    #[test]
    fn lowercases_before_stemming() {
        assert_eq!(stem("Mastery"), "masteri");
        assert_eq!(stem("RUN"), "run");
    }

    #[test]
    fn empty_word_stays_empty() {
        assert_eq!(stem(""), "");
    }
}
