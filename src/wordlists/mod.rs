//! Word lists for drawing solutions and validating guesses
//!
//! The embedded pool is compiled into the binary; [`loader`] reads custom pools from disk.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordListError;
pub use pool::WordList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_pool_keeps_every_word() {
        assert_eq!(WordList::embedded().len(), WORDS_COUNT);
    }
}
