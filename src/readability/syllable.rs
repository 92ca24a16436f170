//! Syllable estimation for English words.
//!
//! The estimator is a rule-based heuristic rather than a dictionary lookup.
//! It is expected to be wrong for irregular words (silent letters, some
//! diphthongs, loanwords, contractions); those misses are part of the
//! contract, not bugs.
//!
//! # Examples
//!
//! ```
//! use legible::readability::syllable::{HeuristicSyllableCounter, SyllableCounter};
//!
//! let counter = HeuristicSyllableCounter::new();
//! assert_eq!(counter.count("the"), 1);
//! assert_eq!(counter.count("readability"), 5);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Trait for syllable counting strategies.
pub trait SyllableCounter: Send + Sync {
    /// Estimate the number of syllables in a single word.
    ///
    /// Implementations must return at least 1 for any non-empty word.
    fn count(&self, word: &str) -> usize;

    /// Get the name of this counter.
    fn name(&self) -> &'static str;
}

/// Trailing inflections that add no spoken syllable: consonant + "es", "ed",
/// or consonant + silent "e". `l` is deliberately outside the consonant class
/// so that "-les"/"-le" endings ("tables", "able") keep their syllable.
static SILENT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("suffix pattern should be valid")
});

static LEADING_Y: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^y").expect("leading y pattern should be valid"));

/// Vowel groups of one or two letters; longer runs split into several groups.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pattern should be valid"));

/// Vowel-group heuristic syllable counter.
///
/// 1. Lower-case and trim the word; words of three characters or fewer are
///    one syllable.
/// 2. Strip one silent trailing inflection and a single leading `y`.
/// 3. Count vowel groups of one or two letters, with a floor of 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicSyllableCounter;

impl HeuristicSyllableCounter {
    /// Create a new heuristic syllable counter.
    pub fn new() -> Self {
        HeuristicSyllableCounter
    }
}

impl SyllableCounter for HeuristicSyllableCounter {
    fn count(&self, word: &str) -> usize {
        let lowered = word.to_lowercase();
        let word = lowered.trim();
        if word.chars().count() <= 3 {
            return 1;
        }

        let word = SILENT_SUFFIX.replace(word, "");
        let word = LEADING_Y.replace(&word, "");

        VOWEL_GROUP.find_iter(&word).count().max(1)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
