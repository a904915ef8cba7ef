use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Per-word statistics accumulated over one document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Number of occurrences across the whole document
    pub frequency: usize,
    /// Sentence number of every occurrence, in document order, duplicates kept
    pub sentences: Vec<usize>,
}

impl WordEntry {
    fn first_seen(sentence: usize) -> Self {
        Self {
            frequency: 1,
            sentences: vec![sentence],
        }
    }

    fn seen_again(&mut self, sentence: usize) {
        self.frequency += 1;
        self.sentences.push(sentence);
    }

    /// Comma-joined sentence numbers, e.g. `1,1,4`
    pub fn sentence_list(&self) -> String {
        self.sentences
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Check whether a raw token belongs in the index
/// WHY: only the first character is inspected, so tokens led by a combining mark are dropped
pub fn is_indexable(token: &str) -> bool {
    token.chars().next().is_some_and(is_letter_or_digit)
}

// Letters (Lu, Ll, Lt, Lm, Lo) and decimal digits (Nd) only; fractions,
// superscripts, roman numerals and spacing marks do not qualify
fn is_letter_or_digit(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Case-insensitive word index built in a single pass over the document
///
/// Entries are only ever added or extended, never removed.
#[derive(Debug, Default, Clone)]
pub struct Index {
    words: HashMap<String, WordEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token` in sentence `sentence`
    /// Returns false, leaving the index untouched, when the token is not indexable
    pub fn record(&mut self, sentence: usize, token: &str) -> bool {
        if !is_indexable(token) {
            return false;
        }

        let key = token.to_lowercase();
        match self.words.get_mut(&key) {
            Some(entry) => entry.seen_again(sentence),
            None => {
                self.words.insert(key, WordEntry::first_seen(sentence));
            }
        }
        true
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total occurrences across all words
    pub fn total_occurrences(&self) -> usize {
        self.words.values().map(|entry| entry.frequency).sum()
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.words.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    /// Words sorted by byte order
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
