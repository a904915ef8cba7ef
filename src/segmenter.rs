// WHY: boundary heuristics are delegated to the Unicode text segmentation rules (UAX #29)
// so abbreviations, decimals and contractions follow one well-defined standard

use unicode_segmentation::{USentenceBoundIndices, UWordBounds, UnicodeSegmentation};

/// A sentence borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// 1-based ordinal of the sentence within the document
    pub number: usize,
    /// Byte offset of the sentence start in the source text
    pub offset: usize,
    /// Raw sentence content, including trailing whitespace
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    /// Split the sentence into raw word-boundary segments
    ///
    /// Whitespace and punctuation runs come back as their own segments;
    /// filtering is left to the indexer.
    pub fn words(&self) -> UWordBounds<'a> {
        self.text.split_word_bounds()
    }
}

/// Lazy iterator over the sentences of a text, numbered from 1
#[derive(Clone)]
pub struct Sentences<'a> {
    bounds: USentenceBoundIndices<'a>,
    next_number: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, text) = self.bounds.next()?;
        let number = self.next_number;
        self.next_number += 1;
        Some(Sentence { number, offset, text })
    }
}

/// Segment text into sentences
///
/// Every boundary consumes a sentence number, even when the sentence holds no words.
/// End of input terminates the last sentence; empty text yields nothing.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        bounds: text.split_sentence_bound_indices(),
        next_number: 1,
    }
}

/// Flatten a text into `(sentence number, raw token)` pairs in document order
pub fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    sentences(text).flat_map(|sentence| {
        let number = sentence.number;
        sentence.words().map(move |word| (number, word))
    })
}
