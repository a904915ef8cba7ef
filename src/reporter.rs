// WHY: labels are a pure function of sorted position, so the report is
// byte-identical for identical input regardless of hash map ordering

use serde::Serialize;
use std::fmt;

use crate::indexer::{Index, WordEntry};

const ALPHABET_LEN: usize = 26;

/// Label sequence `a..z, aa..zz, aaa..zzz, ...`
///
/// Threads a band counter and a current letter forward; the letter wraps
/// after `z` and resets to `a` whenever a new band of 26 begins.
#[derive(Debug, Clone)]
pub struct Labels {
    position: usize,
    band: usize,
    letter: u8,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            position: 0,
            band: 0,
            letter: b'a',
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Labels {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let band = self.position / ALPHABET_LEN;
        if band > self.band {
            self.band = band;
            self.letter = b'a';
        }

        let label = render_label(self.band, self.letter);

        self.letter = if self.letter == b'z' { b'a' } else { self.letter + 1 };
        self.position += 1;
        Some(label)
    }
}

// Band 0 prints the letter once, band k prints it k + 1 times
fn render_label(band: usize, letter: u8) -> String {
    char::from(letter).to_string().repeat(band + 1)
}

/// Label for a single 0-based sorted position
pub fn label_for(position: usize) -> String {
    let band = position / ALPHABET_LEN;
    let letter = b'a' + (position % ALPHABET_LEN) as u8;
    render_label(band, letter)
}

/// One labeled concordance entry
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportLine<'a> {
    pub label: String,
    pub word: &'a str,
    #[serde(flatten)]
    pub entry: &'a WordEntry,
}

impl fmt::Display for ReportLine<'_> {
    /// `<label>. <word>\t{<frequency>:<sentence list>}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}\t{{{}:{}}}",
            self.label,
            self.word,
            self.entry.frequency,
            self.entry.sentence_list()
        )
    }
}

/// Sort the index by word and attach labels
pub fn report(index: &Index) -> Vec<ReportLine<'_>> {
    let mut entries: Vec<(&str, &WordEntry)> = index.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    entries
        .into_iter()
        .zip(Labels::new())
        .map(|((word, entry), label)| ReportLine { label, word, entry })
        .collect()
}

/// Render the full report as formatted lines
pub fn render(index: &Index) -> Vec<String> {
    report(index).iter().map(ToString::to_string).collect()
}
