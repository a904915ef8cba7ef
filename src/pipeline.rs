// WHY: single entry point running segmentation, indexing and reporting in one
// sequential pass; each run owns its index so runs never share state

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::indexer::Index;
use crate::reporter::{self, ReportLine};
use crate::segmenter;

/// Statistics for one concordance run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConcordanceStats {
    /// Source file path, when the text came from disk
    pub path: Option<String>,
    /// Number of characters processed
    pub chars_processed: u64,
    /// Number of sentences detected, including ones without words
    pub sentences_detected: u64,
    /// Number of raw word-boundary segments inspected
    pub segments_seen: u64,
    /// Number of segments that were recorded in the index
    pub words_indexed: u64,
    /// Number of distinct lowercased words
    pub distinct_words: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
}

/// A finalized index together with the statistics of the run that built it
#[derive(Debug, Clone)]
pub struct Concordance {
    index: Index,
    stats: ConcordanceStats,
}

impl Concordance {
    /// Build a concordance from already-normalized text
    pub fn from_text(text: &str) -> Self {
        let start_time = Instant::now();
        debug!("Starting concordance build on {} bytes", text.len());

        let mut index = Index::new();
        let mut sentences_detected = 0u64;
        let mut segments_seen = 0u64;
        let mut words_indexed = 0u64;

        for sentence in segmenter::sentences(text) {
            sentences_detected += 1;
            for token in sentence.words() {
                segments_seen += 1;
                if index.record(sentence.number, token) {
                    words_indexed += 1;
                }
            }
        }

        let chars_processed = text.chars().count() as u64;
        let elapsed = start_time.elapsed();
        let chars_per_sec = if elapsed.as_secs_f64() > 0.0 {
            chars_processed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let stats = ConcordanceStats {
            path: None,
            chars_processed,
            sentences_detected,
            segments_seen,
            words_indexed,
            distinct_words: index.len() as u64,
            processing_time_ms: elapsed.as_millis() as u64,
            chars_per_sec,
        };

        info!(
            "Indexed {} words ({} distinct) across {} sentences in {}ms",
            stats.words_indexed, stats.distinct_words, stats.sentences_detected, stats.processing_time_ms
        );

        Self { index, stats }
    }

    /// Attach the source path to the run statistics
    pub fn with_source(mut self, path: impl Into<String>) -> Self {
        self.stats.path = Some(path.into());
        self
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn into_index(self) -> Index {
        self.index
    }

    pub fn stats(&self) -> &ConcordanceStats {
        &self.stats
    }

    /// Labeled entries in sorted order
    pub fn report(&self) -> Vec<ReportLine<'_>> {
        reporter::report(&self.index)
    }

    /// Formatted output lines in sorted order
    pub fn lines(&self) -> Vec<String> {
        reporter::render(&self.index)
    }
}

/// Segment and index `text`, keeping only the finalized index
pub fn build_index(text: &str) -> Index {
    Concordance::from_text(text).into_index()
}
