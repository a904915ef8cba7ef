pub mod indexer;
pub mod normalization;
pub mod pipeline;
pub mod reader;
pub mod reporter;
pub mod segmenter;

// Re-export main types for convenient access
pub use indexer::{is_indexable, Index, WordEntry};
pub use pipeline::{build_index, Concordance, ConcordanceStats};
pub use reporter::{label_for, render, report, Labels, ReportLine};
pub use segmenter::{sentences, tokens, Sentence};
