pub mod checker;
pub mod cli;
pub mod config;
pub mod engine;
pub mod filter;
pub mod parser;
pub mod report;

pub use checker::CommentChecker;
pub use config::Config;

use serde::Serialize;
use std::collections::BTreeMap;

/// Occurrences per word, spelled exactly as the engine returned them.
pub type WordCounts = BTreeMap<String, usize>;

/// One comment that produced at least one unknown word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentFailure {
    pub line: usize,
    pub counts: WordCounts,
}

/// Complete structured output of one scan.
///
/// `counts` holds the file-wide totals; `fails` holds the per-comment detail
/// in the order the comments were visited. For every word, the global count
/// equals the sum of its counts across `fails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub counts: WordCounts,
    pub fails: Vec<CommentFailure>,
}

impl ScanResult {
    /// Total unknown-word occurrences across the whole scan.
    pub fn unknown_words(&self) -> usize {
        self.counts.values().sum()
    }
}
